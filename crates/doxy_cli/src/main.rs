//! doxy - Doxygen XML to reStructuredText reference pages
//!
//! ```text
//! doxy --xml-dir build/doc/xml extract krb5_8hin.xml --kind typedef
//! doxy --xml-dir build/doc/xml compound struct__krb5__data.xml --json
//! doxy --xml-dir build/doc/xml render krb5_8hin.xml --templates tmpl --output refs
//! ```

mod docs;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Extract C API documentation from Doxygen XML
#[derive(Parser, Debug)]
#[command(name = "doxy", author, version, about, long_about = None)]
struct Args {
    /// Directory holding the Doxygen XML output
    #[arg(long, global = true, env = "DOXY_XML_DIR")]
    xml_dir: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Extra calling-convention macro to strip (repeatable)
    #[arg(long = "strip-macro", global = true)]
    strip_macros: Vec<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the records extracted from a header resource
    Extract {
        /// Resource name, e.g. krb5_8hin.xml
        file: String,
        /// Member kinds to include (typedef, variable, define); all when omitted
        #[arg(long = "kind", short)]
        kinds: Vec<String>,
        /// Print JSON instead of a listing
        #[arg(long)]
        json: bool,
        /// Disable colors
        #[arg(long)]
        no_color: bool,
    },
    /// Show a compound's description and fields
    Compound {
        /// Resource name, e.g. struct__krb5__data.xml
        file: String,
        /// Print JSON instead of a listing
        #[arg(long)]
        json: bool,
    },
    /// Render typedef and macro pages
    Render {
        /// Resource name, e.g. krb5_8hin.xml
        file: String,
        /// Kinds to render (typedef, define, variable); typedef and define when omitted
        #[arg(long = "kind", short)]
        kinds: Vec<String>,
        /// Directory holding <template>.tmpl files
        #[arg(long)]
        templates: Option<PathBuf>,
        /// Output directory
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // DOXY_LOG controls the log level, default "info"
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_env("DOXY_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = docs::load_config(
        args.config.as_deref(),
        args.xml_dir,
        &args.strip_macros,
    )?;

    match args.command {
        Command::Extract {
            file,
            kinds,
            json,
            no_color,
        } => docs::extract(&config, &file, &kinds, json, !no_color),
        Command::Compound { file, json } => docs::compound(&config, &file, json),
        Command::Render {
            file,
            kinds,
            templates,
            output,
        } => docs::render(&config, &file, &kinds, templates, output),
    }
}
