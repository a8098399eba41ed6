//! Terminal output for extracted records
//!
//! Provides a compact listing of records for the command line, with
//! optional colors:
//!
//! ```text
//! typedef krb5_data
//!   typedef struct _krb5_data krb5_data
//!   Generic data.
//!   .magic  krb5_magic
//! ```
//!
//! # Example
//!
//! ```
//! use doxy_etch::printer::RecordPrinter;
//!
//! let records = vec![];
//! let printer = RecordPrinter::new(&records, false);
//! println!("{}", printer);
//! ```

use crate::record::{DocRecord, RecordCategory};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::io;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Terminal record printer
pub struct RecordPrinter<'a> {
    records: &'a [DocRecord],
    use_color: bool,
}

impl<'a> RecordPrinter<'a> {
    /// Create a new printer
    pub fn new(records: &'a [DocRecord], use_color: bool) -> Self {
        Self { records, use_color }
    }

    /// Print to stdout, colored when enabled and supported
    pub fn print_to_stdout(&self) -> io::Result<()> {
        let choice = if self.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write_colored(&mut stdout)
    }

    /// Write to any `WriteColor`
    pub fn write_colored<W: WriteColor>(&self, w: &mut W) -> io::Result<()> {
        for record in self.records {
            w.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
            write!(w, "{}", keyword(record))?;
            w.reset()?;
            w.set_color(ColorSpec::new().set_bold(true))?;
            writeln!(w, " {}", record.name)?;
            w.reset()?;

            let signature = signature(record);
            if !signature.is_empty() {
                w.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
                writeln!(w, "  {}", signature)?;
                w.reset()?;
            }
            for line in description_lines(record) {
                writeln!(w, "  {}", line)?;
            }
            for attr in &record.attributes {
                w.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
                write!(w, "  .{}", attr.name)?;
                w.reset()?;
                writeln!(w, "  {}", attr.type_text)?;
            }
            writeln!(w)?;
        }
        Ok(())
    }
}

impl Display for RecordPrinter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for record in self.records {
            writeln!(f, "{} {}", keyword(record), record.name)?;
            let signature = signature(record);
            if !signature.is_empty() {
                writeln!(f, "  {}", signature)?;
            }
            for line in description_lines(record) {
                writeln!(f, "  {}", line)?;
            }
            for attr in &record.attributes {
                writeln!(f, "  .{}  {}", attr.name, attr.type_text)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn keyword(record: &DocRecord) -> &'static str {
    match record.category {
        RecordCategory::Variable => "variable",
        RecordCategory::Composite if record.is_macro() => "define",
        RecordCategory::Composite => "typedef",
    }
}

/// Declaration line: the definition, or the macro signature and value
fn signature(record: &DocRecord) -> String {
    match record.name_signature.as_deref() {
        Some(sig) => {
            let head = if sig.is_empty() { record.name.as_str() } else { sig };
            if record.initializer.is_empty() {
                head.to_string()
            } else {
                format!("{} {}", head, record.initializer)
            }
        }
        None => record.definition.clone(),
    }
}

fn description_lines(record: &DocRecord) -> impl Iterator<Item = &str> {
    record
        .short_description
        .lines()
        .chain(record.long_description.lines())
        .filter(|l| !l.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_output() {
        let mut typedef = DocRecord::new(RecordCategory::Composite, "krb5_data", "t1")
            .with_definition("typedef struct _krb5_data krb5_data")
            .with_descriptions("Generic data.", "\nHolds bytes.");
        typedef.attributes = vec![
            DocRecord::new(RecordCategory::Variable, "length", "f1").with_type("unsigned int"),
        ];
        let mut define = DocRecord::new(RecordCategory::Composite, "KRB5_GC_CACHED", "d1");
        define.name_signature = Some(String::new());
        define.initializer = "2".to_string();

        let records = vec![typedef, define];
        let out = RecordPrinter::new(&records, false).to_string();

        assert_eq!(
            out,
            "typedef krb5_data\n  typedef struct _krb5_data krb5_data\n  Generic data.\n  Holds bytes.\n  .length  unsigned int\n\ndefine KRB5_GC_CACHED\n  KRB5_GC_CACHED 2\n\n"
        );
    }

    #[test]
    fn test_colored_output_contains_names() {
        let records = vec![DocRecord::new(RecordCategory::Variable, "count", "v1")];
        let mut buffer = termcolor::Buffer::ansi();
        RecordPrinter::new(&records, true)
            .write_colored(&mut buffer)
            .unwrap();

        let text = String::from_utf8(buffer.into_inner()).unwrap();
        assert!(text.contains("variable"));
        assert!(text.contains("count"));
        assert!(text.contains("\x1b["));
    }
}
