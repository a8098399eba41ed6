//! Command implementations for the doxy CLI
//!
//! Each command builds an [`Extractor`] from the resolved configuration and
//! runs one full extraction pass over the requested resource.

use anyhow::{bail, Context, Result};
use doxy_etch::{
    DoxyConfig, Extractor, KindFilter, MemberKind, OutputWriter, RecordPrinter, TemplateRenderer,
    TemplateSet,
};
use std::path::{Path, PathBuf};

/// Resolve the configuration: file values first, then command line overrides
pub fn load_config(
    config_file: Option<&Path>,
    xml_dir: Option<PathBuf>,
    strip_macros: &[String],
) -> Result<DoxyConfig> {
    let mut config = match config_file {
        Some(path) => DoxyConfig::from_toml_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => DoxyConfig::default(),
    };
    if let Some(dir) = xml_dir {
        config.xml_root = dir;
    }
    for name in strip_macros {
        config = config.with_strip_macro(name.as_str());
    }
    Ok(config)
}

/// Parse `--kind` values; an empty list means no filter
fn kind_filter(kinds: &[String]) -> Result<Option<KindFilter>> {
    if kinds.is_empty() {
        return Ok(None);
    }
    let kinds = parse_kinds(kinds)?;
    Ok(Some(kinds.into_iter().map(|k| k.as_str()).collect()))
}

fn parse_kinds(kinds: &[String]) -> Result<Vec<MemberKind>> {
    kinds
        .iter()
        .map(|k| k.parse::<MemberKind>().map_err(anyhow::Error::msg))
        .collect()
}

/// `doxy extract`
pub fn extract(
    config: &DoxyConfig,
    file: &str,
    kinds: &[String],
    json: bool,
    color: bool,
) -> Result<()> {
    let extractor = Extractor::new(config.clone())?;
    let filter = kind_filter(kinds)?;
    let records = extractor
        .run(file, filter.as_ref())
        .with_context(|| format!("Failed to extract {}", file))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        RecordPrinter::new(&records, color).print_to_stdout()?;
    }
    Ok(())
}

/// `doxy compound`
pub fn compound(config: &DoxyConfig, file: &str, json: bool) -> Result<()> {
    let extractor = Extractor::new(config.clone())?;
    let compound = extractor
        .run_compound(file, None)
        .with_context(|| format!("Failed to extract compound {}", file))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&compound)?);
        return Ok(());
    }

    if !compound.brief_description.is_empty() {
        println!("{}\n", compound.brief_description);
    }
    if !compound.detailed_description.is_empty() {
        println!("{}\n", compound.detailed_description);
    }
    print!("{}", RecordPrinter::new(&compound.attributes, false));
    Ok(())
}

/// Output subdirectory and template set for a kind
fn render_target(kind: MemberKind) -> (&'static str, TemplateSet) {
    match kind {
        MemberKind::Typedef => ("types", TemplateSet::types()),
        MemberKind::Define => ("macros", TemplateSet::macros()),
        MemberKind::Variable => ("variables", TemplateSet::types()),
    }
}

/// `doxy render`
pub fn render(
    config: &DoxyConfig,
    file: &str,
    kinds: &[String],
    templates: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let Some(templates_dir) = templates.or_else(|| config.templates_dir.clone()) else {
        bail!("No templates directory: pass --templates or set templates_dir in the config");
    };
    let output = output.unwrap_or_else(|| config.output_dir.clone());
    let kinds = if kinds.is_empty() {
        vec![MemberKind::Typedef, MemberKind::Define]
    } else {
        parse_kinds(kinds)?
    };

    let extractor = Extractor::new(config.clone())?;
    let mut total = 0;
    for kind in kinds {
        let records = extractor
            .run(file, Some(&KindFilter::from(kind)))
            .with_context(|| format!("Failed to extract {} members from {}", kind, file))?;

        let (subdir, template_set) = render_target(kind);
        tracing::info!("Rendering {} {} record(s)", records.len(), kind);
        let renderer = TemplateRenderer::from_dir(&templates_dir, &template_set)?;
        let writer = OutputWriter::new(output.join(subdir));
        let written = writer.save_all(&records, &renderer, &template_set)?;

        println!(
            "  ✓ {} {} page(s) -> {}",
            written.len(),
            kind,
            writer.target_dir().display()
        );
        total += written.len();
    }

    println!("\nDocumentation generation complete: {} page(s)", total);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_filter_parsing() {
        assert!(kind_filter(&[]).unwrap().is_none());

        let filter = kind_filter(&["typedef".to_string()]).unwrap().unwrap();
        assert!(filter.allows("typedef"));
        assert!(!filter.allows("define"));

        assert!(kind_filter(&["function".to_string()]).is_err());
    }

    #[test]
    fn test_load_config_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doxy.toml");
        std::fs::write(&path, "xml_root = \"from-file\"\nstrip_macros = [\"A\"]\n").unwrap();

        let config = load_config(Some(&path), None, &["B".to_string()]).unwrap();
        assert_eq!(config.xml_root, PathBuf::from("from-file"));
        assert_eq!(config.strip_macros, vec!["A", "B"]);

        let config = load_config(Some(&path), Some(PathBuf::from("cli")), &[]).unwrap();
        assert_eq!(config.xml_root, PathBuf::from("cli"));
    }

    #[test]
    fn test_render_requires_templates() {
        let err = render(&DoxyConfig::default(), "krb5_8hin.xml", &[], None, None).unwrap_err();
        assert!(err.to_string().contains("No templates directory"));
    }
}
