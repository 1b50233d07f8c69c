use crate::errors::TaxonomyError;
use crate::taxonomy::Taxonomy;
use std::path::Path;

/// Reads, parses and validates a taxonomy file.
pub fn load_taxonomy(path: &Path) -> Result<Taxonomy, TaxonomyError> {
    let raw = std::fs::read_to_string(path).map_err(|source| TaxonomyError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_taxonomy(&raw)
}

pub fn parse_taxonomy(raw: &str) -> Result<Taxonomy, TaxonomyError> {
    let taxonomy: Taxonomy = serde_yaml::from_str(raw)?;
    taxonomy.validate()?;
    Ok(taxonomy)
}

pub fn taxonomy_to_yaml(taxonomy: &Taxonomy) -> Result<String, TaxonomyError> {
    Ok(serde_yaml::to_string(taxonomy)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::Axis;
    use std::io::Write;

    const MINIMAL: &str = r#"
version: 1
name: tone
ground_truth_column: TONE
categories:
  - code: "1"
    label: Polite
  - code: "2"
    label: Curt
    aliases: ["Rude"]
instructions: |
  Label the tone of Q2. Answer with the label only.
"#;

    #[test]
    fn loads_minimal_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(MINIMAL.as_bytes()).unwrap();
        let t = load_taxonomy(f.path()).unwrap();
        assert_eq!(t.name, "tone");
        assert_eq!(t.max_labels, 1);
        assert_eq!(t.codec().decode("rude"), "2");
    }

    #[test]
    fn builtin_axes_survive_export() {
        for axis in Axis::ALL {
            let original = axis.taxonomy();
            let yaml = taxonomy_to_yaml(&original).unwrap();
            assert_eq!(parse_taxonomy(&yaml).unwrap(), original);
        }
    }

    #[test]
    fn rejects_future_version() {
        let raw = MINIMAL.replace("version: 1", "version: 2");
        assert!(matches!(
            parse_taxonomy(&raw),
            Err(TaxonomyError::UnsupportedVersion { found: 2, .. })
        ));
    }

    #[test]
    fn rejects_sentinel_code() {
        let raw = MINIMAL.replace("code: \"1\"", "code: \"0\"");
        assert!(matches!(
            parse_taxonomy(&raw),
            Err(TaxonomyError::ReservedCode { .. })
        ));
    }

    #[test]
    fn rejects_bad_yaml() {
        assert!(matches!(
            parse_taxonomy("name: [unterminated"),
            Err(TaxonomyError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_taxonomy(Path::new("/nonexistent/tax.yaml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/tax.yaml"));
    }
}
