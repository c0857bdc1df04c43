//! Flags shared by every meritctl subcommand

use std::fmt;

use clap::ValueEnum;

/// How command results are rendered on stdout
///
/// Tables are for people; `json` and `yaml` print the API bodies unchanged
/// so they can be piped into other tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_flag_value() {
        for format in OutputFormat::value_variants() {
            let parsed = OutputFormat::from_str(&format.to_string(), false).unwrap();
            assert_eq!(parsed, *format);
        }
    }

    #[test]
    fn test_flag_value_is_case_sensitive() {
        assert!(OutputFormat::from_str("YAML", false).is_err());
        assert_eq!(
            OutputFormat::from_str("YAML", true).unwrap(),
            OutputFormat::Yaml
        );
    }
}
