//! Model selection from TOML (`[model]` section)

use gitgen_domain::{ConfigIssue, ConfigIssueCode, Model};
use serde::{Deserialize, Serialize};

/// Model selection from TOML
///
/// # Example
///
/// ```toml
/// [model]
/// name = "gpt-4o"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    pub name: String,
}

impl Default for FileModelConfig {
    fn default() -> Self {
        Self {
            name: Model::default().to_string(),
        }
    }
}

impl FileModelConfig {
    /// Parse the model name, falling back to the default model when blank.
    pub fn parse_model(&self) -> (Model, Vec<ConfigIssue>) {
        if self.name.trim().is_empty() {
            let issue = ConfigIssue::error(
                ConfigIssueCode::EmptyModelName {
                    field: "model.name".to_string(),
                },
                "model.name: model name cannot be empty",
            );
            return (Model::default(), vec![issue]);
        }
        // Unknown names become Model::Custom
        let model: Model = self
            .name
            .trim()
            .parse()
            .unwrap_or_else(|never: std::convert::Infallible| match never {});
        (model, Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_gpt_4o() {
        let (model, issues) = FileModelConfig::default().parse_model();
        assert_eq!(model, Model::Gpt4o);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_blank_name_is_an_error() {
        let config = FileModelConfig {
            name: "  ".to_string(),
        };
        let (model, issues) = config.parse_model();
        assert_eq!(model, Model::default());
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
    }

    #[test]
    fn test_unknown_name_is_custom() {
        let config = FileModelConfig {
            name: "llama3.1:70b".to_string(),
        };
        assert_eq!(
            config.parse_model().0,
            Model::Custom("llama3.1:70b".to_string())
        );
    }
}
