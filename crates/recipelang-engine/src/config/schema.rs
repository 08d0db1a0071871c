use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeLangConfig {
    #[serde(default)]
    pub repl: ReplConfig,
    #[serde(default)]
    pub batch: BatchConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,
    #[serde(default = "default_true")]
    pub show_banner: bool,
    #[serde(default = "default_true")]
    pub handle_ctrl_c: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            show_banner: true,
            handle_ctrl_c: true,
        }
    }
}

fn default_prompt() -> String {
    "RecipeLang> ".to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Halt at the first rejected line and skip the final recipe.
    #[serde(default = "default_true")]
    pub stop_on_error: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            stop_on_error: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// How a finished recipe is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RecipeLangConfig::default();
        assert_eq!(config.repl.prompt, "RecipeLang> ");
        assert!(config.repl.show_banner);
        assert!(config.batch.stop_on_error);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: RecipeLangConfig = serde_yaml::from_str("output:\n  format: json\n").unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.repl.prompt, "RecipeLang> ");
        assert!(config.batch.stop_on_error);
    }
}
