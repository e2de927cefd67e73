//! Run options shared by the split and summarize pipelines.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// All options controlling the two pipelines.
/// Loaded from TOML config files, then overridden by CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunOptions {
    // -- Layout --
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub manifest: PathBuf,
    pub key_file: PathBuf,
    pub summary_file: PathBuf,

    // -- Model --
    pub model: String,
    pub base_url: String,
    pub temperature: f32,
    pub request_timeout_secs: u64,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("input"),
            output_dir: PathBuf::from("output"),
            manifest: PathBuf::from("chapters.txt"),
            key_file: PathBuf::from("key.txt"),
            summary_file: PathBuf::from("summary.tex"),
            model: "gpt-4-turbo".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            temperature: 0.1,
            request_timeout_secs: 120,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = RunOptions::default();
        assert_eq!(opts.input_dir, PathBuf::from("input"));
        assert_eq!(opts.output_dir, PathBuf::from("output"));
        assert_eq!(opts.manifest, PathBuf::from("chapters.txt"));
        assert_eq!(opts.key_file, PathBuf::from("key.txt"));
        assert_eq!(opts.summary_file, PathBuf::from("summary.tex"));
        assert_eq!(opts.model, "gpt-4-turbo");
        assert_eq!(opts.temperature, 0.1);
        assert_eq!(opts.request_timeout_secs, 120);
    }

    #[test]
    fn test_toml_round_trip_full() {
        let mut opts = RunOptions::default();
        opts.output_dir = PathBuf::from("chapters");
        opts.model = "gpt-4o".to_string();
        opts.temperature = 0.3;
        opts.request_timeout_secs = 60;

        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: RunOptions = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed.output_dir, PathBuf::from("chapters"));
        assert_eq!(parsed.model, "gpt-4o");
        assert_eq!(parsed.temperature, 0.3);
        assert_eq!(parsed.request_timeout_secs, 60);
    }

    #[test]
    fn test_toml_partial_config() {
        let toml_str = r#"
model = "gpt-4o-mini"
output_dir = "parts"
"#;
        let opts: RunOptions = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.model, "gpt-4o-mini");
        assert_eq!(opts.output_dir, PathBuf::from("parts"));
        // Defaults filled in
        assert_eq!(opts.input_dir, PathBuf::from("input"));
        assert_eq!(opts.temperature, 0.1);
        assert_eq!(opts.base_url, "https://api.openai.com/v1");
    }

    #[test]
    fn test_example_config() {
        let config = r#"
input_dir = "books"
manifest = "toc.txt"
key_file = "secrets/openai.key"
model = "gpt-4-turbo"
temperature = 0.1
request_timeout_secs = 300
"#;
        let opts: RunOptions = toml::from_str(config).unwrap();
        assert_eq!(opts.input_dir, PathBuf::from("books"));
        assert_eq!(opts.manifest, PathBuf::from("toc.txt"));
        assert_eq!(opts.key_file, PathBuf::from("secrets/openai.key"));
        assert_eq!(opts.request_timeout_secs, 300);
    }
}
