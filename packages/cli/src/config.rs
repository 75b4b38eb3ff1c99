use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "pagecraft.config.json";

/// Pagecraft configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Site title written into the generated HTML
    #[serde(default = "default_title")]
    pub title: String,

    /// JSON file holding saved projects
    #[serde(default = "default_projects_file")]
    pub projects_file: String,

    /// Output directory for exported sites
    #[serde(default = "default_out_dir")]
    pub out_dir: String,
}

fn default_title() -> String {
    "My Site".to_string()
}

fn default_projects_file() -> String {
    "pagecraft-projects.json".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Fall back to defaults if no config exists
            Ok(Config::default())
        }
    }

    pub fn projects_path(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.projects_file)
    }

    pub fn out_path(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.out_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: default_title(),
            projects_file: default_projects_file(),
            out_dir: default_out_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "title": "Acme",
            "projectsFile": "sites.json",
            "outDir": "build"
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.title, "Acme");
        assert_eq!(config.projects_file, "sites.json");
        assert_eq!(config.out_dir, "build");
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.title, "My Site");
        assert_eq!(config.projects_file, "pagecraft-projects.json");
        assert_eq!(config.out_dir, "dist");
    }
}
