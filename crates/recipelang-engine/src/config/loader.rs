use super::schema::RecipeLangConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Names an explicit config file; takes precedence over the search locations.
pub const CONFIG_ENV: &str = "RECIPELANG_CONFIG";

/// Where a config file may live, in search order.
#[derive(Debug, Clone, Copy)]
enum Location {
    WorkingDir(&'static str),
    Home(&'static [&'static str]),
}

const SEARCH_ORDER: &[Location] = &[
    Location::WorkingDir("recipelang.yaml"),
    Location::Home(&[".recipelang", "config.yaml"]),
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Paths `load_default` looks at, most specific first. A path named by
    /// `RECIPELANG_CONFIG` replaces the search entirely.
    pub fn candidate_paths() -> Vec<PathBuf> {
        resolve_candidates(
            std::env::var_os(CONFIG_ENV).map(PathBuf::from),
            dirs::home_dir(),
        )
    }

    /// Load the first candidate that exists, or the built-in defaults.
    ///
    /// A file named by `RECIPELANG_CONFIG` must exist.
    pub async fn load_default() -> Result<RecipeLangConfig, ConfigError> {
        if let Some(explicit) = std::env::var_os(CONFIG_ENV) {
            return Self::load_from(Path::new(&explicit)).await;
        }

        for path in Self::candidate_paths() {
            if path.exists() {
                return Self::load_from(&path).await;
            }
            debug!("No config at {}", path.display());
        }

        info!("Using built-in configuration");
        Ok(RecipeLangConfig::default())
    }

    pub async fn load_from(path: &Path) -> Result<RecipeLangConfig, ConfigError> {
        info!("Loading config from {}", path.display());
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// An empty or comment-only file means "all defaults".
fn parse(content: &str) -> Result<RecipeLangConfig, serde_yaml::Error> {
    let has_settings = content
        .lines()
        .map(str::trim)
        .any(|l| !l.is_empty() && !l.starts_with('#'));
    if has_settings {
        serde_yaml::from_str(content)
    } else {
        Ok(RecipeLangConfig::default())
    }
}

fn resolve_candidates(explicit: Option<PathBuf>, home: Option<PathBuf>) -> Vec<PathBuf> {
    if let Some(path) = explicit {
        return vec![path];
    }

    SEARCH_ORDER
        .iter()
        .filter_map(|location| match *location {
            Location::WorkingDir(name) => Some(PathBuf::from(name)),
            Location::Home(parts) => home
                .as_ref()
                .map(|h| parts.iter().fold(h.clone(), |p, part| p.join(part))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_order_prefers_working_dir() {
        let paths = resolve_candidates(None, Some(PathBuf::from("/home/chef")));
        assert_eq!(
            paths,
            vec![
                PathBuf::from("recipelang.yaml"),
                PathBuf::from("/home/chef/.recipelang/config.yaml"),
            ]
        );
    }

    #[test]
    fn test_search_order_without_home() {
        let paths = resolve_candidates(None, None);
        assert_eq!(paths, vec![PathBuf::from("recipelang.yaml")]);
    }

    #[test]
    fn test_explicit_path_replaces_search() {
        let paths = resolve_candidates(
            Some(PathBuf::from("/etc/recipelang.yaml")),
            Some(PathBuf::from("/home/chef")),
        );
        assert_eq!(paths, vec![PathBuf::from("/etc/recipelang.yaml")]);
    }

    #[test]
    fn test_comment_only_file_means_defaults() {
        let config = parse("# nothing set yet\n\n").unwrap();
        assert_eq!(config.repl.prompt, "RecipeLang> ");
        assert!(config.batch.stop_on_error);
    }
}
