//! Server configuration read from the process environment (`main` loads `.env` into it first).
use crate::db::Database;
use crate::error::{ConfigError, SourceError};
use crate::remote::RestReviewSource;
use crate::source::ApprovedReviewSource;
use leptos::logging::log;
use std::sync::Arc;

pub const URL_VAR: &str = "SUPABASE_URL";
pub const KEY_VAR: &str = "SUPABASE_SERVICE_KEY";
pub const DB_PATH_VAR: &str = "REVIEWS_DB_PATH";
pub const DEFAULT_DB_PATH: &str = "reviews.db";

/// Where approved reviews are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    /// Hosted database reached over REST.
    Rest { url: String, service_key: String },
    /// Local SQLite file, used when no hosted store is configured.
    Sqlite { path: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub source: SourceConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from `lookup`; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let source = match (get(URL_VAR), get(KEY_VAR)) {
            (Some(url), Some(service_key)) => SourceConfig::Rest { url, service_key },
            (Some(_), None) => {
                return Err(ConfigError::Incomplete {
                    present: URL_VAR,
                    missing: KEY_VAR,
                })
            }
            (None, Some(_)) => {
                return Err(ConfigError::Incomplete {
                    present: KEY_VAR,
                    missing: URL_VAR,
                })
            }
            (None, None) => SourceConfig::Sqlite {
                path: get(DB_PATH_VAR).unwrap_or_else(|| DEFAULT_DB_PATH.to_string()),
            },
        };
        Ok(Self { source })
    }

    /// Opens the configured review source.
    pub async fn connect(&self) -> Result<Arc<dyn ApprovedReviewSource>, SourceError> {
        match &self.source {
            SourceConfig::Rest { url, service_key } => {
                log!("[CONFIG] Reading approved reviews from {}", url);
                Ok(Arc::new(RestReviewSource::new(url.as_str(), service_key.as_str())))
            }
            SourceConfig::Sqlite { path } => {
                log!("[CONFIG] Reading approved reviews from SQLite at {}", path);
                let db = Database::new(path)?;
                db.create_schema().await?;
                Ok(Arc::new(db))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn both_hosted_vars_select_rest() {
        let config =
            ServerConfig::from_lookup(lookup(&[(URL_VAR, "https://x.example.co"), (KEY_VAR, "k")]))
                .unwrap();
        assert_eq!(
            config.source,
            SourceConfig::Rest {
                url: "https://x.example.co".into(),
                service_key: "k".into()
            }
        );
    }

    #[test]
    fn no_hosted_vars_fall_back_to_sqlite() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(
            config.source,
            SourceConfig::Sqlite {
                path: DEFAULT_DB_PATH.into()
            }
        );

        let config = ServerConfig::from_lookup(lookup(&[(DB_PATH_VAR, "/tmp/r.db")])).unwrap();
        assert_eq!(config.source, SourceConfig::Sqlite { path: "/tmp/r.db".into() });
    }

    #[test]
    fn half_configured_store_is_rejected() {
        let err = ServerConfig::from_lookup(lookup(&[(URL_VAR, "https://x.example.co")])).unwrap_err();
        assert_eq!(err.to_string(), "SUPABASE_URL is set but SUPABASE_SERVICE_KEY is not");

        let err = ServerConfig::from_lookup(lookup(&[(KEY_VAR, "k"), (URL_VAR, "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Incomplete { present: KEY_VAR, .. }));
    }

    #[test]
    fn dotenv_file_selects_rest() {
        let path = std::env::temp_dir().join(format!("clientreviews-{}.env", std::process::id()));
        std::fs::write(
            &path,
            "# hosted store\nSUPABASE_URL=https://x.example.co\nSUPABASE_SERVICE_KEY=\"k 1\"\n",
        )
        .unwrap();
        let vars: HashMap<String, String> = dotenvy::from_path_iter(&path)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        std::fs::remove_file(&path).unwrap();

        let config = ServerConfig::from_lookup(|name| vars.get(name).cloned()).unwrap();
        assert_eq!(
            config.source,
            SourceConfig::Rest {
                url: "https://x.example.co".into(),
                service_key: "k 1".into()
            }
        );
    }

    #[tokio::test]
    async fn sqlite_source_connects_with_schema() {
        let config = ServerConfig {
            source: SourceConfig::Sqlite {
                path: ":memory:".into(),
            },
        };
        let source = config.connect().await.unwrap();
        assert!(source.query_approved_reviews().await.unwrap().is_empty());
    }
}
