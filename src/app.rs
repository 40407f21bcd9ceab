use crate::config::{AppConfig, SourceKind};
use crate::db::{init_db, Database};
use crate::errors::ServerError;
use crate::i18n::Locale;
use crate::source::{ApiSource, HistorySource, SqliteSource};
use tracing::info;

/// Shared, read-only state handed to every request.
pub struct App {
    pub source: Box<dyn HistorySource>,
    pub default_locale: Locale,
}

impl App {
    pub fn new(source: Box<dyn HistorySource>, default_locale: Locale) -> Self {
        Self {
            source,
            default_locale,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ServerError> {
        let source: Box<dyn HistorySource> = match config.source {
            SourceKind::Api => {
                info!(base_url = %config.api_base_url, "reading listings from the listing API");
                Box::new(ApiSource::new(&config.api_base_url, config.api_timeout())?)
            }
            SourceKind::Sqlite => {
                info!(path = %config.sqlite_path, "reading listings from local snapshot");
                let db = Database::new(config.sqlite_path.clone());
                init_db(&db, &config.schema_path)?;
                Box::new(SqliteSource::new(db))
            }
        };

        Ok(Self::new(source, config.default_locale))
    }
}
