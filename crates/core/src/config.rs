//! Process configuration read from `CHIEF_*` environment variables.

use std::fmt;
use std::path::PathBuf;

use chrono::{FixedOffset, Offset, Utc};

use crate::constants::{
    DEFAULT_CHAT_MODEL, DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE, DEFAULT_DOCUMENT_COLLECTION,
    DEFAULT_EMBEDDING_DIMENSION, DEFAULT_EMBEDDING_MODEL, DEFAULT_TOP_K, DEFAULT_USER_ID, MAX_TOP_K,
};
use crate::env_config::{env_opt, env_or, env_parse_with_default};
use crate::error::CoreError;

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_POOL_SIZE: u32 = 8;
const DEFAULT_TIMEZONE_OFFSET_HOURS: i32 = -5;

#[derive(Clone)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

#[derive(Clone)]
pub struct EmbeddingConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub dimension: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct ChunkingConfig {
    pub chunk_size: usize,
    pub overlap: usize,
    pub top_k: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self { chunk_size: DEFAULT_CHUNK_SIZE, overlap: DEFAULT_CHUNK_OVERLAP, top_k: DEFAULT_TOP_K }
    }
}

#[derive(Clone)]
pub struct QdrantConfig {
    pub url: String,
    pub api_key: Option<String>,
    pub collection: String,
}

#[derive(Clone)]
pub struct CalendarConfig {
    pub access_token: String,
}

#[derive(Clone)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub from_number: String,
}

/// Everything the process needs, resolved once at startup.
///
/// Optional collaborators are `None` when their variables are unset.
#[derive(Clone)]
pub struct AppConfig {
    pub user_id: String,
    pub db_path: PathBuf,
    pub pool_size: u32,
    pub llm: LlmConfig,
    pub embedding: EmbeddingConfig,
    pub chunking: ChunkingConfig,
    pub qdrant: Option<QdrantConfig>,
    pub calendar: Option<CalendarConfig>,
    pub twilio: Option<TwilioConfig>,
    pub user_phone: Option<String>,
    pub timezone: FixedOffset,
}

// Secrets stay out of logs.
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("user_id", &self.user_id)
            .field("db_path", &self.db_path)
            .field("pool_size", &self.pool_size)
            .field("llm_base_url", &self.llm.base_url)
            .field("llm_model", &self.llm.model)
            .field("llm_api_key", &self.llm.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("embedding_model", &self.embedding.model)
            .field("embedding_dimension", &self.embedding.dimension)
            .field("chunking", &self.chunking)
            .field("qdrant_url", &self.qdrant.as_ref().map(|q| q.url.as_str()))
            .field("calendar", &self.calendar.is_some())
            .field("twilio", &self.twilio.is_some())
            .field("timezone", &self.timezone)
            .finish()
    }
}

impl AppConfig {
    /// Defaults for a database at `db_path` with no remote collaborators.
    #[must_use]
    pub fn local(db_path: PathBuf) -> Self {
        Self {
            user_id: DEFAULT_USER_ID.to_owned(),
            db_path,
            pool_size: DEFAULT_POOL_SIZE,
            llm: LlmConfig {
                api_key: None,
                base_url: DEFAULT_OPENAI_BASE_URL.to_owned(),
                model: DEFAULT_CHAT_MODEL.to_owned(),
            },
            embedding: EmbeddingConfig {
                api_key: None,
                base_url: DEFAULT_OPENAI_BASE_URL.to_owned(),
                model: DEFAULT_EMBEDDING_MODEL.to_owned(),
                dimension: DEFAULT_EMBEDDING_DIMENSION,
            },
            chunking: ChunkingConfig::default(),
            qdrant: None,
            calendar: None,
            twilio: None,
            user_phone: None,
            timezone: timezone_from_hours(DEFAULT_TIMEZONE_OFFSET_HOURS).unwrap_or_else(|_| Utc.fix()),
        }
    }

    /// Read configuration from the environment.
    ///
    /// # Errors
    /// Returns `CoreError::Config` when chunking parameters are inconsistent
    /// or no database path can be determined.
    pub fn from_env() -> Result<Self, CoreError> {
        let llm_key = env_opt("CHIEF_LLM_API_KEY");
        let llm_base = env_or("CHIEF_LLM_BASE_URL", DEFAULT_OPENAI_BASE_URL);

        let llm = LlmConfig {
            api_key: llm_key.clone(),
            base_url: llm_base.clone(),
            model: env_or("CHIEF_CHAT_MODEL", DEFAULT_CHAT_MODEL),
        };

        let embedding = EmbeddingConfig {
            api_key: env_opt("CHIEF_EMBEDDING_API_KEY").or(llm_key),
            base_url: env_opt("CHIEF_EMBEDDING_BASE_URL").unwrap_or(llm_base),
            model: env_or("CHIEF_EMBEDDING_MODEL", DEFAULT_EMBEDDING_MODEL),
            dimension: env_parse_with_default("CHIEF_EMBEDDING_DIMENSION", DEFAULT_EMBEDDING_DIMENSION),
        };

        let chunking = ChunkingConfig {
            chunk_size: env_parse_with_default("CHIEF_CHUNK_SIZE", DEFAULT_CHUNK_SIZE),
            overlap: env_parse_with_default("CHIEF_CHUNK_OVERLAP", DEFAULT_CHUNK_OVERLAP),
            top_k: env_parse_with_default("CHIEF_TOP_K", DEFAULT_TOP_K).clamp(1, MAX_TOP_K),
        };
        if chunking.overlap >= chunking.chunk_size {
            return Err(CoreError::Config(format!(
                "CHIEF_CHUNK_OVERLAP ({}) must be smaller than CHIEF_CHUNK_SIZE ({})",
                chunking.overlap, chunking.chunk_size
            )));
        }

        let qdrant = env_opt("CHIEF_QDRANT_URL").map(|url| QdrantConfig {
            url,
            api_key: env_opt("CHIEF_QDRANT_API_KEY"),
            collection: env_or("CHIEF_QDRANT_COLLECTION", DEFAULT_DOCUMENT_COLLECTION),
        });

        let calendar =
            env_opt("CHIEF_CALENDAR_TOKEN").map(|access_token| CalendarConfig { access_token });

        let twilio = match (
            env_opt("CHIEF_TWILIO_ACCOUNT_SID"),
            env_opt("CHIEF_TWILIO_AUTH_TOKEN"),
            env_opt("CHIEF_TWILIO_FROM"),
        ) {
            (Some(account_sid), Some(auth_token), Some(from_number)) => {
                Some(TwilioConfig { account_sid, auth_token, from_number })
            },
            _ => None,
        };

        let offset_hours =
            env_parse_with_default("CHIEF_TIMEZONE_OFFSET_HOURS", DEFAULT_TIMEZONE_OFFSET_HOURS);
        let timezone = timezone_from_hours(offset_hours)?;

        let db_path = match env_opt("CHIEF_DB_PATH") {
            Some(path) => PathBuf::from(path),
            None => default_db_path()?,
        };

        Ok(Self {
            user_id: env_or("CHIEF_USER_ID", DEFAULT_USER_ID),
            db_path,
            pool_size: env_parse_with_default("CHIEF_DB_POOL_SIZE", DEFAULT_POOL_SIZE).max(1),
            llm,
            embedding,
            chunking,
            qdrant,
            calendar,
            twilio,
            user_phone: env_opt("CHIEF_USER_PHONE"),
            timezone,
        })
    }
}

/// `<data_local_dir>/chief/chief.db`.
///
/// # Errors
/// Returns `CoreError::Config` when the platform has no local data directory.
pub fn default_db_path() -> Result<PathBuf, CoreError> {
    dirs::data_local_dir()
        .map(|dir| dir.join("chief").join("chief.db"))
        .ok_or_else(|| CoreError::Config("cannot determine local data directory".to_owned()))
}

/// # Errors
/// Returns `CoreError::Config` for offsets outside ±23 hours.
pub fn timezone_from_hours(hours: i32) -> Result<FixedOffset, CoreError> {
    hours
        .checked_mul(3600)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| CoreError::Config(format!("timezone offset out of range: {hours}h")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timezone_offsets() {
        assert_eq!(timezone_from_hours(-5).unwrap().local_minus_utc(), -5 * 3600);
        assert!(timezone_from_hours(30).is_err());
        assert!(timezone_from_hours(i32::MAX).is_err());
        assert!(timezone_from_hours(-700_000).is_err());
    }

    #[test]
    fn chunking_defaults() {
        let chunking = ChunkingConfig::default();
        assert_eq!(chunking.chunk_size, 500);
        assert_eq!(chunking.overlap, 50);
        assert_eq!(chunking.top_k, 5);
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = AppConfig {
            user_id: "steven".into(),
            db_path: PathBuf::from("/tmp/chief.db"),
            pool_size: 8,
            llm: LlmConfig {
                api_key: Some("sk-secret".into()),
                base_url: DEFAULT_OPENAI_BASE_URL.into(),
                model: DEFAULT_CHAT_MODEL.into(),
            },
            embedding: EmbeddingConfig {
                api_key: Some("sk-secret".into()),
                base_url: DEFAULT_OPENAI_BASE_URL.into(),
                model: DEFAULT_EMBEDDING_MODEL.into(),
                dimension: 1536,
            },
            chunking: ChunkingConfig::default(),
            qdrant: None,
            calendar: None,
            twilio: None,
            user_phone: None,
            timezone: timezone_from_hours(-5).unwrap(),
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
