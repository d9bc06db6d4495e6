//! Client configuration.
//!
//! The backend base URL is the only externally visible setting; the rest
//! describes the terminal "viewport".

use reqwest::Url;
use thiserror::Error;

use crate::domain::{GridLayout, UserId};

/// Container width assumed when none is given
pub const DEFAULT_CONTAINER_WIDTH: u32 = 1000;

/// Configuration errors, reported once at startup
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid API URL '{url}': {reason}")]
    InvalidApiUrl { url: String, reason: String },

    #[error("API URL must use http or https (got: {0})")]
    UnsupportedScheme(String),

    #[error("invalid user id: {0}")]
    InvalidUserId(String),
}

/// Validated client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: Url,
    pub container_width: u32,
    pub layout: GridLayout,
    pub user_id: UserId,
}

impl ClientConfig {
    /// Validate raw settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for a malformed URL, a non-HTTP scheme or an empty user id
    pub fn new(api_url: &str, container_width: u32, user_id: &str) -> Result<Self, ConfigError> {
        let trimmed = api_url.trim().trim_end_matches('/');
        let api_url = Url::parse(trimmed).map_err(|e| ConfigError::InvalidApiUrl {
            url: api_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(api_url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(api_url.scheme().to_string()));
        }
        let user_id = UserId::new(user_id.to_string())
            .map_err(|e| ConfigError::InvalidUserId(e.to_string()))?;

        Ok(Self {
            api_url,
            container_width,
            layout: GridLayout::default(),
            user_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_strips_trailing_slash() {
        // テスト項目: API URL の末尾のスラッシュは取り除かれる
        // when (操作):
        let config = ClientConfig::new("http://localhost:3000/api/", 1000, "guest").unwrap();

        // then (期待する結果):
        assert_eq!(config.api_url.as_str(), "http://localhost:3000/api");
        assert_eq!(config.container_width, 1000);
        assert_eq!(config.layout, GridLayout::default());
    }

    #[test]
    fn test_config_rejects_malformed_url() {
        // テスト項目: URL として解釈できない値はエラーになる
        // when (操作):
        let result = ClientConfig::new("not a url", 1000, "guest");

        // then (期待する結果):
        assert!(matches!(result, Err(ConfigError::InvalidApiUrl { .. })));
    }

    #[test]
    fn test_config_rejects_other_schemes() {
        // テスト項目: http / https 以外のスキームはエラーになる
        // when (操作):
        let result = ClientConfig::new("ftp://example.com", 1000, "guest");

        // then (期待する結果):
        assert_eq!(
            result.unwrap_err(),
            ConfigError::UnsupportedScheme("ftp".to_string())
        );
    }

    #[test]
    fn test_config_rejects_blank_user() {
        // テスト項目: 空のユーザー ID はエラーになる
        // when (操作):
        let result = ClientConfig::new("http://localhost", 1000, " ");

        // then (期待する結果):
        assert!(matches!(result, Err(ConfigError::InvalidUserId(_))));
    }
}
