use std::env;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_BODY_LIMIT: usize = 1024 * 1024; // 1MB

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid {key} value: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub body_limit: usize,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // .env ファイルを読み込む (存在しなくてもエラーにしない)

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意の取得関数から設定を組み立てる。空文字列は未設定として扱う
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let port = match get("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidValue { key: "PORT", value })?,
            None => DEFAULT_PORT,
        };

        let body_limit = match get("BODY_LIMIT_BYTES") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                key: "BODY_LIMIT_BYTES",
                value,
            })?,
            None => DEFAULT_BODY_LIMIT,
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            log_level: get("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            server: ServerConfig { body_limit },
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// テスト用の設定を作成
    pub fn for_testing() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            log_level: "debug".to_string(),
            server: ServerConfig {
                body_limit: DEFAULT_BODY_LIMIT,
            },
        }
    }
}
