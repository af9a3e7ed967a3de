use super::Environment;

#[derive(Debug, Clone)]
pub struct Settings {
    pub environment: Environment,
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub staging: StagingSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Upper bound for one multipart upload request, in megabytes. Export
    /// files for long conversations run well past axum's 2 MB default.
    pub max_upload_mb: usize,
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct StagingSettings {
    pub dir: String,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub enable_json: bool,
}

impl Settings {
    /// Assemble settings from environment variables, with local-development
    /// defaults for everything. A malformed variable fails startup instead
    /// of falling back.
    pub fn from_env() -> Result<Self, String> {
        let environment: Environment = std::env::var("APP_ENV")
            .unwrap_or_else(|_| "local".to_string())
            .try_into()?;

        Ok(Self {
            environment,
            server: ServerSettings {
                host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env_parsed("SERVER_PORT", 3023)?,
                max_upload_mb: env_parsed("MAX_UPLOAD_MB", 64)?,
            },
            database: DatabaseSettings {
                url: std::env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "sqlite://chatvault.db".to_string()),
                max_connections: env_parsed("DATABASE_MAX_CONNECTIONS", 5)?,
            },
            staging: StagingSettings {
                dir: std::env::var("STAGING_DIR").unwrap_or_else(|_| "staging".to_string()),
            },
            logging: LoggingSettings {
                enable_json: std::env::var("LOG_FORMAT")
                    .map(|v| v.to_lowercase() == "json")
                    .unwrap_or(false),
            },
        })
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.server.max_upload_mb * 1024 * 1024
    }
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> Result<T, String> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| format!("Invalid value for {}: {}", key, raw)),
        Err(_) => Ok(default),
    }
}
