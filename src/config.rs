use std::path::PathBuf;

use serde::Deserialize;

/// Static credential pair for the dashboard's Basic Auth gate.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub user: String,
    pub password: String,
    pub realm: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Root of the externally maintained log files (volume mount in prod).
    pub data_path: PathBuf,
    /// Offset applied when defaulting the request date to "today".
    pub utc_offset_minutes: i32,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let data_path = std::env::var("DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/var/lib/macrolog"));
        let utc_offset_minutes = std::env::var("TZ_OFFSET_MINUTES")
            .ok()
            .and_then(|v| v.parse::<i32>().ok())
            .unwrap_or(0);
        let auth = AuthConfig {
            user: std::env::var("BASIC_AUTH_USER")?,
            password: std::env::var("BASIC_AUTH_PASS")?,
            realm: std::env::var("BASIC_AUTH_REALM")
                .unwrap_or_else(|_| "Health Dashboard".into()),
        };
        Ok(Self {
            data_path,
            utc_offset_minutes,
            auth,
        })
    }

    /// Structured nutrition logs, partitioned by year-month.
    pub fn nutrition_dir(&self) -> PathBuf {
        self.data_path.join("nutrition").join("daily")
    }

    /// Free-form daily memory journal.
    pub fn memory_dir(&self) -> PathBuf {
        self.data_path.join("memory")
    }
}
