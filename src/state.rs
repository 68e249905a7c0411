use std::path::PathBuf;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::nutrition::store::{FsLogStore, LogStore};
use crate::nutrition::targets::{StaticTargets, TargetSource};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn LogStore>,
    pub targets: Arc<dyn TargetSource>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let store = Arc::new(FsLogStore::new(&config)) as Arc<dyn LogStore>;
        let targets = Arc::new(StaticTargets::default()) as Arc<dyn TargetSource>;
        Ok(Self {
            config,
            store,
            targets,
        })
    }

    pub fn from_parts(
        config: Arc<AppConfig>,
        store: Arc<dyn LogStore>,
        targets: Arc<dyn TargetSource>,
    ) -> Self {
        Self {
            config,
            store,
            targets,
        }
    }

    pub fn fake() -> Self {
        use crate::config::AuthConfig;

        let config = Arc::new(AppConfig {
            data_path: PathBuf::from("/nonexistent"),
            utc_offset_minutes: 0,
            auth: AuthConfig {
                user: "test".into(),
                password: "test".into(),
                realm: "test".into(),
            },
        });
        let store = Arc::new(FsLogStore::new(&config)) as Arc<dyn LogStore>;
        let targets = Arc::new(StaticTargets::default()) as Arc<dyn TargetSource>;
        Self {
            config,
            store,
            targets,
        }
    }
}
