use crate::config::AppConfig;
use crate::errors::Result;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 准备服务器启动的上下文
/// 存储后端连接失败时直接返回错误，不对外提供服务
pub async fn prepare_server_startup() -> Result<StartupContext> {
    if cfg!(debug_assertions) {
        crate::storage::register::debug_storage_registry();
        debug!("Debug mode: Storage registry is enabled");
    }

    let config = AppConfig::get();
    let storage = crate::storage::create_storage().await?;
    warn!(
        "Storage backend '{}' initialized, database: {}",
        config.database.backend, config.database.name
    );

    Ok(StartupContext { storage })
}
