use crate::errors::Result;
use crate::storage::{Storage, memory_storage::MemoryStorage, mongo_storage::MongoStorage};
use once_cell::sync::Lazy;
use std::{
    collections::HashMap,
    future::Future,
    pin::Pin,
    sync::{Arc, RwLock},
};

pub type BoxedStorageFuture = Pin<Box<dyn Future<Output = Result<Box<dyn Storage>>> + Send>>;
pub type StorageConstructor = Arc<dyn Fn() -> BoxedStorageFuture + Send + Sync>;

/// 内置存储后端
fn builtin_plugins() -> HashMap<String, StorageConstructor> {
    let mut plugins: HashMap<String, StorageConstructor> = HashMap::new();

    plugins.insert(
        "mongodb".to_string(),
        Arc::new(|| -> BoxedStorageFuture {
            Box::pin(async {
                let storage = MongoStorage::new_async().await?;
                Ok(Box::new(storage) as Box<dyn Storage>)
            })
        }),
    );

    plugins.insert(
        "memory".to_string(),
        Arc::new(|| -> BoxedStorageFuture {
            Box::pin(async { Ok(Box::new(MemoryStorage::new()) as Box<dyn Storage>) })
        }),
    );

    plugins
}

static STORAGE_REGISTRY: Lazy<RwLock<HashMap<String, StorageConstructor>>> =
    Lazy::new(|| RwLock::new(builtin_plugins()));

pub fn register_storage_plugin<S: Into<String>>(name: S, constructor: StorageConstructor) {
    let name = name.into();
    let mut registry = STORAGE_REGISTRY
        .write()
        .expect("Storage registry lock poisoned");
    registry.insert(name, constructor);
}

pub fn get_storage_plugin(name: &str) -> Option<StorageConstructor> {
    STORAGE_REGISTRY
        .read()
        .expect("Storage registry lock poisoned")
        .get(name)
        .cloned()
}

pub fn debug_storage_registry() {
    let registry = STORAGE_REGISTRY
        .read()
        .expect("Storage registry lock poisoned");
    if registry.is_empty() {
        tracing::debug!("No storage plugins registered.");
    } else {
        tracing::debug!("Registered storage plugins:");
        for key in registry.keys() {
            tracing::debug!(" - {}", key);
        }
    }
}
