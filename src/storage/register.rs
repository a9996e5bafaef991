use crate::config::SnapshotConfig;
use crate::errors::Result;
use crate::storage::SnapshotSource;
use crate::storage::file_source::FileSnapshotSource;
use crate::storage::inline_source::InlineSnapshotSource;
use once_cell::sync::Lazy;
use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

pub type SnapshotSourceConstructor =
    Arc<dyn Fn(&SnapshotConfig) -> Result<Box<dyn SnapshotSource>> + Send + Sync>;

static SNAPSHOT_SOURCE_REGISTRY: Lazy<RwLock<HashMap<String, SnapshotSourceConstructor>>> =
    Lazy::new(|| {
        let mut registry: HashMap<String, SnapshotSourceConstructor> = HashMap::new();
        registry.insert("file".to_string(), Arc::new(create_file_source));
        registry.insert("inline".to_string(), Arc::new(create_inline_source));
        RwLock::new(registry)
    });

fn create_file_source(config: &SnapshotConfig) -> Result<Box<dyn SnapshotSource>> {
    Ok(Box::new(FileSnapshotSource::from_config(config)?))
}

fn create_inline_source(config: &SnapshotConfig) -> Result<Box<dyn SnapshotSource>> {
    Ok(Box::new(InlineSnapshotSource::from_config(config)?))
}

pub fn register_snapshot_source_plugin<S: Into<String>>(
    name: S,
    constructor: SnapshotSourceConstructor,
) {
    let name = name.into();
    let mut registry = SNAPSHOT_SOURCE_REGISTRY
        .write()
        .expect("Snapshot source registry lock poisoned");
    registry.insert(name, constructor);
}

pub fn get_snapshot_source_plugin(name: &str) -> Option<SnapshotSourceConstructor> {
    SNAPSHOT_SOURCE_REGISTRY
        .read()
        .expect("Snapshot source registry lock poisoned")
        .get(name)
        .cloned()
}

pub fn debug_snapshot_source_registry() {
    let registry = SNAPSHOT_SOURCE_REGISTRY
        .read()
        .expect("Snapshot source registry lock poisoned");
    if registry.is_empty() {
        tracing::debug!("No snapshot source plugins registered.");
    } else {
        tracing::debug!("Registered snapshot source plugins:");
        for key in registry.keys() {
            tracing::debug!(" - {}", key);
        }
    }
}
