use std::{collections::HashMap, fs, path::PathBuf, sync::Arc};

use anyhow::{anyhow, Context, Result};

use crate::common;

/// Read-only access to artifact files by root-relative path, e.g.
/// "processed/housing_clean.parquet" or "models/model.json".
pub trait ArtifactSource: Send + Sync {
    fn get(&self, rel: &str) -> Result<Arc<[u8]>>;
    fn has(&self, rel: &str) -> bool;
}

/// Artifacts under a directory on disk.
#[derive(Debug, Clone)]
pub struct DiskArtifacts {
    root: PathBuf,
}

impl DiskArtifacts {
    pub fn new(root: impl Into<PathBuf>) -> Self { Self { root: root.into() } }

    fn full(&self, rel: &str) -> PathBuf { self.root.join(rel) }
}

impl ArtifactSource for DiskArtifacts {
    fn get(&self, rel: &str) -> Result<Arc<[u8]>> {
        let path = self.full(rel);
        common::require_file_exists(&path)?;
        let bytes = fs::read(&path)
            .with_context(|| format!("[artifacts] Failed to read {}", path.display()))?;
        Ok(Arc::from(bytes))
    }

    fn has(&self, rel: &str) -> bool { self.full(rel).is_file() }
}

/// In-memory artifacts keyed by relative path.
#[derive(Debug, Default, Clone)]
pub struct MemArtifacts {
    files: HashMap<String, Arc<[u8]>>,
}

impl MemArtifacts {
    pub fn new(files: HashMap<String, Arc<[u8]>>) -> Self { Self { files } }

    pub fn insert(&mut self, rel: &str, bytes: impl Into<Vec<u8>>) {
        self.files.insert(rel.to_string(), Arc::from(bytes.into()));
    }
}

impl ArtifactSource for MemArtifacts {
    fn get(&self, rel: &str) -> Result<Arc<[u8]>> {
        self.files.get(rel).cloned()
            .ok_or_else(|| anyhow!("[artifacts] missing artifact: {rel}"))
    }

    fn has(&self, rel: &str) -> bool { self.files.contains_key(rel) }
}
