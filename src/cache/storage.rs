//! File-backed cache storage
//!
//! Each key is one `<encoded key>.json` file holding `{ "value": ..., "ts": <epoch ms> }`.
//! Writes replace the whole file; there is no locking between writers.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::fs;

use super::key::{file_name, key_from_file_name};
use super::{CacheStore, CacheTtl, is_expired};
use crate::error::CacheError;

type Result<T> = std::result::Result<T, CacheError>;

/// One cache file's contents
#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    value: Value,
    /// Epoch milliseconds at write time
    ts: i64,
}

/// Directory-backed cache with a fixed TTL
#[derive(Debug, Clone)]
pub struct FileCache {
    dir: PathBuf,
    ttl: Duration,
}

impl FileCache {
    /// Cache rooted at `dir` with the rankings TTL. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ttl: CacheTtl::RANKINGS,
        }
    }

    /// Override the entry TTL.
    #[cfg(test)]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Directory holding the cache files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(file_name(key))
    }

    /// Read and decode one entry file; any failure is `None`.
    async fn read_entry(path: &Path) -> Option<CacheEntry> {
        let contents = fs::read(path).await.ok()?;
        match serde_json::from_slice(&contents) {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::debug!("Ignoring unreadable cache file {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Paths of every cache entry file. A missing directory has no entries.
    async fn entry_files(&self) -> Result<Vec<PathBuf>> {
        let mut dir = match fs::read_dir(&self.dir).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(CacheError::Io(format!("Failed to read cache dir: {}", e))),
        };

        let mut files = Vec::new();
        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|e| CacheError::Io(format!("Failed to read cache dir: {}", e)))?
        {
            let path = entry.path();
            let is_entry = path
                .file_name()
                .and_then(|n| n.to_str())
                .and_then(key_from_file_name)
                .is_some();
            if is_entry {
                files.push(path);
            }
        }
        Ok(files)
    }

    /// Get cache statistics
    pub async fn stats(&self) -> Result<CacheStats> {
        let now = Utc::now().timestamp_millis();
        let mut stats = CacheStats::default();

        for path in self.entry_files().await? {
            stats.total_entries += 1;
            if let Ok(meta) = fs::metadata(&path).await {
                stats.total_size_bytes += meta.len() as usize;
            }

            match Self::read_entry(&path).await {
                Some(entry) if !is_expired(entry.ts, now, self.ttl) => {
                    let ts = entry.ts;
                    stats.valid_entries += 1;
                    stats.oldest_entry = Some(stats.oldest_entry.map_or(ts, |o| o.min(ts)));
                    stats.newest_entry = Some(stats.newest_entry.map_or(ts, |n| n.max(ts)));
                }
                _ => stats.expired_entries += 1,
            }
        }

        Ok(stats)
    }

    /// Clear all cache entries
    pub async fn clear_all(&self) -> Result<ClearStats> {
        let mut entries_removed = 0;
        for path in self.entry_files().await? {
            fs::remove_file(&path).await.map_err(|e| {
                CacheError::Io(format!("Failed to remove {}: {}", path.display(), e))
            })?;
            entries_removed += 1;
        }
        Ok(ClearStats { entries_removed })
    }
}

#[async_trait]
impl CacheStore for FileCache {
    async fn get(&self, key: &str) -> Option<Value> {
        let path = self.entry_path(key);
        let entry = Self::read_entry(&path).await?;

        if is_expired(entry.ts, Utc::now().timestamp_millis(), self.ttl) {
            log::debug!("Cache entry expired: {}", key);
            if let Err(e) = fs::remove_file(&path).await {
                log::warn!("Failed to remove expired cache file {}: {}", path.display(), e);
            }
            return None;
        }

        Some(entry.value)
    }

    async fn set(&self, key: &str, value: &Value) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| CacheError::Io(format!("Failed to create cache dir: {}", e)))?;

        let entry = CacheEntry {
            value: value.clone(),
            ts: Utc::now().timestamp_millis(),
        };
        let data = serde_json::to_vec(&entry)?;

        fs::write(self.entry_path(key), data)
            .await
            .map_err(|e| CacheError::Io(format!("Failed to write cache entry: {}", e)))
    }
}

/// Statistics about cache clear operation
#[derive(Debug)]
pub struct ClearStats {
    pub entries_removed: usize,
}

/// Statistics about cache state
#[derive(Debug, Default)]
pub struct CacheStats {
    pub total_entries: usize,
    pub valid_entries: usize,
    /// Expired or unreadable entries
    pub expired_entries: usize,
    pub total_size_bytes: usize,
    /// Epoch milliseconds of the oldest live entry
    pub oldest_entry: Option<i64>,
    /// Epoch milliseconds of the newest live entry
    pub newest_entry: Option<i64>,
}
