//! Durable persistence of the learned value table.

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::q_learning::q_table::QTable;

/// Default filename for the persisted table
pub const DEFAULT_TABLE_FILE: &str = "q_table.mpk";

/// File-backed store for a [`QTable`]
///
/// The table is written as MessagePack, which round-trips every f64 exactly.
/// `save` always rewrites the whole file; there is no incremental mode.
#[derive(Debug, Clone)]
pub struct TableStore {
    path: PathBuf,
}

impl TableStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Serialize the full table, overwriting any prior version
    pub fn save(&self, table: &QTable) -> Result<()> {
        let file = File::create(&self.path)
            .with_context(|| format!("Failed to create file: {}", self.path.display()))?;
        let mut writer = BufWriter::new(file);

        rmp_serde::encode::write(&mut writer, table).context("Failed to serialize Q-table")?;

        Ok(())
    }

    /// Deserialize the persisted table
    pub fn load(&self) -> Result<QTable> {
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open file: {}", self.path.display()))?;
        let reader = BufReader::new(file);

        rmp_serde::decode::from_read(reader).context("Failed to deserialize Q-table")
    }

    /// Load the table if the file exists; `Ok(None)` when it is absent, so
    /// the caller can fall back to training from scratch.
    pub fn try_load(&self) -> Result<Option<QTable>> {
        if !self.exists() {
            return Ok(None);
        }
        self.load().map(Some)
    }
}
