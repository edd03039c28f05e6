//! Dataset catalog: the ordered, read-only list of dataset descriptors shown by the site.
//! The default catalog is embedded from data/datasets.json; a replacement file can be loaded at startup.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const BUILTIN_CATALOG: &str = include_str!("../../data/datasets.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetRecord {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Row count of the underlying dataset.
    pub records: u64,
    pub updated: NaiveDate,
    pub icon: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    datasets: Vec<DatasetRecord>,
}

#[derive(Serialize)]
struct CatalogFileRef<'a> {
    datasets: &'a [DatasetRecord],
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid catalog json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate dataset id {0}")]
    DuplicateId(u32),

    #[error("dataset {id} has an empty {field}")]
    EmptyField { id: u32, field: &'static str },
}

/// Immutable, ordered dataset list. Clones share the same records.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    records: Arc<[DatasetRecord]>,
}

impl DatasetStore {
    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self, StoreError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let store = Self::from_json(&raw)?;
        tracing::info!(path = %path.display(), datasets = store.len(), "loaded catalog");
        Ok(store)
    }

    pub fn from_json(raw: &str) -> Result<Self, StoreError> {
        let parsed: CatalogFile = serde_json::from_str(raw)?;
        Self::from_records(parsed.datasets)
    }

    /// Builds a store, rejecting duplicate ids and blank titles or descriptions.
    pub fn from_records(records: Vec<DatasetRecord>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(StoreError::DuplicateId(record.id));
            }
            if record.name.trim().is_empty() {
                return Err(StoreError::EmptyField {
                    id: record.id,
                    field: "name",
                });
            }
            if record.description.trim().is_empty() {
                return Err(StoreError::EmptyField {
                    id: record.id,
                    field: "description",
                });
            }
        }
        Ok(Self {
            records: records.into(),
        })
    }

    pub fn empty() -> Self {
        Self {
            records: Arc::from(Vec::new()),
        }
    }

    /// Every record, in display order.
    pub fn all(&self) -> &[DatasetRecord] {
        &self.records
    }

    pub fn get(&self, id: u32) -> Option<&DatasetRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&CatalogFileRef {
            datasets: self.all(),
        })
    }
}

/// Formats a row count with thousands separators, e.g. `271116` -> `271,116`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
