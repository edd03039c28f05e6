//! Catalog page: one summary card per dataset, in store order.

use askama::Template;

use crate::catalog::{format_count, DatasetRecord};

/// Card shown in the dataset grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetCard {
    pub id: u32,
    pub icon: String,
    pub name: String,
    pub description: String,
    pub records_label: String,
    pub updated: String,
    pub tags: Vec<String>,
}

impl From<&DatasetRecord> for DatasetCard {
    fn from(record: &DatasetRecord) -> Self {
        Self {
            id: record.id,
            icon: record.icon.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            records_label: records_label(record.records),
            updated: record.updated.format("%Y-%m-%d").to_string(),
            tags: record.tags.clone(),
        }
    }
}

#[derive(Debug, Clone, Template)]
#[template(path = "catalog.html")]
pub struct CatalogView {
    pub cards: Vec<DatasetCard>,
    pub summary: String,
}

impl CatalogView {
    /// No filtering or sorting: the grid mirrors the slice it is given.
    pub fn new(records: &[DatasetRecord]) -> Self {
        Self {
            cards: records.iter().map(DatasetCard::from).collect(),
            summary: summary_label(records.len()),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

fn counted(count: u64, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("1 {singular}")
    } else {
        format!("{} {plural}", format_count(count))
    }
}

pub(crate) fn records_label(count: u64) -> String {
    counted(count, "record", "records")
}

fn summary_label(cards: usize) -> String {
    format!("{} available", counted(cards as u64, "dataset", "datasets"))
}
