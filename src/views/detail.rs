//! Detail page for a single dataset, selected by id.

use askama::Template;

use crate::catalog::DatasetRecord;
use crate::views::catalog::records_label;

#[derive(Debug, Clone, PartialEq, Eq, Template)]
#[template(path = "detail.html")]
pub struct DatasetDetail {
    pub id: u32,
    pub icon: String,
    pub name: String,
    pub description: String,
    pub records_label: String,
    pub updated: String,
    pub updated_long: String,
    pub tags: Vec<String>,
}

impl From<&DatasetRecord> for DatasetDetail {
    fn from(record: &DatasetRecord) -> Self {
        Self {
            id: record.id,
            icon: record.icon.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            records_label: records_label(record.records),
            updated: record.updated.format("%Y-%m-%d").to_string(),
            updated_long: record.updated.format("%B %-d, %Y").to_string(),
            tags: record.tags.clone(),
        }
    }
}

/// Shown when a route or dataset id resolves to nothing.
#[derive(Debug, Clone, PartialEq, Eq, Template)]
#[template(path = "not_found.html")]
pub struct NotFoundView {
    pub heading: String,
    pub message: String,
    pub requested: String,
    pub for_dataset: bool,
}

impl NotFoundView {
    pub fn dataset(requested: impl Into<String>) -> Self {
        let requested = requested.into();
        Self {
            heading: "Dataset not found".to_string(),
            message: format!("No dataset matches id \"{requested}\"."),
            requested,
            for_dataset: true,
        }
    }

    pub fn page(path: impl Into<String>) -> Self {
        let requested = path.into();
        Self {
            heading: "Page not found".to_string(),
            message: "The page you are looking for does not exist.".to_string(),
            requested,
            for_dataset: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    Found(DatasetDetail),
    NotFound(NotFoundView),
}

impl DetailView {
    /// Exact match on `id`; a miss is a value, never a panic.
    pub fn lookup(id: u32, records: &[DatasetRecord]) -> Self {
        match records.iter().find(|record| record.id == id) {
            Some(record) => Self::Found(DatasetDetail::from(record)),
            None => Self::NotFound(NotFoundView::dataset(id.to_string())),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Found(detail) => &detail.name,
            Self::NotFound(view) => &view.heading,
        }
    }

    pub fn to_html(&self) -> askama::Result<String> {
        match self {
            Self::Found(detail) => detail.render(),
            Self::NotFound(view) => view.render(),
        }
    }
}
