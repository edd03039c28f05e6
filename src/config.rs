//! Site configuration: where the catalog, host page and static assets come from.
//! Values arrive from CLI flags, each with an environment variable fallback.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::app::{App, HostPage};
use crate::catalog::DatasetStore;
use crate::error::SiteError;

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_PUBLIC_DIR: &str = "public";

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub bind: SocketAddr,
    /// JSON catalog file; the embedded catalog when unset.
    pub catalog: Option<PathBuf>,
    /// Host document with the `#root` container; the embedded index.html when unset.
    pub host_page: Option<PathBuf>,
    pub public_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            catalog: None,
            host_page: None,
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
        }
    }
}

impl SiteConfig {
    pub fn load_store(&self) -> Result<DatasetStore, SiteError> {
        let store = match &self.catalog {
            Some(path) => DatasetStore::load(path)?,
            None => DatasetStore::builtin()?,
        };
        Ok(store)
    }

    pub fn load_host_page(&self) -> Result<HostPage, SiteError> {
        let host = match &self.host_page {
            Some(path) => HostPage::load(path)?,
            None => HostPage::builtin()?,
        };
        Ok(host)
    }

    /// Fails if the catalog is invalid or the host page has no root container.
    pub fn build_app(&self) -> Result<App, SiteError> {
        let store = self.load_store()?;
        let host = self.load_host_page()?;
        tracing::debug!(datasets = store.len(), "site configured");
        Ok(App::new(store, host))
    }
}
