//! Static export: every route rendered to `<out>/<path>/index.html`, plus the public assets.

use std::fs;
use std::path::{Path, PathBuf};

use crate::app::{App, Route};
use crate::error::SiteError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub pages: usize,
    pub assets: usize,
}

pub fn build_site(app: &App, public_dir: &Path, out_dir: &Path) -> Result<BuildReport, SiteError> {
    fs::create_dir_all(out_dir)?;
    let mut report = BuildReport::default();

    for route in app.site_routes() {
        let page = app.render(&route)?;
        let target = page_path(out_dir, &route);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, page.html)?;
        tracing::debug!(path = %target.display(), "wrote page");
        report.pages += 1;
    }

    let not_found = app.render(&Route::Missing(String::new()))?;
    fs::write(out_dir.join("404.html"), not_found.html)?;
    report.pages += 1;

    if public_dir.is_dir() {
        report.assets = copy_dir(public_dir, &out_dir.join("public"))?;
    } else {
        tracing::warn!(dir = %public_dir.display(), "public directory missing, skipping assets");
    }

    tracing::info!(
        pages = report.pages,
        assets = report.assets,
        out = %out_dir.display(),
        "site build complete"
    );
    Ok(report)
}

fn page_path(out_dir: &Path, route: &Route) -> PathBuf {
    let path = route.path();
    let relative = path.trim_matches('/');
    if relative.is_empty() {
        out_dir.join("index.html")
    } else {
        out_dir.join(relative).join("index.html")
    }
}

fn copy_dir(from: &Path, to: &Path) -> Result<usize, SiteError> {
    fs::create_dir_all(to)?;
    let mut copied = 0;
    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let source = entry.path();
        let target = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copied += copy_dir(&source, &target)?;
        } else {
            fs::copy(&source, &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}
