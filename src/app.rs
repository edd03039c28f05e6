//! Application shell: route resolution, page composition and mounting into the host page.

use std::cell::Cell;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use askama::Template;
use axum::http::StatusCode;
use lol_html::errors::RewritingError;
use lol_html::html_content::{ContentType, EndTag};
use lol_html::{element, rewrite_str, EndTagHandler, RewriteStrSettings};
use thiserror::Error;

use crate::catalog::DatasetStore;
use crate::error::SiteError;
use crate::views::{
    home_html, AboutPage, AppLayout, CatalogView, DetailView, DocumentationPage, NotFoundView,
};

pub const SITE_NAME: &str = "DARA";

const BUILTIN_HOST_PAGE: &str = include_str!("../index.html");

#[derive(Debug, Error)]
pub enum MountError {
    #[error("root container not found in host page (expected an element with id=\"root\")")]
    RootNotFound,

    #[error("failed to read host page: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to rewrite host page: {0}")]
    Rewrite(#[from] RewritingError),
}

/// Host document holding a live `#root` element.
#[derive(Debug, Clone)]
pub struct HostPage {
    html: String,
}

impl HostPage {
    pub fn builtin() -> Result<Self, MountError> {
        Self::parse(BUILTIN_HOST_PAGE)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, MountError> {
        let raw = fs::read_to_string(path)?;
        Self::parse(&raw)
    }

    /// Rejects pages whose only `root` ids sit in comments, scripts or `<template>` content.
    pub fn parse(html: &str) -> Result<Self, MountError> {
        let (_, mounted) = rewrite_host(html, "", None)?;
        if !mounted {
            return Err(MountError::RootNotFound);
        }
        Ok(Self {
            html: html.to_string(),
        })
    }

    /// Places `body` at the start of the first root container and sets `<title>` when the host has one.
    pub fn mount(&self, title: &str, body: &str) -> Result<String, MountError> {
        let (html, mounted) = rewrite_host(&self.html, body, Some(title))?;
        if !mounted {
            return Err(MountError::RootNotFound);
        }
        Ok(html)
    }
}

fn rewrite_host(html: &str, body: &str, title: Option<&str>) -> Result<(String, bool), MountError> {
    let template_depth = Rc::new(Cell::new(0_usize));
    let opener = Rc::clone(&template_depth);
    let mut mounted = false;

    let mut handlers = vec![
        element!("template", move |el| {
            let closer = Rc::clone(&opener);
            let on_close: EndTagHandler<'static> = Box::new(move |_end: &mut EndTag<'_>| {
                closer.set(closer.get().saturating_sub(1));
                Ok(())
            });
            let registered = el.on_end_tag(on_close);
            if registered.is_ok() {
                opener.set(opener.get() + 1);
            }
            Ok(())
        }),
        element!("#root", |el| {
            if !mounted && template_depth.get() == 0 {
                el.prepend(body, ContentType::Html);
                mounted = true;
            }
            Ok(())
        }),
    ];
    if let Some(title) = title {
        handlers.push(element!("title", move |el| {
            el.set_inner_content(title, ContentType::Text);
            Ok(())
        }));
    }

    let output = rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: handlers,
            ..RewriteStrSettings::default()
        },
    )?;
    Ok((output, mounted))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Datasets,
    /// Raw path segment; parsed as an id at render time.
    Dataset(String),
    About,
    Documentation,
    Missing(String),
}

impl Route {
    /// Query strings, fragments and trailing slashes are ignored.
    pub fn parse(path: &str) -> Self {
        let path = path
            .split(|c: char| c == '?' || c == '#')
            .next()
            .unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|seg| !seg.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Home,
            ["datasets"] => Self::Datasets,
            ["datasets", id] => Self::Dataset((*id).to_string()),
            ["about"] => Self::About,
            ["documentation"] => Self::Documentation,
            _ => Self::Missing(path.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Datasets => "/datasets".to_string(),
            Self::Dataset(id) => format!("/datasets/{id}"),
            Self::About => "/about".to_string(),
            Self::Documentation => "/documentation".to_string(),
            Self::Missing(path) => path.clone(),
        }
    }
}

/// Only canonical ids: ASCII digits, no sign, no leading zeros.
pub fn parse_dataset_id(raw: &str) -> Option<u32> {
    let canonical = !raw.is_empty()
        && raw.bytes().all(|b| b.is_ascii_digit())
        && (raw == "0" || !raw.starts_with('0'));
    if !canonical {
        return None;
    }
    raw.parse().ok()
}

#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub status: StatusCode,
    pub title: String,
    pub html: String,
}

/// Catalog plus host page: everything needed to render any route.
#[derive(Debug, Clone)]
pub struct App {
    store: DatasetStore,
    host: HostPage,
}

impl App {
    pub fn new(store: DatasetStore, host: HostPage) -> Self {
        Self { store, host }
    }

    pub fn builtin() -> Result<Self, SiteError> {
        Ok(Self::new(DatasetStore::builtin()?, HostPage::builtin()?))
    }

    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    pub fn render(&self, route: &Route) -> Result<RenderedPage, SiteError> {
        let (status, title, content) = match route {
            Route::Home => (StatusCode::OK, None, home_html()?),
            Route::Datasets => {
                let view = CatalogView::new(self.store.all());
                (StatusCode::OK, Some("Datasets".to_string()), view.render()?)
            }
            Route::Dataset(raw) => {
                let view = match parse_dataset_id(raw) {
                    Some(id) => DetailView::lookup(id, self.store.all()),
                    None => DetailView::NotFound(NotFoundView::dataset(raw.as_str())),
                };
                let status = if view.is_found() {
                    StatusCode::OK
                } else {
                    tracing::debug!(requested = %raw, "dataset not found");
                    StatusCode::NOT_FOUND
                };
                (status, Some(view.title().to_string()), view.to_html()?)
            }
            Route::About => (StatusCode::OK, Some("About".to_string()), AboutPage.render()?),
            Route::Documentation => (
                StatusCode::OK,
                Some("Documentation".to_string()),
                DocumentationPage::new().render()?,
            ),
            Route::Missing(path) => {
                let view = NotFoundView::page(path.as_str());
                (StatusCode::NOT_FOUND, Some(view.heading.clone()), view.render()?)
            }
        };

        let title = match title {
            Some(title) => format!("{title} - {SITE_NAME}"),
            None => SITE_NAME.to_string(),
        };
        let body = AppLayout::wrap(&content)?;
        let html = self.host.mount(&title, &body)?;
        Ok(RenderedPage {
            status,
            title,
            html,
        })
    }

    /// Every page reachable from the navigation, one detail page per dataset.
    pub fn site_routes(&self) -> Vec<Route> {
        let mut routes = vec![Route::Home, Route::Datasets];
        routes.extend(
            self.store
                .all()
                .iter()
                .map(|record| Route::Dataset(record.id.to_string())),
        );
        routes.push(Route::About);
        routes.push(Route::Documentation);
        routes
    }
}
