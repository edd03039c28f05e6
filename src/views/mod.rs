//! Page views. Each view is a typed model rendered through an askama template.

pub mod catalog;
pub mod detail;
pub mod pages;
pub mod shell;

use askama::Template;

pub use catalog::{CatalogView, DatasetCard};
pub use detail::{DatasetDetail, DetailView, NotFoundView};
pub use pages::{home_html, AboutPage, DocumentationPage};
pub use shell::{Features, Footer, Hero, Navbar};

/// Navbar, page body and footer: the markup mounted into the host page.
#[derive(Template)]
#[template(path = "app.html")]
pub struct AppLayout<'a> {
    navbar: String,
    content: &'a str,
    footer: String,
}

impl<'a> AppLayout<'a> {
    pub fn wrap(content: &'a str) -> askama::Result<String> {
        AppLayout {
            navbar: Navbar.render()?,
            content,
            footer: Footer.render()?,
        }
        .render()
    }
}
