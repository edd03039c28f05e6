//! Content pages that sit around the catalog: home, about and documentation.

use askama::Template;

use crate::views::shell::{Features, Hero};

/// Landing page body: hero banner followed by the feature grid.
pub fn home_html() -> askama::Result<String> {
    Ok(format!("{}\n{}", Hero.render()?, Features::new().render()?))
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutPage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiEndpoint {
    pub path: &'static str,
    pub params: Option<&'static str>,
}

impl ApiEndpoint {
    const fn new(path: &'static str) -> Self {
        Self { path, params: None }
    }

    const fn with_params(path: &'static str, params: &'static str) -> Self {
        Self {
            path,
            params: Some(params),
        }
    }

    pub fn params_label(&self) -> &'static str {
        self.params.unwrap_or("None")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiGroup {
    pub name: &'static str,
    pub endpoints: &'static [ApiEndpoint],
}

pub const API_REFERENCE: &[ApiGroup] = &[
    ApiGroup {
        name: "Service",
        endpoints: &[ApiEndpoint::new("/"), ApiEndpoint::new("/health"), ApiEndpoint::new("/api/docs")],
    },
    ApiGroup {
        name: "Medals",
        endpoints: &[
            ApiEndpoint::with_params("/api/medals/top-countries", "top_n (optional, default=10)"),
            ApiEndpoint::with_params("/api/medals/country/<noc>", "year (optional)"),
            ApiEndpoint::with_params("/api/medals/rankings", "year (required), season (optional)"),
        ],
    },
    ApiGroup {
        name: "Athletes",
        endpoints: &[
            ApiEndpoint::with_params("/api/athletes/top-decorated", "top_n (optional)"),
            ApiEndpoint::new("/api/athletes/youngest-oldest"),
            ApiEndpoint::new("/api/athletes/most-experienced"),
            ApiEndpoint::new("/api/athletes/comebacks"),
            ApiEndpoint::new("/api/athletes/one-hit-wonders"),
            ApiEndpoint::new("/api/athletes/age-defying"),
            ApiEndpoint::new("/api/athletes/crossover"),
        ],
    },
    ApiGroup {
        name: "Sports",
        endpoints: &[
            ApiEndpoint::with_params("/api/sports/physical-stats", "sport (optional)"),
            ApiEndpoint::new("/api/sports/evolution"),
            ApiEndpoint::new("/api/sports/extinct"),
            ApiEndpoint::new("/api/sports/monopoly"),
            ApiEndpoint::new("/api/sports/dominant/<sport>"),
            ApiEndpoint::new("/api/sports/participation"),
            ApiEndpoint::new("/api/sports/dropout-rate"),
        ],
    },
    ApiGroup {
        name: "Countries",
        endpoints: &[
            ApiEndpoint::new("/api/countries/participation-growth"),
            ApiEndpoint::new("/api/countries/underdog"),
            ApiEndpoint::new("/api/countries/consistent"),
            ApiEndpoint::new("/api/countries/medal-droughts"),
            ApiEndpoint::with_params("/api/countries/conversion-rate", "year (required), season (optional)"),
            ApiEndpoint::new("/api/countries/small-success"),
        ],
    },
    ApiGroup {
        name: "Demographics",
        endpoints: &[
            ApiEndpoint::new("/api/demographics/gender-trend"),
            ApiEndpoint::new("/api/demographics/gender-parity"),
            ApiEndpoint::new("/api/demographics/gender-by-sport"),
        ],
    },
    ApiGroup {
        name: "Insights",
        endpoints: &[
            ApiEndpoint::new("/api/insights/bmi-analysis"),
            ApiEndpoint::new("/api/insights/physical-evolution/<sport>"),
            ApiEndpoint::new("/api/insights/age-sweet-spot"),
            ApiEndpoint::new("/api/insights/gold-rush"),
            ApiEndpoint::new("/api/insights/boycott-impact"),
        ],
    },
    ApiGroup {
        name: "Names",
        endpoints: &[
            ApiEndpoint::new("/api/names/common"),
            ApiEndpoint::new("/api/names/lucky"),
            ApiEndpoint::new("/api/names/family-legacies"),
            ApiEndpoint::new("/api/names/trends"),
        ],
    },
    ApiGroup {
        name: "Search",
        endpoints: &[
            ApiEndpoint::with_params("/api/search/athlete", "name (required)"),
            ApiEndpoint::with_params("/api/search/sport", "sport (required)"),
        ],
    },
];

#[derive(Template)]
#[template(path = "documentation.html")]
pub struct DocumentationPage {
    groups: &'static [ApiGroup],
}

impl DocumentationPage {
    pub fn new() -> Self {
        Self {
            groups: API_REFERENCE,
        }
    }
}

impl Default for DocumentationPage {
    fn default() -> Self {
        Self::new()
    }
}
