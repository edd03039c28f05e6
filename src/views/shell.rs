//! Static page chrome: navbar, hero banner, feature grid and footer.
//! None of these read the catalog; each renders the same markup every time.

use askama::Template;

#[derive(Template)]
#[template(path = "shell/navbar.html")]
pub struct Navbar;

#[derive(Template)]
#[template(path = "shell/hero.html")]
pub struct Hero;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    pub emoji: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const FEATURE_CARDS: [FeatureCard; 4] = [
    FeatureCard {
        emoji: "📊",
        title: "Data Analysis",
        body: "Get clean and structured insights extracted using Python and Pandas.",
    },
    FeatureCard {
        emoji: "🔗",
        title: "RESTful APIs",
        body: "Access insights through fast and reliable JSON API endpoints.",
    },
    FeatureCard {
        emoji: "📘",
        title: "Unified schema",
        body: "Consistent, typed responses across endpoints",
    },
    FeatureCard {
        emoji: "🔐",
        title: "Secure",
        body: "API keys, rate limits, and audit logs included",
    },
];

#[derive(Template)]
#[template(path = "shell/features.html")]
pub struct Features {
    cards: &'static [FeatureCard],
}

impl Features {
    pub fn new() -> Self {
        Self {
            cards: &FEATURE_CARDS,
        }
    }
}

impl Default for Features {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Template)]
#[template(path = "shell/footer.html")]
pub struct Footer;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_has_brand_and_three_links() {
        let html = Navbar.render().unwrap();
        assert!(html.contains("DARA"));
        assert_eq!(html.matches("<li>").count(), 3);
        for label in ["Home", "Datasets", "About"] {
            assert!(html.contains(label), "missing nav label {label}");
        }
        assert!(!html.contains("active"));
    }

    #[test]
    fn hero_has_single_call_to_action() {
        let html = Hero.render().unwrap();
        assert!(html.contains("Data API Platform"));
        assert_eq!(html.matches("class=\"btn btn-primary\"").count(), 1);
        assert!(html.contains("Get started"));
    }

    #[test]
    fn feature_grid_renders_four_cards_in_order() {
        let html = Features::new().render().unwrap();
        assert_eq!(html.matches("class=\"feature-card\"").count(), 4);
        let positions: Vec<usize> = FEATURE_CARDS
            .iter()
            .map(|card| html.find(card.title).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn footer_carries_credit_line() {
        let html = Footer.render().unwrap();
        assert!(html.contains("2025 Data Analysis &amp; API Platform"));
        assert!(html.contains("Team: Sumit | Pratham | Samarth"));
    }
}
