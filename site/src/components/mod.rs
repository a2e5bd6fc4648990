//! Leptos UI components for the landing page.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument
//! └── Page
//!     ├── header
//!     │   └── Menu (NavigationMenu → two links)
//!     ├── main
//!     │   ├── Hero
//!     │   ├── Features (3 × Card)
//!     │   └── Pricing (3 × Card + Button)
//!     └── Footer
//! ```
//!
//! Sections take no props. The in-page anchors are shared constants so the
//! menu links and the section ids cannot drift apart.

pub mod ui;

mod document;
mod features;
mod footer;
mod hero;
mod menu;
mod pricing;

pub use document::{Page, SiteDocument};
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use menu::Menu;
pub use pricing::Pricing;

/// Element id of the hero section
pub const HERO_ANCHOR: &str = "hero";
/// Element id of the features section, target of the "Features" menu link
pub const FEATURES_ANCHOR: &str = "features";
/// Element id of the pricing section, target of the "Pricing" menu link
pub const PRICING_ANCHOR: &str = "pricing";

/// `#fragment` href for an element id.
pub fn anchor_href(id: &str) -> String {
    format!("#{}", id)
}
