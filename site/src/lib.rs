//! # notifme-site
//!
//! Leptos SSR renderer for the NotifMe landing page.
//!
//! The page is a tree of small presentational components (cards, buttons,
//! a navigation menu) composed into a hero, a feature grid, a pricing grid
//! and a footer. Rendering is a pure function: the same [`SiteAssets`]
//! always yield the same bytes.
//!
//! ## Quick Start
//!
//! ```rust
//! use notifme_site::{render_page, SiteAssets};
//!
//! let html = render_page(&SiteAssets::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains(r#"id="pricing""#));
//! ```
//!
//! ## Architecture
//!
//! - [`components`] - Leptos UI components (primitives in [`components::ui`])
//! - [`styles`] - CSS and Tailwind theme constants
//!
//! ## Leptos 0.8 SSR
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <Page /> };
//! let html: String = view.to_html();
//! ```
//!
//! No reactive runtime or hydration is needed - pure static HTML generation.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod styles;

use components::SiteDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use serde::Deserialize;

/// Render the complete landing page as an HTML document.
///
/// The result starts with `<!DOCTYPE html>` and is suitable for writing
/// straight to `index.html`.
///
/// # Example
///
/// ```rust
/// use notifme_site::{render_page, SiteAssets};
///
/// let assets = SiteAssets {
///     title: "Preview".into(),
///     ..Default::default()
/// };
/// let html = render_page(&assets);
/// assert!(html.contains("<title>Preview</title>"));
/// ```
pub fn render_page(assets: &SiteAssets) -> String {
    let doc = view! { <SiteDocument assets=assets.clone() /> };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Tailwind Play CDN runtime; compiles the utility classes in the browser.
pub const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// Document-level settings that do not change the page content.
///
/// Deserializes from a TOML table; missing keys fall back to
/// [`SiteAssets::default`].
///
/// ```rust
/// use notifme_site::SiteAssets;
///
/// // Offline build: no runtime script, inline base stylesheet only
/// let assets = SiteAssets {
///     tailwind_script: String::new(),
///     ..Default::default()
/// };
/// # let _ = assets;
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteAssets {
    /// Document `<title>`
    pub title: String,
    /// `src` of the Tailwind runtime script; empty omits it
    pub tailwind_script: String,
}

impl Default for SiteAssets {
    fn default() -> Self {
        Self {
            title: "NotifMe".into(),
            tailwind_script: TAILWIND_CDN.into(),
        }
    }
}
