//! Presentational primitives shared by the page sections.
//!
//! Every primitive takes an optional `class` override that is appended to
//! its base classes via [`cn`], so callers can restyle a single instance
//! (the highlighted pricing card, full-width buttons) without new variants.

mod button;
mod card;
mod navigation_menu;

pub use button::{Button, ButtonVariant, button_class};
pub use card::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};
pub use navigation_menu::{
    NavigationMenu, NavigationMenuItem, NavigationMenuLink, NavigationMenuList,
    navigation_menu_trigger_style,
};

/// Join class fragments with single spaces, skipping empty ones.
///
/// ```rust
/// use notifme_site::components::ui::cn;
///
/// assert_eq!(cn(&["rounded-lg border", "", "border-2"]), "rounded-lg border border-2");
/// ```
pub fn cn(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
