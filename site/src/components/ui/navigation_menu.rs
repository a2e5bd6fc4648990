//! Navigation menu primitives: `<nav>` → `<ul>` → `<li>` → `<a>`.
//!
//! Links are plain anchors. There is no routing and no active-state tracking.

use super::cn;
use leptos::prelude::*;

const MENU: &str = "relative z-10 flex max-w-max flex-1 items-center justify-center";
const MENU_LIST: &str = "group flex flex-1 list-none items-center justify-center space-x-1";
const MENU_LINK: &str = "select-none no-underline outline-none";
const MENU_TRIGGER: &str = "group inline-flex h-10 w-max items-center justify-center rounded-md bg-background px-4 py-2 text-sm font-medium transition-colors hover:bg-accent hover:text-accent-foreground focus:bg-accent focus:text-accent-foreground focus:outline-none disabled:pointer-events-none disabled:opacity-50";

/// Class string that makes a link look like a menu trigger.
pub fn navigation_menu_trigger_style() -> &'static str {
    MENU_TRIGGER
}

/// Landmark wrapper labelled "Main"
#[component]
pub fn NavigationMenu(
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <nav aria-label="Main" class=cn(&[MENU, class.as_str()])>
            {children()}
        </nav>
    }
}

/// `<ul>` of menu items
#[component]
pub fn NavigationMenuList(
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! { <ul class=cn(&[MENU_LIST, class.as_str()])>{children()}</ul> }
}

/// One `<li>` entry
#[component]
pub fn NavigationMenuItem(children: Children) -> impl IntoView {
    view! { <li>{children()}</li> }
}

/// Static anchor link
#[component]
pub fn NavigationMenuLink(
    /// Link target, usually an in-page fragment like `#features`
    #[prop(into)]
    href: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href class=cn(&[MENU_LINK, class.as_str()])>
            {children()}
        </a>
    }
}
