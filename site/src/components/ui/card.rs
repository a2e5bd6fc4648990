//! Card container and its named slots

use super::cn;
use leptos::prelude::*;

const CARD: &str = "rounded-lg border bg-card text-card-foreground shadow-sm";
const CARD_HEADER: &str = "flex flex-col space-y-1.5 p-6";
const CARD_TITLE: &str = "text-2xl font-semibold leading-none tracking-tight";
const CARD_DESCRIPTION: &str = "text-sm text-muted-foreground";
const CARD_CONTENT: &str = "p-6 pt-0";
const CARD_FOOTER: &str = "flex items-center p-6 pt-0";

/// Outer card container
#[component]
pub fn Card(
    /// Extra classes appended to the card's base classes
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! { <div class=cn(&[CARD, class.as_str()])>{children()}</div> }
}

/// Header slot, stacks title and description
#[component]
pub fn CardHeader(
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! { <div class=cn(&[CARD_HEADER, class.as_str()])>{children()}</div> }
}

/// Card heading (`<h3>`)
#[component]
pub fn CardTitle(
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! { <h3 class=cn(&[CARD_TITLE, class.as_str()])>{children()}</h3> }
}

/// Muted supporting text under the title
#[component]
pub fn CardDescription(
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! { <p class=cn(&[CARD_DESCRIPTION, class.as_str()])>{children()}</p> }
}

/// Body slot
#[component]
pub fn CardContent(
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! { <div class=cn(&[CARD_CONTENT, class.as_str()])>{children()}</div> }
}

/// Action row at the bottom of the card
#[component]
pub fn CardFooter(
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! { <div class=cn(&[CARD_FOOTER, class.as_str()])>{children()}</div> }
}
