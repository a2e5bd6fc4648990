//! Top navigation: two in-page links

use super::ui::{
    NavigationMenu, NavigationMenuItem, NavigationMenuLink, NavigationMenuList,
    navigation_menu_trigger_style,
};
use super::{FEATURES_ANCHOR, PRICING_ANCHOR, anchor_href};
use leptos::prelude::*;

/// "Features" and "Pricing" links for the page header
#[component]
pub fn Menu() -> impl IntoView {
    view! {
        <NavigationMenu>
            <NavigationMenuList>
                <NavigationMenuItem>
                    <NavigationMenuLink
                        href=anchor_href(FEATURES_ANCHOR)
                        class=navigation_menu_trigger_style()
                    >
                        "Features"
                    </NavigationMenuLink>
                </NavigationMenuItem>
                <NavigationMenuItem>
                    <NavigationMenuLink
                        href=anchor_href(PRICING_ANCHOR)
                        class=navigation_menu_trigger_style()
                    >
                        "Pricing"
                    </NavigationMenuLink>
                </NavigationMenuItem>
            </NavigationMenuList>
        </NavigationMenu>
    }
}
