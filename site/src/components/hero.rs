//! Introductory section: headline, tagline and two calls to action

use super::ui::{ButtonVariant, button_class};
use super::{FEATURES_ANCHOR, HERO_ANCHOR, PRICING_ANCHOR, anchor_href};
use leptos::prelude::*;

/// Headline section above the feature grid
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id=HERO_ANCHOR class="w-full py-12 md:py-24 lg:py-32 xl:py-48">
            <div class="container px-4 md:px-6">
                <div class="flex flex-col items-center space-y-4 text-center">
                    <div class="space-y-2">
                        <h1 class="text-3xl font-bold tracking-tighter sm:text-4xl md:text-5xl lg:text-6xl/none">
                            "Unlock the Power of AI for Your Business"
                        </h1>
                        <p class="mx-auto max-w-[700px] text-gray-500 md:text-xl dark:text-gray-400">
                            "NotifMe brings automation, insight and personal touch to every customer interaction. "
                            "Spend less time on busywork and more time growing."
                        </p>
                    </div>
                    <div class="space-x-4">
                        <a href=anchor_href(PRICING_ANCHOR) class=button_class(ButtonVariant::Default)>
                            "Get Started"
                        </a>
                        <a href=anchor_href(FEATURES_ANCHOR) class=button_class(ButtonVariant::Outline)>
                            "Learn More"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
