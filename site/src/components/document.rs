//! Root document component - the complete HTML page

use super::{Features, Footer, Hero, Menu, Pricing};
use crate::SiteAssets;
use crate::styles::{SITE_CSS, TAILWIND_CONFIG};
use leptos::prelude::*;

/// The complete HTML document: head assets around [`Page`]
#[component]
pub fn SiteDocument(assets: SiteAssets) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{assets.title.clone()}</title>
                <TailwindScripts src=assets.tailwind_script />
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <Page />
            </body>
        </html>
    }
}

/// Landing page layout: menu header, main sections, footer
#[component]
pub fn Page() -> impl IntoView {
    view! {
        <div class="flex flex-col min-h-screen">
            <header class="px-4 lg:px-6 h-14 flex items-center">
                <Menu />
            </header>
            <main class="flex-1">
                <Hero />
                <Features />
                <Pricing />
            </main>
            <Footer />
        </div>
    }
}

/// Tailwind runtime plus its theme config (only when a runtime is configured)
#[component]
fn TailwindScripts(src: String) -> impl IntoView {
    let enabled = !src.is_empty();

    view! {
        {enabled.then(|| view! {
            <script src=src.clone()></script>
            <script>{TAILWIND_CONFIG}</script>
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn page_wraps_sections_in_header_main_footer() {
        let html = view! { <Page /> }.to_html();

        let header_end = html.find("</header>").expect("header");
        let main_start = html.find("<main").expect("main");
        let main_end = html.find("</main>").expect("main close");
        let footer = html.find("<footer").expect("footer");

        assert!(html[..header_end].contains(r#"aria-label="Main""#));
        assert!(header_end < main_start);
        assert!(html[main_start..main_end].contains(r#"id="pricing""#));
        assert!(main_end < footer);
    }

    #[test]
    fn head_carries_config_only_with_runtime() {
        let with_runtime = view! {
            <SiteDocument assets=SiteAssets::default() />
        }
        .to_html();
        assert!(with_runtime.contains("tailwind.config"));

        let assets = SiteAssets {
            tailwind_script: String::new(),
            ..Default::default()
        };
        let offline = view! { <SiteDocument assets=assets /> }.to_html();
        assert!(!offline.contains("tailwind.config"));
        assert!(offline.contains("--primary"));
    }
}
