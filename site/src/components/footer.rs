//! Closing footer: copyright line and legal links

use leptos::prelude::*;

/// Copyright line and legal links
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="flex flex-col gap-2 sm:flex-row py-6 w-full shrink-0 items-center px-4 md:px-6 border-t">
            <p class="text-xs text-gray-500 dark:text-gray-400">
                "© 2024 NotifMe. All rights reserved."
            </p>
            <nav class="sm:ml-auto flex gap-4 sm:gap-6">
                <a href="#" class="text-xs hover:underline underline-offset-4">"Terms of Service"</a>
                <a href="#" class="text-xs hover:underline underline-offset-4">"Privacy"</a>
            </nav>
        </footer>
    }
}
