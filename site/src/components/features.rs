//! "What We Offer" section: three feature cards

use super::FEATURES_ANCHOR;
use super::ui::{Card, CardDescription, CardHeader, CardTitle};
use leptos::prelude::*;

/// Feature grid, target of `#features`
#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id=FEATURES_ANCHOR class="w-full py-12 md:py-24 lg:py-32 bg-gray-100 dark:bg-gray-800">
            <div class="container px-4 md:px-6">
                <div class="flex flex-col items-center justify-center space-y-4 text-center">
                    <div class="space-y-2">
                        <div class="inline-block rounded-lg bg-gray-100 px-3 py-1 text-sm dark:bg-gray-800">
                            "Key Features"
                        </div>
                        <h2 class="text-3xl font-bold tracking-tighter sm:text-5xl">"What We Offer"</h2>
                        <p class="max-w-[900px] text-gray-500 md:text-xl/relaxed lg:text-base/relaxed xl:text-xl/relaxed dark:text-gray-400">
                            "Our AI-powered solutions are designed to help you achieve your business goals."
                        </p>
                    </div>
                </div>
                <div class="mx-auto grid max-w-5xl items-center gap-6 py-12 lg:grid-cols-3 lg:gap-12">
                    <Card>
                        <CardHeader>
                            <CardTitle>"AI-Powered Automation"</CardTitle>
                            <CardDescription>
                                "Automate repetitive tasks and workflows to free up your team for more strategic work."
                            </CardDescription>
                        </CardHeader>
                    </Card>
                    <Card>
                        <CardHeader>
                            <CardTitle>"Data Analysis & Insights"</CardTitle>
                            <CardDescription>
                                "Gain valuable insights from your data to make better business decisions."
                            </CardDescription>
                        </CardHeader>
                    </Card>
                    <Card>
                        <CardHeader>
                            <CardTitle>"Personalized Customer Experiences"</CardTitle>
                            <CardDescription>
                                "Deliver personalized experiences to your customers to increase engagement and loyalty."
                            </CardDescription>
                        </CardHeader>
                    </Card>
                </div>
            </div>
        </section>
    }
}
