//! "Choose Your Plan" section: three plan cards, Pro highlighted

use super::PRICING_ANCHOR;
use super::ui::{
    Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
};
use leptos::prelude::*;

/// Class override that sets the recommended plan apart
pub const HIGHLIGHT_CLASS: &str = "border-2 border-primary";

/// Plan grid, target of `#pricing`
#[component]
pub fn Pricing() -> impl IntoView {
    view! {
        <section id=PRICING_ANCHOR class="w-full py-12 md:py-24 lg:py-32">
            <div class="container px-4 md:px-6">
                <div class="flex flex-col items-center justify-center space-y-4 text-center">
                    <div class="space-y-2">
                        <div class="inline-block rounded-lg bg-gray-100 px-3 py-1 text-sm dark:bg-gray-800">
                            "Pricing"
                        </div>
                        <h2 class="text-3xl font-bold tracking-tighter sm:text-5xl">"Choose Your Plan"</h2>
                        <p class="max-w-[900px] text-gray-500 md:text-xl/relaxed lg:text-base/relaxed xl:text-xl/relaxed dark:text-gray-400">
                            "We offer flexible pricing plans to fit your needs."
                        </p>
                    </div>
                </div>
                <div class="mx-auto grid max-w-5xl items-start gap-6 py-12 lg:grid-cols-3 lg:gap-12">
                    <Card>
                        <CardHeader>
                            <CardTitle>"Basic"</CardTitle>
                            <CardDescription>"For small businesses and startups."</CardDescription>
                        </CardHeader>
                        <CardContent class="space-y-4">
                            <div class="text-4xl font-bold">"$49/mo"</div>
                            <ul class="space-y-2 text-sm text-gray-500 dark:text-gray-400">
                                <li>"AI-Powered Automation"</li>
                                <li>"Basic Data Analysis"</li>
                                <li>"Email Support"</li>
                            </ul>
                        </CardContent>
                        <CardFooter>
                            <Button class="w-full">"Choose Plan"</Button>
                        </CardFooter>
                    </Card>
                    <Card class=HIGHLIGHT_CLASS>
                        <CardHeader>
                            <CardTitle>"Pro"</CardTitle>
                            <CardDescription>"For growing businesses."</CardDescription>
                        </CardHeader>
                        <CardContent class="space-y-4">
                            <div class="text-4xl font-bold">"$99/mo"</div>
                            <ul class="space-y-2 text-sm text-gray-500 dark:text-gray-400">
                                <li>"Everything in Basic"</li>
                                <li>"Advanced Data Analysis"</li>
                                <li>"Priority Support"</li>
                            </ul>
                        </CardContent>
                        <CardFooter>
                            <Button class="w-full">"Choose Plan"</Button>
                        </CardFooter>
                    </Card>
                    <Card>
                        <CardHeader>
                            <CardTitle>"Enterprise"</CardTitle>
                            <CardDescription>"For large-scale deployments."</CardDescription>
                        </CardHeader>
                        <CardContent class="space-y-4">
                            <div class="text-4xl font-bold">"Contact Us"</div>
                            <ul class="space-y-2 text-sm text-gray-500 dark:text-gray-400">
                                <li>"Everything in Pro"</li>
                                <li>"Custom AI Models"</li>
                                <li>"Dedicated Account Manager"</li>
                            </ul>
                        </CardContent>
                        <CardFooter>
                            <Button class="w-full">"Contact Us"</Button>
                        </CardFooter>
                    </Card>
                </div>
            </div>
        </section>
    }
}
