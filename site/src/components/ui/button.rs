//! Button primitive. Renders no action; callers wire none.

use super::cn;
use leptos::prelude::*;

const BUTTON_BASE: &str = "inline-flex items-center justify-center whitespace-nowrap rounded-md text-sm font-medium ring-offset-background transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 disabled:pointer-events-none disabled:opacity-50 h-10 px-4 py-2";

/// Visual style of a [`Button`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Solid primary fill
    #[default]
    Default,
    /// Bordered, transparent background
    Outline,
}

impl ButtonVariant {
    fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Default => "bg-primary text-primary-foreground hover:bg-primary/90",
            ButtonVariant::Outline => {
                "border border-input bg-background hover:bg-accent hover:text-accent-foreground"
            }
        }
    }
}

/// Full class string for a variant, for anchors styled as buttons.
pub fn button_class(variant: ButtonVariant) -> String {
    cn(&[BUTTON_BASE, variant.classes()])
}

/// Styled `<button type="button">`
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    /// Extra classes appended after the variant classes
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <button type="button" class=cn(&[button_class(variant).as_str(), class.as_str()])>
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_plain_button_with_label() {
        let html = view! { <Button class="w-full">"Choose Plan"</Button> }.to_html();

        assert!(html.starts_with(r#"<button type="button""#));
        assert!(html.contains("bg-primary text-primary-foreground"));
        assert!(html.contains(r#"hover:bg-primary/90 w-full""#));
        assert!(html.contains(">Choose Plan</button>"));
        assert!(!html.contains("onclick"));
    }

    #[test]
    fn outline_variant_swaps_fill() {
        let class = button_class(ButtonVariant::Outline);

        assert!(class.starts_with(BUTTON_BASE));
        assert!(class.contains("border-input"));
        assert!(!class.contains("bg-primary"));
    }
}
