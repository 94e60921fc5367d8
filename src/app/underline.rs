use leptos::prelude::*;

use crate::widgets::UnderlineColor;

/// Text with a highlighter bar drawn behind its lower half.
#[component]
pub fn UnderlineText(
    #[prop(into)] text: String,
    #[prop(optional, into)] color: UnderlineColor,
    #[prop(default = "8px")] thickness: &'static str,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <span class=format!("relative {class}")>
            <span class="relative z-10">{text}</span>
            <span
                class=format!("absolute bottom-0 left-0 w-full {} -z-10", color.bg_class())
                style=format!("height: {thickness}")
            />
        </span>
    }
}
