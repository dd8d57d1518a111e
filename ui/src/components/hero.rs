use dioxus::prelude::*;

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "hero",
            div { class: "hero__glow", aria_hidden: "true" }
            div { class: "hero__content",
                p { class: "hero__eyebrow", "Premium Credit Insights" }
                h2 { class: "hero__title", "Real-time Spend Analysis" }
            }
        }
    }
}
