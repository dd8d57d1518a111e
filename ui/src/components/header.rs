use dioxus::prelude::*;

/// Top bar: search, theme toggle, notifications and the signed-in user chip.
///
/// `dark` is owned by the page shell so the theme class lands on the root.
#[component]
pub fn Header(dark: Signal<bool>) -> Element {
    let mut query = use_signal(String::new);
    let mut dark = dark;
    let theme_icon = if dark() { "☀" } else { "☾" };

    rsx! {
        header { class: "header",
            div { class: "header__search",
                span { class: "header__search-icon", aria_hidden: "true", "⌕" }
                input {
                    class: "header__search-input",
                    placeholder: "Search analytics, accounts, transactions...",
                    value: "{query()}",
                    oninput: move |evt| query.set(evt.value()),
                }
            }

            div { class: "header__actions",
                button {
                    r#type: "button",
                    class: "header__icon-button",
                    aria_label: "Toggle theme",
                    onclick: move |_| {
                        let current = *dark.peek();
                        dark.set(!current);
                    },
                    "{theme_icon}"
                }
                button {
                    r#type: "button",
                    class: "header__icon-button",
                    aria_label: "Notifications",
                    "🔔"
                }
                div { class: "header__user",
                    span { class: "header__avatar", "AM" }
                    span { class: "header__user-name", "Alex Morgan" }
                    span { class: "header__user-chevron", "⌄" }
                }
            }
        }
    }
}
