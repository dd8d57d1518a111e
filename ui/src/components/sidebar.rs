use dioxus::prelude::*;

use crate::config::config;

struct NavItem {
    icon: &'static str,
    label: &'static str,
    active: bool,
}

struct NavSection {
    title: &'static str,
    items: &'static [NavItem],
}

const NAV: &[NavSection] = &[
    NavSection {
        title: "Overview",
        items: &[
            NavItem { icon: "⌂", label: "Dashboard", active: true },
            NavItem { icon: "▥", label: "Analytics", active: false },
            NavItem { icon: "◔", label: "Reports", active: false },
        ],
    },
    NavSection {
        title: "Finance",
        items: &[
            NavItem { icon: "▣", label: "Accounts", active: false },
            NavItem { icon: "∿", label: "Transactions", active: false },
        ],
    },
    NavSection {
        title: "System",
        items: &[
            NavItem { icon: "◉", label: "Notifications", active: false },
            NavItem { icon: "☺", label: "Profile", active: false },
            NavItem { icon: "⚙", label: "Settings", active: false },
        ],
    },
];

/// Static navigation rail; routing between views belongs to the host page.
#[component]
pub fn Sidebar() -> Element {
    let settings = config();

    rsx! {
        aside { class: "sidebar",
            div { class: "sidebar__brand",
                span { class: "sidebar__brand-mark", aria_hidden: "true" }
                div {
                    p { class: "sidebar__brand-name", "{settings.brand}" }
                    p { class: "sidebar__brand-tagline", "{settings.tagline}" }
                }
            }

            nav { class: "sidebar__nav",
                for section in NAV.iter() {
                    div { key: "{section.title}", class: "sidebar__section",
                        p { class: "sidebar__section-title", "{section.title}" }
                        ul { class: "sidebar__items",
                            for item in section.items.iter() {
                                li { key: "{item.label}",
                                    button {
                                        r#type: "button",
                                        class: format!(
                                            "sidebar__item {}",
                                            if item.active { "sidebar__item--active" } else { "" }
                                        ),
                                        span { class: "sidebar__item-main",
                                            span { class: "sidebar__item-icon", "{item.icon}" }
                                            span { class: "sidebar__item-label", "{item.label}" }
                                        }
                                        span { class: "sidebar__item-chevron", "›" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "sidebar__upgrade",
                p { class: "sidebar__upgrade-title", "Pro Plan" }
                p { class: "sidebar__upgrade-copy", "Unlock advanced analytics and real-time insights." }
                button { r#type: "button", class: "button button--primary sidebar__upgrade-button", "Upgrade" }
            }
        }
    }
}
