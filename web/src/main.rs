use dioxus::prelude::*;

use ui::views::Dashboard;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Dashboard {},
}

const THEME_CSS: &str = ui::THEME_CSS;

fn main() {
    if let Err(err) = dioxus::logger::init(ui::config::config().log_level()) {
        eprintln!("[finsight] logger already initialized ({err})");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let brand = ui::config::config().brand.as_str();

    rsx! {
        // The theme ships inside the `ui` crate so web and desktop stay in sync.
        document::Title { "{brand}" }
        document::Style { "{THEME_CSS}" }

        Router::<Route> {}
    }
}
