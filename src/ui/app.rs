use dioxus::desktop::{Config as DioxusConfig, LogicalSize, WindowBuilder};
use dioxus::prelude::*;

use crate::ui::components::MovieSearch;
use crate::ui::search_context::SearchContextProvider;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

pub fn make_config() -> DioxusConfig {
    DioxusConfig::default().with_window(make_window())
}

fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("reelgrid")
        .with_inner_size(LogicalSize::new(1000, 800))
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        SearchContextProvider {
            MovieSearch {}
        }
    }
}
