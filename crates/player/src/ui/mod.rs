use dioxus::prelude::*;

pub mod presentation;

use presentation::components::common::ToastList;
use presentation::components::form_response::FormResponsePage;
use presentation::services::use_services;
use presentation::state::ToastState;

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/player/src/main.rs`).
    let services = use_services();

    // Signals must be created inside an active Dioxus runtime.
    use_context_provider(ToastState::new);

    rsx! {
        div {
            style: "width: 100vw; height: 100vh; overflow: auto;",
            FormResponsePage { unique_url: services.unique_url.clone() }
            ToastList {}
        }
    }
}
