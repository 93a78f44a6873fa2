//! Treadmill Path Simulation page using Yew.
//! Picks the runner style from the page URL and mounts the page.

use log::info;
use treadmill_path::components::Page;
use treadmill_path::config::LOG_LEVEL;
use treadmill_path::RunnerStyle;
use yew::prelude::*;

/// Query string of the page URL, empty when unavailable.
fn page_query() -> String {
    gloo_utils::window().location().search().unwrap_or_default()
}

/// Root component; the runner style is read once at mount.
#[function_component(App)]
fn app() -> Html {
    let runner_style = use_memo((), |_| {
        let style = RunnerStyle::from_query(&page_query());
        info!("Runner style: {:?}", style);
        style
    });

    html! { <Page runner_style={*runner_style} /> }
}

/// Entry point: installs logging and the panic hook, then renders the App.
fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(LOG_LEVEL));
    info!("Mounting treadmill path simulation");
    yew::Renderer::<App>::new().render();
}
