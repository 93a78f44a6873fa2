#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use treadmill_path::components::{RunnerProps, StickFigure};
use treadmill_path::config::STRIDE_INTERVAL_MS;
use treadmill_path::hooks::live_stride_timers;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::Element;

wasm_bindgen_test_configure!(run_in_browser);

fn frame(root: &Element) -> Option<String> {
    root.query_selector("svg.stick-figure")
        .ok()
        .flatten()
        .and_then(|svg| svg.get_attribute("data-frame"))
}

#[wasm_bindgen_test]
async fn stride_timer_lives_exactly_as_long_as_the_figure() {
    let root = gloo_utils::document().create_element("div").unwrap();
    gloo_utils::body().append_child(&root).unwrap();
    assert_eq!(live_stride_timers(), 0);

    let handle = yew::Renderer::<StickFigure>::with_root_and_props(
        root.clone(),
        RunnerProps { speed: 5.2 },
    )
    .render();

    // Let the first render and its effects run.
    TimeoutFuture::new(20).await;
    assert_eq!(live_stride_timers(), 1);
    assert_eq!(frame(&root).as_deref(), Some("0"));

    TimeoutFuture::new(STRIDE_INTERVAL_MS + 100).await;
    assert_eq!(frame(&root).as_deref(), Some("1"));

    handle.destroy();
    TimeoutFuture::new(20).await;
    assert_eq!(live_stride_timers(), 0);

    // No tick may reach the unmounted figure.
    TimeoutFuture::new(STRIDE_INTERVAL_MS * 2).await;
    assert_eq!(live_stride_timers(), 0);
    assert_eq!(frame(&root), None);
}
