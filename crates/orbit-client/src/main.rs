//! Orbit-Folio Client
//!
//! Yew WASM host page for the scroll-driven camera.
//!
//! The page owns no camera logic: it turns scroll, keyboard, touch and click
//! input into commands for `orbit-core` and renders the navigation summary the
//! engine publishes. Build with `trunk build` for `wasm32-unknown-unknown`.

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod content;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod hooks;
#[cfg(target_arch = "wasm32")]
mod routes;

#[cfg(target_arch = "wasm32")]
fn main() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{EnvFilter, Layer};
    use tracing_web::MakeWebConsoleWriter;

    console_error_panic_hook::set_once();

    let filter = EnvFilter::new("info,orbit_core=debug,wgpu=error,naga=warn");

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();

    yew::Renderer::<app::App>::new().render();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("orbit-client only runs in the browser. Use: trunk serve (target wasm32-unknown-unknown)");
}
