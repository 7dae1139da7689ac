//! Main application component.

use orbit_core::CameraConfig;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{FocusView, ScrollView};
use crate::hooks::OrbitProvider;
use crate::routes::Route;

/// Canvas element the engine renders into.
pub const ORBIT_CANVAS_ID: &str = "orbit-canvas";

/// Route switch function.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <ScrollView camera={CameraConfig::scroll()} /> },
        Route::Advanced => html! { <ScrollView camera={CameraConfig::advanced()} /> },
        Route::Focus => html! { <FocusView /> },
        Route::NotFound => html! {
            <main style="position: relative; z-index: 1; padding: 2rem;">
                <h1>{ "Lost in space" }</h1>
                <Link<Route> to={Route::Home}>{ "Back to the sun" }</Link<Route>>
            </main>
        },
    }
}

/// Links between the camera variants.
#[function_component(VariantNav)]
fn variant_nav() -> Html {
    let link_style = "color: inherit; margin-left: 1rem;";
    html! {
        <header style="position: fixed; top: 16px; right: 24px; z-index: 3; font-size: 0.9rem;">
            <Link<Route> to={Route::Home} classes="variant-link">
                <span style={link_style}>{ "Journey" }</span>
            </Link<Route>>
            <Link<Route> to={Route::Advanced} classes="variant-link">
                <span style={link_style}>{ "Deep space" }</span>
            </Link<Route>>
            <Link<Route> to={Route::Focus} classes="variant-link">
                <span style={link_style}>{ "Explore" }</span>
            </Link<Route>>
        </header>
    }
}

/// Root application component with router.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <OrbitProvider canvas_id={ORBIT_CANVAS_ID}>
                <VariantNav />
                <Switch<Route> render={switch} />
            </OrbitProvider>
        </BrowserRouter>
    }
}
