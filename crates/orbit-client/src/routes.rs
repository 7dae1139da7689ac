//! Application routes.

use yew_router::prelude::*;

/// Application routes, one per camera variant.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    /// Scroll journey through the solar system.
    #[at("/")]
    Home,
    /// Scroll journey whose look-at points sit on the planets.
    #[at("/advanced")]
    Advanced,
    /// Click-to-zoom view.
    #[at("/focus")]
    Focus,
    /// 404 Not Found.
    #[not_found]
    #[at("/404")]
    NotFound,
}
