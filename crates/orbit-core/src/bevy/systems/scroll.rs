//! Scroll proxy systems.

use bevy::prelude::*;

use crate::bevy::ScrollProxyRes;

/// Advances a running smooth scroll.
///
/// Only touches the resource while a transition runs, so an idle proxy does
/// not register as changed.
pub fn advance_scroll_proxy(time: Res<Time>, mut proxy: ResMut<ScrollProxyRes>) {
    if proxy.0.is_transitioning() {
        proxy.0.advance(time.delta_secs());
    }
}
