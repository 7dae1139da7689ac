//! Command processing system.
//!
//! Processes commands from the JavaScript/WASM interface.

use std::sync::Arc;

use bevy::prelude::*;

use crate::bevy::{
    ActiveConfig, ActiveWaypoints, CommandQueue, FocusCamera, OrbitCommand, ScrollCamera,
    ScrollProxyRes, StateStores, ViewMode, WaypointsLoadedEvent,
};
use crate::config::{CameraVariant, ViewConfig};
use crate::error::OrbitError;
use crate::focus::FocusTarget;
use crate::navigation::{NavIntent, NavigationShell};
use crate::progress::{progress_from_scroll, section_progress};
use crate::tracker::SectionPolicy;
use crate::waypoint::{CameraPose, WaypointTable};

/// System to process all commands from the external command queue.
///
/// Handles commands until a Yield is encountered.
/// Commands after Yield are processed in the next frame.
///
/// Mode changes only apply at the next state transition, so commands later in
/// the same batch see the mode they were queued behind. A focus request queued
/// behind `InitFocus` is held until the focus camera is mounted.
#[allow(clippy::too_many_arguments)]
#[allow(clippy::needless_pass_by_value)]
pub fn process_commands(
    command_queue: Res<CommandQueue>,
    mode: Res<State<ViewMode>>,
    mut next_mode: ResMut<NextState<ViewMode>>,
    mut waypoints: ResMut<ActiveWaypoints>,
    mut config: ResMut<ActiveConfig>,
    mut proxy: ResMut<ScrollProxyRes>,
    mut scroll_cameras: Query<&mut ScrollCamera>,
    mut focus_cameras: Query<&mut FocusCamera>,
    state_stores: Res<StateStores>,
    mut loaded_events: MessageWriter<WaypointsLoadedEvent>,
    mut held_focus: Local<Option<FocusTarget>>,
) {
    if *mode.get() == ViewMode::Focus
        && !focus_cameras.is_empty()
        && let Some(target) = held_focus.take()
    {
        tracing::info!("[command] applying focus held until mount");
        for mut camera in &mut focus_cameras {
            camera.0.focus_on(target);
        }
    }

    let mut pending_mode: Option<ViewMode> = None;

    for command in command_queue.drain_until_yield() {
        let current_mode = pending_mode.unwrap_or(*mode.get());
        match command {
            OrbitCommand::InitScroll { config: view } => {
                tracing::info!("[command] InitScroll");
                *held_focus = None;
                mount_view(view, CameraVariant::Scroll, &mut waypoints, &mut config, &state_stores, &mut loaded_events);
                proxy.0.set_raw(0.0);
                next_mode.set(ViewMode::Scroll);
                pending_mode = Some(ViewMode::Scroll);
            }
            OrbitCommand::InitFocus { config: view } => {
                tracing::info!("[command] InitFocus");
                mount_view(view, CameraVariant::Focus, &mut waypoints, &mut config, &state_stores, &mut loaded_events);
                next_mode.set(ViewMode::Focus);
                pending_mode = Some(ViewMode::Focus);
            }
            OrbitCommand::ClearMode => {
                tracing::info!("[command] ClearMode (was {:?})", current_mode);
                *held_focus = None;
                next_mode.set(ViewMode::Idle);
                pending_mode = Some(ViewMode::Idle);
            }
            OrbitCommand::SetProgress { progress } => {
                proxy.0.set_raw(progress);
            }
            OrbitCommand::SetScroll {
                scroll_top,
                scroll_height,
                viewport_height,
            } => match progress_from_scroll(scroll_top, scroll_height, viewport_height) {
                Some(progress) => proxy.0.set_raw(progress),
                None => tracing::debug!("[command] SetScroll ignored: content does not scroll"),
            },
            OrbitCommand::GotoSection { index } => {
                let target = NavigationShell::new(waypoints.0.len()).resolve(0, NavIntent::Goto(index));
                tracing::info!("[command] GotoSection: {} -> {}", index, target);
                request_section(&mut proxy, target, waypoints.0.len(), &config);
            }
            OrbitCommand::Navigate { intent } => {
                let len = waypoints.0.len();
                let from = navigation_origin(&proxy, &scroll_cameras, len);
                let target = NavigationShell::new(len).resolve(from, intent);
                tracing::info!("[command] Navigate {:?}: {} -> {}", intent, from, target);
                request_section(&mut proxy, target, len, &config);
            }
            OrbitCommand::JumpToSection { index } => {
                tracing::info!("[command] JumpToSection: {}", index);
                let len = waypoints.0.len();
                let mut progress = section_progress(index, len);
                for mut camera in &mut scroll_cameras {
                    camera.0.jump_to_section(index);
                    progress = camera.0.progress();
                }
                proxy.0.set_raw(progress);
            }
            OrbitCommand::Focus { target } => {
                if current_mode != ViewMode::Focus {
                    tracing::warn!("[command] Focus ignored outside the focus view");
                    continue;
                }
                // A remount is pending: the current focus camera is about to go.
                if *mode.get() != ViewMode::Focus || pending_mode.is_some() {
                    *held_focus = Some(target);
                    continue;
                }
                for mut camera in &mut focus_cameras {
                    camera.0.focus_on(target);
                }
            }
            OrbitCommand::ReleaseFocus => {
                *held_focus = None;
                for mut camera in &mut focus_cameras {
                    camera.0.release();
                }
            }
            OrbitCommand::LoadWaypoints { waypoints: value } => {
                let (table, fallback) = table_or_fallback(WaypointTable::from_value(value));
                let table = Arc::new(table);
                tracing::info!("[command] LoadWaypoints: {} waypoints", table.len());

                waypoints.0 = Arc::clone(&table);
                for mut camera in &mut scroll_cameras {
                    camera.0.replace_table(Arc::clone(&table));
                }
                proxy.0.set_raw(0.0);
                state_stores.navigation.set_waypoints(&table);
                loaded_events.write(WaypointsLoadedEvent {
                    count: table.len(),
                    fallback,
                });
            }
            // Yield is consumed by drain_until_yield(), should not reach here
            OrbitCommand::Yield => {}
        }
    }
}

/// Installs the table and tuning of a view about to be mounted.
fn mount_view(
    view: ViewConfig,
    variant: CameraVariant,
    waypoints: &mut ActiveWaypoints,
    config: &mut ActiveConfig,
    state_stores: &StateStores,
    loaded_events: &mut MessageWriter<WaypointsLoadedEvent>,
) {
    let (table, fallback) = table_or_fallback(view.try_waypoint_table());
    *waypoints = ActiveWaypoints::new(table);
    config.0 = view.camera;
    config.0.variant = variant;

    state_stores.navigation.set_waypoints(&waypoints.0);
    loaded_events.write(WaypointsLoadedEvent {
        count: waypoints.0.len(),
        fallback,
    });
}

/// Logs a rejected table and substitutes the stationary fallback pose.
fn table_or_fallback(result: Result<WaypointTable, OrbitError>) -> (WaypointTable, bool) {
    match result {
        Ok(table) => (table, false),
        Err(e) => {
            tracing::error!("[command] waypoints rejected, using fallback pose: {e}");
            (WaypointTable::stationary(CameraPose::fallback()), true)
        }
    }
}

/// Section that relative navigation starts from.
///
/// While a smooth scroll is in flight its destination counts, so repeated
/// presses keep advancing instead of re-targeting the same section.
fn navigation_origin(proxy: &ScrollProxyRes, cameras: &Query<&mut ScrollCamera>, len: usize) -> usize {
    if let Some(pending) = proxy.0.pending_target() {
        let segment = crate::progress::map_progress(pending, len);
        return SectionPolicy::Nearest.active_index(pending, &segment, len);
    }
    cameras
        .iter()
        .next()
        .map_or(0, |camera| camera.0.active_section())
}

fn request_section(proxy: &mut ScrollProxyRes, index: usize, len: usize, config: &ActiveConfig) {
    proxy
        .0
        .request(section_progress(index, len), config.0.transition_duration, config.0.easing);
}
