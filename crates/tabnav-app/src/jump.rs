//! Spatial jump resolver.
//!
//! Orders the qualifying document windows along the axis of the requested
//! direction and steps one slot from the active window, wrapping around at
//! either end.

use tabnav_core::prelude::*;
use tabnav_core::{qualifying_windows, Axis, Direction, DocumentWindow, WindowId};

/// Qualifying windows sorted ascending along `axis`.
///
/// The sort is stable, so windows sharing a coordinate keep host order.
pub fn order_along(axis: Axis, windows: &[DocumentWindow]) -> Vec<&DocumentWindow> {
    let mut ordered = qualifying_windows(windows);
    match axis {
        Axis::Horizontal => ordered.sort_by_key(|w| w.position.left),
        Axis::Vertical => ordered.sort_by_key(|w| w.position.top),
    }
    ordered
}

/// Window to activate when jumping `direction` away from `current`.
///
/// Returns `None` when there are no qualifying windows or when `current`
/// is not one of them (focus on a tool window, for instance).
pub fn resolve(
    direction: Direction,
    windows: &[DocumentWindow],
    current: Option<WindowId>,
) -> Option<WindowId> {
    let ordered = order_along(direction.axis(), windows);
    if ordered.is_empty() {
        trace!("Jump {:?}: no document windows", direction);
        return None;
    }

    let current = current?;
    let Some(index) = ordered.iter().position(|w| w.id == current) else {
        debug!(
            "Jump {:?}: active window {} is not a navigable document",
            direction, current
        );
        return None;
    };

    let len = ordered.len() as isize;
    let next = (index as isize + direction.step()).rem_euclid(len) as usize;
    Some(ordered[next].id)
}
