// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Roving-highlight navigation over a dense item strip.
//!
//! All helpers operate on indices `0..len` plus a disabled predicate supplied
//! by the caller (typically backed by the per-render item registry). Disabled
//! items are skipped during stepwise movement; Home/End land on the nearest
//! enabled item from the respective edge. At the strip boundary movement
//! either clamps (stays put) or wraps to the opposite end when circular
//! navigation is enabled.

/// Bounds and policy for one navigation computation.
pub struct NavContext<'a> {
    /// Number of items in the strip.
    pub len: usize,
    /// Wrap at the boundaries instead of clamping.
    pub circular: bool,
    /// Whether the item at the given index is disabled.
    pub disabled: &'a dyn Fn(usize) -> bool,
}

impl core::fmt::Debug for NavContext<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NavContext")
            .field("len", &self.len)
            .field("circular", &self.circular)
            .finish_non_exhaustive()
    }
}

impl NavContext<'_> {
    fn enabled(&self, index: usize) -> bool {
        !(self.disabled)(index)
    }
}

/// Returns the first enabled index, scanning forward from the start.
#[must_use]
pub fn first_enabled(ctx: &NavContext<'_>) -> Option<usize> {
    (0..ctx.len).find(|&i| ctx.enabled(i))
}

/// Returns the last enabled index, scanning backward from the end.
#[must_use]
pub fn last_enabled(ctx: &NavContext<'_>) -> Option<usize> {
    (0..ctx.len).rev().find(|&i| ctx.enabled(i))
}

/// Moves the highlight one step forward or backward.
///
/// With no current highlight, a forward step targets the first enabled item
/// and a backward step the last. At the boundary the highlight stays on the
/// current item unless `ctx.circular` is set, in which case the scan wraps to
/// the opposite end. When every other item is disabled the highlight is
/// unchanged.
#[must_use]
pub fn step(ctx: &NavContext<'_>, current: Option<usize>, forward: bool) -> Option<usize> {
    if ctx.len == 0 {
        return None;
    }
    let Some(current) = current else {
        return if forward {
            first_enabled(ctx)
        } else {
            last_enabled(ctx)
        };
    };
    let current = current.min(ctx.len - 1);

    if forward {
        if let Some(next) = (current + 1..ctx.len).find(|&i| ctx.enabled(i)) {
            return Some(next);
        }
        if ctx.circular {
            if let Some(next) = (0..current).find(|&i| ctx.enabled(i)) {
                return Some(next);
            }
        }
    } else {
        if let Some(next) = (0..current).rev().find(|&i| ctx.enabled(i)) {
            return Some(next);
        }
        if ctx.circular {
            if let Some(next) = (current + 1..ctx.len).rev().find(|&i| ctx.enabled(i)) {
                return Some(next);
            }
        }
    }
    Some(current)
}

/// Computes the initial highlight when the menu opens.
///
/// Precedence: the configured default highlight (clamped), else the selected
/// item's index, else the first/last enabled item depending on the opening
/// gesture's direction (`offset` > 0 for a downward gesture, < 0 for upward,
/// 0 for direction-less opens such as a toggle click, which leave the
/// highlight unset).
#[must_use]
pub fn on_open<T: PartialEq>(
    ctx: &NavContext<'_>,
    default_highlighted_index: Option<usize>,
    selected_item: Option<&T>,
    items: &[T],
    offset: i8,
) -> Option<usize> {
    if let Some(default) = default_highlighted_index {
        return clamp(default, ctx.len);
    }
    if let Some(selected) = selected_item
        && let Some(index) = items.iter().position(|item| item == selected)
    {
        return Some(index);
    }
    match offset {
        1.. => first_enabled(ctx),
        ..=-1 => last_enabled(ctx),
        0 => None,
    }
}

/// Clamps an index into `[0, len)`, or `None` for an empty strip.
///
/// Out-of-range highlight requests are a common transient condition while the
/// item collection mutates, so they clamp silently instead of failing.
#[must_use]
pub fn clamp(index: usize, len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(index.min(len - 1))
    }
}
