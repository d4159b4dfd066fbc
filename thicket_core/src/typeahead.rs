// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Type-ahead matching over item display projections.
//!
//! Printable keystrokes accumulate into a buffer; the buffer is matched
//! case-insensitively against item projections, scanning from just after the
//! current highlight and wrapping around once. Clearing the buffer after an
//! idle timeout is an environment concern: hosts schedule the flavor's
//! `FunctionClearKeysSoFar` action themselves.

use alloc::string::String;

/// Finds the first item whose projection starts with `prefix`,
/// case-insensitively.
///
/// The scan starts at the item after `start` (or at the first item when
/// `start` is `None`), wraps past the end, and visits every index exactly
/// once, so a buffer matching only the currently highlighted item re-selects
/// it last.
#[must_use]
pub fn find_match(
    prefix: &str,
    start: Option<usize>,
    len: usize,
    mut project: impl FnMut(usize) -> String,
) -> Option<usize> {
    if len == 0 || prefix.is_empty() {
        return None;
    }
    let prefix = prefix.to_lowercase();
    let first = start.map_or(0, |s| (s + 1) % len);
    (0..len)
        .map(|offset| (first + offset) % len)
        .find(|&index| project(index).to_lowercase().starts_with(&prefix))
}
