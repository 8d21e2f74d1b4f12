// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;

use jiff::civil::Date;

use crate::RenderMap;

/// Dates whose render cell changed between two passes, in date order.
///
/// A date counts as changed when its cells differ by value or when only one
/// of the maps shows it.
#[must_use]
pub fn diff_render_maps(prev: &RenderMap, next: &RenderMap) -> Vec<Date> {
    let dates: BTreeSet<&Date> = prev.keys().chain(next.keys()).collect();
    dates
        .into_iter()
        .filter(|a| prev.get(*a) != next.get(*a))
        .copied()
        .collect()
}
