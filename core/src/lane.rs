// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Lane placement of multi-day schedules.
//!
//! Each week row has a fixed number of horizontal lanes. A schedule keeps one
//! lane on every day it is visible within a row, so its bar renders as a
//! continuous strip. When a schedule runs into the next row it keeps its lane
//! there too, as long as that lane is still free. When lanes run out, a
//! schedule is hidden on the contested days and still shown on the others.

use std::collections::{BTreeMap, HashMap};

use jiff::civil::Date;

use crate::grid::DAYS_PER_WEEK;
use crate::{Color, MonthGrid, ScheduleId, ScheduleSpan};

/// Default number of lanes shown per day.
pub const DEFAULT_MAX_VISIBLE_LANES: usize = 3;

/// A schedule occupying one lane of one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LaneSlot {
    /// The schedule drawn in this slot.
    pub schedule_id: ScheduleId,

    /// Whether the schedule text is drawn here. Only the first visible day of
    /// a bar within a week row carries the label.
    pub is_label_visible: bool,

    /// Bar color.
    pub color: Color,
}

/// The lanes of one day, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderCell {
    slots: Vec<Option<LaneSlot>>,
}

impl RenderCell {
    /// A cell with `lanes` empty lanes.
    #[must_use]
    pub fn empty(lanes: usize) -> Self {
        Self {
            slots: vec![None; lanes],
        }
    }

    /// All lanes, including empty spacers.
    #[must_use]
    pub fn slots(&self) -> &[Option<LaneSlot>] {
        &self.slots
    }

    /// The slot at `lane`, `None` if the lane is empty or out of range.
    #[must_use]
    pub fn lane(&self, lane: usize) -> Option<&LaneSlot> {
        self.slots.get(lane).and_then(Option::as_ref)
    }

    /// The lane holding `id` on this day.
    #[must_use]
    pub fn lane_of(&self, id: ScheduleId) -> Option<usize> {
        self.slots
            .iter()
            .position(|a| a.is_some_and(|slot| slot.schedule_id == id))
    }

    /// Whether any lane holds a schedule.
    #[must_use]
    pub fn has_schedules(&self) -> bool {
        self.slots.iter().any(Option::is_some)
    }

    /// Number of schedules drawn on this day.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|a| a.is_some()).count()
    }

    /// Whether no schedule is drawn on this day.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.has_schedules()
    }
}

/// Render cells of every day shown in a grid, padding included.
pub type RenderMap = BTreeMap<Date, RenderCell>;

/// Lanes chosen in earlier passes, keyed by week row and schedule.
///
/// Owned by one calendar surface. Clear it whenever the whole schedule list is
/// replaced, otherwise lanes of deleted schedules linger.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LaneCache {
    lanes: HashMap<(usize, ScheduleId), usize>,
}

impl LaneCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The lane recorded for `id` in week row `week`.
    #[must_use]
    pub fn get(&self, week: usize, id: ScheduleId) -> Option<usize> {
        self.lanes.get(&(week, id)).copied()
    }

    /// Records the lane of `id` in week row `week`.
    pub fn insert(&mut self, week: usize, id: ScheduleId, lane: usize) {
        self.lanes.insert((week, id), lane);
    }

    /// Forgets every recorded lane.
    pub fn clear(&mut self) {
        self.lanes.clear();
    }

    /// Number of recorded lanes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    /// Whether nothing is recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }
}

/// Places schedules into lanes for every week row of `grid`.
///
/// Schedules are handled in the given order, which breaks ties: when more
/// schedules overlap a day than there are lanes, earlier ones win. The usual
/// order is [`sort_schedules`](crate::sort_schedules). A schedule is placed in,
/// by preference, the lane recorded in `cache` for this row, the lane it held
/// in the previous row, or the lowest lane free on all its days in the row.
///
/// When no lane is free on all its days, the schedule takes the lane that
/// frees up earliest within its days and is hidden only on the days where
/// that lane is already taken. It keeps that one lane for the whole row and
/// is left out only if every lane is taken on every one of its days. The
/// label goes on the first day the schedule is actually shown in the row.
/// Padding days never host lanes.
///
/// # Panics
///
/// If `max_lanes` is zero.
pub fn assign_lanes(
    grid: &MonthGrid,
    schedules: &[ScheduleSpan],
    max_lanes: usize,
    cache: &mut LaneCache,
) -> RenderMap {
    assert!(max_lanes > 0, "at least one lane is required to place schedules");

    let mut map: RenderMap = grid
        .cells()
        .map(|a| (a.date(), RenderCell::empty(max_lanes)))
        .collect();

    let mut previous: HashMap<ScheduleId, usize> = HashMap::new();
    let (mut dropped, mut clipped) = (0_usize, 0_usize);
    for (index, week) in grid.weeks().iter().enumerate() {
        let cells = week.cells();
        if week.first_visible().is_none() {
            previous.clear();
            continue;
        }

        let mut occupied = vec![[false; DAYS_PER_WEEK]; max_lanes];
        let mut current = HashMap::new();
        for schedule in schedules {
            let columns: Vec<usize> = cells
                .iter()
                .enumerate()
                .filter(|(_, a)| !a.is_padding() && schedule.covers(a.date()))
                .map(|(i, _)| i)
                .collect();
            if columns.is_empty() {
                continue;
            }

            let id = schedule.id();
            let free = |lane: usize, column: usize| lane < max_lanes && !occupied[lane][column];
            let fits = |lane: usize| columns.iter().all(|&c| free(lane, c));
            let lane = cache
                .get(index, id)
                .filter(|&a| fits(a))
                .or_else(|| previous.get(&id).copied().filter(|&a| fits(a)))
                .or_else(|| (0..max_lanes).find(|&a| fits(a)))
                .or_else(|| {
                    // earliest free day first, then the lowest lane
                    (0..max_lanes)
                        .filter_map(|a| columns.iter().position(|&c| free(a, c)).map(|at| (at, a)))
                        .min()
                        .map(|(_, a)| a)
                });
            let Some(lane) = lane else {
                tracing::trace!(week = index, %id, "no free lane, schedule left out of the row");
                dropped += 1;
                continue;
            };

            let shown: Vec<usize> = columns
                .iter()
                .copied()
                .filter(|&c| !occupied[lane][c])
                .collect();
            if shown.len() < columns.len() {
                clipped += 1;
                tracing::trace!(
                    week = index,
                    %id,
                    lane,
                    hidden = columns.len() - shown.len(),
                    "lane taken on some days, schedule partly hidden"
                );
            } else {
                tracing::trace!(week = index, %id, lane, "placed schedule");
            }

            cache.insert(index, id, lane);
            current.insert(id, lane);
            for (i, &column) in shown.iter().enumerate() {
                occupied[lane][column] = true;

                let date = cells[column].date();
                if let Some(cell) = map.get_mut(&date) {
                    cell.slots[lane] = Some(LaneSlot {
                        schedule_id: id,
                        is_label_visible: i == 0,
                        color: schedule.color(),
                    });
                }
            }
        }
        previous = current;
    }

    tracing::debug!(
        month = %grid.month(),
        schedules = schedules.len(),
        dropped,
        clipped,
        "assigned lanes"
    );
    map
}

/// Lane assignment bound to one calendar surface, owning its cache.
#[derive(Debug, Clone)]
pub struct LaneAssigner {
    max_lanes: usize,
    cache: LaneCache,
}

impl LaneAssigner {
    /// Creates an assigner drawing up to `max_lanes` lanes per day.
    ///
    /// # Panics
    ///
    /// If `max_lanes` is zero.
    #[must_use]
    pub fn new(max_lanes: usize) -> Self {
        assert!(max_lanes > 0, "at least one lane is required to place schedules");
        Self {
            max_lanes,
            cache: LaneCache::new(),
        }
    }

    /// Number of lanes per day.
    #[must_use]
    pub fn max_lanes(&self) -> usize {
        self.max_lanes
    }

    /// The lanes recorded so far.
    #[must_use]
    pub fn cache(&self) -> &LaneCache {
        &self.cache
    }

    /// Re-renders `grid` with the same schedule list, reusing recorded lanes.
    pub fn assign(&mut self, grid: &MonthGrid, schedules: &[ScheduleSpan]) -> RenderMap {
        assign_lanes(grid, schedules, self.max_lanes, &mut self.cache)
    }

    /// Renders `grid` with a freshly submitted schedule list, dropping every
    /// recorded lane first.
    pub fn submit(&mut self, grid: &MonthGrid, schedules: &[ScheduleSpan]) -> RenderMap {
        self.cache.clear();
        self.assign(grid, schedules)
    }
}

impl Default for LaneAssigner {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_VISIBLE_LANES)
    }
}
