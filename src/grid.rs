//! Weekly time grid construction.
//!
//! Expands a school's bell schedule into the ordered sequence of
//! lesson-start labels for one day. The same grid is replayed on every
//! active weekday; the lunch window is carved out during construction so
//! no emitted slot intersects it.
//!
//! # Algorithm
//!
//! A cursor walks from the daily start time in session-length steps.
//! Each candidate slot `[cursor, cursor + session)` is checked against
//! the day end (the sole termination condition) and against the lunch
//! window: any overlap jumps the cursor to the end of lunch without
//! emitting. Arithmetic is done in minutes since midnight, so labels
//! never wrap past the end of the day.

use chrono::{NaiveTime, Timelike};

use crate::models::SchoolConfig;

/// The ordered daily slot labels plus the slot length they share.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    slots: Vec<NaiveTime>,
    slot_minutes: u32,
}

impl TimeGrid {
    /// Builds the daily grid for a school configuration.
    ///
    /// Returns an empty grid when any of the four time fields is missing
    /// or the session length is zero; an empty grid signals an
    /// unschedulable configuration to the caller.
    pub fn build(config: &SchoolConfig) -> Self {
        let slot_minutes = config.session_minutes;
        let (start, end, lunch_start, lunch_end) = match (
            config.start_time,
            config.end_time,
            config.lunch_start,
            config.lunch_end,
        ) {
            (Some(s), Some(e), Some(ls), Some(le)) if slot_minutes > 0 => (s, e, ls, le),
            _ => {
                return Self {
                    slots: Vec::new(),
                    slot_minutes,
                }
            }
        };

        let end_m = minute_of_day(end);
        let lunch_start_m = minute_of_day(lunch_start);
        let lunch_end_m = minute_of_day(lunch_end);

        let mut slots = Vec::new();
        let mut cursor = minute_of_day(start);
        loop {
            let candidate_end = cursor + slot_minutes;
            if candidate_end > end_m {
                break;
            }
            // Half-open overlap with [lunch_start, lunch_end); also
            // catches a candidate strictly containing a zero-length
            // lunch point.
            if cursor < lunch_end_m && candidate_end > lunch_start_m {
                cursor = lunch_end_m;
                continue;
            }
            match slot_label(cursor) {
                Some(label) => slots.push(label),
                None => break,
            }
            cursor += slot_minutes;
        }

        Self { slots, slot_minutes }
    }

    /// The ordered slot-start labels.
    pub fn slots(&self) -> &[NaiveTime] {
        &self.slots
    }

    /// Number of slots per day.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the grid has no slots (unschedulable configuration).
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot length in minutes.
    pub fn slot_minutes(&self) -> u32 {
        self.slot_minutes
    }

    /// The label at a slot index.
    pub fn slot_at(&self, index: usize) -> Option<NaiveTime> {
        self.slots.get(index).copied()
    }

    /// The index of a slot label.
    pub fn index_of(&self, slot: NaiveTime) -> Option<usize> {
        self.slots.iter().position(|&s| s == slot)
    }

    /// Whether `block_len` slots starting at `start_index` are contiguous
    /// in time (each exactly one session after its predecessor).
    ///
    /// Grid-adjacent slots on either side of the lunch window are not
    /// contiguous, so a multi-slot block can never straddle lunch.
    pub fn is_contiguous(&self, start_index: usize, block_len: usize) -> bool {
        if block_len == 0 || start_index + block_len > self.slots.len() {
            return false;
        }
        self.slots[start_index..start_index + block_len]
            .windows(2)
            .all(|pair| minute_of_day(pair[1]) - minute_of_day(pair[0]) == self.slot_minutes)
    }
}

fn minute_of_day(t: NaiveTime) -> u32 {
    t.num_seconds_from_midnight() / 60
}

fn slot_label(minute: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(minute / 60, minute % 60, 0)
}
