//! Weekly-hour demand decomposition.
//!
//! Each (class, subject) pair owes `weekly_hours` lesson slots per week.
//! The decomposer splits that obligation into placeable blocks — as many
//! double slots as fit, then a trailing single — and the request builder
//! flattens every pair's blocks into the global, sorted placement list
//! the batch engine consumes.

use serde::{Deserialize, Serialize};

use crate::models::{Class, Subject};

/// Splits a weekly hour count into block lengths, doubles first.
///
/// The policy is fixed: maximize 2-slot blocks, never longer, with at
/// most one trailing single. `5 → [2, 2, 1]`, `4 → [2, 2]`, `1 → [1]`.
pub fn decompose_weekly_hours(weekly_hours: u32) -> Vec<u32> {
    let mut blocks = Vec::with_capacity(weekly_hours.div_ceil(2) as usize);
    let mut remaining = weekly_hours;
    while remaining >= 2 {
        blocks.push(2);
        remaining -= 2;
    }
    if remaining == 1 {
        blocks.push(1);
    }
    blocks
}

/// One pending block placement for a (class, subject) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementRequest {
    /// Receiving class.
    pub class_id: String,
    /// Demanded subject.
    pub subject_id: String,
    /// Consecutive slots this block occupies (1 or 2).
    pub block_len: u32,
}

/// Builds the global placement list for all (class, subject) pairs.
///
/// Blocks are flattened across every pair, then stable-sorted by block
/// length descending so the harder-to-fit doubles are attempted first;
/// between equal lengths the class/subject enumeration order is kept.
pub fn build_requests(classes: &[Class], subjects: &[Subject]) -> Vec<PlacementRequest> {
    let mut requests = Vec::new();
    for class in classes {
        for subject in subjects {
            for block_len in decompose_weekly_hours(subject.weekly_hours) {
                requests.push(PlacementRequest {
                    class_id: class.id.clone(),
                    subject_id: subject.id.clone(),
                    block_len,
                });
            }
        }
    }
    requests.sort_by(|a, b| b.block_len.cmp(&a.block_len));
    requests
}
