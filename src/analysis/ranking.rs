//! Global section ranking.

use std::cmp::Reverse;

use crate::model::{RankedSection, ScoredSection};

/// Order every scored page by descending score and assign dense ranks.
///
/// The sort is stable, so equal scores keep their discovery order (document
/// scan order, then page order). No other tie-breaker is applied.
pub fn rank_sections(mut sections: Vec<ScoredSection>) -> Vec<RankedSection> {
    sections.sort_by_key(|s| Reverse(s.score));
    sections
        .into_iter()
        .zip(1u32..)
        .map(|(section, rank)| section.into_ranked(rank))
        .collect()
}
