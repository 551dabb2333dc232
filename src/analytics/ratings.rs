//! Mean review score by delivery timeliness.

use serde::Serialize;

use crate::models::OrderRecord;

#[derive(Debug, Clone, Serialize)]
pub struct RatingByTimeliness {
    pub delivered_on_time: bool,
    pub mean_score: f64,
    pub review_count: u64,
}

/// Arithmetic mean of `review_score` per on-time flag. Records missing
/// either the flag or the score are skipped; a group with no records
/// yields no row, so the result has at most two rows, ordered
/// late-then-on-time.
pub fn mean_score_by_timeliness(records: &[OrderRecord]) -> Vec<RatingByTimeliness> {
    // (sum, count) for [late, on_time]
    let mut groups = [(0.0f64, 0u64); 2];

    for rec in records {
        let (Some(on_time), Some(score)) = (rec.delivered_on_time, rec.review_score) else {
            continue;
        };
        let g = &mut groups[on_time as usize];
        g.0 += score;
        g.1 += 1;
    }

    [false, true]
        .into_iter()
        .filter_map(|flag| {
            let (sum, count) = groups[flag as usize];
            (count > 0).then(|| RatingByTimeliness {
                delivered_on_time: flag,
                mean_score: sum / count as f64,
                review_count: count,
            })
        })
        .collect()
}
