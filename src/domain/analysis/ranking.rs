//! Dense ranking of scores.

/// Assigns dense ranks by descending score.
///
/// Equal scores share a rank and the next distinct score gets the next
/// integer, so ranks never skip. Ties are decided by exact equality only.
/// NaN scores get `None` and do not occupy a rank.
pub fn dense_rank(scores: &[f64]) -> Vec<Option<u32>> {
    let mut distinct: Vec<f64> = scores.iter().copied().filter(|s| !s.is_nan()).collect();
    distinct.sort_by(|a, b| b.total_cmp(a));
    distinct.dedup();

    scores
        .iter()
        .map(|score| {
            if score.is_nan() {
                return None;
            }
            // `distinct` is sorted descending; count the strictly greater ones.
            let greater = distinct.partition_point(|candidate| candidate > score);
            Some(greater as u32 + 1)
        })
        .collect()
}
