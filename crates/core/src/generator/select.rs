//! Evenly spaced sampling of the sentence pool.

use super::split::longer_than;

/// Number of cards to aim for given a pool size.
pub(crate) fn target_count(pool_len: usize, per_card: usize, min: usize, max: usize) -> usize {
    (pool_len / per_card.max(1)).max(min).min(max)
}

/// Distance between consecutive candidates; never zero.
pub(crate) fn stride(pool_len: usize, target: usize) -> usize {
    (pool_len / target.max(1)).max(1)
}

/// Pool indices picked by walking from 0 in steps of `stride`, keeping entries
/// whose trimmed length exceeds `min_chars`, until `target` are collected.
pub(crate) fn spaced_indices(pool: &[&str], target: usize, min_chars: usize) -> Vec<usize> {
    let step = stride(pool.len(), target);
    (0..pool.len())
        .step_by(step)
        .filter(|&i| longer_than(pool[i], min_chars))
        .take(target)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_is_clamped_between_limits() {
        assert_eq!(target_count(8, 3, 8, 12), 8);
        assert_eq!(target_count(30, 3, 8, 12), 10);
        assert_eq!(target_count(36, 3, 8, 12), 12);
        assert_eq!(target_count(500, 3, 8, 12), 12);
    }

    #[test]
    fn indices_are_at_least_a_stride_apart() {
        let long = "x".repeat(40);
        let pool: Vec<&str> = std::iter::repeat_n(long.as_str(), 50).collect();
        let target = target_count(pool.len(), 3, 8, 12);
        let step = stride(pool.len(), target);
        assert_eq!(step, 4);

        let picked = spaced_indices(&pool, target, 30);
        assert_eq!(picked.len(), 12);
        assert_eq!(picked[0], 0);
        for pair in picked.windows(2) {
            assert!(pair[1] - pair[0] >= step);
        }
    }

    #[test]
    fn short_entries_are_skipped_not_replaced() {
        let short = "y".repeat(30);
        let long = "z".repeat(31);
        let pool = vec![short.as_str(), long.as_str(), short.as_str(), long.as_str()];
        assert_eq!(spaced_indices(&pool, 4, 30), vec![1, 3]);
    }
}
