use itertools::Itertools;


// Lazily yields every `k`-element subset of `pool` in index-lexicographic order: for a pool
// `[a, b, c, d, e]` and `k = 4` that is `abcd, abce, abde, acde, bcde`. Elements inside each
// subset keep their relative pool order. Nothing is materialized up front, so callers that only
// need a prefix of the sequence can stop early regardless of `C(n, k)`.
//
// Yields nothing if `k > pool.len()`.
pub fn combinations<T: Clone>(pool: &[T], k: usize) -> impl Iterator<Item = Vec<T>> + '_ {
    pool.iter().cloned().combinations(k)
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn lexicographic_order() {
        let subsets = combinations(&['a', 'b', 'c', 'd', 'e'], 4)
            .map(|s| s.into_iter().collect::<String>())
            .collect_vec();
        assert_eq!(subsets, vec!["abcd", "abce", "abde", "acde", "bcde"]);
    }

    #[test]
    fn too_few_elements() {
        assert_eq!(combinations(&[1, 2, 3], 4).count(), 0);
    }

    #[test]
    fn count_matches_binomial() {
        let pool = (0..10).collect_vec();
        assert_eq!(combinations(&pool, 4).count(), 210);
    }

    #[test]
    fn is_restartable() {
        let pool = (0..7).collect_vec();
        let first = combinations(&pool, 4).collect_vec();
        let second = combinations(&pool, 4).collect_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn large_pool_prefix() {
        // C(200, 4) is tens of millions; taking a prefix must not enumerate them all.
        let pool = (0..200).collect_vec();
        let prefix = combinations(&pool, 4).take(3).collect_vec();
        assert_eq!(prefix, vec![vec![0, 1, 2, 3], vec![0, 1, 2, 4], vec![0, 1, 2, 5]]);
    }
}
