/// Compute the matched index pairs of a longest common subsequence of `a` and `b`
///
/// The common prefix and suffix are matched greedily before the table is
/// built, so equal runs at the start and end of the sequences always stay
/// anchored. Inside the remaining window equal heads are matched first. When
/// skipping either head keeps the LCS length, the head that sorts lower is
/// skipped, so swapping `a` and `b` yields the same pairs with each pair
/// swapped.
pub(crate) fn lcs_pairs<T: Ord>(a: &[T], b: &[T]) -> Vec<(usize, usize)> {
    let prefix = a.iter().zip(b).take_while(|(x, y)| x == y).count();
    let (a_rest, b_rest) = (&a[prefix..], &b[prefix..]);

    let suffix = a_rest
        .iter()
        .rev()
        .zip(b_rest.iter().rev())
        .take_while(|(x, y)| x == y)
        .count();
    let a_mid = &a_rest[..a_rest.len() - suffix];
    let b_mid = &b_rest[..b_rest.len() - suffix];

    let mut pairs: Vec<(usize, usize)> = (0..prefix).map(|i| (i, i)).collect();
    pairs.extend(
        window_pairs(a_mid, b_mid)
            .into_iter()
            .map(|(i, j)| (i + prefix, j + prefix)),
    );

    let a_tail = prefix + a_mid.len();
    let b_tail = prefix + b_mid.len();
    pairs.extend((0..suffix).map(|k| (a_tail + k, b_tail + k)));

    pairs
}

/// Table-driven LCS over a window that shares no common prefix or suffix
fn window_pairs<T: Ord>(a: &[T], b: &[T]) -> Vec<(usize, usize)> {
    let (n, m) = (a.len(), b.len());
    if n == 0 || m == 0 {
        return Vec::new();
    }

    // table[i * width + j] holds the LCS length of a[i..] and b[j..]
    let width = m + 1;
    let mut table = vec![0u32; (n + 1) * width];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            table[i * width + j] = if a[i] == b[j] {
                table[(i + 1) * width + j + 1] + 1
            } else {
                table[(i + 1) * width + j].max(table[i * width + j + 1])
            };
        }
    }

    let mut pairs = Vec::with_capacity(table[0] as usize);
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if a[i] == b[j] {
            pairs.push((i, j));
            i += 1;
            j += 1;
            continue;
        }

        let skip_a = table[(i + 1) * width + j];
        let skip_b = table[i * width + j + 1];
        if skip_a > skip_b || (skip_a == skip_b && a[i] < b[j]) {
            i += 1;
        } else {
            j += 1;
        }
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs() {
        let empty: [&str; 0] = [];
        assert!(lcs_pairs(&empty, &empty).is_empty());
        assert!(lcs_pairs(&["a"], &empty).is_empty());
        assert!(lcs_pairs(&empty, &["a"]).is_empty());
    }

    #[test]
    fn test_identical_sequences_match_everything() {
        let a = ["x", "y", "z"];
        assert_eq!(lcs_pairs(&a, &a), vec![(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn test_classic_lcs_length() {
        let a: Vec<char> = "ABCBDAB".chars().collect();
        let b: Vec<char> = "BDCABA".chars().collect();
        let pairs = lcs_pairs(&a, &b);

        assert_eq!(pairs.len(), 4);
        for &(i, j) in &pairs {
            assert_eq!(a[i], b[j]);
        }
        assert!(pairs.windows(2).all(|w| w[0].0 < w[1].0 && w[0].1 < w[1].1));
    }

    #[test]
    fn test_repeated_blank_lines_stay_anchored_at_edges() {
        let a = ["", "", "body", "", ""];
        let b = ["", "", "changed", "", ""];
        let pairs = lcs_pairs(&a, &b);

        assert_eq!(pairs, vec![(0, 0), (1, 1), (3, 3), (4, 4)]);
    }

    #[test]
    fn test_ties_skip_the_lower_head() {
        // Both "x" and "y" are valid single-element LCSs
        assert_eq!(lcs_pairs(&["x", "y"], &["y", "x"]), vec![(1, 0)]);
        assert_eq!(lcs_pairs(&["y", "x"], &["x", "y"]), vec![(0, 1)]);
    }

    #[test]
    fn test_swapping_inputs_swaps_pairs() {
        let cases: [(&[&str], &[&str]); 4] = [
            (&["a", " ", "b"], &["b", " ", "a"]),
            (&["p", "q", "r", "p"], &["r", "p", "q"]),
            (&["", "x", "", "y"], &["y", "", "x", ""]),
            (&["m", "n"], &["n", "o", "m"]),
        ];

        for (a, b) in cases {
            let forward: Vec<_> = lcs_pairs(a, b).into_iter().map(|(i, j)| (j, i)).collect();
            assert_eq!(lcs_pairs(b, a), forward);
        }
    }
}
