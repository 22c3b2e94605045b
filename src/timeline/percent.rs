use std::cmp::Ordering;

/// Split `counts` into whole percents of their sum that always add up to
/// exactly 100. After flooring, the missing points go to the entries with
/// the largest fractional remainders.
pub fn split_percents(counts: &[u32]) -> Vec<u8> {
    let total: u32 = counts.iter().sum();
    if total == 0 {
        return vec![0; counts.len()];
    }

    let mut percents: Vec<u8> = Vec::with_capacity(counts.len());
    let mut remainders: Vec<(usize, f64)> = Vec::with_capacity(counts.len());
    let mut assigned: i64 = 0;

    for (i, &count) in counts.iter().enumerate() {
        let exact = count as f64 * 100.0 / total as f64;
        let floor = exact.floor();
        percents.push(floor as u8);
        remainders.push((i, exact - floor));
        assigned += floor as i64;
    }

    // stable sort keeps earlier entries first on equal remainders
    remainders.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let mut missing = 100 - assigned;
    for (i, _) in remainders {
        if missing == 0 {
            break;
        }
        percents[i] += 1;
        missing -= 1;
    }

    percents
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_split() {
        assert_eq!(split_percents(&[720, 720]), vec![50, 50]);
    }

    #[test]
    fn rounding_always_sums_to_hundred() {
        for counts in [
            vec![1, 2],
            vec![1, 1, 1],
            vec![333, 333, 334],
            vec![1, 1439],
            vec![7, 11, 13],
        ] {
            let percents = split_percents(&counts);
            let sum: u32 = percents.iter().map(|&p| p as u32).sum();
            assert_eq!(sum, 100, "counts {:?} split to {:?}", counts, percents);
        }
    }

    #[test]
    fn equal_remainders_bump_earlier_entries() {
        assert_eq!(split_percents(&[1, 1, 1]), vec![34, 33, 33]);
    }

    #[test]
    fn zero_counts_stay_zero() {
        assert_eq!(split_percents(&[0, 100]), vec![0, 100]);
        assert_eq!(split_percents(&[0, 0]), vec![0, 0]);
    }
}
