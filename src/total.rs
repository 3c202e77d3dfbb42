use itertools::Itertools;

use crate::{error::CalorieError, group::Group};

// Sums are exact in i128; only the final value has to fit in an i64.
fn exact_sum(values: impl Iterator<Item = i64>) -> Option<i64> {
    i64::try_from(values.map(i128::from).sum::<i128>()).ok()
}

/// One total per group, in input order. Empty groups total 0.
pub fn group_totals(groups: &[Group]) -> Result<Vec<i64>, CalorieError> {
    groups
        .iter()
        .enumerate()
        .map(|(i, group)| {
            exact_sum(group.iter().copied()).ok_or(CalorieError::GroupOverflow { group: i + 1 })
        })
        .collect()
}

/// Sum of the `n` largest totals, or of all of them if there are fewer.
pub fn top_n_total(totals: &[i64], n: usize) -> Result<i64, CalorieError> {
    exact_sum(
        totals
            .iter()
            .copied()
            .sorted_unstable_by(|a, b| b.cmp(a))
            .take(n),
    )
    .ok_or(CalorieError::SelectionOverflow { n })
}

pub fn max_total(totals: &[i64]) -> Result<i64, CalorieError> {
    top_n_total(totals, 1)
}

pub fn top_three_total(totals: &[i64]) -> Result<i64, CalorieError> {
    top_n_total(totals, 3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn group_totals_keep_order() {
        let groups: Vec<Group> = vec![vec![1000, 2000], vec![3000, 4000, 5000], vec![6000]];

        let totals = group_totals(&groups);

        assert!(totals.is_ok());
        assert_eq!(totals.unwrap(), vec![3000, 12000, 6000]);
    }

    #[test]
    fn group_totals_empty_group_is_zero() {
        let groups: Vec<Group> = vec![vec![], vec![5], vec![]];

        assert_eq!(group_totals(&groups).unwrap(), vec![0, 5, 0]);
    }

    #[test]
    fn group_totals_with_negatives() {
        let groups: Vec<Group> = vec![vec![7, -3, 10]];

        assert_eq!(group_totals(&groups).unwrap(), vec![14]);
    }

    #[test]
    fn group_totals_at_max() {
        let groups: Vec<Group> = vec![vec![i64::MAX - 1, 1]];

        assert_eq!(group_totals(&groups).unwrap(), vec![i64::MAX]);
    }

    #[rstest]
    #[case(vec![i64::MAX, 1, -1], i64::MAX)]
    #[case(vec![i64::MAX, i64::MAX, i64::MIN, i64::MIN], -2)]
    #[case(vec![i64::MIN, -1, 1], i64::MIN)]
    fn group_totals_exact_with_mixed_signs(#[case] group: Group, #[case] expected: i64) {
        assert_eq!(group_totals(&[group]).unwrap(), vec![expected]);
    }

    #[test]
    fn group_totals_overflow() {
        let groups: Vec<Group> = vec![vec![1], vec![i64::MAX, 1]];

        assert!(matches!(
            group_totals(&groups),
            Err(CalorieError::GroupOverflow { group: 2 })
        ));
    }

    #[rstest]
    #[case(vec![], 0)]
    #[case(vec![5], 5)]
    #[case(vec![5, 3], 8)]
    #[case(vec![3000, 12000, 6000], 21000)]
    #[case(vec![6000, 4000, 11000, 24000, 10000], 45000)]
    #[case(vec![0, 0, 0, 0], 0)]
    fn top_three_total_ok(#[case] totals: Vec<i64>, #[case] expected: i64) {
        let res = top_three_total(&totals);
        assert!(res.is_ok());
        assert_eq!(res.unwrap(), expected);
    }

    #[test]
    fn top_three_total_ignores_order() {
        let totals: Vec<i64> = vec![6000, 4000, 11000, 24000, 10000];
        let expected = top_three_total(&totals).unwrap();

        for permutation in totals.iter().copied().permutations(totals.len()) {
            assert_eq!(top_three_total(&permutation).unwrap(), expected);
        }
    }

    #[rstest]
    #[case(vec![], 0)]
    #[case(vec![6000, 4000, 11000, 24000, 10000], 24000)]
    #[case(vec![-4, -2], -2)]
    fn max_total_ok(#[case] totals: Vec<i64>, #[case] expected: i64) {
        assert_eq!(max_total(&totals).unwrap(), expected);
    }

    #[test]
    fn top_n_total_zero() {
        assert_eq!(top_n_total(&[1i64, 2, 3], 0).unwrap(), 0);
    }

    #[test]
    fn top_three_total_exact_with_mixed_signs() {
        let totals: Vec<i64> = vec![i64::MAX, 1, -1, -5];

        assert_eq!(top_three_total(&totals).unwrap(), i64::MAX);
    }

    #[test]
    fn top_n_total_overflow() {
        let totals: Vec<i64> = vec![i64::MAX, 1, 0];

        assert!(matches!(
            top_n_total(&totals, 2),
            Err(CalorieError::SelectionOverflow { n: 2 })
        ));
        assert_eq!(top_n_total(&totals, 1).unwrap(), i64::MAX);
    }
}
