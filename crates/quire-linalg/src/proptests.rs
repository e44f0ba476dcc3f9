//! Property-based tests for matrix row operations.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use quire_integers::Rational;

    use crate::{Matrix, TransformationLog};

    fn cell() -> impl Strategy<Value = Rational> {
        // Zeros are over-represented so sorting has leading columns to move.
        prop_oneof![
            2 => Just(Rational::ZERO),
            5 => (-50i64..50i64, prop_oneof![(-9i64..=-1i64), (1i64..=9i64)])
                .prop_map(|(n, d)| Rational::new(n, d).unwrap()),
        ]
    }

    fn matrix() -> impl Strategy<Value = Matrix> {
        (1usize..6, 1usize..6).prop_flat_map(|(rows, cols)| {
            prop::collection::vec(cell(), rows * cols)
                .prop_map(move |data| Matrix::of(rows, cols, data).unwrap())
        })
    }

    fn leads(m: &Matrix) -> Vec<Option<usize>> {
        (0..m.num_rows())
            .map(|row| m.leading_coefficient_column(row).unwrap())
            .collect()
    }

    proptest! {
        #[test]
        fn row_ops_leave_receiver_unchanged(
            m in matrix(),
            a in 0usize..6,
            b in 0usize..6,
            s in cell()
        ) {
            let before = m.clone();
            let a = a % m.num_rows();
            let b = b % m.num_rows();

            let _ = m.swap(a, b).unwrap();
            let _ = m.scale_row(a, s).unwrap();
            let _ = m.add_row(a, b, s).unwrap();
            let _ = m.times(s);
            let _ = m.sorted(None);

            for row in 0..m.num_rows() {
                for col in 0..m.num_cols() {
                    let now = m.get(row, col).unwrap();
                    let then = before.get(row, col).unwrap();
                    prop_assert_eq!(now.numerator(), then.numerator());
                    prop_assert_eq!(now.denominator(), then.denominator());
                }
            }
        }

        #[test]
        fn sorted_orders_leading_columns(m in matrix()) {
            let sorted = m.sorted(None);
            let l = leads(&sorted);
            prop_assert!(l.windows(2).all(|w| w[0] <= w[1]));
        }

        #[test]
        fn sorted_is_idempotent(m in matrix()) {
            let once = m.sorted(None);
            let mut log = TransformationLog::new(once.clone());
            let twice = once.sorted(Some(&mut log));
            prop_assert_eq!(twice, once);
            prop_assert!(log.is_empty());
        }

        #[test]
        fn sort_log_replays(m in matrix()) {
            let mut log = TransformationLog::new(m.clone());
            let sorted = m.sorted(Some(&mut log));
            let recorded: Vec<Matrix> = log.steps().map(|step| step.result.clone()).collect();
            prop_assert_eq!(log.replay().unwrap(), recorded);
            prop_assert_eq!(log.current(), &sorted);
        }

        #[test]
        fn display_round_trips(m in matrix()) {
            let text = m.to_string();
            prop_assert_eq!(Matrix::parse(m.num_rows(), m.num_cols(), &text).unwrap(), m);
        }

        #[test]
        fn self_add_doubles_row(m in matrix(), row in 0usize..6) {
            let row = row % m.num_rows();
            let added = m.add_row(row, row, Rational::ONE).unwrap();
            prop_assert_eq!(added, m.scale_row(row, Rational::TWO).unwrap());
        }

        #[test]
        fn div_undoes_times(m in matrix(), s in cell()) {
            prop_assume!(s != Rational::ZERO);
            prop_assert_eq!(m.times(s).div(s).unwrap(), m);
        }
    }
}
