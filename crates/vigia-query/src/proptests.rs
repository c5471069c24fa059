//! Property-based tests for the index computation.

#[allow(clippy::unwrap_used)]
mod tests {
    use crate::engine::ire_index;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_ire_index_always_in_range(critical in 0u64..1_000_000, total in 0u64..1_000_000) {
            let index = ire_index(critical, total);
            prop_assert!((0.0..=100.0).contains(&index));
        }

        #[test]
        fn test_ire_index_zero_total_is_zero(critical in 0u64..1) {
            prop_assert_eq!(ire_index(critical, 0), 0.0);
        }

        #[test]
        fn test_ire_index_one_decimal(critical in 0u64..10_000, total in 1u64..10_000) {
            let index = ire_index(critical, total);
            let scaled = index * 10.0;
            prop_assert!((scaled - scaled.round()).abs() < 1e-9);
        }
    }
}
