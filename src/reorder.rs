//! Index-to-index moves within an ordered sequence.

/// Errors that can occur when moving an element.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReorderError {
    #[error("index {index} out of range for {len} items")]
    OutOfRange { index: usize, len: usize },
}

/// Moves the element at `from` so it ends up at `to`.
///
/// Elements between the two positions shift by one slot toward `from`;
/// everything outside that range keeps its place. Both indices must be in
/// bounds, otherwise the sequence is left untouched.
pub fn move_item<T>(order: &mut [T], from: usize, to: usize) -> Result<(), ReorderError> {
    let len = order.len();
    for index in [from, to] {
        if index >= len {
            return Err(ReorderError::OutOfRange { index, len });
        }
    }

    if from < to {
        order[from..=to].rotate_left(1);
    } else if to < from {
        order[to..=from].rotate_right(1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    fn letters() -> Vec<char> {
        vec!['a', 'b', 'c', 'd', 'e']
    }

    #[test]
    fn move_forward() {
        let mut order = letters();
        move_item(&mut order, 1, 3).unwrap();
        assert_eq!(order, ['a', 'c', 'd', 'b', 'e']);
    }

    #[test]
    fn move_backward() {
        let mut order = letters();
        move_item(&mut order, 4, 0).unwrap();
        assert_eq!(order, ['e', 'a', 'b', 'c', 'd']);
    }

    #[test]
    fn move_to_end() {
        let mut order = letters();
        move_item(&mut order, 0, 4).unwrap();
        assert_eq!(order, ['b', 'c', 'd', 'e', 'a']);
    }

    #[test]
    fn same_index_is_unchanged() {
        for i in 0..5 {
            let mut order = letters();
            move_item(&mut order, i, i).unwrap();
            assert_eq!(order, letters());
        }
    }

    #[test]
    fn out_of_range_leaves_order_untouched() {
        let mut order = letters();
        let err = move_item(&mut order, 5, 0).unwrap_err();
        assert_eq!(err, ReorderError::OutOfRange { index: 5, len: 5 });

        let err = move_item(&mut order, 0, 9).unwrap_err();
        assert_eq!(err, ReorderError::OutOfRange { index: 9, len: 5 });
        assert_eq!(order, letters());
    }

    #[test]
    fn empty_sequence_rejects_any_index() {
        let mut order: Vec<char> = Vec::new();
        assert!(move_item(&mut order, 0, 0).is_err());
    }

    #[test]
    fn matches_remove_then_insert() {
        for from in 0..5 {
            for to in 0..5 {
                let mut expected = letters();
                let item = expected.remove(from);
                expected.insert(to, item);

                let mut order = letters();
                move_item(&mut order, from, to).unwrap();
                assert_eq!(order, expected, "move {from} -> {to}");
            }
        }
    }

    /// A sequence of distinct items plus two indices into it.
    fn sequence_and_moves() -> impl Strategy<Value = (Vec<usize>, usize, usize)> {
        (1usize..40).prop_flat_map(|len| (Just((0..len).collect::<Vec<_>>()), 0..len, 0..len))
    }

    proptest! {
        #[test]
        fn moves_preserve_elements_and_land_at_target(
            (items, from, to) in sequence_and_moves()
        ) {
            let mut order = items.clone();
            move_item(&mut order, from, to).unwrap();

            prop_assert_eq!(order.len(), items.len());
            prop_assert_eq!(order[to], items[from]);

            let mut expected = items.clone();
            let item = expected.remove(from);
            expected.insert(to, item);
            prop_assert_eq!(&order, &expected);

            let mut sorted = order;
            sorted.sort_unstable();
            prop_assert_eq!(sorted, items);
        }

        #[test]
        fn out_of_range_moves_change_nothing(len in 0usize..20, extra in 0usize..5) {
            let items: Vec<usize> = (0..len).collect();
            let mut order = items.clone();
            prop_assert!(move_item(&mut order, len + extra, 0).is_err());
            prop_assert!(move_item(&mut order, 0, len + extra).is_err());
            prop_assert_eq!(order, items);
        }
    }
}
