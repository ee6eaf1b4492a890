#[cfg(test)]
mod tests {
    use gallery_nav::{Direction, LightboxState};

    #[test]
    fn test_open_sets_index_for_every_entry() {
        let mut state = LightboxState::new(9);
        for index in 0..9 {
            assert_eq!(state.open(index), Ok(index));
            assert_eq!(state.current(), Some(index));
            assert_eq!(state.counter(), Some((index + 1, 9)));
        }
    }

    #[test]
    fn test_count_steps_return_to_start() {
        for count in 1..=12 {
            for start in 0..count {
                for direction in [Direction::Next, Direction::Previous] {
                    let mut state = LightboxState::new(count);
                    state.open(start).unwrap();

                    for _ in 0..count {
                        state.step(direction);
                    }

                    assert_eq!(
                        state.current(),
                        Some(start),
                        "count {count}, start {start}, {direction:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_next_and_previous_are_inverse() {
        for count in 1..=12 {
            for start in 0..count {
                let mut state = LightboxState::new(count);
                state.open(start).unwrap();

                state.next();
                state.previous();
                assert_eq!(state.current(), Some(start));

                state.previous();
                state.next();
                assert_eq!(state.current(), Some(start));
            }
        }
    }

    #[test]
    fn test_index_never_leaves_range() {
        let mut state = LightboxState::new(5);
        state.open(2).unwrap();

        for step in 0..50 {
            let direction = if step % 3 == 0 {
                Direction::Previous
            } else {
                Direction::Next
            };
            let index = state.step(direction).unwrap();
            assert!(index < 5);
        }
    }
}
