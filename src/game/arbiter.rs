//! Direction arbitration: turns raw heading requests into the velocity
//! applied on the next tick.

use super::action::{Direction, Velocity};

/// Resolve a heading request against the velocity of the last completed tick.
///
/// A request that points straight back along the axis the snake last moved on
/// is rejected and `pending` is returned unchanged. Before the first move
/// (`last_applied` still) every request is accepted. Between two ticks the
/// latest accepted request wins.
pub fn arbitrate(requested: Direction, last_applied: Velocity, pending: Velocity) -> Velocity {
    match last_applied.direction() {
        Some(last) if last.is_opposite(requested) => pending,
        _ => Velocity::from(requested),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    #[test]
    fn test_reversal_rejected() {
        // moving up, asking for down
        let up = Velocity::from(Direction::Up);
        assert_eq!(arbitrate(Direction::Down, up, up), up);

        let left = Velocity::from(Direction::Left);
        assert_eq!(arbitrate(Direction::Right, left, left), left);
    }

    #[test]
    fn test_reversal_never_changes_pending() {
        for last in ALL {
            let opposite = ALL.into_iter().find(|d| last.is_opposite(*d)).unwrap();
            for pending in ALL {
                let pending = Velocity::from(pending);
                assert_eq!(arbitrate(opposite, last.into(), pending), pending);
            }
        }
    }

    #[test]
    fn test_perpendicular_accepted() {
        let right = Velocity::from(Direction::Right);
        assert_eq!(
            arbitrate(Direction::Up, right, right),
            Velocity::from(Direction::Up)
        );
        assert_eq!(
            arbitrate(Direction::Down, right, right),
            Velocity::from(Direction::Down)
        );
        assert_eq!(arbitrate(Direction::Right, right, right), right);
    }

    #[test]
    fn test_anything_accepted_before_first_move() {
        for dir in ALL {
            assert_eq!(
                arbitrate(dir, Velocity::STILL, Velocity::STILL),
                Velocity::from(dir)
            );
        }
    }

    #[test]
    fn test_checks_last_applied_not_pending() {
        // Moving right, player pressed up (pending), then left before the tick.
        // Left reverses the last applied heading so the pending up survives.
        let right = Velocity::from(Direction::Right);
        let pending = arbitrate(Direction::Up, right, right);
        assert_eq!(arbitrate(Direction::Left, right, pending), pending);

        // Down is not a reversal of right, so it overwrites the pending up.
        assert_eq!(
            arbitrate(Direction::Down, right, pending),
            Velocity::from(Direction::Down)
        );
    }
}
