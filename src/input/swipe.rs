use crate::game::Direction;

/// Classify a swipe by the dominant axis of its displacement.
///
/// Screen coordinates: `dy > 0` points down. Equal magnitudes count as
/// vertical; no displacement yields nothing.
pub fn classify_swipe(dx: i32, dy: i32) -> Option<Direction> {
    if dx.abs() > dy.abs() {
        Some(if dx > 0 {
            Direction::Right
        } else {
            Direction::Left
        })
    } else if dy > 0 {
        Some(Direction::Down)
    } else if dy < 0 {
        Some(Direction::Up)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_swipes() {
        assert_eq!(classify_swipe(30, 4), Some(Direction::Right));
        assert_eq!(classify_swipe(-30, -4), Some(Direction::Left));
    }

    #[test]
    fn test_vertical_swipes() {
        assert_eq!(classify_swipe(2, 15), Some(Direction::Down));
        assert_eq!(classify_swipe(-2, -15), Some(Direction::Up));
    }

    #[test]
    fn test_ties_are_vertical() {
        assert_eq!(classify_swipe(5, 5), Some(Direction::Down));
        assert_eq!(classify_swipe(5, -5), Some(Direction::Up));
    }

    #[test]
    fn test_no_movement() {
        assert_eq!(classify_swipe(0, 0), None);
    }
}
