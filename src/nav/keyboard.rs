/// Direction of an Alt+Arrow navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Prev),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }
}

/// Adjacent link index in DOM order, with no wrap-around at either end.
///
/// With nothing active, `Next` selects the first link and `Prev` stays put,
/// so a page left in a link-less transient state can be recovered from the
/// keyboard.
pub fn adjacent_index(current: Option<usize>, dir: Direction, len: usize) -> Option<usize> {
    match (current, dir) {
        (Some(i), Direction::Prev) => i.checked_sub(1),
        (Some(i), Direction::Next) => (i + 1 < len).then_some(i + 1),
        (None, Direction::Next) => (len > 0).then_some(0),
        (None, Direction::Prev) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn moves_between_neighbours() {
        assert_eq!(adjacent_index(Some(1), Direction::Prev, 4), Some(0));
        assert_eq!(adjacent_index(Some(1), Direction::Next, 4), Some(2));
    }

    #[test]
    fn never_wraps_at_the_first_link() {
        assert_eq!(adjacent_index(Some(0), Direction::Prev, 4), None);
    }

    #[test]
    fn never_wraps_at_the_last_link() {
        assert_eq!(adjacent_index(Some(3), Direction::Next, 4), None);
    }

    #[test]
    fn next_from_nothing_selects_the_first_link() {
        assert_eq!(adjacent_index(None, Direction::Next, 4), Some(0));
        assert_eq!(adjacent_index(None, Direction::Next, 0), None);
    }

    #[test]
    fn prev_from_nothing_stays_put() {
        assert_eq!(adjacent_index(None, Direction::Prev, 4), None);
    }

    #[test]
    fn only_arrow_keys_map_to_directions() {
        assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Prev));
        assert_eq!(Direction::from_key("ArrowRight"), Some(Direction::Next));
        assert_eq!(Direction::from_key("ArrowUp"), None);
        assert_eq!(Direction::from_key("Escape"), None);
    }
}
