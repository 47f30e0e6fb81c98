use std::cmp::Ordering;
use std::fmt;

/// Compass direction of a screen offset; y grows southwards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    East,
    West,
    North,
    South,
    NorthEast,
    SouthEast,
    NorthWest,
    SouthWest,
    Origin,
}

impl Direction {
    pub fn from_offset(x: i32, y: i32) -> Self {
        match (x.cmp(&0), y.cmp(&0)) {
            (Ordering::Greater, Ordering::Equal) => Direction::East,
            (Ordering::Less, Ordering::Equal) => Direction::West,
            (Ordering::Equal, Ordering::Less) => Direction::North,
            (Ordering::Equal, Ordering::Greater) => Direction::South,
            (Ordering::Greater, Ordering::Less) => Direction::NorthEast,
            (Ordering::Greater, Ordering::Greater) => Direction::SouthEast,
            (Ordering::Less, Ordering::Less) => Direction::NorthWest,
            (Ordering::Less, Ordering::Greater) => Direction::SouthWest,
            (Ordering::Equal, Ordering::Equal) => Direction::Origin,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Direction::East => "东",
            Direction::West => "西",
            Direction::North => "北",
            Direction::South => "南",
            Direction::NorthEast => "东北",
            Direction::SouthEast => "东南",
            Direction::NorthWest => "西北",
            Direction::SouthWest => "西南",
            Direction::Origin => "原点",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_directions() {
        assert_eq!(Direction::from_offset(1, 0).label(), "东");
        assert_eq!(Direction::from_offset(-100, 0).label(), "西");
        assert_eq!(Direction::from_offset(0, -1).label(), "北");
        assert_eq!(Direction::from_offset(0, 100).label(), "南");
    }

    #[test]
    fn test_diagonal_directions() {
        assert_eq!(Direction::from_offset(1, -1), Direction::NorthEast);
        assert_eq!(Direction::from_offset(100, 100), Direction::SouthEast);
        assert_eq!(Direction::from_offset(-1, -1), Direction::NorthWest);
        assert_eq!(Direction::from_offset(-100, 100), Direction::SouthWest);
    }

    #[test]
    fn test_origin() {
        assert_eq!(Direction::from_offset(0, 0).to_string(), "原点");
    }
}
