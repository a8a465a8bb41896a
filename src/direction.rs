use crate::error::AntError;
use std::fmt;
use std::str::FromStr;

/// The four headings an ant can face. Screen coordinates: y grows downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl FromStr for Direction {
    type Err = AntError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_bytes() {
            b"up" => Ok(Direction::Up),
            b"right" => Ok(Direction::Right),
            b"down" => Ok(Direction::Down),
            b"left" => Ok(Direction::Left),
            _ => Err(AntError::InvalidDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Direction {
    /// All possible directions, in clockwise order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit vector `(dx, dy)`
    #[inline]
    pub const fn vector(self) -> (i64, i64) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// Quarter turn clockwise as seen on screen
    #[inline]
    pub const fn turn_clockwise(self) -> Self {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    /// Quarter turn counter-clockwise as seen on screen
    #[inline]
    pub const fn turn_counter_clockwise(self) -> Self {
        match self {
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
        }
    }

    /// Pick one of the four directions uniformly
    pub fn random(rng: &mut fastrand::Rng) -> Self {
        Self::ALL[rng.usize(..Self::ALL.len())]
    }

    /// Get direction name as string
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Right => "RIGHT",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_directions() {
        assert_eq!("up".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!("RIGHT".parse::<Direction>().unwrap(), Direction::Right);
        assert_eq!("Down".parse::<Direction>().unwrap(), Direction::Down);
        assert_eq!("left".parse::<Direction>().unwrap(), Direction::Left);
        assert!(matches!(
            "north".parse::<Direction>(),
            Err(AntError::InvalidDirection(_))
        ));
    }

    #[test]
    fn test_vectors_are_unit() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.vector();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
        assert_eq!(Direction::Up.vector(), (0, -1));
        assert_eq!(Direction::Left.vector(), (-1, 0));
    }

    #[test]
    fn test_turns_are_inverse() {
        for dir in Direction::ALL {
            assert_eq!(dir.turn_clockwise().turn_counter_clockwise(), dir);
            assert_eq!(dir.turn_counter_clockwise().turn_clockwise(), dir);
        }
    }

    #[test]
    fn test_four_turns_return_home() {
        for dir in Direction::ALL {
            let mut cw = dir;
            let mut ccw = dir;
            for _ in 0..4 {
                cw = cw.turn_clockwise();
                ccw = ccw.turn_counter_clockwise();
            }
            assert_eq!(cw, dir);
            assert_eq!(ccw, dir);
        }
    }

    #[test]
    fn test_counter_clockwise_from_up_is_left() {
        assert_eq!(Direction::Up.turn_counter_clockwise(), Direction::Left);
        assert_eq!(Direction::Up.turn_clockwise(), Direction::Right);
    }

    #[test]
    fn test_random_is_seeded() {
        let mut a = fastrand::Rng::with_seed(9);
        let mut b = fastrand::Rng::with_seed(9);
        for _ in 0..16 {
            assert_eq!(Direction::random(&mut a), Direction::random(&mut b));
        }
    }
}
