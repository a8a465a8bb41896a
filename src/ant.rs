use crate::direction::Direction;

/// Column/row coordinate of the ant
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Reduce arbitrary integer coordinates onto a `width` x `height` torus
    pub fn wrapped(x: i64, y: i64, width: usize, height: usize) -> Self {
        Self {
            x: x.rem_euclid(width as i64) as usize,
            y: y.rem_euclid(height as i64) as usize,
        }
    }

    /// One cell along `direction`, wrapping at the edges
    pub fn advance(self, direction: Direction, width: usize, height: usize) -> Self {
        let (dx, dy) = direction.vector();
        Self::wrapped(self.x as i64 + dx, self.y as i64 + dy, width, height)
    }
}

/// The single agent: where it is and where it faces
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ant {
    pub pos: Position,
    pub direction: Direction,
}

impl Ant {
    pub fn new(pos: Position, direction: Direction) -> Self {
        Self { pos, direction }
    }
}

/// Read-only view of the ant handed to renderers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgentState {
    pub position: Position,
    pub direction: Direction,
    /// Value of the cell the ant stands on
    pub cell: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_reduces_out_of_range() {
        assert_eq!(Position::wrapped(-1, 0, 3, 3), Position::new(2, 0));
        assert_eq!(Position::wrapped(7, -5, 3, 4), Position::new(1, 3));
        assert!(Position::wrapped(i64::MIN, i64::MAX, 5, 5).x < 5);
    }

    #[test]
    fn test_advance_wraps_every_edge() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.advance(Direction::Up, 4, 3), Position::new(0, 2));
        assert_eq!(corner.advance(Direction::Left, 4, 3), Position::new(3, 0));

        let far = Position::new(3, 2);
        assert_eq!(far.advance(Direction::Down, 4, 3), Position::new(3, 0));
        assert_eq!(far.advance(Direction::Right, 4, 3), Position::new(0, 2));
    }

    #[test]
    fn test_advance_on_single_cell() {
        let only = Position::new(0, 0);
        for dir in Direction::ALL {
            assert_eq!(only.advance(dir, 1, 1), only);
        }
    }
}
