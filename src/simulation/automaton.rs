use crate::ant::{AgentState, Ant, Position};
use crate::direction::Direction;
use crate::error::{AntError, Result};
use crate::grid::Grid;

/// Langton's Ant: one ant on a toroidal grid of on/off cells.
///
/// Each [`step`](Automaton::step) reads the cell under the ant, turns
/// clockwise on an on cell and counter-clockwise on an off cell, flips the
/// cell, then moves one cell forward with wrap-around at the edges.
#[derive(Clone, Debug)]
pub struct Automaton {
    grid: Grid,
    ant: Ant,
}

impl Automaton {
    /// Build from an initial matrix.
    ///
    /// `start_position` must hold exactly two integers `[x, y]`; any values are
    /// accepted and reduced modulo the grid size. Without it the ant starts at
    /// `(width / 2, height / 2)`. Without a `direction` one is drawn from `rng`.
    pub fn new(
        initial_state: Vec<Vec<bool>>,
        start_position: Option<&[i64]>,
        direction: Option<Direction>,
        rng: &mut fastrand::Rng,
    ) -> Result<Self> {
        Self::from_grid(Grid::new(initial_state)?, start_position, direction, rng)
    }

    /// Same as [`new`](Automaton::new) for an already validated grid
    pub fn from_grid(
        grid: Grid,
        start_position: Option<&[i64]>,
        direction: Option<Direction>,
        rng: &mut fastrand::Rng,
    ) -> Result<Self> {
        let pos = match start_position {
            Some(&[x, y]) => Position::wrapped(x, y, grid.width(), grid.height()),
            Some(other) => return Err(AntError::InvalidStartPosition(other.len())),
            None => Position::new(grid.width() / 2, grid.height() / 2),
        };
        let direction = direction.unwrap_or_else(|| Direction::random(rng));

        Ok(Self {
            grid,
            ant: Ant::new(pos, direction),
        })
    }

    /// Advance one tick
    pub fn step(&mut self) {
        let Position { x, y } = self.ant.pos;
        let heading = self.ant.direction;

        self.ant.direction = if self.grid.get(x, y) {
            heading.turn_clockwise()
        } else {
            heading.turn_counter_clockwise()
        };
        self.grid.toggle(x, y);
        self.ant.pos = self
            .ant
            .pos
            .advance(self.ant.direction, self.grid.width(), self.grid.height());
    }

    /// Current cells, row-major (`[y][x]`). Borrowed: no step can run while held.
    #[inline]
    pub fn snapshot(&self) -> &[Vec<bool>] {
        self.grid.rows()
    }

    /// Position, heading and the value of the occupied cell
    pub fn agent_state(&self) -> AgentState {
        let Position { x, y } = self.ant.pos;
        AgentState {
            position: self.ant.pos,
            direction: self.ant.direction,
            cell: self.grid.get(x, y),
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }
}
