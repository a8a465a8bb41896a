use crate::error::{AntError, Result};

/// Rectangular board of on/off cells, indexed `[row][col]` = `[y][x]`.
/// Dimensions are fixed once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<bool>>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Validate and take ownership of a row-major boolean matrix
    pub fn new(cells: Vec<Vec<bool>>) -> Result<Self> {
        let height = cells.len();
        if height == 0 {
            return Err(AntError::EmptyGrid);
        }
        let width = cells[0].len();
        if width == 0 {
            return Err(AntError::EmptyRow);
        }
        if let Some((row, found)) = cells
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(AntError::RaggedRow {
                row,
                expected: width,
                found,
            });
        }

        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// All-off grid of the given size. Zero dimensions are rejected.
    pub fn blank(width: usize, height: usize) -> Result<Self> {
        Self::new(vec![vec![false; width]; height])
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at column `x`, row `y`. Caller keeps coordinates in bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[y][x]
    }

    /// Flip the cell and return its new value
    #[inline]
    pub fn toggle(&mut self, x: usize, y: usize) -> bool {
        let cell = &mut self.cells[y][x];
        *cell = !*cell;
        *cell
    }

    /// Borrow the rows
    #[inline]
    pub fn rows(&self) -> &[Vec<bool>] {
        &self.cells
    }

    /// Number of cells currently on
    pub fn count_on(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|&&c| c).count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(vec![vec![false, true, false], vec![true, false, false]]).unwrap();

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert!(grid.get(1, 0));
        assert!(grid.get(0, 1));
        assert!(!grid.get(2, 1));
    }

    #[test]
    fn test_rejects_empty_grid() {
        assert!(matches!(Grid::new(vec![]), Err(AntError::EmptyGrid)));
    }

    #[test]
    fn test_rejects_empty_first_row() {
        assert!(matches!(Grid::new(vec![vec![]]), Err(AntError::EmptyRow)));
        assert!(matches!(Grid::blank(0, 4), Err(AntError::EmptyRow)));
        assert!(matches!(Grid::blank(4, 0), Err(AntError::EmptyGrid)));
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let err = Grid::new(vec![vec![true], vec![true, false]]).unwrap_err();

        match err {
            AntError::RaggedRow { row, expected, found } => {
                assert_eq!(row, 1);
                assert_eq!(expected, 1);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_toggle_and_count() {
        let mut grid = Grid::blank(4, 3).unwrap();
        assert_eq!(grid.count_on(), 0);

        assert!(grid.toggle(3, 2));
        assert!(grid.toggle(0, 0));
        assert_eq!(grid.count_on(), 2);
        assert!(grid.rows()[2][3]);

        assert!(!grid.toggle(3, 2));
        assert_eq!(grid.count_on(), 1);
    }
}
