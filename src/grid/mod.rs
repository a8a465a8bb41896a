pub mod grid;
pub mod parser;

pub use grid::Grid;
pub use parser::{parse_grid, parse_grid_from_str};
