use crate::error::{AntError, Result};
use crate::grid::grid::Grid;
use std::fs::File;
use std::io::{BufRead, BufReader};

/// Load an initial grid from a pattern file.
///
/// One row per non-empty line; `#`/`1` is on, `.`/`0` is off and lines
/// starting with `!` are comments.
pub fn parse_grid(path: &str) -> Result<Grid> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut rows: Vec<Vec<bool>> = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        if let Some(row) = parse_line(idx + 1, &line?)? {
            rows.push(row);
        }
    }

    Grid::new(rows)
}

/// Parse a grid directly from an in-memory string
pub fn parse_grid_from_str(src: &str) -> Result<Grid> {
    let mut rows: Vec<Vec<bool>> = Vec::new();
    for (idx, line) in src.lines().enumerate() {
        if let Some(row) = parse_line(idx + 1, line)? {
            rows.push(row);
        }
    }

    Grid::new(rows)
}

fn parse_line(line_no: usize, raw: &str) -> Result<Option<Vec<bool>>> {
    let line = raw.trim_end();
    if line.is_empty() || line.starts_with('!') {
        return Ok(None);
    }

    line.chars()
        .enumerate()
        .map(|(col, glyph)| match glyph {
            '#' | '1' => Ok(true),
            '.' | '0' => Ok(false),
            _ => Err(AntError::InvalidCell {
                line: line_no,
                column: col + 1,
                glyph,
            }),
        })
        .collect::<Result<Vec<bool>>>()
        .map(Some)
}
