use std::collections::HashSet;
use std::fs;

use anyhow::{ensure, Context, Result};
use tracing::{info, warn};

use crate::common::{DirtSet, Position, State};

/// Static facts of one environment: grid bounds, the agent origin, the
/// dirty cells (sorted row-major; their index is the `DirtSet` ordinal)
/// and the wall cells. Immutable for the duration of a run.
#[derive(Debug, Clone)]
pub struct World {
    pub height: usize,
    pub width: usize,
    pub origin: Position,
    pub dirt: Vec<Position>,
    pub walls: HashSet<Position>,
    rows: Vec<String>,
}

impl World {
    pub fn from_file(path: &str) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read world file {path:?}"))?;
        Self::from_text(&text)
    }

    /// Parse the line-oriented world format: width, height, then `height`
    /// grid rows. Short rows are right-padded with blanks, long rows are
    /// truncated to `width`, missing rows read as empty floor.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut lines = text.lines();
        let width: usize = lines
            .next()
            .context("world file is missing the width line")?
            .trim()
            .parse()
            .context("world width is not an integer")?;
        let height: usize = lines
            .next()
            .context("world file is missing the height line")?
            .trim()
            .parse()
            .context("world height is not an integer")?;

        let mut grid: Vec<Vec<char>> = Vec::with_capacity(height);
        for _ in 0..height {
            let mut row: Vec<char> = lines.next().unwrap_or("").chars().collect();
            if row.len() < width {
                row.resize(width, ' ');
            } else {
                row.truncate(width);
            }
            grid.push(row);
        }

        let mut origin = None;
        let mut dirt = Vec::new();
        let mut walls = HashSet::new();
        for (y, row) in grid.iter().enumerate() {
            for (x, &ch) in row.iter().enumerate() {
                let position = (y as i32, x as i32);
                match ch {
                    '@' => {
                        if origin.is_none() {
                            origin = Some(position);
                        } else {
                            warn!("ignoring extra origin marker at {position:?}");
                        }
                    }
                    '*' => dirt.push(position),
                    '#' => {
                        walls.insert(position);
                    }
                    _ => {}
                }
            }
        }
        let origin = origin.context("world has no origin cell ('@')")?;

        // Row-major scan order already leaves dirt sorted; keep it explicit
        // since the ordinal mapping depends on it.
        dirt.sort_unstable();
        ensure!(
            dirt.len() <= DirtSet::MAX_CELLS,
            "world has {} dirty cells, at most {} are supported",
            dirt.len(),
            DirtSet::MAX_CELLS
        );

        Ok(World {
            height,
            width,
            origin,
            dirt,
            walls,
            rows: grid.into_iter().map(String::from_iter).collect(),
        })
    }

    /// Build a world from its components, for callers that do not go
    /// through the text format (generated or test worlds).
    pub fn new(
        height: usize,
        width: usize,
        origin: Position,
        mut dirt: Vec<Position>,
        walls: HashSet<Position>,
    ) -> Result<Self> {
        dirt.sort_unstable();
        dirt.dedup();
        ensure!(
            dirt.len() <= DirtSet::MAX_CELLS,
            "world has {} dirty cells, at most {} are supported",
            dirt.len(),
            DirtSet::MAX_CELLS
        );
        for cell in &dirt {
            ensure!(
                !walls.contains(cell),
                "dirty cell {cell:?} coincides with a wall"
            );
        }

        let mut grid = vec![vec![' '; width]; height];
        let mut mark = |(y, x): Position, ch: char| {
            if y >= 0 && x >= 0 && (y as usize) < height && (x as usize) < width {
                grid[y as usize][x as usize] = ch;
            }
        };
        for &cell in &walls {
            mark(cell, '#');
        }
        for &cell in &dirt {
            mark(cell, '*');
        }
        mark(origin, '@');

        Ok(World {
            height,
            width,
            origin,
            dirt,
            walls,
            rows: grid.into_iter().map(String::from_iter).collect(),
        })
    }

    /// Initial search state: the agent at the origin with every dirty
    /// cell still remaining.
    pub fn start_state(&self) -> State {
        State {
            position: self.origin,
            dirt: self.initial_dirt(),
        }
    }

    pub fn initial_dirt(&self) -> DirtSet {
        DirtSet::full(self.dirt.len())
    }

    /// Bit index of a dirty cell, if the position was dirty initially.
    pub fn dirt_ordinal(&self, position: Position) -> Option<usize> {
        self.dirt.binary_search(&position).ok()
    }

    pub fn in_bounds(&self, position: Position) -> bool {
        position.0 >= 0
            && position.1 >= 0
            && (position.0 as usize) < self.height
            && (position.1 as usize) < self.width
    }

    pub fn is_wall(&self, position: Position) -> bool {
        self.walls.contains(&position)
    }

    /// Diagnostic echo of the normalized grid.
    pub fn echo(&self) {
        info!(
            "Parsed world: expecting {} columns, got {} rows",
            self.width, self.height
        );
        for (y, row) in self.rows.iter().enumerate() {
            info!(" row {}: '{}' (len={})", y, row, row.len());
        }
    }
}
