use std::fmt;

use crate::error::MazeError;
use crate::grids::{Dimensions, Direction};

/// Grid of cells separated by walls.
///
/// Every edge between two cells is stored exactly once, so the wall seen from
/// one side is always the wall seen from the other. Edges on the outside of
/// the grid are stored too but have no cell on their far side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallGrid {
    pub dims: Dimensions,

    // true means a wall is present
    // (rows + 1) lines of `columns` edges, line `y` is the top edge of row `y`
    horizontal: Vec<bool>,
    // `rows` lines of (columns + 1) edges, entry `x` is the left edge of column `x`
    vertical: Vec<bool>,
}

impl WallGrid {
    pub fn with_dims(width: usize, height: usize) -> Result<Self, MazeError> {
        let invalid = MazeError::InvalidDimension { width, height };
        if width == 0 || height == 0 {
            return Err(invalid);
        }

        width.checked_mul(height).ok_or(invalid)?;
        let horizontal = height
            .checked_add(1)
            .and_then(|lines| lines.checked_mul(width))
            .ok_or(invalid)?;
        let vertical = width
            .checked_add(1)
            .and_then(|edges| edges.checked_mul(height))
            .ok_or(invalid)?;

        Ok(Self {
            dims: Dimensions {
                rows: height,
                columns: width,
            },
            horizontal: vec![true; horizontal],
            vertical: vec![true; vertical],
        })
    }

    pub fn square(size: usize) -> Result<Self, MazeError> {
        Self::with_dims(size, size)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.dims.columns
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.dims.rows
    }

    pub fn set_all_walls(&mut self, present: bool) {
        for wall in self.horizontal.iter_mut().chain(self.vertical.iter_mut()) {
            *wall = present;
        }
    }

    pub fn can_go(&self, x: usize, y: usize, direction: Direction) -> Result<bool, MazeError> {
        let (edges, index) = self.edge_of(x, y, direction)?;
        let wall = match edges {
            Edges::Horizontal => self.horizontal[index],
            Edges::Vertical => self.vertical[index],
        };

        Ok(!wall)
    }

    pub fn set_wall(
        &mut self,
        x: usize,
        y: usize,
        direction: Direction,
        present: bool,
    ) -> Result<(), MazeError> {
        let (edges, index) = self.edge_of(x, y, direction)?;
        match edges {
            Edges::Horizontal => self.horizontal[index] = present,
            Edges::Vertical => self.vertical[index] = present,
        }

        Ok(())
    }

    #[inline]
    pub fn can_go_up(&self, x: usize, y: usize) -> Result<bool, MazeError> {
        self.can_go(x, y, Direction::Up)
    }

    #[inline]
    pub fn can_go_down(&self, x: usize, y: usize) -> Result<bool, MazeError> {
        self.can_go(x, y, Direction::Down)
    }

    #[inline]
    pub fn can_go_left(&self, x: usize, y: usize) -> Result<bool, MazeError> {
        self.can_go(x, y, Direction::Left)
    }

    #[inline]
    pub fn can_go_right(&self, x: usize, y: usize) -> Result<bool, MazeError> {
        self.can_go(x, y, Direction::Right)
    }

    #[inline]
    pub fn set_wall_up(&mut self, x: usize, y: usize, present: bool) -> Result<(), MazeError> {
        self.set_wall(x, y, Direction::Up, present)
    }

    #[inline]
    pub fn set_wall_down(&mut self, x: usize, y: usize, present: bool) -> Result<(), MazeError> {
        self.set_wall(x, y, Direction::Down, present)
    }

    #[inline]
    pub fn set_wall_left(&mut self, x: usize, y: usize, present: bool) -> Result<(), MazeError> {
        self.set_wall(x, y, Direction::Left, present)
    }

    #[inline]
    pub fn set_wall_right(&mut self, x: usize, y: usize, present: bool) -> Result<(), MazeError> {
        self.set_wall(x, y, Direction::Right, present)
    }

    /// Coordinates of the cell on the other side of `direction`, if it lies inside the grid.
    pub fn neighbor_of(&self, x: usize, y: usize, direction: Direction) -> Option<(usize, usize)> {
        if !self.contains(x, y) {
            return None;
        }

        match direction {
            Direction::Left if x > 0 => Some((x - 1, y)),
            Direction::Right if x + 1 < self.width() => Some((x + 1, y)),
            Direction::Up if y > 0 => Some((x, y - 1)),
            Direction::Down if y + 1 < self.height() => Some((x, y + 1)),
            _ => None,
        }
    }

    /// Number of open edges between two cells. Openings in the outer wall are not counted.
    pub fn open_edge_count(&self) -> usize {
        let columns = self.width();

        let horizontal = self.horizontal[columns..self.horizontal.len() - columns]
            .iter()
            .filter(|wall| !**wall)
            .count();

        let vertical = self
            .vertical
            .chunks(columns + 1)
            .map(|line| line[1..columns].iter().filter(|wall| !**wall).count())
            .sum::<usize>();

        horizontal + vertical
    }

    #[inline]
    fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width() && y < self.height()
    }

    fn edge_of(&self, x: usize, y: usize, direction: Direction) -> Result<(Edges, usize), MazeError> {
        if !self.contains(x, y) {
            return Err(MazeError::OutOfRange {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }

        let columns = self.width();
        Ok(match direction {
            Direction::Up => (Edges::Horizontal, y * columns + x),
            Direction::Down => (Edges::Horizontal, (y + 1) * columns + x),
            Direction::Left => (Edges::Vertical, y * (columns + 1) + x),
            Direction::Right => (Edges::Vertical, y * (columns + 1) + x + 1),
        })
    }

    // only called with in range coordinates
    fn is_open(&self, x: usize, y: usize, direction: Direction) -> bool {
        self.can_go(x, y, direction).unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy)]
enum Edges {
    Horizontal,
    Vertical,
}

impl fmt::Display for WallGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last_x = self.width() - 1;

        for x in 0..self.width() {
            f.write_str(if self.is_open(x, 0, Direction::Up) { "+  " } else { "+--" })?;
        }
        writeln!(f, "+")?;

        for y in 0..self.height() {
            for x in 0..self.width() {
                f.write_str(if self.is_open(x, y, Direction::Left) { " " } else { "|" })?;
                f.write_str("  ")?;
            }
            writeln!(f, "{}", if self.is_open(last_x, y, Direction::Right) { " " } else { "|" })?;

            for x in 0..self.width() {
                f.write_str(if self.is_open(x, y, Direction::Down) { "+  " } else { "+--" })?;
            }
            writeln!(f, "+")?;
        }

        Ok(())
    }
}
