//! A dense, bounds-checked grid sized at construction time.
//!
//! The type backs the primary board, the region map, and the resolver's
//! visited set. Cells are stored row-major with rows indexed by `y`
//! (`index = y * width + x`), the same convention everywhere in the crate.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::Pos;

/// Errors returned by grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Position lies outside the grid bounds.
    OutOfBounds { x: i32, y: i32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds { x, y } => {
                write!(f, "OutOfBounds: x={}, y={}", x, y)
            }
        }
    }
}

/// A `width`×`height` grid of `T` with checked access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Copy> Grid<T> {
    /// Create a grid with every cell set to `fill`.
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Grid {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `pos` addresses a cell of this grid.
    #[inline]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.width
            && (pos.y as usize) < self.height
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        pos.y as usize * self.width + pos.x as usize
    }

    /// Gets the cell at `pos`.
    pub fn get(&self, pos: Pos) -> Result<T, GridError> {
        self.check_bounds(pos)?;
        Ok(self.cells[self.index(pos)])
    }

    /// Sets the cell at `pos` to `value`.
    pub fn set(&mut self, pos: Pos, value: T) -> Result<(), GridError> {
        self.check_bounds(pos)?;
        let idx = self.index(pos);
        self.cells[idx] = value;
        Ok(())
    }

    /// Overwrites every cell with `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }

    #[inline]
    fn check_bounds(&self, pos: Pos) -> Result<(), GridError> {
        if self.in_bounds(pos) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds { x: pos.x, y: pos.y })
        }
    }

    /// Iterator over all cell positions in scan order (row by row).
    pub fn positions(&self) -> Positions {
        Positions {
            width: self.width as i32,
            height: self.height as i32,
            x: 0,
            y: 0,
        }
    }
}

impl<T: Copy + PartialEq> Grid<T> {
    /// Number of cells equal to `value`.
    pub fn count(&self, value: T) -> usize {
        self.cells.iter().filter(|&&c| c == value).count()
    }
}

/// Iterator over the positions of a grid, row by row.
#[derive(Clone, Copy)]
pub struct Positions {
    width: i32,
    height: i32,
    x: i32,
    y: i32,
}

impl Iterator for Positions {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.height || self.width == 0 {
            return None;
        }
        let pos = Pos::new(self.x, self.y);
        self.x += 1;
        if self.x >= self.width {
            self.x = 0;
            self.y += 1;
        }
        Some(pos)
    }
}
