//! Grid module - fixed-size 2D cell storage
//!
//! The grid owns a `width x height` flat vector in row-major order
//! (`y * width + x`). Every access is bounds-checked and out-of-range
//! coordinates are reported as [`MazeError::OutOfBounds`], never clamped.

use crate::error::{MazeError, Result};
use crate::types::Point;

/// A fixed-size grid of `Copy` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: u16,
    height: u16,
    /// Flat storage, row-major order (y * width + x)
    cells: Vec<T>,
}

impl<T: Copy> Grid<T> {
    /// Create a grid with every cell set to `value`
    pub fn new(width: u16, height: u16, value: T) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![value; len],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Result<usize> {
        if !self.contains(x, y) {
            return Err(MazeError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Check whether (x, y) lies inside the grid
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }

    pub fn get(&self, x: i32, y: i32) -> Result<T> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    pub fn set(&mut self, x: i32, y: i32, value: T) -> Result<()> {
        let idx = self.index(x, y)?;
        self.cells[idx] = value;
        Ok(())
    }

    pub fn get_at(&self, p: Point) -> Result<T> {
        self.get(p.x, p.y)
    }

    pub fn set_at(&mut self, p: Point, value: T) -> Result<()> {
        self.set(p.x, p.y, value)
    }

    /// Set every cell to `value`
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }

    /// Replace every cell with `f(x, y, current)`, row by row.
    ///
    /// Cells are visited with `y` outer and `x` inner.
    pub fn set_each(&mut self, mut f: impl FnMut(i32, i32, T) -> T) {
        let width = self.width as usize;
        for (i, cell) in self.cells.iter_mut().enumerate() {
            let x = (i % width) as i32;
            let y = (i / width) as i32;
            *cell = f(x, y, *cell);
        }
    }

    /// Visit every cell in row-major order
    pub fn each(&self, mut f: impl FnMut(i32, i32, T)) {
        let width = self.width as usize;
        for (i, cell) in self.cells.iter().enumerate() {
            f((i % width) as i32, (i / width) as i32, *cell);
        }
    }
}

impl<T: Copy + PartialEq> Grid<T> {
    /// Count the cells equal to `value`
    pub fn count(&self, value: T) -> usize {
        self.cells.iter().filter(|&&c| c == value).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Tile;

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::new(5, 3, Tile::Road);
        assert_eq!(grid.index(0, 0), Ok(0));
        assert_eq!(grid.index(4, 0), Ok(4));
        assert_eq!(grid.index(0, 1), Ok(5));
        assert_eq!(grid.index(4, 2), Ok(14));
        assert!(grid.index(-1, 0).is_err());
        assert!(grid.index(5, 0).is_err());
        assert!(grid.index(0, 3).is_err());
    }

    #[test]
    fn test_out_of_bounds_reports_coordinates() {
        let mut grid = Grid::new(5, 5, Tile::Road);
        let expected = MazeError::OutOfBounds {
            x: 7,
            y: -1,
            width: 5,
            height: 5,
        };
        assert_eq!(grid.get(7, -1), Err(expected));
        assert_eq!(grid.set(7, -1, Tile::Wall), Err(expected));
        // Failed writes leave the grid untouched.
        assert_eq!(grid.count(Tile::Road), 25);
    }

    #[test]
    fn test_set_each_is_row_major() {
        let mut grid = Grid::new(3, 2, 0u32);
        let mut order = Vec::new();
        grid.set_each(|x, y, _| {
            order.push((x, y));
            (y * 3 + x) as u32
        });
        assert_eq!(order, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
        assert_eq!(grid.get(2, 0), Ok(2));
        assert_eq!(grid.get(0, 1), Ok(3));
    }

    #[test]
    fn test_set_each_sees_previous_pass() {
        let mut grid = Grid::new(3, 3, Tile::Road);
        grid.set_each(|x, _, _| if x == 0 { Tile::Wall } else { Tile::Road });
        grid.set_each(|_, y, t| if y == 0 { Tile::Wall } else { t });
        assert_eq!(grid.get(0, 2), Ok(Tile::Wall));
        assert_eq!(grid.get(2, 0), Ok(Tile::Wall));
        assert_eq!(grid.get(2, 2), Ok(Tile::Road));
    }
}
