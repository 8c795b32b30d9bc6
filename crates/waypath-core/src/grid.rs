//! The [`Grid`] type: a dense, row-major 2D store of arbitrary values.
//!
//! Element `(x, y)` lives at index `y * width + x`. The dimensions are fixed
//! at construction. [`get`](Grid::get) and [`set`](Grid::set) do not check
//! their coordinates; callers validate with [`is_in`](Grid::is_in) first.

use crate::geom::{Point, Range};

/// A fixed-size 2D grid of `T`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid<T> {
    cells: Vec<T>,
    width: i32,
    height: i32,
}

impl<T: Clone + Default> Grid<T> {
    /// Create a new grid filled with `T::default()`.
    pub fn new(width: i32, height: i32) -> Self {
        Self::filled(width, height, T::default())
    }
}

impl<T: Clone> Grid<T> {
    /// Create a new grid with every cell set to `value`.
    pub fn filled(width: i32, height: i32, value: T) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            cells: vec![value; (w as usize) * (h as usize)],
            width: w,
            height: h,
        }
    }
}

impl<T> Grid<T> {
    /// Create a grid by evaluating `f` at every point in row-major order.
    pub fn from_fn(width: i32, height: i32, mut f: impl FnMut(Point) -> T) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        let cells = Range::new(0, 0, w, h).iter().map(&mut f).collect();
        Self {
            cells,
            width: w,
            height: h,
        }
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The range `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `(x, y)` lies in `[0, width) × [0, height)`.
    #[inline]
    pub fn is_in(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    #[inline]
    fn linear(&self, x: i32, y: i32) -> usize {
        debug_assert!(self.is_in(x, y), "grid access out of bounds: ({x}, {y})");
        (y * self.width + x) as usize
    }

    /// The cell at `(x, y)`. Unchecked: call [`is_in`](Grid::is_in) first.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> &T {
        &self.cells[self.linear(x, y)]
    }

    /// Store `value` at `(x, y)`. Unchecked.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, value: T) {
        let i = self.linear(x, y);
        self.cells[i] = value;
    }

    /// Checked access by point.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&T> {
        self.index_of(p).map(|i| &self.cells[i])
    }

    /// Linear index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index_of(&self, p: Point) -> Option<usize> {
        if !self.is_in(p.x, p.y) {
            return None;
        }
        Some((p.y * self.width + p.x) as usize)
    }

    /// Cell at linear index `idx`.
    #[inline]
    pub fn by_index(&self, idx: usize) -> &T {
        &self.cells[idx]
    }

    /// Mutable cell at linear index `idx`.
    #[inline]
    pub fn by_index_mut(&mut self, idx: usize) -> &mut T {
        &mut self.cells[idx]
    }

    /// Row-major iterator over `(Point, &T)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> + '_ {
        self.bounds().iter().zip(self.cells.iter())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::from_fn(3, 2, |p| p.x == p.y);
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid<bool> = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }
}
