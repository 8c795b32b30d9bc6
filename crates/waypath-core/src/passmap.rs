//! Passability maps: the boundary between map generation and search.
//!
//! The search only needs two questions answered about the world: is a
//! coordinate on the map, and can an agent stand there. [`Passability`]
//! captures exactly that. [`PassMap`] is the stock boolean implementation,
//! and [`Layout`] builds one from ASCII art:
//!
//! ```text
//! #####
//! #S..#
//! #.#G#
//! #####
//! ```
//!
//! `#` is a wall, `.` is floor, `S` and `G` mark an optional start and goal
//! (both are floor).

use std::fmt;

use thiserror::Error;

use crate::geom::{Point, Range};
use crate::grid::Grid;

/// Read-only passability query surface.
pub trait Passability {
    /// The map rectangle. Every point inside is addressable.
    fn bounds(&self) -> Range;

    /// Whether `p` lies inside [`bounds`](Passability::bounds).
    fn is_in(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Whether an agent may occupy `p`. Unchecked: `p` must satisfy
    /// [`is_in`](Passability::is_in).
    fn is_passable(&self, p: Point) -> bool;
}

/// A dense boolean passability grid (`true` = passable).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassMap {
    cells: Grid<bool>,
}

impl PassMap {
    /// A map of the given size where every cell is passable.
    pub fn open(width: i32, height: i32) -> Self {
        Self {
            cells: Grid::filled(width, height, true),
        }
    }

    /// A map of the given size where every cell is blocked.
    pub fn blocked(width: i32, height: i32) -> Self {
        Self {
            cells: Grid::filled(width, height, false),
        }
    }

    /// Wrap an existing boolean grid.
    pub fn from_grid(cells: Grid<bool>) -> Self {
        Self { cells }
    }

    /// The underlying grid.
    pub fn grid(&self) -> &Grid<bool> {
        &self.cells
    }

    /// Width in cells.
    pub fn width(&self) -> i32 {
        self.cells.width()
    }

    /// Height in cells.
    pub fn height(&self) -> i32 {
        self.cells.height()
    }

    /// Mark `p` passable or blocked. Out-of-bounds points are ignored.
    pub fn set_passable(&mut self, p: Point, passable: bool) {
        if self.cells.is_in(p.x, p.y) {
            self.cells.set(p.x, p.y, passable);
        }
    }
}

impl Passability for PassMap {
    #[inline]
    fn bounds(&self) -> Range {
        self.cells.bounds()
    }

    #[inline]
    fn is_in(&self, p: Point) -> bool {
        self.cells.is_in(p.x, p.y)
    }

    #[inline]
    fn is_passable(&self, p: Point) -> bool {
        *self.cells.get(p.x, p.y)
    }
}

impl Passability for Grid<bool> {
    #[inline]
    fn bounds(&self) -> Range {
        Grid::bounds(self)
    }

    #[inline]
    fn is_in(&self, p: Point) -> bool {
        Grid::is_in(self, p.x, p.y)
    }

    #[inline]
    fn is_passable(&self, p: Point) -> bool {
        *self.get(p.x, p.y)
    }
}

impl fmt::Display for PassMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.width() {
                let ch = if *self.cells.get(x, y) { FLOOR } else { WALL };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

const WALL: char = '#';
const FLOOR: char = '.';
const START: char = 'S';
const GOAL: char = 'G';

/// Errors that can occur when parsing an ASCII layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The text contains no cells.
    #[error("layout is empty")]
    Empty,
    /// A row's width differs from the first row's.
    #[error("layout row {row} has width {found}, expected {expected}")]
    InconsistentWidth {
        row: i32,
        expected: i32,
        found: i32,
    },
    /// A character other than `#`, `.`, `S` or `G`.
    #[error("layout contains invalid character \u{201c}{ch}\u{201d} at {pos}")]
    InvalidChar { ch: char, pos: Point },
    /// `S` or `G` appears more than once.
    #[error("layout marker \u{201c}{marker}\u{201d} appears again at {pos}")]
    DuplicateMarker { marker: char, pos: Point },
}

/// A parsed ASCII layout: the passability map plus optional markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub map: PassMap,
    pub start: Option<Point>,
    pub goal: Option<Point>,
}

impl Layout {
    /// Parse an ASCII layout.
    ///
    /// Leading and trailing blank lines are ignored, as is trailing
    /// whitespace on each row. All rows must have the same width.
    pub fn parse(s: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = s
            .trim_matches('\n')
            .lines()
            .map(str::trim_end)
            .collect();
        let width = rows.first().map_or(0, |r| r.chars().count() as i32);
        if width == 0 {
            return Err(LayoutError::Empty);
        }

        let mut cells = Grid::filled(width, rows.len() as i32, false);
        let mut start = None;
        let mut goal = None;

        for (y, row) in rows.iter().enumerate() {
            let y = y as i32;
            let found = row.chars().count() as i32;
            if found != width {
                return Err(LayoutError::InconsistentWidth {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let pos = Point::new(x as i32, y);
                let passable = match ch {
                    WALL => false,
                    FLOOR => true,
                    START => {
                        mark(&mut start, START, pos)?;
                        true
                    }
                    GOAL => {
                        mark(&mut goal, GOAL, pos)?;
                        true
                    }
                    _ => return Err(LayoutError::InvalidChar { ch, pos }),
                };
                cells.set(pos.x, pos.y, passable);
            }
        }

        Ok(Self {
            map: PassMap::from_grid(cells),
            start,
            goal,
        })
    }
}

fn mark(slot: &mut Option<Point>, marker: char, pos: Point) -> Result<(), LayoutError> {
    if slot.is_some() {
        return Err(LayoutError::DuplicateMarker { marker, pos });
    }
    *slot = Some(pos);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "
#####
#S..#
#.#G#
#####
";

    #[test]
    fn parse_room() {
        let layout = Layout::parse(ROOM).unwrap();
        assert_eq!(layout.map.width(), 5);
        assert_eq!(layout.map.height(), 4);
        assert_eq!(layout.start, Some(Point::new(1, 1)));
        assert_eq!(layout.goal, Some(Point::new(3, 2)));
        assert!(layout.map.is_passable(Point::new(1, 1)));
        assert!(layout.map.is_passable(Point::new(3, 2)));
        assert!(!layout.map.is_passable(Point::new(2, 2)));
        assert_eq!(layout.map.grid().iter().filter(|(_, c)| **c).count(), 5);
    }

    #[test]
    fn display_round_trips_walls() {
        let layout = Layout::parse("#.#\n...").unwrap();
        assert_eq!(layout.map.to_string(), "#.#\n...");
        assert_eq!(layout.start, None);
    }

    #[test]
    fn inconsistent_width() {
        let err = Layout::parse("...\n..").unwrap_err();
        assert_eq!(
            err,
            LayoutError::InconsistentWidth {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn invalid_char() {
        let err = Layout::parse("..\n.x").unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidChar {
                ch: 'x',
                pos: Point::new(1, 1)
            }
        );
    }

    #[test]
    fn duplicate_marker() {
        let err = Layout::parse("S.S").unwrap_err();
        assert_eq!(
            err,
            LayoutError::DuplicateMarker {
                marker: 'S',
                pos: Point::new(2, 0)
            }
        );
    }

    #[test]
    fn empty_layout() {
        assert_eq!(Layout::parse("\n\n").unwrap_err(), LayoutError::Empty);
    }

    #[test]
    fn set_passable_ignores_out_of_bounds() {
        let mut m = PassMap::open(2, 2);
        m.set_passable(Point::new(1, 0), false);
        m.set_passable(Point::new(5, 5), false);
        assert!(!m.is_passable(Point::new(1, 0)));
        assert!(m.is_passable(Point::new(0, 0)));
        assert!(!m.is_in(Point::new(2, 0)));
    }

    #[test]
    fn bool_grid_is_passability() {
        let g = Grid::from_fn(2, 1, |p| p.x == 0);
        assert!(Passability::is_passable(&g, Point::new(0, 0)));
        assert!(!Passability::is_passable(&g, Point::new(1, 0)));
        assert!(!Passability::is_in(&g, Point::new(0, 1)));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn passmap_round_trip() {
        let map = Layout::parse("#S.\n.#G").unwrap().map;
        let json = serde_json::to_string(&map).unwrap();
        let back: PassMap = serde_json::from_str(&json).unwrap();
        assert_eq!(map, back);
        assert_eq!(back.to_string(), "#..\n.#.");
    }
}
