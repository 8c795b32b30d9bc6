//! Adapts a passability map into the queries the search needs.

use waypath_core::{Passability, Point};

use crate::config::SearchConfig;
use crate::error::SearchError;

/// Largest map side accepted; keeps [`Point::key`] unique and overflow-free.
pub const MAX_DIMENSION: i32 = 1 << 15;

/// The map, endpoints and budget of one search.
///
/// The source borrows the map; the engine only reads through it.
#[derive(Debug)]
pub struct SearchSource<'a, M: Passability + ?Sized> {
    map: &'a M,
    config: SearchConfig,
    start: Option<Point>,
    end: Option<Point>,
}

impl<'a, M: Passability + ?Sized> SearchSource<'a, M> {
    /// Wrap `map` with a traversal budget of `max_cost`.
    pub fn new(map: &'a M, max_cost: i32) -> Result<Self, SearchError> {
        Self::with_config(map, SearchConfig::new(max_cost))
    }

    /// Wrap `map` using the given config.
    pub fn with_config(map: &'a M, config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        let bounds = map.bounds();
        if bounds.min != Point::ZERO {
            return Err(SearchError::MalformedBounds(bounds));
        }
        if bounds.is_empty() {
            return Err(SearchError::EmptyMap);
        }
        if bounds.width() > MAX_DIMENSION || bounds.height() > MAX_DIMENSION {
            return Err(SearchError::MapTooLarge {
                width: bounds.width(),
                height: bounds.height(),
            });
        }
        Ok(Self {
            map,
            config,
            start: None,
            end: None,
        })
    }

    /// Set the two endpoints. Allowed once, before the search starts.
    ///
    /// The start must lie on the map. The end may lie anywhere; a goal off
    /// the map or outside the restriction box simply never matches.
    pub fn init(&mut self, start: Point, end: Point) -> Result<(), SearchError> {
        if self.start.is_some() {
            return Err(SearchError::EndpointsAlreadySet);
        }
        if !self.map.is_in(start) {
            return Err(SearchError::StartOutOfBounds(start));
        }
        self.start = Some(start);
        self.end = Some(end);
        Ok(())
    }

    /// Builder form of [`init`](Self::init).
    pub fn with_endpoints(mut self, start: Point, end: Point) -> Result<Self, SearchError> {
        self.init(start, end)?;
        Ok(self)
    }

    /// The wrapped map.
    #[inline]
    pub fn map(&self) -> &'a M {
        self.map
    }

    /// The search config.
    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// The traversal budget.
    #[inline]
    pub fn max_cost(&self) -> i32 {
        self.config.max_cost
    }

    /// The start, once [`init`](Self::init) has run.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// The goal, once [`init`](Self::init) has run.
    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Whether `p` is on the map.
    #[inline]
    pub fn is_in(&self, p: Point) -> bool {
        self.map.is_in(p)
    }

    /// Whether `p` is passable. Unchecked: `p` must be on the map.
    #[inline]
    pub fn can_move(&self, p: Point) -> bool {
        self.map.is_passable(p)
    }

    /// Append the passable on-map cardinal neighbours of `p` to `buf`, in
    /// up, down, left, right order. The caller clears `buf` first.
    pub fn around_4(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.map.is_in(n) && self.map.is_passable(n) {
                buf.push(n);
            }
        }
    }
}
