//! # grid_bfs
//!
//! A grid-based shortest-path system. Implements
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search)
//! over a 4-connected grid of blocked and free cells, which guarantees paths
//! with a minimum number of steps when every step costs the same. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.
mod bfs;

use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;

use crate::bfs::{bfs_flood, reconstruct_path};
use core::fmt;

/// Failure kinds reported by [shortest_path](ObstacleGrid::shortest_path).
/// All of these are ordinary recoverable results rather than panics: the grid
/// is left untouched and the caller decides what to show the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// The start cell is blocked.
    InvalidStart,
    /// The end cell is blocked.
    InvalidEnd,
    /// No sequence of free cells connects start to end.
    Unreachable,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SearchError::InvalidStart => write!(f, "invalid start position"),
            SearchError::InvalidEnd => write!(f, "invalid end position"),
            SearchError::Unreachable => write!(f, "end is not reachable from start"),
        }
    }
}

impl std::error::Error for SearchError {}

/// [ObstacleGrid] maintains information about components using a [UnionFind]
/// structure in addition to the raw [bool] grid values in the [BoolGrid] that
/// determine whether a cell is blocked ([true]) or free ([false]). Components
/// link 4-connected free cells, so two cells are in the same component exactly
/// when a path of cardinal moves exists between them. Implements [Grid] by
/// building on [BoolGrid].
#[derive(Clone, Debug)]
pub struct ObstacleGrid {
    pub grid: BoolGrid,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for ObstacleGrid {
    fn default() -> ObstacleGrid {
        ObstacleGrid {
            grid: BoolGrid::default(),
            components: UnionFind::new(0),
            components_dirty: false,
        }
    }
}

impl ObstacleGrid {
    fn can_move_to(&self, pos: Point) -> bool {
        self.in_bounds(pos.x, pos.y) && !self.grid.get(pos.x as usize, pos.y as usize)
    }
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && self.grid.index_in_bounds(x as usize, y as usize)
    }
    /// The free, in-bounds cells one cardinal move away from `position`, in
    /// order north, south, west, east. The order is a traversal detail: it
    /// decides which of several equally short paths gets reported, never how
    /// long the reported path is.
    pub fn neighbours(&self, position: Point) -> Vec<Point> {
        // north, south, west, east
        [
            Point::new(position.x, position.y - 1),
            Point::new(position.x, position.y + 1),
            Point::new(position.x - 1, position.y),
            Point::new(position.x + 1, position.y),
        ]
        .into_iter()
        .filter(|p| self.can_move_to(*p))
        .collect::<Vec<Point>>()
    }
    /// Flattened index of an in-bounds point: `x + y * width`.
    pub fn get_ix_point(&self, point: &Point) -> usize {
        self.grid.get_ix(point.x as usize, point.y as usize)
    }
    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.get_ix_point(point))
    }
    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }
    /// Checks if start and goal are not on the same component. Out-of-bounds
    /// points are on no component and hence unreachable.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.in_bounds(start.x, start.y) && self.in_bounds(goal.x, goal.y) {
            let start_ix = self.get_ix_point(start);
            let goal_ix = self.get_ix_point(goal);
            if self.components.equiv(start_ix, goal_ix) {
                false
            } else {
                info!("{} and {} are not equivalent components", start_ix, goal_ix);
                true
            }
        } else {
            true
        }
    }
    /// Computes a shortest path from `start` to `end` as a sequence of cells,
    /// both endpoints included, using BFS over the four cardinal directions.
    /// A path with the minimum number of steps is guaranteed; which one of
    /// several equally short paths is reported follows from the neighbour
    /// order of [neighbours](Self::neighbours).
    ///
    /// If `start` equals `end` the single-element path is returned without
    /// looking at occupancy. A blocked `start` or `end` fails with
    /// [SearchError::InvalidStart] or [SearchError::InvalidEnd]. If no
    /// sequence of free cells connects the two, the search fails with
    /// [SearchError::Unreachable]; when the component structure is up to date
    /// (see [update](Self::update)) this case is decided without flooding the
    /// grid.
    ///
    /// # Panics
    ///
    /// Panics if `start` or `end` lie outside the grid. Callers translate
    /// their input to in-bounds coordinates before searching.
    pub fn shortest_path(&self, start: Point, end: Point) -> Result<Vec<Point>, SearchError> {
        if start == end {
            return Ok(vec![start]);
        }
        if self.grid.get_point(start) {
            return Err(SearchError::InvalidStart);
        }
        if self.grid.get_point(end) {
            return Err(SearchError::InvalidEnd);
        }
        if !self.components_dirty {
            if self.unreachable(&start, &end) {
                info!("{} is not reachable from {}", end, start);
                return Err(SearchError::Unreachable);
            }
            info!("{} is reachable from {}, computing path", end, start);
        }
        let ancestors = bfs_flood(&start, |p| self.neighbours(*p));
        reconstruct_path(&ancestors, &end).ok_or(SearchError::Unreachable)
    }
    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }
    /// Generates a new [UnionFind] structure and links up 4-connected free
    /// cells to the same components.
    pub fn generate_components(&mut self) {
        info!("Generating connected components");
        let w = self.grid.width;
        let h = self.grid.height;
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for x in 0..w {
            for y in 0..h {
                if !self.grid.get(x, y) {
                    let parent_ix = self.grid.get_ix(x, y);
                    let point = Point::new(x as i32, y as i32);
                    // Linking east and south covers the whole lattice.
                    let neighbours = vec![
                        Point::new(point.x + 1, point.y),
                        Point::new(point.x, point.y + 1),
                    ]
                    .into_iter()
                    .filter(|p| self.grid.point_in_bounds(*p) && !self.grid.get_point(*p))
                    .map(|p| self.grid.get_ix(p.x as usize, p.y as usize))
                    .collect::<Vec<usize>>();
                    for ix in neighbours {
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for ObstacleGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for y in 0..self.grid.height {
            let values = (0..self.grid.width)
                .map(|x| self.grid.get(x, y) as i32)
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}

impl Grid<bool> for ObstacleGrid {
    fn new(width: usize, height: usize, default_value: bool) -> Self {
        let mut obstacle_grid = ObstacleGrid {
            grid: BoolGrid::new(width, height, default_value),
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        // Components of a fresh grid are exact from the start, so a grid
        // built all-free does not report every pair of cells as disconnected.
        obstacle_grid.generate_components();
        obstacle_grid
    }
    fn get(&self, x: usize, y: usize) -> bool {
        self.grid.get(x, y)
    }
    /// Updates a position on the grid. Unblocking a cell joins the newly
    /// connected components; blocking one flags the component structure as
    /// dirty since a component may have broken apart.
    fn set(&mut self, x: usize, y: usize, blocked: bool) {
        let was_blocked = self.grid.get(x, y);
        self.grid.set(x, y, blocked);
        if blocked && !was_blocked {
            self.components_dirty = true;
        } else if !blocked && was_blocked {
            let ix = self.grid.get_ix(x, y);
            for p in self.neighbours(Point::new(x as i32, y as i32)) {
                self.components.union(ix, self.get_ix_point(&p));
            }
        }
    }
    fn width(&self) -> usize {
        self.grid.width()
    }
    fn height(&self) -> usize {
        self.grid.height()
    }
}
