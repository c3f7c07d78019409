pub mod disjoint_set;
pub mod grid;

use crate::error::MazeError;
pub use grid::Grid;

/// Cell coordinate `(x, y)`, with `x` the column and `y` the row.
pub type Coord = (u16, u16);

/// Cardinal step between grid-adjacent cells.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Down,
    Up,
    Right,
    Left,
}

impl Direction {
    /// Order in which the solvers try neighbors. Changing it changes which path DFS finds.
    pub const EXPLORATION_ORDER: [Direction; 4] = [
        Direction::Down,
        Direction::Up,
        Direction::Right,
        Direction::Left,
    ];

    fn bit(self) -> u8 {
        match self {
            Direction::Down => 0b0001,
            Direction::Up => 0b0010,
            Direction::Right => 0b0100,
            Direction::Left => 0b1000,
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
        }
    }

    /// Direction of the single step from `from` to `to`, if they are grid-adjacent.
    pub fn between(from: Coord, to: Coord) -> Option<Direction> {
        let (fx, fy) = from;
        let (tx, ty) = to;
        if fx == tx {
            if fy.checked_add(1) == Some(ty) {
                Some(Direction::Down)
            } else if ty.checked_add(1) == Some(fy) {
                Some(Direction::Up)
            } else {
                None
            }
        } else if fy == ty {
            if fx.checked_add(1) == Some(tx) {
                Some(Direction::Right)
            } else if tx.checked_add(1) == Some(fx) {
                Some(Direction::Left)
            } else {
                None
            }
        } else {
            None
        }
    }
}

/// Adjacency between two grid neighbors. An open edge has its wall removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    cell1: Coord,
    cell2: Coord,
    open: bool,
}

impl Edge {
    pub fn cells(&self) -> (Coord, Coord) {
        (self.cell1, self.cell2)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Order-insensitive match against a cell pair.
    pub fn joins(&self, a: Coord, b: Coord) -> bool {
        (self.cell1 == a && self.cell2 == b) || (self.cell1 == b && self.cell2 == a)
    }
}

/// A `width x height` grid graph. Every adjacency is an [`Edge`], closed until a generator opens it.
#[derive(Debug, Clone)]
pub struct Maze {
    width: u16,
    height: u16,
    /// All candidate edges, row-major, right neighbor before bottom neighbor
    edges: Vec<Edge>,
    /// Per-cell bitmask of directions with an open edge, kept in sync with `edges`
    passages: Grid<u8>,
}

impl Maze {
    /// Creates a maze with every wall standing.
    ///
    /// Returns [`MazeError::InvalidDimensions`] if either dimension is 0.
    pub fn new(width: u16, height: u16) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimensions { width, height });
        }

        let edges = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .flat_map(|(x, y)| {
                [
                    (x + 1 < width).then(|| Edge {
                        cell1: (x, y),
                        cell2: (x + 1, y),
                        open: false,
                    }),
                    (y + 1 < height).then(|| Edge {
                        cell1: (x, y),
                        cell2: (x, y + 1),
                        open: false,
                    }),
                ]
            })
            .flatten()
            .collect();

        Ok(Maze {
            width,
            height,
            edges,
            passages: Grid::new(width, height, 0),
        })
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Top-left cell, where every solve starts.
    pub fn start(&self) -> Coord {
        (0, 0)
    }

    /// Bottom-right cell, where every solve ends.
    pub fn goal(&self) -> Coord {
        (self.width - 1, self.height - 1)
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    /// All cell coordinates in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    /// Row-major index of a cell, as used by the disjoint set during generation.
    pub fn index_of(&self, coord: Coord) -> usize {
        coord.1 as usize * self.width as usize + coord.0 as usize
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn open_edge_count(&self) -> usize {
        self.edges.iter().filter(|edge| edge.open).count()
    }

    /// Removes the wall of the edge at `index` in [`Maze::edges`].
    ///
    /// # Panics
    /// If `index` is not a valid edge index.
    pub fn open_edge(&mut self, index: usize) {
        let edge = &mut self.edges[index];
        if edge.open {
            return;
        }
        edge.open = true;
        let (a, b) = (edge.cell1, edge.cell2);
        if let Some(dir) = Direction::between(a, b) {
            self.passages[a] |= dir.bit();
            self.passages[b] |= dir.opposite().bit();
        }
    }

    /// The neighbor one step from `coord` in `dir`, if inside the maze.
    pub fn neighbor(&self, coord: Coord, dir: Direction) -> Option<Coord> {
        let (x, y) = coord;
        let next = match dir {
            Direction::Down => (x, y.checked_add(1)?),
            Direction::Up => (x, y.checked_sub(1)?),
            Direction::Right => (x.checked_add(1)?, y),
            Direction::Left => (x.checked_sub(1)?, y),
        };
        self.is_in_bounds(next).then_some(next)
    }

    /// True iff an open edge directly joins `a` and `b`, in either order.
    ///
    /// Only direct adjacency is tested, not reachability. Cells outside the maze are never connected.
    pub fn is_connected(&self, a: Coord, b: Coord) -> bool {
        if !self.is_in_bounds(a) || !self.is_in_bounds(b) {
            return false;
        }
        match Direction::between(a, b) {
            Some(dir) => self.passages[a] & dir.bit() != 0,
            None => false,
        }
    }
}

/// Get neighbors of a cell, in [`Direction::EXPLORATION_ORDER`].
/// A neighbor is a cell one step away in a cardinal direction, walls ignored.
pub fn get_neighbors(coord: Coord, maze: &Maze) -> impl Iterator<Item = Coord> + '_ {
    let origin = maze.is_in_bounds(coord).then_some(coord);
    Direction::EXPLORATION_ORDER
        .into_iter()
        .filter_map(move |dir| maze.neighbor(origin?, dir))
}
