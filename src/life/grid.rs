use thiserror::Error;

/// Errors that can occur when allocating a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("Grid dimensions must be positive, got {width}x{height}")]
    EmptyDimension { width: usize, height: usize },
}

/// Offsets of the eight cells surrounding a cell.
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Maps a signed coordinate onto a flat index of a `width` x `height` torus.
///
/// Uses euclidean modulo, so `x = -1` lands in column `width - 1` and
/// `y = height` lands in row 0. Both dimensions must be positive.
pub fn wrap_index(x: i64, y: i64, width: usize, height: usize) -> usize {
    let w = to_signed(width);
    let h = to_signed(height);
    let col = x.rem_euclid(w);
    let row = y.rem_euclid(h);
    // rem_euclid with a positive modulus is always in [0, modulus).
    (row as usize) * width + (col as usize)
}

fn to_signed(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// One generation of cells on a toroidal board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Allocates an all-dead grid.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![false; width * height],
        })
    }

    /// Builds a grid with the given cells alive. Coordinates wrap.
    pub fn with_live_cells(
        width: usize,
        height: usize,
        live: &[(i64, i64)],
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(width, height)?;
        for &(x, y) in live {
            grid.set(x, y, true);
        }
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn index(&self, x: i64, y: i64) -> usize {
        wrap_index(x, y, self.width, self.height)
    }

    pub fn is_alive(&self, x: i64, y: i64) -> bool {
        self.cells[self.index(x, y)]
    }

    pub fn set(&mut self, x: i64, y: i64, alive: bool) {
        let idx = self.index(x, y);
        self.cells[idx] = alive;
    }

    /// Counts live cells among the eight wrap-around neighbors of `(x, y)`.
    pub fn live_neighbors(&self, x: i64, y: i64) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dx, dy)| self.is_alive(x + dx, y + dy))
            .count() as u8
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn is_extinct(&self) -> bool {
        !self.cells.iter().any(|&alive| alive)
    }

    /// Marks every cell dead.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Row-major view of the cells.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Iterates `(x, y, alive)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &alive)| (idx % width, idx / width, alive))
    }
}
