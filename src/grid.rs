use crate::LifeError;
use rand::{Rng, SeedableRng};

/// Square field of live/dead cells with toroidal topology.
///
/// Cells live in a single flat buffer of `size * size` booleans indexed
/// `x * size + y`, so a snapshot is one allocation and [`Grid::replace`]
/// is one `Vec` swap. The buffer never changes length after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates an all-dead `size x size` grid.
    pub fn new(size: usize) -> Result<Self, LifeError> {
        if size == 0 {
            return Err(LifeError::InvalidSize { size });
        }
        Ok(Self {
            size,
            cells: vec![false; size * size],
        })
    }

    /// Creates a grid from an existing flat buffer indexed `x * size + y`.
    pub fn from_cells(size: usize, cells: Vec<bool>) -> Result<Self, LifeError> {
        if size == 0 {
            return Err(LifeError::InvalidSize { size });
        }
        if cells.len() != size * size {
            return Err(LifeError::InvalidGrid {
                size,
                len: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// State of cell `(x, y)`. Panics on out-of-range coordinates;
    /// use [`Grid::toggle`] for the checked mutation path.
    pub fn get(&self, x: usize, y: usize) -> bool {
        debug_assert!(x < self.size && y < self.size);
        self.cells[x * self.size + y]
    }

    /// Flips cell `(x, y)` and returns its new state.
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<bool, LifeError> {
        if x >= self.size || y >= self.size {
            return Err(LifeError::IndexOutOfRange {
                x,
                y,
                size: self.size,
            });
        }
        let cell = &mut self.cells[x * self.size + y];
        *cell = !*cell;
        Ok(*cell)
    }

    /// Independent deep copy. The engine reads a snapshot while computing
    /// the next generation, so a concurrent-looking replace can never be
    /// observed half-applied.
    pub fn snapshot(&self) -> Grid {
        self.clone()
    }

    /// Swaps in a whole new generation atomically. The grid is unchanged
    /// if the dimensions do not match.
    pub fn replace(&mut self, next: Grid) -> Result<(), LifeError> {
        if next.size != self.size {
            return Err(LifeError::DimensionMismatch {
                expected: self.size,
                found: next.size,
            });
        }
        self.cells = next.cells;
        Ok(())
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Fills the grid with random cells at the given live density.
    ///
    /// `seed` makes the fill reproducible; `None` seeds from entropy.
    pub fn randomize(&mut self, density: f64, seed: Option<u64>) {
        let mut rng = match seed {
            Some(s) => rand_chacha::ChaCha8Rng::seed_from_u64(s),
            None => rand_chacha::ChaCha8Rng::from_entropy(),
        };
        for cell in &mut self.cells {
            *cell = rng.gen_bool(density);
        }
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}
