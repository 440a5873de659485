use crate::{Grid, LifeError};

/// Computes the next generation of `current` under B3/S23 on a torus.
///
/// Pure function: the input is never mutated, the output is freshly
/// allocated, and identical inputs always produce identical outputs.
/// Every neighbor count reads the pre-step grid, so the result does not
/// depend on the order cells are visited in.
pub fn step(current: &Grid) -> Result<Grid, LifeError> {
    let size = current.size();
    if size == 0 || current.cells().len() != size * size {
        return Err(LifeError::InvalidGrid {
            size,
            len: current.cells().len(),
        });
    }

    let mut next = vec![false; size * size];
    for x in 0..size {
        for y in 0..size {
            let neibs = count_neibs(current, x, y);
            next[x * size + y] = if current.get(x, y) {
                neibs == 2 || neibs == 3
            } else {
                neibs == 3
            };
        }
    }
    Grid::from_cells(size, next)
}

/// Live cells among the 8 Moore neighbors of `(x, y)`, with both axes
/// wrapped toroidally. The predecessor/successor form avoids modulo on
/// negative intermediates.
fn count_neibs(grid: &Grid, x: usize, y: usize) -> usize {
    let size = grid.size();
    let x1 = if x == 0 { size - 1 } else { x - 1 };
    let x2 = if x == size - 1 { 0 } else { x + 1 };
    let y1 = if y == 0 { size - 1 } else { y - 1 };
    let y2 = if y == size - 1 { 0 } else { y + 1 };
    grid.get(x1, y1) as usize
        + grid.get(x, y1) as usize
        + grid.get(x2, y1) as usize
        + grid.get(x1, y) as usize
        + grid.get(x2, y) as usize
        + grid.get(x1, y2) as usize
        + grid.get(x, y2) as usize
        + grid.get(x2, y2) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(size: usize, live: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(size).unwrap();
        for &(x, y) in live {
            grid.toggle(x, y).unwrap();
        }
        grid
    }

    #[test]
    fn neighbor_count_wraps_both_axes() {
        // Live cells in the far corner and edges are neighbors of the origin.
        let grid = grid_with(5, &[(4, 4), (4, 0), (0, 4)]);
        assert_eq!(count_neibs(&grid, 0, 0), 3);
    }

    #[test]
    fn neighbor_count_on_size_one_grid() {
        // On a 1x1 torus every neighbor offset lands back on the cell.
        let grid = grid_with(1, &[(0, 0)]);
        assert_eq!(count_neibs(&grid, 0, 0), 8);
    }

    #[test]
    fn block_is_a_still_life() {
        let block = grid_with(6, &[(2, 2), (2, 3), (3, 2), (3, 3)]);
        assert_eq!(step(&block).unwrap(), block);
    }

    #[test]
    fn overcrowded_cell_dies() {
        // Center of a full 3x3 patch has 8 neighbors.
        let mut grid = Grid::new(5).unwrap();
        for x in 1..4 {
            for y in 1..4 {
                grid.toggle(x, y).unwrap();
            }
        }
        assert!(!step(&grid).unwrap().get(2, 2));
    }
}
