#[cfg(test)]
mod tests {
    use torus_life::{step, Grid};

    fn grid_with(size: usize, live: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(size).unwrap();
        for &(x, y) in live {
            grid.toggle(x, y).unwrap();
        }
        grid
    }

    #[test]
    fn all_dead_stays_dead() {
        for size in [1, 2, 5, 15, 40] {
            let grid = Grid::new(size).unwrap();
            let next = step(&grid).unwrap();
            assert_eq!(next.population(), 0, "spontaneous life at size {size}");
        }
    }

    #[test]
    fn lone_cell_dies_for_every_size() {
        for size in 1..=12 {
            let grid = grid_with(size, &[(size / 2, size / 2)]);
            let next = step(&grid).unwrap();
            assert_eq!(next.population(), 0, "lone cell survived at size {size}");
        }
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        // Vertical line at column 2 of a 5x5 torus.
        let vertical = grid_with(5, &[(2, 1), (2, 2), (2, 3)]);
        let horizontal = grid_with(5, &[(1, 2), (2, 2), (3, 2)]);

        let after_one = step(&vertical).unwrap();
        assert_eq!(after_one, horizontal);

        let after_two = step(&after_one).unwrap();
        assert_eq!(after_two, vertical);
    }

    #[test]
    fn blinker_wraps_across_the_edge() {
        // Vertical line on the x == 0 edge: births wrap to column 4.
        let on_edge = grid_with(5, &[(0, 1), (0, 2), (0, 3)]);
        let expected = grid_with(5, &[(4, 2), (0, 2), (1, 2)]);
        assert_eq!(step(&on_edge).unwrap(), expected);
    }

    #[test]
    fn corner_cluster_is_stable_through_the_wrap() {
        // Three corners of the torus are mutual neighbors; the fourth has
        // exactly 3 live neighbors and births, forming a wrapped block.
        let corners = grid_with(5, &[(0, 0), (0, 4), (4, 0)]);
        let block = grid_with(5, &[(0, 0), (0, 4), (4, 0), (4, 4)]);
        assert_eq!(step(&corners).unwrap(), block);
        assert_eq!(step(&block).unwrap(), block);
    }

    #[test]
    fn step_is_pure() {
        let mut grid = Grid::new(20).unwrap();
        grid.randomize(0.4, Some(42));
        let before = grid.snapshot();

        let a = step(&grid).unwrap();
        let b = step(&grid).unwrap();

        assert_eq!(grid, before, "step mutated its input");
        assert_eq!(a, b, "identical inputs produced different generations");

        // The outputs are independent allocations.
        let mut c = a.clone();
        c.toggle(0, 0).unwrap();
        assert_ne!(c, b);
    }

    #[test]
    fn underpopulated_pair_dies() {
        let pair = grid_with(7, &[(3, 3), (3, 4)]);
        assert_eq!(step(&pair).unwrap().population(), 0);
    }

    #[test]
    fn birth_needs_exactly_three_neighbors() {
        // An L of three live cells births the cell completing the block.
        let ell = grid_with(7, &[(2, 2), (2, 3), (3, 2)]);
        let next = step(&ell).unwrap();
        assert!(next.get(3, 3));
        // A diagonal neighbor pair gives only 2; no birth anywhere else.
        assert_eq!(next.population(), 4);
    }
}
