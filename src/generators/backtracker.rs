use log::{debug, trace};
use rand::Rng;

use crate::generators::Generator;
use crate::grids::wall_grid::WallGrid;
use crate::grids::Direction;

/// Randomized depth first carving, driven by an explicit trail instead of recursion.
///
/// Each step pops a cell off the trail and scans the four directions starting from a
/// random one, carving into the first unvisited neighbor it finds. Taking the first
/// match rather than a uniformly random one favours long winding corridors.
pub struct Backtracker<R: Rng> {
    grid: WallGrid,
    rng: R,
    visited: Vec<bool>,
    trail: Vec<(usize, usize)>,
    carved: usize,
    pub done: bool,
}

impl<R: Rng> Backtracker<R> {
    pub fn new(mut grid: WallGrid, mut rng: R) -> Self {
        grid.set_all_walls(true);

        let (width, height) = (grid.width(), grid.height());
        let mut visited = vec![false; width * height];

        let start = (rng.gen_range(0, width), rng.gen_range(0, height));
        visited[start.1 * width + start.0] = true;
        debug!("carving {}x{} maze from {:?}", width, height, start);

        Self {
            grid,
            rng,
            visited,
            trail: vec![start],
            carved: 0,
            done: false,
        }
    }

    pub fn into_grid(self) -> WallGrid {
        self.grid
    }

    /// Walls cleared so far.
    pub fn carved(&self) -> usize {
        self.carved
    }

    #[inline]
    fn was_visited(&self, cell: (usize, usize)) -> bool {
        self.visited[cell.1 * self.grid.width() + cell.0]
    }

    #[inline]
    fn visit(&mut self, cell: (usize, usize)) {
        let width = self.grid.width();
        self.visited[cell.1 * width + cell.0] = true;
    }
}

impl<R: Rng> Generator for Backtracker<R> {
    fn step_generation(&mut self) {
        let position = match self.trail.pop() {
            Some(position) => position,
            None => {
                if !self.done {
                    debug!("maze done after {} carves", self.carved);
                }
                self.done = true;
                return;
            }
        };

        let start: usize = self.rng.gen_range(0, 4);
        let next = (start..start + 4).map(Direction::from).find_map(|dir| {
            self.grid
                .neighbor_of(position.0, position.1, dir)
                .filter(|neighbor| !self.was_visited(*neighbor))
                .map(|neighbor| (dir, neighbor))
        });

        // nothing left to explore here, so it stays off the trail
        let (dir, next_position) = match next {
            Some(next) => next,
            None => return,
        };

        // both cells were just checked to be inside the grid
        if self
            .grid
            .set_wall(position.0, position.1, dir, false)
            .is_err()
        {
            return;
        }
        trace!("carved {:?} from {:?}", dir, position);

        self.carved += 1;
        self.visit(next_position);
        self.trail.push(position);
        self.trail.push(next_position);
    }

    fn generate_maze(&mut self) -> &WallGrid {
        while !self.done {
            self.step_generation();
        }

        &self.grid
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn grid(&self) -> &WallGrid {
        &self.grid
    }
}

#[cfg(test)]
mod test_backtracker {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::BTreeSet;

    fn generate(width: usize, height: usize, seed: u64) -> WallGrid {
        let grid = WallGrid::with_dims(width, height).unwrap();
        let mut generator = Backtracker::new(grid, StdRng::seed_from_u64(seed));
        generator.generate_maze();
        assert!(generator.is_done());
        generator.into_grid()
    }

    fn reachable(grid: &WallGrid) -> usize {
        let mut seen = vec![false; grid.width() * grid.height()];
        let mut stack = vec![(0, 0)];
        seen[0] = true;
        let mut count = 1;

        while let Some((x, y)) = stack.pop() {
            for dir in Direction::ALL.iter() {
                if !grid.can_go(x, y, *dir).unwrap() {
                    continue;
                }
                let (nx, ny) = grid.neighbor_of(x, y, *dir).unwrap();
                if !seen[ny * grid.width() + nx] {
                    seen[ny * grid.width() + nx] = true;
                    count += 1;
                    stack.push((nx, ny));
                }
            }
        }

        count
    }

    fn open_edges(grid: &WallGrid) -> BTreeSet<(usize, usize, bool)> {
        let mut edges = BTreeSet::new();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if grid.can_go_right(x, y).unwrap() {
                    edges.insert((x, y, true));
                }
                if grid.can_go_down(x, y).unwrap() {
                    edges.insert((x, y, false));
                }
            }
        }
        edges
    }

    #[test]
    fn generates_perfect_mazes() {
        for (seed, (width, height)) in [(1, 1), (1, 7), (9, 1), (2, 2), (16, 16), (31, 12)]
            .iter()
            .enumerate()
        {
            let grid = generate(*width, *height, seed as u64);

            assert_eq!(grid.open_edge_count(), width * height - 1);
            assert_eq!(reachable(&grid), width * height);
        }
    }

    #[test]
    fn outer_wall_stays_closed() {
        let grid = generate(12, 9, 42);

        for x in 0..12 {
            assert!(!grid.can_go_up(x, 0).unwrap());
            assert!(!grid.can_go_down(x, 8).unwrap());
        }
        for y in 0..9 {
            assert!(!grid.can_go_left(0, y).unwrap());
            assert!(!grid.can_go_right(11, y).unwrap());
        }
    }

    #[test]
    fn walls_are_symmetric() {
        let grid = generate(14, 11, 7);

        for y in 0..11 {
            for x in 0..14 {
                if x + 1 < 14 {
                    assert_eq!(
                        grid.can_go_right(x, y).unwrap(),
                        grid.can_go_left(x + 1, y).unwrap()
                    );
                }
                if y + 1 < 11 {
                    assert_eq!(
                        grid.can_go_down(x, y).unwrap(),
                        grid.can_go_up(x, y + 1).unwrap()
                    );
                }
            }
        }
    }

    #[test]
    fn same_seed_same_maze() {
        let first = generate(20, 15, 1234);
        let second = generate(20, 15, 1234);

        assert_eq!(open_edges(&first), open_edges(&second));
        assert_eq!(first, second);
    }

    #[test]
    fn queries_are_idempotent() {
        let grid = generate(6, 6, 99);

        for y in 0..6 {
            for x in 0..6 {
                for dir in Direction::ALL.iter() {
                    let first = grid.can_go(x, y, *dir).unwrap();
                    assert_eq!(grid.can_go(x, y, *dir).unwrap(), first);
                }
            }
        }
    }

    #[test]
    fn single_cell_has_no_passages() {
        let grid = generate(1, 1, 3);

        assert_eq!(grid.open_edge_count(), 0);
        assert!(!grid.can_go_up(0, 0).unwrap());
        assert!(!grid.can_go_down(0, 0).unwrap());
        assert!(!grid.can_go_left(0, 0).unwrap());
        assert!(!grid.can_go_right(0, 0).unwrap());
    }

    #[test]
    fn resets_a_carved_grid() {
        let mut grid = WallGrid::with_dims(5, 5).unwrap();
        grid.set_all_walls(false);

        let mut generator = Backtracker::new(grid, StdRng::seed_from_u64(5));
        assert_eq!(generator.grid().open_edge_count(), 0);

        generator.generate_maze();
        assert_eq!(generator.grid().open_edge_count(), 24);
        assert!(!generator.grid().can_go_left(0, 0).unwrap());
    }

    #[test]
    fn steps_one_carve_at_a_time() {
        let grid = WallGrid::with_dims(8, 8).unwrap();
        let mut generator = Backtracker::new(grid, StdRng::seed_from_u64(11));

        let mut steps = 0;
        while !generator.is_done() {
            let before = generator.carved();
            generator.step_generation();
            assert!(generator.carved() - before <= 1);
            assert_eq!(generator.grid().open_edge_count(), generator.carved());
            steps += 1;
        }

        assert_eq!(generator.carved(), 63);
        // one step per push onto the trail, plus the final pop of an empty trail
        assert_eq!(steps, 1 + 2 * 63 + 1);

        generator.step_generation();
        assert_eq!(generator.carved(), 63);
    }
}
