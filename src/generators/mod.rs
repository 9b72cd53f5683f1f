pub mod backtracker;

use crate::grids::wall_grid::WallGrid;

pub trait Generator {
    /// Advances generation by a single step. Does nothing once done.
    fn step_generation(&mut self);
    fn generate_maze(&mut self) -> &WallGrid;
    fn is_done(&self) -> bool;
    fn grid(&self) -> &WallGrid;
}
