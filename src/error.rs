use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("invalid maze dimensions {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    #[error("invalid render geometry: wall thickness {wall_thickness}, open space {open_space}")]
    InvalidGeometry { wall_thickness: u32, open_space: u32 },

    /// coordinate outside of a `width` x `height` grid
    #[error("cell ({x}, {y}) is outside of {width}x{height} grid")]
    OutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}
