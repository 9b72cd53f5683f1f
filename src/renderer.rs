use std::convert::TryFrom;

use image::{GrayImage, Luma};
use log::debug;

use crate::error::MazeError;
use crate::grids::wall_grid::WallGrid;

pub const WALL: Luma<u8> = Luma([0]);
pub const OPEN: Luma<u8> = Luma([255]);

/// Pixel sizes of the drawn maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    wall_thickness: u32,
    open_space: u32,
}

impl Geometry {
    pub fn new(wall_thickness: u32, open_space: u32) -> Result<Self, MazeError> {
        if wall_thickness == 0 || open_space == 0 {
            return Err(MazeError::InvalidGeometry {
                wall_thickness,
                open_space,
            });
        }

        Ok(Self {
            wall_thickness,
            open_space,
        })
    }

    #[inline]
    pub fn wall_thickness(&self) -> u32 {
        self.wall_thickness
    }

    #[inline]
    pub fn open_space(&self) -> u32 {
        self.open_space
    }

    #[inline]
    pub fn cell_size(&self) -> u32 {
        self.wall_thickness + self.open_space
    }

    fn invalid(&self) -> MazeError {
        MazeError::InvalidGeometry {
            wall_thickness: self.wall_thickness,
            open_space: self.open_space,
        }
    }

    /// Pixel size of the whole image along an axis holding `cells` cells.
    fn span(&self, cells: usize) -> Result<u32, MazeError> {
        u32::try_from(cells)
            .ok()
            .and_then(|cells| self.wall_thickness.checked_add(self.open_space)?.checked_mul(cells))
            .and_then(|size| size.checked_add(self.wall_thickness))
            .ok_or_else(|| self.invalid())
    }
}

/// Draws `grid` in black on white.
///
/// Every cell owns the corner post at its top left plus its top and left walls, so
/// shared walls and corners are painted exactly once. The right and bottom edges of
/// the grid and the final corner post are drawn separately.
pub fn render(grid: &WallGrid, geometry: Geometry) -> Result<GrayImage, MazeError> {
    let image_width = geometry.span(grid.width())?;
    let image_height = geometry.span(grid.height())?;
    debug!(
        "rendering {}x{} maze into {}x{} image",
        grid.width(),
        grid.height(),
        image_width,
        image_height
    );

    let mut image = GrayImage::from_pixel(image_width, image_height, OPEN);

    let wall = geometry.wall_thickness();
    let open = geometry.open_space();
    let cell = geometry.cell_size();
    let last_cell_x = image_width - wall;
    let last_cell_y = image_height - wall;
    let last_x = grid.width() - 1;
    let last_y = grid.height() - 1;

    for y in 0..grid.height() {
        let image_y = y as u32 * cell;

        for x in 0..grid.width() {
            let image_x = x as u32 * cell;
            paint_box(&mut image, image_x, image_y, wall, wall);

            if !grid.can_go_up(x, y)? {
                paint_box(&mut image, image_x + wall, image_y, open, wall);
            }

            if !grid.can_go_left(x, y)? {
                paint_box(&mut image, image_x, image_y + wall, wall, open);
            }
        }

        if !grid.can_go_right(last_x, y)? {
            paint_box(&mut image, last_cell_x, image_y, wall, cell);
        }
    }

    for x in 0..grid.width() {
        if !grid.can_go_down(x, last_y)? {
            paint_box(&mut image, x as u32 * cell, last_cell_y, cell, wall);
        }
    }

    paint_box(&mut image, last_cell_x, last_cell_y, wall, wall);

    Ok(image)
}

fn paint_box(image: &mut GrayImage, x: u32, y: u32, width: u32, height: u32) {
    for py in y..y + height {
        for px in x..x + width {
            image.put_pixel(px, py, WALL);
        }
    }
}
