mod renderer;
mod transform;

pub use renderer::Renderer;
pub use transform::{
    cell_to_screen_px, centered_screen_position, visible_cell_range, CellRangeInclusive, Viewport,
};
