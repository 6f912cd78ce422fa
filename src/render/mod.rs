//! Terminal drawing: a retained cell buffer the game paints into, and the
//! ratatui renderer that presents it.

pub mod canvas;
pub mod renderer;
pub mod sprites;

pub use canvas::{Canvas, CellBuffer, Paint};
pub use renderer::Renderer;
pub use sprites::{draw_all, draw_apple, draw_snake, draw_step};
