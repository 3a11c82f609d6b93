pub mod draw;
pub mod render;
