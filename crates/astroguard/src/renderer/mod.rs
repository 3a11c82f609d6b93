pub mod traits;

pub use traits::Renderer;
