//! Renderer trait: the seam between frame commands and a drawing surface.
//!
//! The browser bridge implements it on a Canvas 2D context. Anything else
//! that can replay a [`DrawList`] (an offscreen raster, a test recorder)
//! plugs in the same way.

use crate::systems::draw::DrawList;

/// Drawing backend for orbit frames.
///
/// # Example Implementation
///
/// ```ignore
/// struct Canvas2dRenderer {
///     ctx: web_sys::CanvasRenderingContext2d,
/// }
///
/// impl Renderer for Canvas2dRenderer {
///     fn backend(&self) -> &'static str { "canvas2d" }
///
///     fn draw(&mut self, frame: &DrawList) {
///         // Replay commands onto the context...
///     }
///
///     fn resize(&mut self, width: u32, height: u32) {
///         // Resize the backing store...
///     }
/// }
/// ```
pub trait Renderer {
    /// Backend identifier (e.g., "canvas2d").
    fn backend(&self) -> &'static str;

    /// Replay one frame of draw commands.
    fn draw(&mut self, frame: &DrawList);

    /// Handle a surface resize.
    fn resize(&mut self, width: u32, height: u32);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::draw::{DrawColor, DrawCommand};
    use glam::DVec2;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<Vec<DrawCommand>>,
        size: (u32, u32),
    }

    impl Renderer for Recorder {
        fn backend(&self) -> &'static str {
            "recorder"
        }

        fn draw(&mut self, frame: &DrawList) {
            self.frames.push(frame.commands().to_vec());
        }

        fn resize(&mut self, width: u32, height: u32) {
            self.size = (width, height);
        }
    }

    #[test]
    fn renderer_is_object_safe() {
        let mut recorder = Recorder::default();
        {
            let renderer: &mut dyn Renderer = &mut recorder;
            let mut list = DrawList::new();
            list.fill_circle(DVec2::ZERO, 1.0, DrawColor::WHITE);
            renderer.resize(640, 480);
            renderer.draw(&list);
            assert_eq!(renderer.backend(), "recorder");
        }
        assert_eq!(recorder.frames.len(), 1);
        assert_eq!(recorder.size, (640, 480));
    }
}
