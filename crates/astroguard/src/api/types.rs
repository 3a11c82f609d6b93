use bytemuck::{Pod, Zeroable};

/// Canvas size in pixels. The orbit center (Earth) sits in the middle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> glam::DVec2 {
        glam::DVec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Counters shown next to the canvas after each frame.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct FrameStats {
    /// Total asteroids in the field.
    pub tracked: u32,
    /// Asteroids whose hazard state is not normal.
    pub hazardous: u32,
}
