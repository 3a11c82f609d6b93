//! Backend-neutral 2D draw commands.
//!
//! Frame rendering writes a flat list of commands; a [`Renderer`] replays
//! them onto a concrete surface (Canvas 2D in the browser, a recorder in
//! tests).
//!
//! [`Renderer`]: crate::renderer::traits::Renderer

use glam::DVec2;

/// RGBA color. Channels are 0-255, alpha is 0.0-1.0 to match CSS.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl DrawColor {
    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color with the given alpha value.
    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgba(...)` string for canvas style properties.
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }

    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// `#3b82f6`
    pub const EARTH_BLUE: Self = Self::rgb(59, 130, 246);
    /// `#94a3b8`
    pub const SLATE: Self = Self::rgb(148, 163, 184);
    /// `#f97316`
    pub const ORANGE: Self = Self::rgb(249, 115, 22);
    /// `#ef4444`
    pub const RED: Self = Self::rgb(239, 68, 68);
}

/// Soft shadow drawn around a filled shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub blur: f64,
    pub color: DrawColor,
}

/// One drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Clear the whole surface.
    Clear { width: f64, height: f64 },
    FillCircle {
        center: DVec2,
        radius: f64,
        color: DrawColor,
        glow: Option<Glow>,
    },
    StrokeCircle {
        center: DVec2,
        radius: f64,
        width: f64,
        color: DrawColor,
    },
    Line {
        from: DVec2,
        to: DVec2,
        width: f64,
        color: DrawColor,
    },
}

/// Per-frame command list. Cleared and refilled every frame.
#[derive(Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(1024),
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn clear_surface(&mut self, width: f64, height: f64) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    pub fn fill_circle(&mut self, center: DVec2, radius: f64, color: DrawColor) {
        self.commands.push(DrawCommand::FillCircle { center, radius, color, glow: None });
    }

    pub fn fill_circle_glow(&mut self, center: DVec2, radius: f64, color: DrawColor, glow: Glow) {
        self.commands.push(DrawCommand::FillCircle { center, radius, color, glow: Some(glow) });
    }

    pub fn stroke_circle(&mut self, center: DVec2, radius: f64, width: f64, color: DrawColor) {
        self.commands.push(DrawCommand::StrokeCircle { center, radius, width, color });
    }

    pub fn line(&mut self, from: DVec2, to: DVec2, width: f64, color: DrawColor) {
        self.commands.push(DrawCommand::Line { from, to, width, color });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_string() {
        assert_eq!(DrawColor::ORANGE.with_alpha(0.25).css(), "rgba(249, 115, 22, 0.25)");
        assert_eq!(DrawColor::WHITE.css(), "rgba(255, 255, 255, 1)");
    }

    #[test]
    fn list_records_in_order() {
        let mut list = DrawList::new();
        list.clear_surface(10.0, 10.0);
        list.line(DVec2::ZERO, DVec2::ONE, 1.0, DrawColor::WHITE);
        assert_eq!(list.len(), 2);
        assert!(matches!(list.commands()[0], DrawCommand::Clear { .. }));
        list.clear();
        assert!(list.is_empty());
    }
}
