use bytemuck::{Pod, Zeroable};

use crate::components::asteroid::Asteroid;

/// Per-asteroid state packed for zero-copy reads from JavaScript.
/// Wire format: 4 floats = 16 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct AsteroidInstance {
    /// X position in canvas pixels.
    pub x: f32,
    /// Y position in canvas pixels.
    pub y: f32,
    /// Render radius in pixels.
    pub size: f32,
    /// Hazard code: 0 = normal, 1 = near, 2 = hit.
    pub hazard: f32,
}

impl AsteroidInstance {
    pub const FLOATS: usize = 4;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

impl From<&Asteroid> for AsteroidInstance {
    fn from(a: &Asteroid) -> Self {
        Self {
            x: a.pos.x as f32,
            y: a.pos.y as f32,
            size: a.size as f32,
            hazard: a.hazard.code(),
        }
    }
}

/// Flat buffer of [`AsteroidInstance`]s, rebuilt after every update.
pub struct SnapshotBuffer {
    instances: Vec<AsteroidInstance>,
}

impl SnapshotBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    /// Repack from the current asteroid states.
    pub fn rebuild(&mut self, asteroids: &[Asteroid]) {
        self.instances.clear();
        self.instances.extend(asteroids.iter().map(AsteroidInstance::from));
    }

    pub fn instances(&self) -> &[AsteroidInstance] {
        &self.instances
    }

    /// The buffer viewed as raw floats.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Raw pointer to instance data for reads from WASM memory.
    pub fn as_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    /// Length in floats.
    pub fn float_len(&self) -> u32 {
        (self.instances.len() * AsteroidInstance::FLOATS) as u32
    }
}

impl Default for SnapshotBuffer {
    fn default() -> Self {
        Self::with_capacity(64)
    }
}
