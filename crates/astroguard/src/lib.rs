pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod feed;
pub mod backend;

// Re-export key types at crate root for convenience
pub use api::config::{ConfigError, SimConfig, Span};
pub use api::tracker::OrbitTracker;
pub use api::types::{FrameStats, Viewport};
pub use components::asteroid::{Asteroid, HazardState};
pub use components::star::Star;
pub use components::trail::Trail;
pub use core::field::OrbitField;
pub use core::rng::Rng;
pub use input::controls::{slider_to_multiplier, SimControls};
pub use input::queue::{ControlEvent, ControlQueue};
pub use systems::draw::{DrawColor, DrawCommand, DrawList, Glow};
pub use systems::render::render_frame;
pub use renderer::traits::Renderer;
pub use bridge::snapshot::{AsteroidInstance, SnapshotBuffer};
pub use feed::{fallback_records, parse_feed, FeedError, FeedSource, ListEntry, NeoRecord};
pub use backend::BackendConfig;
pub use backend::status::ConnectionStatus;
pub use backend::upload::{UploadError, UploadFlow, UploadState};
