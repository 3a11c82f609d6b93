use crate::api::config::SimConfig;
use crate::api::types::{FrameStats, Viewport};
use crate::bridge::snapshot::SnapshotBuffer;
use crate::core::field::OrbitField;
use crate::input::controls::SimControls;
use crate::input::queue::{ControlEvent, ControlQueue};
use crate::renderer::traits::Renderer;
use crate::systems::draw::DrawList;
use crate::systems::render::render_frame;

/// Headless frame driver: owns the field, the live controls, the pending
/// control events and the per-frame output buffers.
///
/// The host calls [`tick`](Self::tick) once per display frame.
pub struct OrbitTracker {
    field: OrbitField,
    controls: SimControls,
    queue: ControlQueue,
    draw_list: DrawList,
    snapshot: SnapshotBuffer,
    stats: FrameStats,
    frame: u64,
}

impl OrbitTracker {
    pub fn new(config: SimConfig, viewport: Viewport, seed: u64) -> Self {
        let field = OrbitField::new(config, viewport, seed);
        let snapshot = SnapshotBuffer::with_capacity(field.asteroids().len());
        let stats = field.stats();
        Self {
            field,
            controls: SimControls::default(),
            queue: ControlQueue::new(),
            draw_list: DrawList::new(),
            snapshot,
            stats,
            frame: 0,
        }
    }

    /// Queue a control event; it takes effect on the next tick.
    pub fn push_control(&mut self, event: ControlEvent) {
        self.queue.push(event);
    }

    /// Apply pending controls, then update and render one frame unless paused.
    /// Returns the fresh stats, or `None` when the frame was skipped.
    pub fn tick(&mut self, renderer: &mut dyn Renderer) -> Option<FrameStats> {
        self.apply_controls(renderer);
        self.frame += 1;

        if self.controls.paused {
            return None;
        }

        self.stats = self.field.step(&self.controls);
        render_frame(&self.field, &mut self.draw_list);
        renderer.draw(&self.draw_list);
        self.snapshot.rebuild(self.field.asteroids());
        Some(self.stats)
    }

    fn apply_controls(&mut self, renderer: &mut dyn Renderer) {
        for event in self.queue.drain() {
            match event {
                ControlEvent::ToggleTrails => {
                    self.controls.toggle_trails();
                }
                ControlEvent::TogglePause => {
                    self.controls.toggle_pause();
                }
                ControlEvent::SetSpeedSlider(raw) => {
                    self.controls.set_speed_from_slider(raw);
                }
                ControlEvent::Resize { width, height } => {
                    let width = width.max(0.0);
                    let height = height.max(0.0);
                    self.field.resize(Viewport::new(width, height));
                    renderer.resize(width as u32, height as u32);
                    log::info!("orbit view resized to {width}x{height}");
                }
            }
        }
    }

    pub fn controls(&self) -> &SimControls {
        &self.controls
    }

    pub fn field(&self) -> &OrbitField {
        &self.field
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    pub fn snapshot(&self) -> &SnapshotBuffer {
        &self.snapshot
    }

    /// Frames ticked so far, paused ones included.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::draw::DrawCommand;

    #[derive(Default)]
    struct Recorder {
        frames: usize,
        last: Vec<DrawCommand>,
        size: Option<(u32, u32)>,
    }

    impl Renderer for Recorder {
        fn backend(&self) -> &'static str {
            "recorder"
        }

        fn draw(&mut self, frame: &DrawList) {
            self.frames += 1;
            self.last = frame.commands().to_vec();
        }

        fn resize(&mut self, width: u32, height: u32) {
            self.size = Some((width, height));
        }
    }

    fn tracker() -> OrbitTracker {
        OrbitTracker::new(SimConfig::default(), Viewport::new(800.0, 600.0), 77)
    }

    #[test]
    fn tick_renders_and_reports_stats() {
        let mut t = tracker();
        let mut r = Recorder::default();
        let stats = t.tick(&mut r).unwrap();
        assert_eq!(stats.tracked, 35);
        assert_eq!(r.frames, 1);
        assert_eq!(t.snapshot().instances().len(), 35);
    }

    #[test]
    fn paused_ticks_skip_render_but_keep_counting() {
        let mut t = tracker();
        let mut r = Recorder::default();
        t.tick(&mut r);
        t.push_control(ControlEvent::TogglePause);
        for _ in 0..10 {
            assert!(t.tick(&mut r).is_none());
        }
        assert_eq!(r.frames, 1);
        assert_eq!(t.frame_count(), 11);

        t.push_control(ControlEvent::TogglePause);
        assert!(t.tick(&mut r).is_some());
        assert_eq!(r.frames, 2);
    }

    #[test]
    fn controls_apply_on_next_tick() {
        let mut t = tracker();
        let mut r = Recorder::default();
        t.push_control(ControlEvent::SetSpeedSlider(100.0));
        t.push_control(ControlEvent::ToggleTrails);
        assert_eq!(t.controls().speed_multiplier, 1.0);
        t.tick(&mut r);
        assert_eq!(t.controls().speed_multiplier, 2.5);
        assert!(!t.controls().show_trails);
        assert!(t.field().asteroids().iter().all(|a| a.trail.is_empty()));
        assert!(t.field().asteroids().iter().all(|a| a.speed_multiplier == 2.5));
    }

    #[test]
    fn resize_reaches_field_and_renderer() {
        let mut t = tracker();
        let mut r = Recorder::default();
        t.push_control(ControlEvent::Resize { width: 1024.0, height: 768.0 });
        t.tick(&mut r);
        assert_eq!(r.size, Some((1024, 768)));
        assert_eq!(t.field().stars().len(), 200);
        assert!(matches!(r.last[0], DrawCommand::Clear { width, .. } if width == 1024.0));
    }
}
