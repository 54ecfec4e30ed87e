//! Decorative markers drifting down the page background.
//!
//! Everything here is independent of the DOM: the component in
//! `app::background` feeds viewport sizes in and reads paths out, and tests
//! drive the same state with a seeded RNG and a fake viewport.

pub mod viewport;

pub use viewport::{
    ResizeSubscription, ViewportError, ViewportSize, ViewportSource, ViewportTracker,
};

use rand::Rng;

/// Markers start just above the top edge.
pub const START_Y: f64 = -20.0;
pub const ROTATION_DEG: f64 = 360.0;
pub const MIN_DURATION_SECS: f64 = 10.0;
pub const MAX_DURATION_SECS: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    /// Font Awesome icon name, without the `fa-` prefix.
    pub symbol: &'static str,
    pub start_delay_secs: f64,
}

impl Marker {
    const fn new(symbol: &'static str, start_delay_secs: f64) -> Self {
        Self {
            symbol,
            start_delay_secs,
        }
    }
}

pub static MARKERS: [Marker; 8] = [
    Marker::new("hashtag", 0.0),
    Marker::new("chart-line", 2.0),
    Marker::new("bullhorn", 4.0),
    Marker::new("comments", 6.0),
    Marker::new("thumbs-up", 8.0),
    Marker::new("users", 10.0),
    Marker::new("share-alt", 12.0),
    Marker::new("search", 14.0),
];

/// One loop of a marker's fall, in viewport pixels.
///
/// A path is played exactly once. `generation` is unique per draw, so the
/// element animating it can be rebuilt whenever a new path replaces it and
/// the animation starts over from `(x_start, y_start)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerPath {
    pub x_start: f64,
    pub x_end: f64,
    pub y_start: f64,
    pub y_end: f64,
    pub rotation_deg: f64,
    pub duration_secs: f64,
    /// Wait before this loop starts; only a marker's first loop waits.
    pub delay_secs: f64,
    pub generation: u64,
}

impl MarkerPath {
    /// Inline style consumed by the `marker-fall` keyframes.
    pub fn css_style(&self) -> String {
        format!(
            "--marker-x-start: {:.1}px; --marker-x-end: {:.1}px; \
             --marker-y-start: {:.1}px; --marker-y-end: {:.1}px; \
             --marker-rotation: {:.0}deg; \
             animation-duration: {:.2}s; animation-delay: {}s;",
            self.x_start,
            self.x_end,
            self.y_start,
            self.y_end,
            self.rotation_deg,
            self.duration_secs,
            self.delay_secs,
        )
    }
}

/// Draws independent horizontal start and end offsets in `[0, width)`.
pub fn next_target<R: Rng>(rng: &mut R, width: u32) -> (f64, f64) {
    if width == 0 {
        return (0.0, 0.0);
    }
    let width = width as f64;
    (rng.gen_range(0.0..width), rng.gen_range(0.0..width))
}

pub fn next_duration<R: Rng>(rng: &mut R) -> f64 {
    rng.gen_range(MIN_DURATION_SECS..MAX_DURATION_SECS)
}

pub fn next_path<R: Rng>(rng: &mut R, viewport: ViewportSize) -> Option<MarkerPath> {
    if !viewport.is_measured() {
        return None;
    }
    let (x_start, x_end) = next_target(rng, viewport.width);
    Some(MarkerPath {
        x_start,
        x_end,
        y_start: START_Y,
        y_end: viewport.height as f64,
        rotation_deg: ROTATION_DEG,
        duration_secs: next_duration(rng),
        delay_secs: 0.0,
        generation: 0,
    })
}

/// Current viewport plus the path each marker is animating along.
///
/// Paths are redrawn for every marker on resize, and for a single marker
/// each time its loop finishes. Every redraw starts a new loop.
pub struct FloatingField<R> {
    viewport: ViewportSize,
    paths: Vec<Option<MarkerPath>>,
    generation: u64,
    rng: R,
}

impl<R: Rng> FloatingField<R> {
    pub fn new(rng: R) -> Self {
        Self {
            viewport: ViewportSize::UNINITIALIZED,
            paths: vec![None; MARKERS.len()],
            generation: 0,
            rng,
        }
    }

    fn draw(&mut self, delay_secs: f64) -> Option<MarkerPath> {
        let mut path = next_path(&mut self.rng, self.viewport)?;
        self.generation += 1;
        path.delay_secs = delay_secs;
        path.generation = self.generation;
        Some(path)
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    pub fn is_rendering(&self) -> bool {
        self.viewport.is_measured()
    }

    /// Redraws every marker against `viewport`. A marker that hasn't
    /// finished its first loop keeps its start delay.
    pub fn resize(&mut self, viewport: ViewportSize) {
        self.viewport = viewport;
        for (index, marker) in MARKERS.iter().enumerate() {
            let delay_secs = match self.paths[index] {
                Some(path) => path.delay_secs,
                None => marker.start_delay_secs,
            };
            self.paths[index] = self.draw(delay_secs);
        }
    }

    /// Called when marker `index` finishes a loop.
    pub fn cycle(&mut self, index: usize) {
        if index >= self.paths.len() {
            return;
        }
        self.paths[index] = self.draw(0.0);
    }

    pub fn path(&self, index: usize) -> Option<MarkerPath> {
        self.paths.get(index).copied().flatten()
    }

    /// Markers paired with their paths; empty until a real size is known.
    pub fn paths(&self) -> Vec<(&'static Marker, MarkerPath)> {
        MARKERS
            .iter()
            .zip(self.paths.iter())
            .filter_map(|(marker, path)| path.map(|p| (marker, p)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn field() -> FloatingField<StdRng> {
        FloatingField::new(StdRng::seed_from_u64(7))
    }

    fn assert_within(path: &MarkerPath, viewport: ViewportSize) {
        let width = viewport.width as f64;
        assert!((0.0..width).contains(&path.x_start), "{path:?}");
        assert!((0.0..width).contains(&path.x_end), "{path:?}");
        assert_eq!(path.y_start, START_Y);
        assert_eq!(path.y_end, viewport.height as f64);
        assert_eq!(path.rotation_deg, 360.0);
        assert!((MIN_DURATION_SECS..MAX_DURATION_SECS).contains(&path.duration_secs));
    }

    #[test]
    fn test_uninitialized_renders_nothing() {
        let mut field = field();
        assert!(!field.is_rendering());
        assert!(field.paths().is_empty());

        field.resize(ViewportSize::UNINITIALIZED);
        assert!(field.paths().is_empty());

        field.cycle(0);
        assert_eq!(field.path(0), None);
    }

    #[test]
    fn test_measured_renders_every_marker() {
        let mut field = field();
        let viewport = ViewportSize::new(1024, 768);
        field.resize(viewport);

        assert!(field.is_rendering());
        let paths = field.paths();
        assert_eq!(paths.len(), 8);
        for ((marker, path), expected) in paths.iter().zip(MARKERS.iter()) {
            assert_eq!(*marker, expected);
            assert_within(path, viewport);
        }
    }

    #[test]
    fn test_resize_redraws_against_new_size() {
        let mut field = field();
        field.resize(ViewportSize::new(800, 600));
        let before = field.paths();

        let smaller = ViewportSize::new(400, 300);
        field.resize(smaller);
        assert_eq!(field.viewport(), smaller);
        let after = field.paths();
        assert_eq!(after.len(), before.len());
        for (_, path) in &after {
            assert_within(path, smaller);
        }
        assert_ne!(before, after);
    }

    #[test]
    fn test_resize_to_zero_hides_markers() {
        let mut field = field();
        field.resize(ViewportSize::new(800, 600));
        field.resize(ViewportSize::new(800, 0));
        assert!(!field.is_rendering());
        assert!(field.paths().is_empty());
    }

    #[test]
    fn test_cycle_redraws_only_one_marker() {
        let mut field = field();
        let viewport = ViewportSize::new(1280, 720);
        field.resize(viewport);
        let before = field.paths();

        field.cycle(3);
        let after = field.paths();
        for (i, (b, a)) in before.iter().zip(after.iter()).enumerate() {
            if i == 3 {
                assert_ne!(b.1, a.1);
                assert_within(&a.1, viewport);
            } else {
                assert_eq!(b.1, a.1);
            }
        }

        // out of range is ignored
        field.cycle(MARKERS.len());
        assert_eq!(field.paths(), after);
    }

    #[test]
    fn test_draw_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let width = 37;
        for _ in 0..1000 {
            let (x_start, x_end) = next_target(&mut rng, width);
            assert!((0.0..width as f64).contains(&x_start));
            assert!((0.0..width as f64).contains(&x_end));
            let duration = next_duration(&mut rng);
            assert!((10.0..30.0).contains(&duration));
        }
    }

    #[test]
    fn test_zero_width_target() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(next_target(&mut rng, 0), (0.0, 0.0));
        assert_eq!(next_path(&mut rng, ViewportSize::new(0, 500)), None);
    }

    #[test]
    fn test_seeded_draws_are_deterministic() {
        let viewport = ViewportSize::new(1024, 768);
        let a = next_path(&mut StdRng::seed_from_u64(99), viewport);
        let b = next_path(&mut StdRng::seed_from_u64(99), viewport);
        assert!(a.is_some());
        assert_eq!(a, b);
    }

    #[test]
    fn test_marker_delays_are_staggered() {
        assert_eq!(MARKERS.len(), 8);
        assert!(MARKERS
            .windows(2)
            .all(|w| w[0].start_delay_secs <= w[1].start_delay_secs));
        for (i, marker) in MARKERS.iter().enumerate() {
            assert_eq!(marker.start_delay_secs, 2.0 * i as f64);
        }
        let mut symbols = MARKERS.iter().map(|m| m.symbol).collect::<Vec<_>>();
        symbols.sort();
        symbols.dedup();
        assert_eq!(symbols.len(), MARKERS.len());
    }

    #[test]
    fn test_css_style() {
        let path = MarkerPath {
            x_start: 12.0,
            x_end: 300.2,
            y_start: START_Y,
            y_end: 768.0,
            rotation_deg: ROTATION_DEG,
            duration_secs: 14.5,
            delay_secs: MARKERS[2].start_delay_secs,
            generation: 3,
        };
        let style = path.css_style();
        assert!(style.contains("--marker-x-start: 12.0px;"));
        assert!(style.contains("--marker-x-end: 300.2px;"));
        assert!(style.contains("--marker-y-start: -20.0px;"));
        assert!(style.contains("--marker-y-end: 768.0px;"));
        assert!(style.contains("--marker-rotation: 360deg;"));
        assert!(style.contains("animation-duration: 14.50s;"));
        assert!(style.contains("animation-delay: 4s;"));
    }

    #[test]
    fn test_redraw_starts_a_new_loop() {
        let mut field = field();
        field.resize(ViewportSize::new(1024, 768));
        let first = field.paths();
        for ((marker, path), expected) in first.iter().zip(MARKERS.iter()) {
            assert_eq!(*marker, expected);
            assert_eq!(path.delay_secs, expected.start_delay_secs);
        }

        // a finished loop starts over right away
        field.cycle(0);
        let cycled = field.path(0).unwrap();
        assert!(cycled.generation > first[0].1.generation);
        assert_eq!(cycled.delay_secs, 0.0);
        assert!(cycled.css_style().contains("animation-delay: 0s;"));

        // resizing restarts every loop; markers still waiting keep their delay
        field.resize(ViewportSize::new(640, 480));
        let resized = field.paths();
        assert_eq!(resized[0].1.delay_secs, 0.0);
        for i in 1..MARKERS.len() {
            assert_eq!(resized[i].1.delay_secs, MARKERS[i].start_delay_secs);
        }
        let mut generations = first
            .iter()
            .chain(resized.iter())
            .map(|(_, p)| p.generation)
            .chain(std::iter::once(cycled.generation))
            .collect::<Vec<_>>();
        generations.sort();
        generations.dedup();
        assert_eq!(generations.len(), 2 * MARKERS.len() + 1);
    }

    #[test]
    fn test_hidden_markers_restart_with_their_delay() {
        let mut field = field();
        field.resize(ViewportSize::new(800, 600));
        field.cycle(5);
        field.resize(ViewportSize::UNINITIALIZED);
        field.resize(ViewportSize::new(800, 600));
        assert_eq!(field.path(5).unwrap().delay_secs, MARKERS[5].start_delay_secs);
    }
}
