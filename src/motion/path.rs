//! Scroll progress to position mapping.
//!
//! The spotlight images ride a quadratic arc that bulges out from the left
//! edge of the viewport. Each image owns a fixed-width window of the overall
//! progress, and windows start `gap` apart so images enter one after another.

use kurbo::{Point, QuadBez};

/// Linear remap of `value` from `[in_min, in_max]` to `[out_min, out_max]`.
/// Not clamped; callers pick the range they evaluate in.
pub fn map_range(in_min: f64, in_max: f64, out_min: f64, out_max: f64, value: f64) -> f64 {
    if in_max == in_min {
        return out_min;
    }
    out_min + (value - in_min) * (out_max - out_min) / (in_max - in_min)
}

/// `B(t) = (1-t)^2 P0 + 2(1-t)t P1 + t^2 P2`. Total over the real line.
pub fn bezier_point(p0: Point, p1: Point, p2: Point, t: f64) -> Point {
    let u = 1.0 - t;
    Point::new(
        u * u * p0.x + 2.0 * u * t * p1.x + t * t * p2.x,
        u * u * p0.y + 2.0 * u * t * p1.y + t * t * p2.y,
    )
}

/// The arc image path, fixed for the lifetime of one spotlight setup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageArc {
    curve: QuadBez,
}

impl ImageArc {
    const START_X: f64 = 100.0;
    const OVERSHOOT: f64 = 200.0;

    /// Control points come from the viewport at setup time and are not
    /// refreshed when the window is resized within the same session.
    pub fn from_viewport(viewport_height: f64, arc_radius: f64) -> Self {
        let p0 = Point::new(Self::START_X, -Self::OVERSHOOT);
        let p1 = Point::new(Self::START_X + arc_radius, viewport_height / 2.0);
        let p2 = Point::new(Self::START_X, viewport_height + Self::OVERSHOOT);
        Self::new(p0, p1, p2)
    }

    pub fn new(p0: Point, p1: Point, p2: Point) -> Self {
        Self {
            curve: QuadBez::new(p0, p1, p2),
        }
    }

    #[cfg(test)]
    pub fn control_points(&self) -> (Point, Point, Point) {
        (self.curve.p0, self.curve.p1, self.curve.p2)
    }

    pub fn point_at(&self, t: f64) -> Point {
        bezier_point(self.curve.p0, self.curve.p1, self.curve.p2, t)
    }
}

/// Where one item sits relative to its own animation window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ItemProgress {
    /// Overall progress has not reached the item's start offset.
    Pending,
    /// Local progress in `[0, 1]`.
    Active(f64),
    /// Past the end of the item's window.
    Finished,
}

#[cfg(test)]
impl ItemProgress {
    /// `-1` for pending, `2` for finished, otherwise the local progress.
    pub fn raw(self) -> f64 {
        match self {
            Self::Pending => -1.0,
            Self::Active(t) => t,
            Self::Finished => 2.0,
        }
    }

    pub fn is_visible(self) -> bool {
        matches!(self, Self::Active(_))
    }
}

/// Evenly staggered animation windows: item `i` starts at `i * gap` and runs
/// for `speed` of the overall progress. Windows overlap when `gap < speed`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    pub gap: f64,
    pub speed: f64,
}

impl Stagger {
    pub fn new(gap: f64, speed: f64) -> Self {
        Self { gap, speed }
    }

    pub fn start_offset(&self, index: usize) -> f64 {
        index as f64 * self.gap
    }

    /// `(overall - i * gap) / speed`, unclamped.
    pub fn local(&self, index: usize, overall: f64) -> f64 {
        (overall - self.start_offset(index)) / self.speed
    }

    pub fn item_progress(&self, index: usize, overall: f64) -> ItemProgress {
        let start = self.start_offset(index);
        if overall < start {
            return ItemProgress::Pending;
        }
        if overall > start + self.speed {
            return ItemProgress::Finished;
        }
        ItemProgress::Active(self.local(index, overall).clamp(0.0, 1.0))
    }
}
