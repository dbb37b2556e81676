//! Programmatic smooth scrolling for in-page navigation.

use crate::motion::Ease;

pub const DEFAULT_NAV_HEIGHT: f64 = 80.0;
pub const NAV_SCROLL_SECONDS: f64 = 1.5;

/// What a navigation link points at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavHref {
    /// Another page; let the browser navigate.
    External(String),
    /// An element id on this page, without the leading `#`.
    Anchor(String),
}

impl NavHref {
    pub fn classify(href: &str) -> Self {
        if href.ends_with(".html") || href.contains('/') {
            return Self::External(href.to_string());
        }
        Self::Anchor(href.trim_start_matches('#').to_string())
    }
}

/// Document offset to scroll to so the target clears a fixed nav bar.
/// Used when the smooth scroller is unavailable.
pub fn native_offset_top(rect_top: f64, page_y_offset: f64, nav_height: f64) -> f64 {
    rect_top + page_y_offset - nav_height
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTo {
    pub from: f64,
    pub to: f64,
    pub start: f64,
    pub duration: f64,
    pub ease: Ease,
}

impl ScrollTo {
    pub fn sample(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = ((now - self.start) / self.duration).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * self.ease.apply(t)
    }

    pub fn is_done(&self, now: f64) -> bool {
        now - self.start >= self.duration
    }
}

/// Drives at most one scroll animation at a time; a new request replaces
/// the running one, starting from wherever the page currently is.
#[derive(Default)]
pub struct SmoothScroller {
    active: Option<ScrollTo>,
}

impl SmoothScroller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll so that `target_top` (document px) ends up `offset` px from the
    /// viewport top. Negative offsets leave room for a fixed header.
    pub fn scroll_to(&mut self, current: f64, target_top: f64, offset: f64, duration: f64, now: f64) {
        self.active = Some(ScrollTo {
            from: current,
            to: (target_top + offset).max(0.0),
            start: now,
            duration,
            ease: Ease::ExpoOut,
        });
    }

    pub fn cancel(&mut self) {
        self.active = None;
    }

    pub fn is_scrolling(&self) -> bool {
        self.active.is_some()
    }

    /// Position to apply this frame, if a scroll animation is running.
    pub fn tick(&mut self, now: f64) -> Option<f64> {
        let anim = self.active?;
        let y = anim.sample(now);
        if anim.is_done(now) {
            self.active = None;
        }
        Some(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_links() {
        assert_eq!(NavHref::classify("#contact"), NavHref::Anchor("contact".into()));
        assert_eq!(NavHref::classify("work.html"), NavHref::External("work.html".into()));
        assert_eq!(NavHref::classify("/work"), NavHref::External("/work".into()));
    }

    #[test]
    fn native_fallback_subtracts_nav() {
        assert_eq!(native_offset_top(300.0, 1200.0, DEFAULT_NAV_HEIGHT), 1420.0);
    }

    #[test]
    fn scroll_animation_lands_on_offset_target() {
        let mut s = SmoothScroller::new();
        s.scroll_to(0.0, 2000.0, -80.0, NAV_SCROLL_SECONDS, 1.0);
        let mid = s.tick(1.5).unwrap();
        assert!(mid > 0.0 && mid < 1920.0);
        assert_eq!(s.tick(2.5), Some(1920.0));
        assert!(!s.is_scrolling());
        assert_eq!(s.tick(3.0), None);
    }

    #[test]
    fn target_is_never_negative() {
        let mut s = SmoothScroller::new();
        s.scroll_to(500.0, 20.0, -80.0, 0.0, 0.0);
        assert_eq!(s.tick(0.0), Some(0.0));
    }
}
