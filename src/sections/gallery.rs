//! Horizontal project strip on the work page: the section pins and vertical
//! scrolling slides the strip left until its right edge meets the viewport.

use log::warn;

use crate::motion::{Style, StyleSink, Target};
use crate::scroll::TriggerBounds;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gallery {
    pub scroll_distance: f64,
}

impl Gallery {
    /// `None` (with a warning) when the strip already fits the viewport.
    pub fn plan(strip_width: f64, viewport_width: f64) -> Option<Self> {
        let scroll_distance = strip_width - viewport_width;
        if scroll_distance <= 0.0 {
            warn!("Gallery strip ({strip_width}px) is not wider than the viewport ({viewport_width}px)");
            return None;
        }
        Some(Self { scroll_distance })
    }

    pub fn trigger_bounds(&self, section_top: f64) -> TriggerBounds {
        TriggerBounds::pinned(section_top, self.scroll_distance)
    }

    pub fn update(&self, progress: f64, sink: &mut dyn StyleSink) {
        sink.apply(Target::GalleryStrip, Style::px_x(-progress * self.scroll_distance));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::style::{RecordingSink, StyleKey};

    #[test]
    fn skips_when_strip_fits() {
        assert_eq!(Gallery::plan(1200.0, 1440.0), None);
        assert_eq!(Gallery::plan(1440.0, 1440.0), None);
    }

    #[test]
    fn pin_length_matches_overflow() {
        let g = Gallery::plan(4000.0, 1000.0).unwrap();
        let bounds = g.trigger_bounds(600.0);
        assert_eq!(bounds.start, 600.0);
        assert_eq!(bounds.end, 3600.0);

        let mut sink = RecordingSink::new();
        g.update(0.5, &mut sink);
        assert_eq!(sink.last_f64(Target::GalleryStrip, StyleKey::TranslateX), Some(-1500.0));
    }
}
