use crate::motion::{Ease, Style, StyleSink, Target};
use crate::scroll::TriggerBounds;

const RISE_PX: f64 = 120.0;
const STAGGER: f64 = 0.25;

/// Hero headings rising into place as the block below the hero scrolls in.
/// Each heading gets a unit-long slot on a shared timeline, slots offset by
/// the stagger, and the timeline is scrubbed by scroll progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroRise {
    count: usize,
}

impl HeroRise {
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    /// From the block's top at 60% of the viewport to its top at 40%.
    pub fn trigger_bounds(block_top: f64, viewport_height: f64) -> TriggerBounds {
        TriggerBounds::new(block_top - 0.6 * viewport_height, block_top - 0.4 * viewport_height)
    }

    pub fn timeline_length(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        1.0 + STAGGER * (self.count - 1) as f64
    }

    pub fn heading_offset(&self, index: usize, progress: f64) -> f64 {
        let t = progress * self.timeline_length() - STAGGER * index as f64;
        RISE_PX * (1.0 - Ease::Power1Out.apply(t))
    }

    pub fn update(&self, progress: f64, sink: &mut dyn StyleSink) {
        for i in 0..self.count {
            sink.apply(Target::HeroHeading(i), Style::px_y(self.heading_offset(i, progress)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::style::{RecordingSink, StyleKey};

    #[test]
    fn headings_rise_in_order() {
        let hero = HeroRise::new(3);
        assert_eq!(hero.timeline_length(), 1.5);

        let mut sink = RecordingSink::new();
        hero.update(0.0, &mut sink);
        assert_eq!(sink.last_f64(Target::HeroHeading(2), StyleKey::TranslateY), Some(120.0));

        hero.update(0.5, &mut sink);
        let y: Vec<f64> = (0..3)
            .map(|i| sink.last_f64(Target::HeroHeading(i), StyleKey::TranslateY).unwrap())
            .collect();
        assert!(y[0] < y[1] && y[1] < y[2]);

        hero.update(1.0, &mut sink);
        assert_eq!(sink.last_f64(Target::HeroHeading(2), StyleKey::TranslateY), Some(0.0));
    }

    #[test]
    fn bounds_follow_viewport_marks() {
        let b = HeroRise::trigger_bounds(1000.0, 800.0);
        assert_eq!(b.start, 520.0);
        assert_eq!(b.end, 680.0);
    }
}
