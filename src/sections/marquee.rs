//! Endless horizontal marquee.
//!
//! The track holds two back-to-back copies of the item sequence and slides
//! left by exactly one copy's width, then jumps back to zero. The jump is
//! invisible because the second copy sits where the first one started.

use log::warn;

use crate::config::MarqueeConfig;
use crate::motion::tween::{Repeat, Tween};
use crate::motion::{Ease, Prop, StyleSink, Target, TweenEngine};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarqueeLoop {
    /// Width of one copy of the sequence, margins included.
    pub total_width: f64,
    /// Seconds per loop.
    pub duration: f64,
}

/// How many of the current children are originals. Once cloned, the track
/// holds exactly twice the original count.
pub fn original_count(child_count: usize, already_cloned: bool) -> usize {
    if already_cloned {
        child_count / 2
    } else {
        child_count
    }
}

/// Number of clones to append. Cloning happens once: a track that already
/// holds more children than originals is left alone.
pub fn clones_needed(child_count: usize, original_count: usize) -> usize {
    if child_count == original_count {
        original_count
    } else {
        0
    }
}

impl MarqueeLoop {
    /// `None` when there is nothing to scroll.
    pub fn measure(item_widths: &[f64], config: MarqueeConfig) -> Option<Self> {
        if item_widths.is_empty() {
            warn!("No marquee items found");
            return None;
        }
        let total_width: f64 = item_widths.iter().map(|w| w + config.item_margin).sum();
        if config.speed <= 0.0 {
            warn!("Marquee speed must be positive, got {}", config.speed);
            return None;
        }
        Some(Self {
            total_width,
            duration: total_width / config.speed,
        })
    }

    /// Reset the track to zero and start a fresh loop, replacing any loop
    /// already running on it.
    pub fn start(&self, now: f64, tweens: &mut TweenEngine, sink: &mut dyn StyleSink) {
        tweens.kill_tweens_of(Target::MarqueeTrack);
        tweens.set(Target::MarqueeTrack, Prop::OffsetX(0.0), sink);
        tweens.add(Tween {
            target: Target::MarqueeTrack,
            from: Prop::OffsetX(0.0),
            to: Prop::OffsetX(-self.total_width),
            start: now,
            delay: 0.0,
            duration: self.duration,
            ease: Ease::Linear,
            repeat: Repeat::Forever,
        });
    }

    #[cfg(test)]
    pub fn offset_at(&self, elapsed: f64) -> f64 {
        if self.duration <= 0.0 {
            return 0.0;
        }
        -self.total_width * ((elapsed % self.duration) / self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::style::{RecordingSink, StyleKey};

    #[test]
    fn width_includes_margins() {
        let m = MarqueeLoop::measure(&[120.0, 80.0, 200.0], MarqueeConfig::default()).unwrap();
        assert_eq!(m.total_width, 490.0);
        assert_eq!(m.duration, 9.8);
    }

    #[test]
    fn empty_track_does_nothing() {
        assert_eq!(MarqueeLoop::measure(&[], MarqueeConfig::default()), None);
    }

    #[test]
    fn clones_only_once() {
        let originals = 5;
        let first = clones_needed(5, originals);
        assert_eq!(first, 5);
        let children = 5 + first;
        assert_eq!(clones_needed(children, original_count(children, true)), 0);
        // Re-running setup again still adds nothing.
        assert_eq!(clones_needed(children, originals), 0);
    }

    #[test]
    fn loop_wraps_back_to_zero() {
        let m = MarqueeLoop::measure(&[70.0, 70.0], MarqueeConfig::default()).unwrap();
        assert_eq!(m.total_width, 200.0);
        assert_eq!(m.duration, 4.0);
        assert_eq!(m.offset_at(0.0), 0.0);
        assert_eq!(m.offset_at(2.0), -100.0);
        assert_eq!(m.offset_at(4.0), 0.0);
        assert_eq!(m.offset_at(5.0), -50.0);
    }

    #[test]
    fn restart_replaces_running_loop() {
        let m = MarqueeLoop::measure(&[170.0], MarqueeConfig::default()).unwrap();
        let mut tweens = TweenEngine::new();
        let mut sink = RecordingSink::new();
        m.start(0.0, &mut tweens, &mut sink);
        m.start(1.0, &mut tweens, &mut sink);
        assert_eq!(tweens.len(), 1);

        tweens.tick(3.0, &mut sink);
        let x = sink.last_f64(Target::MarqueeTrack, StyleKey::TranslateX).unwrap();
        assert!((x - m.offset_at(2.0)).abs() < 1e-9);
    }
}
