//! Time-based tweens advanced once per animation frame.
//!
//! Scroll-scrubbed styles are written straight into a sink; everything that
//! has its own duration (the sticky card flip, title reveals, the marquee
//! loop, the cursor follower) goes through a [`TweenEngine`].

use std::collections::HashMap;

use kurbo::Point;

use super::ease::Ease;
use super::style::{Corners, Length, Style, StyleSink, Target};

/// A property value a tween interpolates. The variant decides which style
/// properties get written.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Prop {
    /// Translate x and y, px.
    Position(Point),
    OffsetX(f64),
    OffsetY(f64),
    /// Translate x in percent of the element's own width.
    CharOffset(f64),
    Opacity(f64),
    Scale(f64),
    RotateY(f64),
    RotateZ(f64),
    Gap(f64),
    Radius(Corners),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Position,
    OffsetX,
    OffsetY,
    CharOffset,
    Opacity,
    Scale,
    RotateY,
    RotateZ,
    Gap,
    Radius,
}

impl Prop {
    pub fn channel(&self) -> Channel {
        match self {
            Self::Position(_) => Channel::Position,
            Self::OffsetX(_) => Channel::OffsetX,
            Self::OffsetY(_) => Channel::OffsetY,
            Self::CharOffset(_) => Channel::CharOffset,
            Self::Opacity(_) => Channel::Opacity,
            Self::Scale(_) => Channel::Scale,
            Self::RotateY(_) => Channel::RotateY,
            Self::RotateZ(_) => Channel::RotateZ,
            Self::Gap(_) => Channel::Gap,
            Self::Radius(_) => Channel::Radius,
        }
    }

    /// Value assumed for a channel nothing has written yet.
    pub fn resting(channel: Channel) -> Self {
        match channel {
            Channel::Position => Self::Position(Point::ZERO),
            Channel::OffsetX => Self::OffsetX(0.0),
            Channel::OffsetY => Self::OffsetY(0.0),
            Channel::CharOffset => Self::CharOffset(0.0),
            Channel::Opacity => Self::Opacity(1.0),
            Channel::Scale => Self::Scale(1.0),
            Channel::RotateY => Self::RotateY(0.0),
            Channel::RotateZ => Self::RotateZ(0.0),
            Channel::Gap => Self::Gap(0.0),
            Channel::Radius => Self::Radius(Corners::uniform(0.0)),
        }
    }

    /// Interpolate towards `to`. Mismatched variants snap to `to`.
    pub fn lerp(self, to: Prop, t: f64) -> Prop {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        match (self, to) {
            (Self::Position(a), Self::Position(b)) => Self::Position(a.lerp(b, t)),
            (Self::OffsetX(a), Self::OffsetX(b)) => Self::OffsetX(mix(a, b)),
            (Self::OffsetY(a), Self::OffsetY(b)) => Self::OffsetY(mix(a, b)),
            (Self::CharOffset(a), Self::CharOffset(b)) => Self::CharOffset(mix(a, b)),
            (Self::Opacity(a), Self::Opacity(b)) => Self::Opacity(mix(a, b)),
            (Self::Scale(a), Self::Scale(b)) => Self::Scale(mix(a, b)),
            (Self::RotateY(a), Self::RotateY(b)) => Self::RotateY(mix(a, b)),
            (Self::RotateZ(a), Self::RotateZ(b)) => Self::RotateZ(mix(a, b)),
            (Self::Gap(a), Self::Gap(b)) => Self::Gap(mix(a, b)),
            (Self::Radius(a), Self::Radius(b)) => Self::Radius(a.lerp(b, t)),
            (_, to) => to,
        }
    }

    pub fn write(self, target: Target, sink: &mut dyn StyleSink) {
        match self {
            Self::Position(p) => {
                sink.apply(target, Style::px_x(p.x));
                sink.apply(target, Style::px_y(p.y));
            }
            Self::OffsetX(x) => sink.apply(target, Style::px_x(x)),
            Self::OffsetY(y) => sink.apply(target, Style::px_y(y)),
            Self::CharOffset(x) => sink.apply(target, Style::TranslateX(Length::Percent(x))),
            Self::Opacity(v) => sink.apply(target, Style::Opacity(v)),
            Self::Scale(v) => sink.apply(target, Style::Scale(v)),
            Self::RotateY(v) => sink.apply(target, Style::RotateY(v)),
            Self::RotateZ(v) => sink.apply(target, Style::RotateZ(v)),
            Self::Gap(v) => sink.apply(target, Style::GapPx(v)),
            Self::Radius(c) => sink.apply(target, Style::Radius(c)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    Once,
    /// Restart from `from` every `duration` seconds, with no easing across
    /// the wrap.
    Forever,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub target: Target,
    pub from: Prop,
    pub to: Prop,
    /// Engine time the tween was created, seconds.
    pub start: f64,
    pub delay: f64,
    pub duration: f64,
    pub ease: Ease,
    pub repeat: Repeat,
}

impl Tween {
    /// Normalized time at `now`, or `None` while still in the delay.
    fn time_at(&self, now: f64) -> Option<f64> {
        let local = now - self.start - self.delay;
        if local < 0.0 {
            return None;
        }
        if self.duration <= 0.0 {
            return Some(1.0);
        }
        Some(match self.repeat {
            Repeat::Once => (local / self.duration).min(1.0),
            Repeat::Forever => (local % self.duration) / self.duration,
        })
    }

    pub fn sample(&self, now: f64) -> Option<Prop> {
        let t = self.time_at(now)?;
        Some(self.from.lerp(self.to, self.ease.apply(t)))
    }

    pub fn is_done(&self, now: f64) -> bool {
        self.repeat == Repeat::Once && self.time_at(now).map_or(false, |t| t >= 1.0)
    }
}

/// Duration, delay and easing for a `to` tween. `stagger` offsets each
/// target of a group by that many seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    pub duration: f64,
    pub delay: f64,
    pub stagger: f64,
    pub ease: Ease,
}

impl Timing {
    pub fn new(duration: f64, ease: Ease) -> Self {
        Self {
            duration,
            delay: 0.0,
            stagger: 0.0,
            ease,
        }
    }

    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn stagger(mut self, stagger: f64) -> Self {
        self.stagger = stagger;
        self
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::new(0.5, Ease::Power1Out)
    }
}

#[derive(Default)]
pub struct TweenEngine {
    active: Vec<Tween>,
    current: HashMap<(Target, Channel), Prop>,
}

impl TweenEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a value now and remember it as the starting point for later
    /// tweens. Kills any tween running on the same channel.
    pub fn set(&mut self, target: Target, value: Prop, sink: &mut dyn StyleSink) {
        let channel = value.channel();
        self.active
            .retain(|t| !(t.target == target && t.to.channel() == channel));
        self.current.insert((target, channel), value);
        value.write(target, sink);
    }

    /// Tween from the last written value (or the channel's resting value)
    /// to `to`. A running tween on the same channel is replaced.
    pub fn to(&mut self, target: Target, to: Prop, timing: Timing, now: f64) {
        let channel = to.channel();
        let from = self
            .current
            .get(&(target, channel))
            .copied()
            .unwrap_or_else(|| Prop::resting(channel));
        self.add(Tween {
            target,
            from,
            to,
            start: now,
            delay: timing.delay,
            duration: timing.duration,
            ease: timing.ease,
            repeat: Repeat::Once,
        });
    }

    /// `to` over a group, each target delayed by `index * timing.stagger`.
    pub fn to_each(&mut self, targets: &[Target], to: Prop, timing: Timing, now: f64) {
        for (i, &target) in targets.iter().enumerate() {
            let staggered = timing.delay(timing.delay + i as f64 * timing.stagger);
            self.to(target, to, staggered, now);
        }
    }

    pub fn add(&mut self, tween: Tween) {
        let channel = tween.to.channel();
        self.active
            .retain(|t| !(t.target == tween.target && t.to.channel() == channel));
        self.active.push(tween);
    }

    pub fn kill_tweens_of(&mut self, target: Target) {
        self.active.retain(|t| t.target != target);
    }

    pub fn kill_all(&mut self) {
        self.active.clear();
    }

    /// Kill `target`'s tweens and drop its remembered values, as after its
    /// inline styles were cleared. Later tweens start from resting values.
    pub fn forget(&mut self, target: Target) {
        self.kill_tweens_of(target);
        self.current.retain(|(t, _), _| *t != target);
    }

    /// Advance every tween to `now`, write sampled values, and drop the
    /// finished ones after their final write.
    pub fn tick(&mut self, now: f64, sink: &mut dyn StyleSink) {
        for tween in &self.active {
            if let Some(value) = tween.sample(now) {
                self.current.insert((tween.target, value.channel()), value);
                value.write(tween.target, sink);
            }
        }
        self.active.retain(|t| !t.is_done(now));
    }
}

#[cfg(test)]
impl TweenEngine {
    pub fn is_animating(&self, target: Target) -> bool {
        self.active.iter().any(|t| t.target == target)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn current(&self, target: Target, channel: Channel) -> Option<Prop> {
        self.current.get(&(target, channel)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::style::{RecordingSink, StyleKey};

    fn opacity(sink: &RecordingSink, target: Target) -> f64 {
        sink.last_f64(target, StyleKey::Opacity).unwrap()
    }

    #[test]
    fn linear_tween_reaches_end_and_retires() {
        let mut engine = TweenEngine::new();
        let mut sink = RecordingSink::new();
        engine.set(Target::Cursor, Prop::Opacity(0.0), &mut sink);
        engine.to(Target::Cursor, Prop::Opacity(1.0), Timing::new(1.0, Ease::Linear), 10.0);

        engine.tick(10.5, &mut sink);
        assert!((opacity(&sink, Target::Cursor) - 0.5).abs() < 1e-9);
        assert_eq!(engine.len(), 1);

        engine.tick(11.2, &mut sink);
        assert_eq!(opacity(&sink, Target::Cursor), 1.0);
        assert!(engine.is_empty());
    }

    #[test]
    fn delayed_tween_waits() {
        let mut engine = TweenEngine::new();
        let mut sink = RecordingSink::new();
        engine.to(
            Target::StackDescription(0),
            Prop::OffsetX(0.0),
            Timing::new(0.75, Ease::Power4Out).delay(0.1),
            0.0,
        );
        engine.tick(0.05, &mut sink);
        assert!(sink.writes.is_empty());
        engine.tick(0.2, &mut sink);
        assert_eq!(sink.writes.len(), 1);
    }

    #[test]
    fn overwrite_starts_from_current_value() {
        let mut engine = TweenEngine::new();
        let mut sink = RecordingSink::new();
        engine.set(Target::CardContainer, Prop::Gap(0.0), &mut sink);
        engine.to(Target::CardContainer, Prop::Gap(20.0), Timing::new(1.0, Ease::Linear), 0.0);
        engine.tick(0.5, &mut sink);

        engine.to(Target::CardContainer, Prop::Gap(0.0), Timing::new(1.0, Ease::Linear), 0.5);
        assert_eq!(engine.len(), 1);
        engine.tick(1.0, &mut sink);
        // Halfway back from 10px.
        let gap = sink.last_f64(Target::CardContainer, StyleKey::GapPx).unwrap();
        assert!((gap - 5.0).abs() < 1e-9);
    }

    #[test]
    fn stagger_offsets_each_target() {
        let mut engine = TweenEngine::new();
        let mut sink = RecordingSink::new();
        let cards = [Target::Card(0), Target::Card(1), Target::Card(2)];
        engine.to_each(
            &cards,
            Prop::RotateY(180.0),
            Timing::new(0.75, Ease::Power3InOut).stagger(0.1),
            0.0,
        );
        engine.tick(0.05, &mut sink);
        assert_eq!(sink.count(Target::Card(0), StyleKey::RotateY), 1);
        assert_eq!(sink.count(Target::Card(1), StyleKey::RotateY), 0);

        engine.tick(1.0, &mut sink);
        for card in cards {
            assert_eq!(sink.last_f64(card, StyleKey::RotateY), Some(180.0));
        }
        assert!(engine.is_empty());
    }

    #[test]
    fn forever_wraps_to_start() {
        let mut engine = TweenEngine::new();
        let mut sink = RecordingSink::new();
        engine.add(Tween {
            target: Target::MarqueeTrack,
            from: Prop::OffsetX(0.0),
            to: Prop::OffsetX(-400.0),
            start: 0.0,
            delay: 0.0,
            duration: 8.0,
            ease: Ease::Linear,
            repeat: Repeat::Forever,
        });
        engine.tick(2.0, &mut sink);
        assert_eq!(sink.last_f64(Target::MarqueeTrack, StyleKey::TranslateX), Some(-100.0));
        engine.tick(10.0, &mut sink);
        assert_eq!(sink.last_f64(Target::MarqueeTrack, StyleKey::TranslateX), Some(-100.0));
        assert_eq!(engine.len(), 1);
    }

    #[test]
    fn kill_and_set_cancel_running_tweens() {
        let mut engine = TweenEngine::new();
        let mut sink = RecordingSink::new();
        engine.to(Target::Cursor, Prop::Scale(0.0), Timing::default(), 0.0);
        engine.to(Target::Cursor, Prop::Opacity(0.0), Timing::default(), 0.0);
        engine.to(Target::MarqueeTrack, Prop::OffsetX(-10.0), Timing::default(), 0.0);
        assert_eq!(engine.len(), 3);

        engine.set(Target::Cursor, Prop::Scale(1.0), &mut sink);
        assert_eq!(engine.len(), 2);
        engine.kill_tweens_of(Target::Cursor);
        assert!(!engine.is_animating(Target::Cursor));
        assert!(engine.is_animating(Target::MarqueeTrack));
    }

    #[test]
    fn forget_drops_only_that_targets_values() {
        let mut engine = TweenEngine::new();
        let mut sink = RecordingSink::new();
        engine.set(Target::Card(0), Prop::RotateY(180.0), &mut sink);
        engine.set(Target::Cursor, Prop::Scale(2.0), &mut sink);
        engine.to(Target::Card(0), Prop::Gap(20.0), Timing::default(), 0.0);
        engine.to(Target::Cursor, Prop::Opacity(0.0), Timing::default(), 0.0);

        engine.forget(Target::Card(0));
        assert!(!engine.is_animating(Target::Card(0)));
        assert_eq!(engine.current(Target::Card(0), Channel::RotateY), None);
        assert!(engine.is_animating(Target::Cursor));
        assert_eq!(engine.current(Target::Cursor, Channel::Scale), Some(Prop::Scale(2.0)));
    }

    #[test]
    fn position_writes_both_axes() {
        let mut sink = RecordingSink::new();
        Prop::Position(Point::new(3.0, 4.0)).write(Target::Cursor, &mut sink);
        assert_eq!(sink.last_f64(Target::Cursor, StyleKey::TranslateX), Some(3.0));
        assert_eq!(sink.last_f64(Target::Cursor, StyleKey::TranslateY), Some(4.0));
    }
}
