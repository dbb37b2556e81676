//! Custom cursor that trails the pointer inside the hero.

use kurbo::Point;

use crate::motion::{Ease, Prop, StyleSink, Target, Timing, TweenEngine};

const FOLLOW: Timing = Timing {
    duration: 0.5,
    delay: 0.0,
    stagger: 0.0,
    ease: Ease::Power1Out,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Move(Point),
    Enter,
    Leave,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct CursorFollower;

impl CursorFollower {
    /// Cursor starts hidden and collapsed until the pointer enters.
    pub fn prime(&self, sink: &mut dyn StyleSink, tweens: &mut TweenEngine) {
        tweens.set(Target::Cursor, Prop::Scale(0.0), sink);
        tweens.set(Target::Cursor, Prop::Opacity(0.0), sink);
    }

    pub fn handle(&self, event: PointerEvent, now: f64, tweens: &mut TweenEngine) {
        match event {
            PointerEvent::Move(p) => tweens.to(Target::Cursor, Prop::Position(p), FOLLOW, now),
            PointerEvent::Enter => {
                tweens.to(Target::Cursor, Prop::Scale(1.0), FOLLOW, now);
                tweens.to(Target::Cursor, Prop::Opacity(1.0), FOLLOW, now);
            }
            PointerEvent::Leave => {
                tweens.to(Target::Cursor, Prop::Scale(0.0), FOLLOW, now);
                tweens.to(Target::Cursor, Prop::Opacity(0.0), FOLLOW, now);
            }
        }
    }
}
