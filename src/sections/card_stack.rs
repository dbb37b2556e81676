//! Stacked full-screen project cards.
//!
//! The first card opens with a small round image that grows to fill the
//! card while the marquee behind it fades out. Each following card slides
//! over the previous one; the covered card shrinks and fades, the incoming
//! image settles from a zoomed crop. Titles reveal character by character.

use crate::motion::style::Corners;
use crate::motion::{Ease, Prop, Style, StyleSink, Target, Timing, TweenEngine};
use crate::scroll::{TriggerBounds, TriggerEvent};

const INTRO_SCREENS: f64 = 3.0;
const CHAR_HIDDEN: f64 = 100.0;
const DESCRIPTION_OFFSET: f64 = 40.0;

/// Splits a title into one cell per character. Spaces become non-breaking
/// so the cell keeps its width.
pub fn split_chars(text: &str) -> Vec<String> {
    text.chars()
        .map(|c| if c == ' ' { '\u{a0}'.to_string() } else { c.to_string() })
        .collect()
}

/// Marquee opacity for the intro card's image scale: opaque below 0.5,
/// gone above 0.75, linear in between. Exactly 0.5 or 0.75 leave it as is.
pub fn marquee_opacity(img_scale: f64) -> Option<f64> {
    if img_scale > 0.5 && img_scale < 0.75 {
        Some(1.0 - (img_scale - 0.5) / (0.75 - 0.5))
    } else if img_scale < 0.5 {
        Some(1.0)
    } else if img_scale > 0.75 {
        Some(0.0)
    } else {
        None
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    Shown(usize),
    Hidden(usize),
}

pub struct CardStack {
    revealed: Vec<bool>,
}

impl CardStack {
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
        }
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Pinned for three screens from the first card's top.
    pub fn intro_bounds(card_top: f64, viewport_height: f64) -> TriggerBounds {
        TriggerBounds::pinned(card_top, viewport_height * INTRO_SCREENS)
    }

    /// From the card's top entering at the bottom of the viewport until it
    /// reaches the top.
    pub fn approach_bounds(card_top: f64, viewport_height: f64) -> TriggerBounds {
        TriggerBounds::new(card_top - viewport_height, card_top)
    }

    /// Hidden titles and descriptions, and the intro image in its small
    /// round starting pose.
    pub fn prime(&self, sink: &mut dyn StyleSink, tweens: &mut TweenEngine) {
        for i in 0..self.len() {
            tweens.set(Target::StackTitleChars(i), Prop::CharOffset(CHAR_HIDDEN), sink);
            tweens.set(Target::StackDescription(i), Prop::OffsetX(DESCRIPTION_OFFSET), sink);
            tweens.set(Target::StackDescription(i), Prop::Opacity(0.0), sink);
        }
        if !self.is_empty() {
            sink.apply(Target::StackImageWrapper(0), Style::Scale(0.5));
            sink.apply(Target::StackImageWrapper(0), Style::Radius(Corners::uniform(400.0)));
            sink.apply(Target::StackImage(0), Style::Scale(1.5));
        }
    }

    pub fn update_intro(
        &mut self,
        progress: f64,
        now: f64,
        sink: &mut dyn StyleSink,
        tweens: &mut TweenEngine,
    ) -> Option<Reveal> {
        let img_scale = 0.5 + progress * 0.5;
        let radius = 400.0 - progress * 375.0;
        sink.apply(Target::StackImageWrapper(0), Style::Scale(img_scale));
        sink.apply(Target::StackImageWrapper(0), Style::Radius(Corners::uniform(radius)));
        sink.apply(Target::StackImage(0), Style::Scale(1.5 - progress * 0.5));

        if let Some(opacity) = marquee_opacity(img_scale) {
            sink.apply(Target::MarqueeTrack, Style::Opacity(opacity));
        }

        if progress >= 1.0 && !self.is_revealed(0) {
            self.show(0, now, tweens)
        } else if progress < 1.0 && self.is_revealed(0) {
            self.hide(0, now, tweens)
        } else {
            None
        }
    }

    /// Card `index` being covered by the next one.
    pub fn update_outgoing(&self, index: usize, progress: f64, sink: &mut dyn StyleSink) {
        let wrapper = Target::StackImageWrapper(index);
        sink.apply(wrapper, Style::Scale(1.0 - progress * 0.25));
        sink.apply(wrapper, Style::Opacity(1.0 - progress));
    }

    /// Card `index` sliding in over the previous one.
    pub fn update_incoming(&self, index: usize, progress: f64, sink: &mut dyn StyleSink) {
        sink.apply(Target::StackImage(index), Style::Scale(2.0 - progress));
        sink.apply(
            Target::StackImageWrapper(index),
            Style::Radius(Corners::uniform(150.0 - progress * 125.0)),
        );
    }

    /// Reveal on reaching the top of the viewport, hide when scrolling back
    /// above it. The intro card is handled by [`Self::update_intro`].
    pub fn on_event(
        &mut self,
        index: usize,
        event: TriggerEvent,
        now: f64,
        tweens: &mut TweenEngine,
    ) -> Option<Reveal> {
        if index == 0 {
            return None;
        }
        match event {
            TriggerEvent::Enter => self.show(index, now, tweens),
            TriggerEvent::LeaveBack => self.hide(index, now, tweens),
            TriggerEvent::Leave | TriggerEvent::EnterBack => None,
        }
    }

    fn show(&mut self, index: usize, now: f64, tweens: &mut TweenEngine) -> Option<Reveal> {
        let slot = self.revealed.get_mut(index)?;
        *slot = true;
        let timing = Timing::new(0.75, Ease::Power4Out);
        tweens.to(Target::StackTitleChars(index), Prop::CharOffset(0.0), timing, now);
        let description = Target::StackDescription(index);
        tweens.to(description, Prop::OffsetX(0.0), timing.delay(0.1), now);
        tweens.to(description, Prop::Opacity(1.0), timing.delay(0.1), now);
        Some(Reveal::Shown(index))
    }

    fn hide(&mut self, index: usize, now: f64, tweens: &mut TweenEngine) -> Option<Reveal> {
        let slot = self.revealed.get_mut(index)?;
        *slot = false;
        let timing = Timing::new(0.5, Ease::Power4Out);
        tweens.to(Target::StackTitleChars(index), Prop::CharOffset(CHAR_HIDDEN), timing, now);
        let description = Target::StackDescription(index);
        tweens.to(description, Prop::OffsetX(DESCRIPTION_OFFSET), timing.delay(0.1), now);
        tweens.to(description, Prop::Opacity(0.0), timing.delay(0.1), now);
        Some(Reveal::Hidden(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::style::{Length, RecordingSink, StyleKey};

    #[test]
    fn splits_spaces_into_nbsp() {
        assert_eq!(split_chars("Hi yo"), vec!["H", "i", "\u{a0}", "y", "o"]);
        assert!(split_chars("").is_empty());
    }

    #[test]
    fn marquee_fades_with_image_growth() {
        assert_eq!(marquee_opacity(0.4), Some(1.0));
        assert!((marquee_opacity(0.625).unwrap() - 0.5).abs() < 1e-9);
        assert_eq!(marquee_opacity(0.9), Some(0.0));
        assert_eq!(marquee_opacity(0.5), None);
    }

    #[test]
    fn intro_image_grows_and_squares_off() {
        let mut stack = CardStack::new(3);
        let mut sink = RecordingSink::new();
        let mut tweens = TweenEngine::new();
        stack.update_intro(0.5, 0.0, &mut sink, &mut tweens);
        assert_eq!(sink.last_f64(Target::StackImageWrapper(0), StyleKey::Scale), Some(0.75));
        assert_eq!(
            sink.last(Target::StackImageWrapper(0), StyleKey::Radius),
            Some(&Style::Radius(Corners::uniform(212.5)))
        );
        assert_eq!(sink.last_f64(Target::StackImage(0), StyleKey::Scale), Some(1.25));
        assert_eq!(sink.last(Target::MarqueeTrack, StyleKey::Opacity), None);
    }

    #[test]
    fn intro_reveal_toggles_once_each_way() {
        let mut stack = CardStack::new(2);
        let mut sink = RecordingSink::new();
        let mut tweens = TweenEngine::new();
        stack.prime(&mut sink, &mut tweens);

        assert_eq!(stack.update_intro(0.9, 0.0, &mut sink, &mut tweens), None);
        assert_eq!(stack.update_intro(1.0, 0.1, &mut sink, &mut tweens), Some(Reveal::Shown(0)));
        assert_eq!(stack.update_intro(1.0, 0.2, &mut sink, &mut tweens), None);
        assert!(stack.is_revealed(0));

        tweens.tick(5.0, &mut sink);
        assert_eq!(
            sink.last(Target::StackTitleChars(0), StyleKey::TranslateX),
            Some(&Style::TranslateX(Length::Percent(0.0)))
        );
        assert_eq!(sink.last_f64(Target::StackDescription(0), StyleKey::Opacity), Some(1.0));

        assert_eq!(stack.update_intro(0.8, 6.0, &mut sink, &mut tweens), Some(Reveal::Hidden(0)));
        tweens.tick(10.0, &mut sink);
        assert_eq!(sink.last_f64(Target::StackDescription(0), StyleKey::Opacity), Some(0.0));
    }

    #[test]
    fn later_cards_reveal_on_enter_and_hide_on_leave_back() {
        let mut stack = CardStack::new(3);
        let mut tweens = TweenEngine::new();
        assert_eq!(stack.on_event(2, TriggerEvent::Enter, 0.0, &mut tweens), Some(Reveal::Shown(2)));
        assert_eq!(stack.on_event(2, TriggerEvent::Leave, 0.0, &mut tweens), None);
        assert_eq!(stack.on_event(2, TriggerEvent::LeaveBack, 0.0, &mut tweens), Some(Reveal::Hidden(2)));
        assert_eq!(stack.on_event(0, TriggerEvent::Enter, 0.0, &mut tweens), None);
        assert_eq!(stack.on_event(7, TriggerEvent::Enter, 0.0, &mut tweens), None);
    }

    #[test]
    fn covered_and_incoming_cards_follow_progress() {
        let stack = CardStack::new(3);
        let mut sink = RecordingSink::new();
        stack.update_outgoing(0, 0.4, &mut sink);
        stack.update_incoming(1, 0.4, &mut sink);
        assert_eq!(sink.last_f64(Target::StackImageWrapper(0), StyleKey::Scale), Some(0.9));
        assert_eq!(sink.last_f64(Target::StackImageWrapper(0), StyleKey::Opacity), Some(0.6));
        assert_eq!(sink.last_f64(Target::StackImage(1), StyleKey::Scale), Some(1.6));
        assert_eq!(
            sink.last(Target::StackImageWrapper(1), StyleKey::Radius),
            Some(&Style::Radius(Corners::uniform(100.0)))
        );
    }
}
