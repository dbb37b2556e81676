//! Pinned three-card section: the header slides in, the card row narrows,
//! splits into separate rounded cards and finally flips.

use log::debug;

use crate::motion::path::map_range;
use crate::motion::style::Corners;
use crate::motion::{Ease, Prop, Style, StyleSink, Target, Timing, TweenEngine};
use crate::scroll::TriggerBounds;

pub const CARD_COUNT: usize = 3;
const CARDS: [Target; CARD_COUNT] = [Target::Card(0), Target::Card(1), Target::Card(2)];

const HEADER_IN: f64 = 0.10;
const HEADER_DONE: f64 = 0.25;
const GAP_AT: f64 = 0.35;
const FLIP_AT: f64 = 0.45;
const UNFLIP_BELOW: f64 = 0.70;

const HEADER_OFFSET: f64 = 40.0;
const WIDTH_START: f64 = 75.0;
const WIDTH_END: f64 = 60.0;
const GAP_PX: f64 = 20.0;
const RADIUS_PX: f64 = 20.0;
const FLIP_LIFT: f64 = 30.0;
const FLIP_TILT: f64 = 15.0;

/// Pin length in viewport heights.
const PIN_SCREENS: f64 = 4.0;

/// Survive between frames so each eased transition is issued once per
/// threshold crossing, not once per sampled frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PhaseFlags {
    pub gap_animation_completed: bool,
    pub flip_animation_completed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardTransition {
    Gapped,
    Ungapped,
    Flipped,
    Unflipped,
}

#[derive(Debug, Default)]
pub struct StickyCards {
    flags: PhaseFlags,
}

impl StickyCards {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flags(&self) -> PhaseFlags {
        self.flags
    }

    pub fn trigger_bounds(section_top: f64, viewport_height: f64) -> TriggerBounds {
        TriggerBounds::pinned(section_top, viewport_height * PIN_SCREENS)
    }

    /// A controller for a rebuilt scene. Its flags start cleared, so the
    /// inline gap, radius and flip left by an earlier build go too.
    pub fn mount(sink: &mut dyn StyleSink, tweens: &mut TweenEngine) -> Self {
        Self::clear_inline(sink, tweens);
        Self::new()
    }

    /// Narrow layouts get no trigger; drop whatever a previous wide layout
    /// left inline so the stacked CSS layout applies cleanly.
    pub fn clear_inline(sink: &mut dyn StyleSink, tweens: &mut TweenEngine) {
        let targets = CARDS
            .iter()
            .copied()
            .chain([Target::CardContainer, Target::StickyHeader]);
        for target in targets {
            tweens.forget(target);
            sink.apply(target, Style::ClearInline);
        }
    }

    pub fn update(
        &mut self,
        progress: f64,
        now: f64,
        sink: &mut dyn StyleSink,
        tweens: &mut TweenEngine,
    ) -> Vec<CardTransition> {
        self.update_header(progress, sink);
        self.update_width(progress, sink);

        let mut fired = Vec::new();
        if let Some(t) = self.update_gap(progress, now, tweens) {
            fired.push(t);
        }
        if let Some(t) = self.update_flip(progress, now, tweens) {
            fired.push(t);
        }
        for t in &fired {
            debug!("sticky cards: {:?} at progress {:.3}", t, progress);
        }
        fired
    }

    fn update_header(&self, p: f64, sink: &mut dyn StyleSink) {
        let (y, opacity) = if (HEADER_IN..=HEADER_DONE).contains(&p) {
            let header = map_range(HEADER_IN, HEADER_DONE, 0.0, 1.0, p);
            (map_range(0.0, 1.0, HEADER_OFFSET, 0.0, header), header)
        } else if p < HEADER_IN {
            (HEADER_OFFSET, 0.0)
        } else {
            (0.0, 1.0)
        };
        sink.apply(Target::StickyHeader, Style::px_y(y));
        sink.apply(Target::StickyHeader, Style::Opacity(opacity));
    }

    fn update_width(&self, p: f64, sink: &mut dyn StyleSink) {
        let width = if p <= HEADER_DONE {
            map_range(0.0, HEADER_DONE, WIDTH_START, WIDTH_END, p)
        } else {
            WIDTH_END
        };
        sink.apply(Target::CardContainer, Style::WidthPercent(width));
    }

    fn update_gap(&mut self, p: f64, now: f64, tweens: &mut TweenEngine) -> Option<CardTransition> {
        let timing = Timing::new(0.5, Ease::Power3Out);
        if p >= GAP_AT && !self.flags.gap_animation_completed {
            tweens.to(Target::CardContainer, Prop::Gap(GAP_PX), timing, now);
            tweens.to_each(&CARDS, Prop::Radius(Corners::uniform(RADIUS_PX)), timing, now);
            self.flags.gap_animation_completed = true;
            Some(CardTransition::Gapped)
        } else if p < GAP_AT && self.flags.gap_animation_completed {
            tweens.to(Target::CardContainer, Prop::Gap(0.0), timing, now);
            let joined = [
                Corners([RADIUS_PX, 0.0, 0.0, RADIUS_PX]),
                Corners::uniform(0.0),
                Corners([0.0, RADIUS_PX, RADIUS_PX, 0.0]),
            ];
            for (card, radius) in CARDS.iter().zip(joined) {
                tweens.to(*card, Prop::Radius(radius), timing, now);
            }
            self.flags.gap_animation_completed = false;
            Some(CardTransition::Ungapped)
        } else {
            None
        }
    }

    /// Flip-in and flip-out use different thresholds and are checked in
    /// this order every update.
    fn update_flip(&mut self, p: f64, now: f64, tweens: &mut TweenEngine) -> Option<CardTransition> {
        let timing = Timing::new(0.75, Ease::Power3InOut);
        let outer = [(Target::Card(0), -FLIP_TILT), (Target::Card(2), FLIP_TILT)];
        if p >= FLIP_AT && !self.flags.flip_animation_completed {
            tweens.to_each(&CARDS, Prop::RotateY(180.0), timing.stagger(0.1), now);
            for (card, tilt) in outer {
                tweens.to(card, Prop::OffsetY(FLIP_LIFT), timing, now);
                tweens.to(card, Prop::RotateZ(tilt), timing, now);
            }
            self.flags.flip_animation_completed = true;
            Some(CardTransition::Flipped)
        } else if p < UNFLIP_BELOW && self.flags.flip_animation_completed {
            tweens.to_each(&CARDS, Prop::RotateY(0.0), timing.stagger(0.1), now);
            for (card, _) in outer {
                tweens.to(card, Prop::OffsetY(0.0), timing, now);
                tweens.to(card, Prop::RotateZ(0.0), timing, now);
            }
            self.flags.flip_animation_completed = false;
            Some(CardTransition::Unflipped)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::style::{RecordingSink, StyleKey};

    fn run(cards: &mut StickyCards, path: &[f64]) -> Vec<Vec<CardTransition>> {
        let mut sink = RecordingSink::new();
        let mut tweens = TweenEngine::new();
        path.iter()
            .enumerate()
            .map(|(i, &p)| cards.update(p, i as f64 * 0.016, &mut sink, &mut tweens))
            .collect()
    }

    #[test]
    fn header_and_width_follow_table() {
        let mut cards = StickyCards::new();
        let mut sink = RecordingSink::new();
        let mut tweens = TweenEngine::new();

        cards.update(0.05, 0.0, &mut sink, &mut tweens);
        assert_eq!(sink.last_f64(Target::StickyHeader, StyleKey::TranslateY), Some(40.0));
        assert_eq!(sink.last_f64(Target::StickyHeader, StyleKey::Opacity), Some(0.0));
        let w = sink.last_f64(Target::CardContainer, StyleKey::WidthPercent).unwrap();
        assert!((w - 72.0).abs() < 1e-9);

        cards.update(0.175, 0.0, &mut sink, &mut tweens);
        let y = sink.last_f64(Target::StickyHeader, StyleKey::TranslateY).unwrap();
        let o = sink.last_f64(Target::StickyHeader, StyleKey::Opacity).unwrap();
        assert!((y - 20.0).abs() < 1e-9);
        assert!((o - 0.5).abs() < 1e-9);

        cards.update(0.3, 0.0, &mut sink, &mut tweens);
        assert_eq!(sink.last_f64(Target::StickyHeader, StyleKey::TranslateY), Some(0.0));
        assert_eq!(sink.last_f64(Target::StickyHeader, StyleKey::Opacity), Some(1.0));
        assert_eq!(sink.last_f64(Target::CardContainer, StyleKey::WidthPercent), Some(60.0));
    }

    #[test]
    fn gap_fires_once_per_crossing() {
        let mut cards = StickyCards::new();
        let fired = run(&mut cards, &[0.30, 0.34, 0.35, 0.36, 0.40, 0.42, 0.41]);
        let gapped: usize = fired
            .iter()
            .map(|f| f.iter().filter(|t| **t == CardTransition::Gapped).count())
            .sum();
        assert_eq!(gapped, 1);
        assert_eq!(fired[2], vec![CardTransition::Gapped]);
        assert!(cards.flags().gap_animation_completed);

        let back = run(&mut cards, &[0.34, 0.20, 0.10]);
        assert_eq!(back[0], vec![CardTransition::Ungapped]);
        assert!(back[1].is_empty() && back[2].is_empty());
        assert!(!cards.flags().gap_animation_completed);
    }

    #[test]
    fn flip_uses_asymmetric_thresholds() {
        // 0.50 flips; 0.80 is above both thresholds so nothing changes;
        // coming back to 0.50 is below the 0.70 exit and unflips.
        let mut cards = StickyCards::new();
        let fired = run(&mut cards, &[0.50, 0.80, 0.50]);
        let flips: Vec<Vec<CardTransition>> = fired
            .into_iter()
            .map(|f| f.into_iter().filter(|t| matches!(t, CardTransition::Flipped | CardTransition::Unflipped)).collect())
            .collect();
        assert_eq!(flips[0], vec![CardTransition::Flipped]);
        assert!(flips[1].is_empty());
        assert_eq!(flips[2], vec![CardTransition::Unflipped]);
    }

    #[test]
    fn flip_band_crossings_below_exit_threshold() {
        // Inside [0.45, 0.70) both rules can apply, so each sample toggles.
        let mut cards = StickyCards::new();
        let fired = run(&mut cards, &[0.40, 0.50, 0.60, 0.45]);
        let flip_only = |f: &Vec<CardTransition>| -> Vec<CardTransition> {
            f.iter()
                .copied()
                .filter(|t| matches!(t, CardTransition::Flipped | CardTransition::Unflipped))
                .collect()
        };
        assert!(flip_only(&fired[0]).is_empty());
        assert_eq!(flip_only(&fired[1]), vec![CardTransition::Flipped]);
        assert_eq!(flip_only(&fired[2]), vec![CardTransition::Unflipped]);
        assert_eq!(flip_only(&fired[3]), vec![CardTransition::Flipped]);
    }

    #[test]
    fn flipped_stays_flipped_above_exit() {
        let mut cards = StickyCards::new();
        let fired = run(&mut cards, &[0.46, 0.75, 0.90, 1.0, 0.71]);
        assert!(fired[0].contains(&CardTransition::Flipped));
        assert!(fired[1..].iter().all(|f| f.is_empty()));
        assert!(cards.flags().flip_animation_completed);
    }

    #[test]
    fn flip_tweens_land_on_final_pose() {
        let mut cards = StickyCards::new();
        let mut sink = RecordingSink::new();
        let mut tweens = TweenEngine::new();
        cards.update(0.9, 0.0, &mut sink, &mut tweens);
        tweens.tick(2.0, &mut sink);

        for card in CARDS {
            assert_eq!(sink.last_f64(card, StyleKey::RotateY), Some(180.0));
            assert_eq!(sink.last(card, StyleKey::Radius), Some(&Style::Radius(Corners::uniform(20.0))));
        }
        assert_eq!(sink.last_f64(Target::Card(0), StyleKey::RotateZ), Some(-15.0));
        assert_eq!(sink.last_f64(Target::Card(2), StyleKey::RotateZ), Some(15.0));
        assert_eq!(sink.last_f64(Target::CardContainer, StyleKey::GapPx), Some(20.0));
    }

    #[test]
    fn fresh_controller_starts_unflagged() {
        let mut cards = StickyCards::new();
        run(&mut cards, &[0.9]);
        assert_eq!(
            cards.flags(),
            PhaseFlags { gap_animation_completed: true, flip_animation_completed: true }
        );
        let rebuilt = StickyCards::new();
        assert_eq!(rebuilt.flags(), PhaseFlags::default());
    }

    #[test]
    fn clearing_inline_resets_every_element() {
        let mut sink = RecordingSink::new();
        let mut tweens = TweenEngine::new();
        tweens.to(Target::Card(1), Prop::RotateY(180.0), Timing::default(), 0.0);
        StickyCards::clear_inline(&mut sink, &mut tweens);
        assert!(tweens.is_empty());
        assert_eq!(sink.count(Target::Card(1), StyleKey::ClearInline), 1);
        assert_eq!(sink.count(Target::StickyHeader, StyleKey::ClearInline), 1);
        assert_eq!(sink.count(Target::CardContainer, StyleKey::ClearInline), 1);
    }

    #[test]
    fn rebuild_clears_stale_flip_and_gap() {
        let mut old = StickyCards::new();
        let mut sink = RecordingSink::new();
        let mut tweens = TweenEngine::new();
        let fired = old.update(0.6, 0.0, &mut sink, &mut tweens);
        assert_eq!(fired, vec![CardTransition::Gapped, CardTransition::Flipped]);
        tweens.tick(2.0, &mut sink);

        // The resized scene starts with an empty sink and engine.
        let mut sink = RecordingSink::new();
        let mut tweens = TweenEngine::new();
        let mut rebuilt = StickyCards::mount(&mut sink, &mut tweens);
        for target in CARDS.iter().copied().chain([Target::CardContainer, Target::StickyHeader]) {
            assert_eq!(sink.count(target, StyleKey::ClearInline), 1);
        }
        assert_eq!(rebuilt.flags(), PhaseFlags::default());

        // Below the gap threshold the cleared layout is already correct.
        assert!(rebuilt.update(0.30, 0.0, &mut sink, &mut tweens).is_empty());

        // Flipping again starts from the resting pose.
        rebuilt.update(0.6, 1.0, &mut sink, &mut tweens);
        tweens.tick(1.05, &mut sink);
        let y = sink.last_f64(Target::Card(0), StyleKey::RotateY).unwrap();
        assert!(y > 0.0 && y < 180.0);
    }

    #[test]
    fn clearing_keeps_other_sections_tweens() {
        let mut sink = RecordingSink::new();
        let mut tweens = TweenEngine::new();
        tweens.to(Target::Cursor, Prop::Scale(2.0), Timing::default(), 0.0);
        StickyCards::clear_inline(&mut sink, &mut tweens);
        assert!(tweens.is_animating(Target::Cursor));
    }
}
