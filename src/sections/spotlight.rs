//! Pinned "spotlight" section on wide screens.
//!
//! Over ten screens of scrolling the intro words part, the background
//! image grows in, then a column of titles scrolls past the viewport center
//! while project images ride an arc on the left. The title nearest the
//! center is emphasized and its image becomes the background.

use crate::config::SpotlightConfig;
use crate::motion::path::{ImageArc, ItemProgress, Stagger};
use crate::motion::{Style, StyleSink, Target};
use crate::scroll::TriggerBounds;

use super::active_title::{ActiveChange, ActiveTitle};
use super::Viewport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpotlightItem {
    pub name: &'static str,
    pub img: &'static str,
}

pub const SPOTLIGHT_ITEMS: [SpotlightItem; 10] = [
    SpotlightItem { name: "Silent Arc", img: "/assets/iconiqa-16.webp" },
    SpotlightItem { name: "Bloom24", img: "/assets/iconiqa-3.jpg" },
    SpotlightItem { name: "Glass Fade", img: "/assets/iconiqa-4.jpg" },
    SpotlightItem { name: "Echo 9", img: "/assets/iconiqa-5.webp" },
    SpotlightItem { name: "Velvet Loop", img: "/assets/iconiqa-10.jpg" },
    SpotlightItem { name: "Field Two", img: "/assets/iconiqa-20.webp" },
    SpotlightItem { name: "Pale Thread", img: "/assets/iconiqa-23.jpg" },
    SpotlightItem { name: "Stillroom", img: "/assets/iconiqa-26.jpg" },
    SpotlightItem { name: "Ghostline", img: "/assets/iconiqa-3.jpg" },
    SpotlightItem { name: "Mono 73", img: "/assets/iconiqa-4.jpg" },
];

const INTRO_END: f64 = 0.2;
const SWITCH_START: f64 = 0.25;
const SWITCH_END: f64 = 0.95;
const SWITCH_SPAN: f64 = 0.7;
const INTRO_TRAVEL: f64 = 0.6;
const IMAGE_LIFT: f64 = 75.0;
const DIM_TITLE: f64 = 0.25;
const PIN_SCREENS: f64 = 10.0;

const BEFORE_OPACITY: &str = "--before-opacity";
const AFTER_OPACITY: &str = "--after-opacity";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    /// Intro words part and the background grows in; carries `p / 0.2`.
    Intro(f64),
    Reveal,
    /// Titles and images move; carries `(p - 0.25) / 0.7`.
    Switching(f64),
    Outro,
}

impl Phase {
    /// Bounds are strict, so exactly 0.2, 0.25 and 0.95 fall in no phase and
    /// the previous frame's styles stay in place.
    pub fn classify(p: f64) -> Option<Self> {
        if p < INTRO_END {
            Some(Self::Intro(p / INTRO_END))
        } else if p > INTRO_END && p < SWITCH_START {
            Some(Self::Reveal)
        } else if p > SWITCH_START && p < SWITCH_END {
            Some(Self::Switching((p - SWITCH_START) / SWITCH_SPAN))
        } else if p > SWITCH_END {
            Some(Self::Outro)
        } else {
            None
        }
    }
}

/// Live layout measurements the switching phase needs every frame.
pub trait TitleLayout {
    /// Vertical center of each title in viewport coordinates.
    fn title_centers(&self) -> Vec<f64>;
    /// Full scroll height of the titles column.
    fn titles_height(&self) -> f64;
}

pub struct Spotlight {
    items: Vec<SpotlightItem>,
    arc: ImageArc,
    stagger: Stagger,
    active: ActiveTitle,
}

impl Spotlight {
    /// The arc is fixed from the viewport passed here for the lifetime of
    /// this controller.
    pub fn new(config: SpotlightConfig, items: Vec<SpotlightItem>, viewport: Viewport) -> Self {
        Self {
            items,
            arc: ImageArc::from_viewport(viewport.height, config.arc_radius),
            stagger: Stagger::new(config.gap, config.speed),
            active: ActiveTitle::new(),
        }
    }

    #[cfg(test)]
    pub fn arc(&self) -> &ImageArc {
        &self.arc
    }

    #[cfg(test)]
    pub fn active_index(&self) -> usize {
        self.active.current()
    }

    pub fn trigger_bounds(section_top: f64, viewport_height: f64) -> TriggerBounds {
        TriggerBounds::pinned(section_top, viewport_height * PIN_SCREENS)
    }

    /// Initial state: dim titles, hidden images, titles column and frame.
    pub fn prime(&self, sink: &mut dyn StyleSink) {
        for i in 0..self.items.len() {
            sink.apply(Target::SpotlightTitle(i), Style::Opacity(DIM_TITLE));
        }
        self.hide_images(sink);
        sink.apply(Target::SpotlightTitles, Style::Opacity(0.0));
        self.set_frame(sink, 0.0);
    }

    pub fn update(
        &mut self,
        progress: f64,
        viewport: Viewport,
        layout: &dyn TitleLayout,
        sink: &mut dyn StyleSink,
    ) -> Option<Phase> {
        let phase = Phase::classify(progress)?;
        match phase {
            Phase::Intro(a) => self.intro(a, viewport, sink),
            Phase::Reveal => self.reveal(sink),
            Phase::Switching(s) => self.switching(s, viewport, layout, sink),
            Phase::Outro => {
                sink.apply(Target::SpotlightHeader, Style::Opacity(0.0));
                self.set_frame(sink, 0.0);
            }
        }
        Some(phase)
    }

    fn intro(&self, a: f64, viewport: Viewport, sink: &mut dyn StyleSink) {
        let travel = viewport.width * INTRO_TRAVEL;
        sink.apply(Target::IntroText(0), Style::px_x(-a * travel));
        sink.apply(Target::IntroText(1), Style::px_x(a * travel));
        sink.apply(Target::IntroText(0), Style::Opacity(1.0));
        sink.apply(Target::IntroText(1), Style::Opacity(1.0));

        sink.apply(Target::SpotlightBg, Style::Scale(a));
        sink.apply(Target::SpotlightBgImage, Style::Scale(1.5 - a * 0.5));

        self.hide_images(sink);
        sink.apply(Target::SpotlightHeader, Style::Opacity(0.0));
        sink.apply(Target::SpotlightTitles, Style::Opacity(0.0));
        self.set_frame(sink, 0.0);
    }

    fn reveal(&self, sink: &mut dyn StyleSink) {
        sink.apply(Target::SpotlightTitles, Style::Opacity(1.0));
        self.settle_background(sink);
        self.hide_images(sink);
        sink.apply(Target::SpotlightHeader, Style::Opacity(1.0));
        self.set_frame(sink, 1.0);
    }

    fn switching(&mut self, s: f64, viewport: Viewport, layout: &dyn TitleLayout, sink: &mut dyn StyleSink) {
        self.settle_background(sink);
        sink.apply(Target::SpotlightHeader, Style::Opacity(1.0));
        self.set_frame(sink, 1.0);

        let start = viewport.height;
        let end = -layout.titles_height();
        let y = start - s * (start - end);
        sink.apply(Target::SpotlightTitles, Style::px_y(y));

        for i in 0..self.items.len() {
            self.place_image(i, s, sink);
        }

        let centers = layout.title_centers();
        if let Some(change) = self.active.update(&centers, viewport.height / 2.0) {
            self.emphasize(change, sink);
        }
    }

    fn place_image(&self, index: usize, s: f64, sink: &mut dyn StyleSink) {
        let target = Target::SpotlightImage(index);
        match self.stagger.item_progress(index, s) {
            ItemProgress::Active(t) => {
                let pos = self.arc.point_at(t);
                sink.apply(target, Style::px_x(pos.x));
                sink.apply(target, Style::px_y(pos.y - IMAGE_LIFT));
                sink.apply(target, Style::Opacity(1.0));
            }
            ItemProgress::Pending | ItemProgress::Finished => {
                sink.apply(target, Style::Opacity(0.0));
            }
        }
    }

    fn emphasize(&self, change: ActiveChange, sink: &mut dyn StyleSink) {
        if change.previous < self.items.len() {
            sink.apply(Target::SpotlightTitle(change.previous), Style::Opacity(DIM_TITLE));
        }
        sink.apply(Target::SpotlightTitle(change.next), Style::Opacity(1.0));
        if let Some(item) = self.items.get(change.next) {
            sink.apply(Target::SpotlightBgImage, Style::ImageSrc(item.img.to_string()));
        }
    }

    fn settle_background(&self, sink: &mut dyn StyleSink) {
        sink.apply(Target::SpotlightBg, Style::Scale(1.0));
        sink.apply(Target::SpotlightBgImage, Style::Scale(1.0));
        sink.apply(Target::IntroText(0), Style::Opacity(0.0));
        sink.apply(Target::IntroText(1), Style::Opacity(0.0));
    }

    fn hide_images(&self, sink: &mut dyn StyleSink) {
        for i in 0..self.items.len() {
            sink.apply(Target::SpotlightImage(i), Style::Opacity(0.0));
        }
    }

    fn set_frame(&self, sink: &mut dyn StyleSink, opacity: f64) {
        sink.apply(Target::SpotlightTitlesFrame, Style::Var(BEFORE_OPACITY, opacity));
        sink.apply(Target::SpotlightTitlesFrame, Style::Var(AFTER_OPACITY, opacity));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::style::{RecordingSink, StyleKey};

    struct FixedLayout {
        centers: Vec<f64>,
        height: f64,
    }

    impl TitleLayout for FixedLayout {
        fn title_centers(&self) -> Vec<f64> {
            self.centers.clone()
        }
        fn titles_height(&self) -> f64 {
            self.height
        }
    }

    fn viewport() -> Viewport {
        Viewport::new(1440.0, 800.0)
    }

    fn spotlight() -> Spotlight {
        Spotlight::new(SpotlightConfig::default(), SPOTLIGHT_ITEMS.to_vec(), viewport())
    }

    fn layout_centered_on(index: usize) -> FixedLayout {
        let centers = (0..10)
            .map(|i| 400.0 + (i as f64 - index as f64) * 150.0)
            .collect();
        FixedLayout { centers, height: 1500.0 }
    }

    #[test]
    fn phase_bounds_are_strict() {
        assert_eq!(Phase::classify(0.1), Some(Phase::Intro(0.5)));
        assert_eq!(Phase::classify(0.2), None);
        assert_eq!(Phase::classify(0.22), Some(Phase::Reveal));
        assert_eq!(Phase::classify(0.25), None);
        assert!(matches!(Phase::classify(0.6), Some(Phase::Switching(_))));
        assert_eq!(Phase::classify(0.95), None);
        assert_eq!(Phase::classify(0.99), Some(Phase::Outro));
    }

    #[test]
    fn intro_parts_words_and_grows_background() {
        let mut s = spotlight();
        let mut sink = RecordingSink::new();
        s.update(0.1, viewport(), &layout_centered_on(0), &mut sink);
        let travel = 1440.0 * 0.6 * 0.5;
        assert_eq!(sink.last_f64(Target::IntroText(0), StyleKey::TranslateX), Some(-travel));
        assert_eq!(sink.last_f64(Target::IntroText(1), StyleKey::TranslateX), Some(travel));
        assert_eq!(sink.last_f64(Target::SpotlightBg, StyleKey::Scale), Some(0.5));
        assert_eq!(sink.last_f64(Target::SpotlightBgImage, StyleKey::Scale), Some(1.25));
        assert_eq!(sink.last_f64(Target::SpotlightImage(3), StyleKey::Opacity), Some(0.0));
        assert_eq!(
            sink.last_f64(Target::SpotlightTitlesFrame, StyleKey::Var(BEFORE_OPACITY)),
            Some(0.0)
        );
    }

    #[test]
    fn images_are_visible_only_inside_their_window() {
        let mut s = spotlight();
        let mut sink = RecordingSink::new();
        let layout = layout_centered_on(0);
        let progress = 0.25 + 0.41 * 0.7;
        s.update(progress, viewport(), &layout, &mut sink);

        let stagger = Stagger::new(0.08, 0.3);
        let overall = (progress - 0.25) / 0.7;
        for i in 0..10 {
            let opacity = sink.last_f64(Target::SpotlightImage(i), StyleKey::Opacity).unwrap();
            let local = stagger.local(i, overall);
            if !(0.0..=1.0).contains(&local) {
                assert_eq!(opacity, 0.0, "image {i} should be hidden");
            } else {
                assert_eq!(opacity, 1.0, "image {i} should be shown");
                let expected = s.arc().point_at(local);
                let x = sink.last_f64(Target::SpotlightImage(i), StyleKey::TranslateX).unwrap();
                let y = sink.last_f64(Target::SpotlightImage(i), StyleKey::TranslateY).unwrap();
                assert!((x - expected.x).abs() < 1e-6);
                assert!((y - (expected.y - 75.0)).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn titles_column_travels_from_below_to_above() {
        let mut s = spotlight();
        let mut sink = RecordingSink::new();
        let layout = layout_centered_on(0);
        s.update(0.25 + 0.5 * 0.7, viewport(), &layout, &mut sink);
        let y = sink.last_f64(Target::SpotlightTitles, StyleKey::TranslateY).unwrap();
        // Halfway between 800 and -1500.
        assert!((y + 350.0).abs() < 1e-6);
    }

    #[test]
    fn active_title_swaps_background_once() {
        let mut s = spotlight();
        let mut sink = RecordingSink::new();
        s.update(0.5, viewport(), &layout_centered_on(0), &mut sink);
        assert_eq!(sink.count(Target::SpotlightBgImage, StyleKey::ImageSrc), 0);

        s.update(0.51, viewport(), &layout_centered_on(3), &mut sink);
        s.update(0.52, viewport(), &layout_centered_on(3), &mut sink);
        assert_eq!(sink.count(Target::SpotlightBgImage, StyleKey::ImageSrc), 1);
        assert_eq!(
            sink.last(Target::SpotlightBgImage, StyleKey::ImageSrc),
            Some(&Style::ImageSrc(SPOTLIGHT_ITEMS[3].img.to_string()))
        );
        assert_eq!(sink.last_f64(Target::SpotlightTitle(0), StyleKey::Opacity), Some(0.25));
        assert_eq!(sink.last_f64(Target::SpotlightTitle(3), StyleKey::Opacity), Some(1.0));
        assert_eq!(s.active_index(), 3);
    }

    #[test]
    fn boundary_progress_writes_nothing() {
        let mut s = spotlight();
        let mut sink = RecordingSink::new();
        assert_eq!(s.update(0.25, viewport(), &layout_centered_on(0), &mut sink), None);
        assert!(sink.writes.is_empty());
    }

    #[test]
    fn outro_hides_header_and_frame() {
        let mut s = spotlight();
        let mut sink = RecordingSink::new();
        s.update(0.97, viewport(), &layout_centered_on(0), &mut sink);
        assert_eq!(sink.last_f64(Target::SpotlightHeader, StyleKey::Opacity), Some(0.0));
        assert_eq!(
            sink.last_f64(Target::SpotlightTitlesFrame, StyleKey::Var(AFTER_OPACITY)),
            Some(0.0)
        );
    }

    #[test]
    fn prime_dims_titles() {
        let s = spotlight();
        let mut sink = RecordingSink::new();
        s.prime(&mut sink);
        for i in 0..10 {
            assert_eq!(sink.last_f64(Target::SpotlightTitle(i), StyleKey::Opacity), Some(0.25));
        }
        assert_eq!(sink.last_f64(Target::SpotlightTitles, StyleKey::Opacity), Some(0.0));
    }
}
