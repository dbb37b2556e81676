//! Style assignments and the sink they are written into.
//!
//! Motion code never touches the DOM directly. It describes "set this
//! property on this element now" as a [`Style`] and hands it to a
//! [`StyleSink`]. The browser sink lives in `web::dom`; tests use
//! [`RecordingSink`].

use std::fmt;

/// Every element role the page animates. Indexed variants address one
/// element of a repeated group; the DOM registry may bind a role to several
/// nodes (all title characters of a card, for instance).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    // sticky cards
    StickyHeader,
    CardContainer,
    Card(usize),
    // spotlight
    SpotlightTitles,
    SpotlightTitle(usize),
    SpotlightImage(usize),
    SpotlightHeader,
    SpotlightTitlesFrame,
    IntroText(usize),
    SpotlightBg,
    SpotlightBgImage,
    // card stack
    StackImageWrapper(usize),
    StackImage(usize),
    StackTitleChars(usize),
    StackDescription(usize),
    MarqueeTrack,
    // misc
    HeroHeading(usize),
    GalleryStrip,
    Cursor,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    Px(f64),
    Percent(f64),
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{}px", v),
            Self::Percent(v) => write!(f, "{}%", v),
        }
    }
}

/// Border radius per corner, clockwise from top-left, in px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Corners(pub [f64; 4]);

impl Corners {
    pub const fn uniform(r: f64) -> Self {
        Self([r; 4])
    }

    pub fn lerp(self, to: Corners, t: f64) -> Corners {
        let mut out = [0.0; 4];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.0[i] + (to.0[i] - self.0[i]) * t;
        }
        Corners(out)
    }
}

impl fmt::Display for Corners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{}px {}px {}px {}px", a, b, c, d)
    }
}

/// One idempotent "set now" assignment.
#[derive(Clone, Debug, PartialEq)]
pub enum Style {
    Opacity(f64),
    TranslateX(Length),
    TranslateY(Length),
    Scale(f64),
    RotateY(f64),
    RotateZ(f64),
    WidthPercent(f64),
    GapPx(f64),
    Radius(Corners),
    /// CSS custom property such as `--before-opacity`.
    Var(&'static str, f64),
    ImageSrc(String),
    /// Drop every inline override on the element.
    ClearInline,
}

/// Identifies which property a [`Style`] writes, ignoring the value.
#[cfg(test)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleKey {
    Opacity,
    TranslateX,
    TranslateY,
    Scale,
    RotateY,
    RotateZ,
    WidthPercent,
    GapPx,
    Radius,
    Var(&'static str),
    ImageSrc,
    ClearInline,
}

impl Style {
    #[cfg(test)]
    pub fn key(&self) -> StyleKey {
        match self {
            Self::Opacity(_) => StyleKey::Opacity,
            Self::TranslateX(_) => StyleKey::TranslateX,
            Self::TranslateY(_) => StyleKey::TranslateY,
            Self::Scale(_) => StyleKey::Scale,
            Self::RotateY(_) => StyleKey::RotateY,
            Self::RotateZ(_) => StyleKey::RotateZ,
            Self::WidthPercent(_) => StyleKey::WidthPercent,
            Self::GapPx(_) => StyleKey::GapPx,
            Self::Radius(_) => StyleKey::Radius,
            Self::Var(name, _) => StyleKey::Var(name),
            Self::ImageSrc(_) => StyleKey::ImageSrc,
            Self::ClearInline => StyleKey::ClearInline,
        }
    }

    pub fn px_x(v: f64) -> Self {
        Self::TranslateX(Length::Px(v))
    }

    pub fn px_y(v: f64) -> Self {
        Self::TranslateY(Length::Px(v))
    }
}

pub trait StyleSink {
    fn apply(&mut self, target: Target, style: Style);
}

/// Transform components of one element. Translate, rotate and scale are
/// written independently and rendered as a single `transform` value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub x: Length,
    pub y: Length,
    pub rotate_y: f64,
    pub rotate_z: f64,
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            x: Length::Px(0.0),
            y: Length::Px(0.0),
            rotate_y: 0.0,
            rotate_z: 0.0,
            scale: 1.0,
        }
    }
}

impl Transform {
    /// Folds a transform-related style into this transform. Returns `false`
    /// for styles that are not part of `transform`.
    pub fn absorb(&mut self, style: &Style) -> bool {
        match *style {
            Style::TranslateX(x) => self.x = x,
            Style::TranslateY(y) => self.y = y,
            Style::Scale(s) => self.scale = s,
            Style::RotateY(r) => self.rotate_y = r,
            Style::RotateZ(r) => self.rotate_z = r,
            _ => return false,
        }
        true
    }

    pub fn to_css(&self) -> String {
        let mut css = format!("translate({}, {})", self.x, self.y);
        if self.rotate_y != 0.0 {
            css.push_str(&format!(" rotateY({}deg)", self.rotate_y));
        }
        if self.rotate_z != 0.0 {
            css.push_str(&format!(" rotateZ({}deg)", self.rotate_z));
        }
        if self.scale != 1.0 {
            css.push_str(&format!(" scale({})", self.scale));
        }
        css
    }
}

/// Records every assignment in order and remembers the latest value per
/// property.
#[cfg(test)]
#[derive(Default, Debug)]
pub struct RecordingSink {
    pub writes: Vec<(Target, Style)>,
    latest: std::collections::HashMap<(Target, StyleKey), Style>,
}

#[cfg(test)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent value written for `(target, key)`.
    pub fn last(&self, target: Target, key: StyleKey) -> Option<&Style> {
        self.latest.get(&(target, key))
    }

    pub fn last_f64(&self, target: Target, key: StyleKey) -> Option<f64> {
        match self.last(target, key)? {
            Style::Opacity(v)
            | Style::Scale(v)
            | Style::RotateY(v)
            | Style::RotateZ(v)
            | Style::WidthPercent(v)
            | Style::GapPx(v)
            | Style::Var(_, v) => Some(*v),
            Style::TranslateX(Length::Px(v) | Length::Percent(v))
            | Style::TranslateY(Length::Px(v) | Length::Percent(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn count(&self, target: Target, key: StyleKey) -> usize {
        self.writes
            .iter()
            .filter(|(t, s)| *t == target && s.key() == key)
            .count()
    }

    pub fn clear(&mut self) {
        self.writes.clear();
    }
}

#[cfg(test)]
impl StyleSink for RecordingSink {
    fn apply(&mut self, target: Target, style: Style) {
        if style == Style::ClearInline {
            self.latest.retain(|(t, _), _| *t != target);
        }
        self.latest.insert((target, style.key()), style.clone());
        self.writes.push((target, style));
    }
}
