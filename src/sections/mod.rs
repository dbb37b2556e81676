//! Scroll-driven page sections.
//!
//! Every section is a controller object created by one setup call. It owns
//! the state that has to survive between frames (phase flags, the active
//! title, reveal flags) so a teardown and rebuild starts from scratch.

pub mod active_title;
pub mod card_stack;
pub mod cursor;
pub mod gallery;
pub mod hero;
pub mod marquee;
pub mod slider;
pub mod spotlight;
pub mod sticky_cards;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Which side of a width breakpoint the viewport is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayoutClass {
    Narrow,
    Wide,
}

impl LayoutClass {
    /// `Wide` when `width >= min_wide`.
    pub fn at_least(width: f64, min_wide: f64) -> Self {
        if width >= min_wide {
            Self::Wide
        } else {
            Self::Narrow
        }
    }

    /// `Narrow` when `width <= max_narrow`.
    pub fn at_most(width: f64, max_narrow: f64) -> Self {
        if width <= max_narrow {
            Self::Narrow
        } else {
            Self::Wide
        }
    }
}
