pub mod ease;
pub mod path;
pub mod style;
pub mod tween;

pub use ease::Ease;
pub use style::{Style, StyleSink, Target};
pub use tween::{Prop, Timing, TweenEngine};
