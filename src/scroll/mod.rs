pub mod smooth;
pub mod trigger;

pub use smooth::{NavHref, SmoothScroller};
pub use trigger::{Scrub, TriggerBounds, TriggerEvent, TriggerId, TriggerSet, TriggerUpdate};
