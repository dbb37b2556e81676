//! Browser side of the motion core: element lookup, the style sink, the
//! animation-frame loop, event subscriptions and the HTTP relay.

pub mod dom;
pub mod frame;
pub mod relay;
pub mod scene;
pub mod subscriptions;

pub use dom::{DomSink, ElementRegistry};
pub use frame::FrameLoop;
pub use scene::{RunningScene, Scene};
pub use subscriptions::{Debounce, Subscriptions};
