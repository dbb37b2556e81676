/// Easing curves used by tweens and the smooth scroller.
///
/// Names follow the curves the page was tuned with: `Linear` is the
/// constant-velocity curve used by the marquee, `Power1Out` is the default
/// for short pointer-follow tweens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    Power1Out,
    Power3Out,
    Power3InOut,
    Power4Out,
    /// `min(1, 1.001 - 2^(-10t))`, the smooth-scroll curve.
    ExpoOut,
}

impl Default for Ease {
    fn default() -> Self {
        Self::Power1Out
    }
}

impl Ease {
    /// Map normalized time `t` to eased progress. `t` is clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Power1Out => 1.0 - (1.0 - t).powi(2),
            Self::Power3Out => 1.0 - (1.0 - t).powi(4),
            Self::Power3InOut => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
                }
            }
            Self::Power4Out => 1.0 - (1.0 - t).powi(5),
            Self::ExpoOut => (1.001 - 2f64.powf(-10.0 * t)).min(1.0),
        }
    }
}
