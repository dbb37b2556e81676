//! Scroll position to progress, plus enter/leave lifecycle events.
//!
//! A trigger covers a range of document scroll offsets. Each frame the
//! current `scrollY` is turned into a progress in `[0, 1]`, optionally
//! smoothed (scrubbed) so the visuals catch up over a short lag instead of
//! jumping with the wheel.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerBounds {
    pub start: f64,
    pub end: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    Before,
    Inside,
    After,
}

impl TriggerBounds {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Starts when the element's top reaches the viewport top and runs for
    /// `length` pixels of scrolling.
    pub fn pinned(element_top: f64, length: f64) -> Self {
        Self::new(element_top, element_top + length)
    }

    /// Fires once when `scrollY` passes `start` and never ends.
    pub fn open_ended(start: f64) -> Self {
        Self::new(start, f64::INFINITY)
    }

    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    pub fn progress(&self, scroll_y: f64) -> f64 {
        let length = self.length();
        if length <= 0.0 || !length.is_finite() {
            return if scroll_y >= self.start && length <= 0.0 { 1.0 } else { 0.0 };
        }
        ((scroll_y - self.start) / length).clamp(0.0, 1.0)
    }

    pub fn zone(&self, scroll_y: f64) -> Zone {
        if scroll_y < self.start {
            Zone::Before
        } else if scroll_y > self.end {
            Zone::After
        } else {
            Zone::Inside
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerEvent {
    /// Scrolling down into the range.
    Enter,
    /// Scrolling down out of the range.
    Leave,
    /// Scrolling up back into the range.
    EnterBack,
    /// Scrolling up out of the range, past its start.
    LeaveBack,
}

/// Events crossed when moving between two zones. A jump straight across the
/// range reports both edges in order.
pub fn crossing_events(from: Zone, to: Zone) -> &'static [TriggerEvent] {
    use TriggerEvent::*;
    use Zone::*;
    match (from, to) {
        (Before, Inside) => &[Enter],
        (Inside, After) => &[Leave],
        (After, Inside) => &[EnterBack],
        (Inside, Before) => &[LeaveBack],
        (Before, After) => &[Enter, Leave],
        (After, Before) => &[EnterBack, LeaveBack],
        _ => &[],
    }
}

/// Exponential catch-up towards the raw progress. `lag` is roughly the time
/// in seconds to close the gap; zero disables smoothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scrub {
    pub lag: f64,
    value: Option<f64>,
}

impl Scrub {
    const SETTLE: f64 = 1e-4;

    pub fn new(lag: f64) -> Self {
        Self { lag, value: None }
    }

    pub fn immediate() -> Self {
        Self::new(0.0)
    }

    pub fn follow(&mut self, target: f64, dt: f64) -> f64 {
        let next = match self.value {
            Some(current) if self.lag > 0.0 => {
                let alpha = 1.0 - (-3.0 * dt.max(0.0) / self.lag).exp();
                let v = current + (target - current) * alpha;
                if (target - v).abs() < Self::SETTLE {
                    target
                } else {
                    v
                }
            }
            _ => target,
        };
        self.value = Some(next);
        next
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriggerId(pub u32);

#[derive(Clone, Debug, PartialEq)]
pub struct TriggerUpdate {
    pub id: TriggerId,
    pub progress: f64,
    /// Progress moved since the previous frame.
    pub changed: bool,
    pub events: Vec<TriggerEvent>,
}

#[derive(Clone, Debug)]
pub struct ScrollTrigger {
    pub id: TriggerId,
    pub bounds: TriggerBounds,
    scrub: Scrub,
    zone: Option<Zone>,
    progress: Option<f64>,
}

impl ScrollTrigger {
    pub fn new(id: TriggerId, bounds: TriggerBounds, scrub: Scrub) -> Self {
        Self {
            id,
            bounds,
            scrub,
            zone: None,
            progress: None,
        }
    }

    /// The first update reports `Enter` (and `Leave`) if the page is already
    /// scrolled into or past the range.
    pub fn update(&mut self, scroll_y: f64, dt: f64) -> TriggerUpdate {
        let zone = self.bounds.zone(scroll_y);
        let events = crossing_events(self.zone.unwrap_or(Zone::Before), zone).to_vec();
        self.zone = Some(zone);

        let raw = self.bounds.progress(scroll_y);
        let progress = self.scrub.follow(raw, dt);
        let changed = self.progress.map_or(true, |p| p != progress);
        self.progress = Some(progress);

        TriggerUpdate {
            id: self.id,
            progress,
            changed,
            events,
        }
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.zone == Some(Zone::Inside)
    }
}

/// Live triggers in registration order. Killing is the only way to cancel
/// one; there is no pause.
#[derive(Default)]
pub struct TriggerSet {
    triggers: Vec<ScrollTrigger>,
    next_id: u32,
}

impl TriggerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, bounds: TriggerBounds, scrub: Scrub) -> TriggerId {
        let id = TriggerId(self.next_id);
        self.next_id += 1;
        self.triggers.push(ScrollTrigger::new(id, bounds, scrub));
        id
    }

    #[cfg(test)]
    pub fn kill(&mut self, id: TriggerId) -> bool {
        let before = self.triggers.len();
        self.triggers.retain(|t| t.id != id);
        self.triggers.len() != before
    }

    pub fn kill_all(&mut self) {
        self.triggers.clear();
    }

    #[cfg(test)]
    pub fn get(&self, id: TriggerId) -> Option<&ScrollTrigger> {
        self.triggers.iter().find(|t| t.id == id)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    /// Updates every trigger in registration order.
    pub fn update(&mut self, scroll_y: f64, dt: f64) -> Vec<TriggerUpdate> {
        self.triggers
            .iter_mut()
            .map(|t| t.update(scroll_y, dt))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped() {
        let b = TriggerBounds::pinned(1000.0, 4000.0);
        assert_eq!(b.progress(0.0), 0.0);
        assert_eq!(b.progress(2000.0), 0.25);
        assert_eq!(b.progress(9000.0), 1.0);
    }

    #[test]
    fn zero_length_range_is_a_step() {
        let b = TriggerBounds::new(500.0, 500.0);
        assert_eq!(b.progress(499.0), 0.0);
        assert_eq!(b.progress(500.0), 1.0);
        let open = TriggerBounds::open_ended(50.0);
        assert_eq!(open.progress(10_000.0), 0.0);
        assert_eq!(open.zone(10_000.0), Zone::Inside);
    }

    #[test]
    fn lifecycle_events_follow_direction() {
        let mut t = ScrollTrigger::new(
            TriggerId(0),
            TriggerBounds::new(100.0, 200.0),
            Scrub::immediate(),
        );
        assert!(t.update(0.0, 0.016).events.is_empty());
        assert_eq!(t.update(150.0, 0.016).events, vec![TriggerEvent::Enter]);
        assert!(t.update(160.0, 0.016).events.is_empty());
        assert_eq!(t.update(250.0, 0.016).events, vec![TriggerEvent::Leave]);
        assert_eq!(t.update(199.0, 0.016).events, vec![TriggerEvent::EnterBack]);
        assert_eq!(t.update(50.0, 0.016).events, vec![TriggerEvent::LeaveBack]);
        assert_eq!(
            t.update(900.0, 0.016).events,
            vec![TriggerEvent::Enter, TriggerEvent::Leave]
        );
    }

    #[test]
    fn starting_inside_reports_enter() {
        let mut t = ScrollTrigger::new(
            TriggerId(0),
            TriggerBounds::new(0.0, 200.0),
            Scrub::immediate(),
        );
        let first = t.update(20.0, 0.0);
        assert_eq!(first.events, vec![TriggerEvent::Enter]);
        assert!(first.changed);
        assert!(t.is_active());
        assert!(!t.update(20.0, 0.016).changed);
    }

    #[test]
    fn scrub_lags_then_settles() {
        let mut s = Scrub::new(1.0);
        assert_eq!(s.follow(0.0, 0.016), 0.0);
        let first = s.follow(1.0, 0.1);
        assert!(first > 0.0 && first < 1.0);
        let mut v = first;
        for _ in 0..200 {
            let next = s.follow(1.0, 0.016);
            assert!(next >= v);
            v = next;
        }
        assert_eq!(v, 1.0);
    }

    #[test]
    fn kill_removes_only_that_trigger() {
        let mut set = TriggerSet::new();
        let a = set.create(TriggerBounds::new(0.0, 10.0), Scrub::immediate());
        let b = set.create(TriggerBounds::new(0.0, 20.0), Scrub::immediate());
        assert!(set.kill(a));
        assert!(!set.kill(a));
        assert_eq!(set.len(), 1);
        assert!(set.get(b).is_some());

        let updates = set.update(5.0, 0.016);
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].id, b);
        assert_eq!(updates[0].progress, 0.25);

        set.kill_all();
        assert!(set.is_empty());
    }
}
