//! Spotlight fallback for tablets and phones: a plain paged slider with
//! buttons, a clickable progress bar, swipe and arrow keys.

pub const SWIPE_THRESHOLD: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slider {
    current: usize,
    len: usize,
}

/// What the slider chrome should show for the current slide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderView {
    pub track_offset_percent: f64,
    pub progress_percent: f64,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl Slider {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns whether the slide changed. Out-of-range indexes are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.len || index == self.current {
            return false;
        }
        self.current = index;
        true
    }

    pub fn next(&mut self) -> bool {
        if self.current + 1 < self.len {
            self.current += 1;
            true
        } else {
            false
        }
    }

    pub fn prev(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Click on the progress bar at `fraction` of its width.
    pub fn go_to_fraction(&mut self, fraction: f64) -> bool {
        if self.len == 0 {
            return false;
        }
        let slot = (fraction.max(0.0) * self.len as f64).floor() as usize;
        self.go_to(slot.min(self.len - 1))
    }

    /// Horizontal swipe from `start_x` to `end_x` (screen px). Swiping left
    /// advances.
    pub fn swipe(&mut self, start_x: f64, end_x: f64) -> bool {
        let diff = start_x - end_x;
        if diff.abs() <= SWIPE_THRESHOLD {
            return false;
        }
        if diff > 0.0 {
            self.next()
        } else {
            self.prev()
        }
    }

    pub fn key(&mut self, key: &str) -> bool {
        match key {
            "ArrowLeft" => self.prev(),
            "ArrowRight" => self.next(),
            _ => false,
        }
    }

    pub fn view(&self) -> SliderView {
        let progress = if self.len == 0 {
            0.0
        } else {
            (self.current + 1) as f64 / self.len as f64 * 100.0
        };
        SliderView {
            track_offset_percent: -(self.current as f64) * 100.0,
            progress_percent: progress,
            prev_disabled: self.current == 0,
            next_disabled: self.len == 0 || self.current == self.len - 1,
        }
    }
}
