/// Tracks which spotlight title sits closest to the viewport's vertical
/// center.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActiveTitle {
    current: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveChange {
    pub previous: usize,
    pub next: usize,
}

/// Index of the center nearest `middle`. The first minimum wins on ties.
pub fn nearest(centers: &[f64], middle: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, c) in centers.iter().enumerate() {
        let d = (c - middle).abs();
        if best.map_or(true, |(_, bd)| d < bd) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}

impl ActiveTitle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Reports a change only when the nearest title differs from last time.
    pub fn update(&mut self, centers: &[f64], middle: f64) -> Option<ActiveChange> {
        let next = nearest(centers, middle)?;
        if next == self.current {
            return None;
        }
        let change = ActiveChange {
            previous: self.current,
            next,
        };
        self.current = next;
        Some(change)
    }
}
