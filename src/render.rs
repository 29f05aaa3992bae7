// ---------------------------------------------------------------------------
// Renderer read contract.
//
// Integration and rendering are fully decoupled: a renderer receives a
// COMPLETED trajectory buffer, fixes its axis limits from a full scan, then
// reads frames by a strictly increasing index. Nothing here feeds back into
// the simulation.
// ---------------------------------------------------------------------------

/// Fixed axis range for one plotted component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisLimits {
    pub min: f64,
    pub max: f64,
}

impl AxisLimits {
    /// Widen the range by a fraction of its span on both ends, for display
    /// margins. A degenerate (zero-span) range gets a unit margin instead.
    pub fn padded(self, fraction: f64) -> Self {
        let span = self.max - self.min;
        let pad = if span > 0.0 { span * fraction } else { 1.0 };
        Self {
            min: self.min - pad,
            max: self.max + pad,
        }
    }
}

/// Axis limits of one state component over a completed buffer.
///
/// This is the static-bounds half of the renderer contract: limits are
/// computed from min/max over the FULL trajectory before any frame is drawn,
/// so the axes never rescale mid-animation.
pub fn component_limits<S>(states: &[S], component: impl Fn(&S) -> f64) -> AxisLimits {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for s in states {
        let v = component(s);
        min = min.min(v);
        max = max.max(v);
    }
    AxisLimits { min, max }
}

/// Monotonic frame index over a buffer of known length.
///
/// `advance` yields 0, 1, …, len−1 exactly once each, in order, then `None`
/// forever: frames are drawn strictly in increasing index order with no
/// skipping and no out-of-order access.
#[derive(Debug, Clone)]
pub struct FrameCursor {
    next: usize,
    len: usize,
}

impl FrameCursor {
    pub fn new(len: usize) -> Self {
        Self { next: 0, len }
    }

    /// Index of the next frame to draw, or `None` when playback is done.
    pub fn advance(&mut self) -> Option<usize> {
        if self.next >= self.len {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(index)
    }

    /// Most recently drawn frame, if any.
    pub fn current(&self) -> Option<usize> {
        self.next.checked_sub(1)
    }

    pub fn finished(&self) -> bool {
        self.next >= self.len
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_match_extremes() {
        let data = [3.0, -1.5, 7.25, 0.0];
        let limits = component_limits(&data, |v| *v);
        assert_eq!(limits, AxisLimits { min: -1.5, max: 7.25 });
    }

    #[test]
    fn padded_widens_range() {
        let limits = AxisLimits { min: 0.0, max: 10.0 }.padded(0.1);
        assert_eq!(limits, AxisLimits { min: -1.0, max: 11.0 });
    }

    #[test]
    fn padded_handles_flat_range() {
        let limits = AxisLimits { min: 2.0, max: 2.0 }.padded(0.1);
        assert!(limits.min < 2.0 && limits.max > 2.0);
    }

    #[test]
    fn cursor_visits_every_index_once_in_order() {
        let mut cursor = FrameCursor::new(4);
        let mut seen = Vec::new();
        while let Some(i) = cursor.advance() {
            seen.push(i);
        }
        assert_eq!(seen, vec![0, 1, 2, 3]);
        assert!(cursor.finished());
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.current(), Some(3));
    }

    #[test]
    fn cursor_on_empty_buffer() {
        let mut cursor = FrameCursor::new(0);
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.current(), None);
    }
}
