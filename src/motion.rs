//! Timing primitives behind the page's scroll-driven animations.
//!
//! Nothing here touches the DOM. The components in `app` own the timers and
//! observers and feed ticks and intersection ratios into these types.

pub const DEFAULT_COUNTER_STEPS: u32 = 60;
pub const TYPEWRITER_INTERVAL_MS: u64 = 100;

/// Ease-out cubic, `1 - (1 - x)^3`, with `x` clamped to `[0, 1]`.
pub fn ease_out_cubic(progress: f64) -> f64 {
    let x = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - x).powi(3)
}

/// One-shot visibility flag for a section.
///
/// The flag flips the first time an observed intersection ratio reaches the
/// threshold and never reverts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealState {
    threshold: f64,
    revealed: bool,
}

impl RevealState {
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            0.0
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            revealed: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed one intersection ratio. Returns true only on the call that
    /// reveals the section.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.revealed || ratio.is_nan() || ratio < self.threshold {
            return false;
        }
        self.revealed = true;
        true
    }
}

/// Count-up from zero to `target` over a fixed number of steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterAnimation {
    target: u32,
    duration_ms: u64,
    steps: u32,
    step: u32,
    running: bool,
}

impl CounterAnimation {
    pub fn new(target: u32, duration_ms: u64) -> Self {
        Self::with_steps(target, duration_ms, DEFAULT_COUNTER_STEPS)
    }

    pub fn with_steps(target: u32, duration_ms: u64, steps: u32) -> Self {
        Self {
            target,
            duration_ms,
            steps: steps.max(1),
            step: 0,
            running: false,
        }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    /// Timer period between ticks, never zero.
    pub fn interval_ms(&self) -> u64 {
        (self.duration_ms / u64::from(self.steps)).max(1)
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.steps
    }

    /// Begin counting. Returns false, changing nothing, when the count is
    /// already running or has finished.
    pub fn start(&mut self) -> bool {
        if self.running || self.is_finished() {
            return false;
        }
        self.running = true;
        true
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn value(&self) -> u32 {
        let progress = f64::from(self.step) / f64::from(self.steps);
        let eased = (f64::from(self.target) * ease_out_cubic(progress)).floor();
        (eased as u32).min(self.target)
    }

    /// Advance one step and return the new displayed value, or `None` once
    /// the animation already finished.
    pub fn tick(&mut self) -> Option<u32> {
        if self.is_finished() {
            self.running = false;
            return None;
        }
        self.step += 1;
        if self.is_finished() {
            self.running = false;
        }
        Some(self.value())
    }
}

/// Reveals a fixed string one character per tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    text: &'static str,
    shown: usize,
    done: bool,
}

impl Typewriter {
    pub fn new(text: &'static str) -> Self {
        Self {
            text,
            shown: 0,
            done: false,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Next visible prefix. The first tick yields the empty string and the
    /// last yields the full text; after that it returns `None`.
    pub fn tick(&mut self) -> Option<&'static str> {
        if self.done {
            return None;
        }
        let text = self.text;
        let end = text
            .char_indices()
            .nth(self.shown)
            .map(|(i, _)| i)
            .unwrap_or(text.len());
        if end == text.len() {
            self.done = true;
        }
        self.shown += 1;
        Some(&text[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_cubic_bounds() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(-3.0), 0.0);
        assert_eq!(ease_out_cubic(7.0), 1.0);
        // decelerates: first half covers most of the distance
        assert!(ease_out_cubic(0.5) > 0.8);
    }

    #[test]
    fn test_reveal_threshold() {
        for threshold in [0.0, 0.1, 0.2, 0.5, 1.0] {
            for ratio in [0.0, 0.05, 0.1, 0.19, 0.2, 0.6, 1.0] {
                let mut state = RevealState::new(threshold);
                let flipped = state.observe(ratio);
                assert_eq!(flipped, ratio >= threshold, "t={threshold} r={ratio}");
                assert_eq!(state.is_revealed(), ratio >= threshold);
            }
        }
    }

    #[test]
    fn test_reveal_is_write_once() {
        let mut state = RevealState::new(0.2);
        assert!(!state.observe(0.1));
        assert!(state.observe(0.25));
        // later observations never flip again or hide the section
        assert!(!state.observe(0.0));
        assert!(!state.observe(0.9));
        assert!(state.is_revealed());
    }

    #[test]
    fn test_reveal_clamps_threshold() {
        assert_eq!(RevealState::new(4.0).threshold(), 1.0);
        assert_eq!(RevealState::new(-1.0).threshold(), 0.0);
        assert_eq!(RevealState::new(f64::NAN).threshold(), 0.0);
        assert!(!RevealState::new(0.5).observe(f64::NAN));
    }

    #[test]
    fn test_counter_reaches_target() {
        for target in [0, 1, 5, 50, 99, 12_345] {
            let mut counter = CounterAnimation::new(target, 2000);
            let mut last = counter.value();
            assert_eq!(last, 0);
            let mut ticks = 0;
            while let Some(v) = counter.tick() {
                assert!(v >= last, "counter went backwards");
                assert!(v <= target, "counter overshot");
                last = v;
                ticks += 1;
            }
            assert_eq!(ticks, DEFAULT_COUNTER_STEPS);
            assert_eq!(last, target);
            assert!(counter.is_finished());
            assert_eq!(counter.tick(), None);
        }
    }

    #[test]
    fn test_counter_interval() {
        assert_eq!(CounterAnimation::new(5, 2000).interval_ms(), 33);
        assert_eq!(CounterAnimation::with_steps(5, 0, 60).interval_ms(), 1);
        // zero steps is treated as a single step
        let mut counter = CounterAnimation::with_steps(10, 100, 0);
        assert_eq!(counter.tick(), Some(10));
        assert_eq!(counter.tick(), None);
    }

    #[test]
    fn test_counter_starts_once() {
        let mut counter = CounterAnimation::with_steps(50, 2000, 4);
        assert!(!counter.is_running());
        assert!(counter.start());
        assert!(counter.is_running());
        counter.tick();
        counter.tick();
        let midway = counter.value();

        assert!(!counter.start(), "second start must be refused");
        assert!(counter.is_running());
        assert_eq!(counter.value(), midway);

        while counter.tick().is_some() {}
        assert!(!counter.is_running());
        assert_eq!(counter.value(), 50);
        assert!(!counter.start(), "finished counter stays finished");
        assert_eq!(counter.value(), 50);
    }

    #[test]
    fn test_typewriter_prefixes() {
        let mut tw = Typewriter::new("Data");
        let frames = std::iter::from_fn(|| tw.tick()).collect::<Vec<_>>();
        assert_eq!(frames, vec!["", "D", "Da", "Dat", "Data"]);
        assert!(tw.is_done());
    }

    #[test]
    fn test_typewriter_multibyte() {
        let mut tw = Typewriter::new("né");
        assert_eq!(tw.tick(), Some(""));
        assert_eq!(tw.tick(), Some("n"));
        assert_eq!(tw.tick(), Some("né"));
        assert_eq!(tw.tick(), None);
    }
}
