use std::time::{Duration, Instant};

/// Fraction added per tick while a generation is outstanding.
pub const STEP: f32 = 0.10;
/// Tick length of the simulated progress.
pub const TICK: Duration = Duration::from_millis(400);
/// The simulator parks here until the request actually completes.
pub const CAP: f32 = 0.90;

/// Cosmetic progress indicator for the generation request.
///
/// The backend reports no real progress, so the displayed value is a pure
/// function of elapsed time: 0 when a request starts, one [`STEP`] per
/// [`TICK`], parked at [`CAP`] until the response lands. Idle reads 1.0,
/// which is also what completion snaps back to.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressSim {
    started: Option<Instant>,
}

impl ProgressSim {
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    pub fn finish(&mut self) {
        self.started = None;
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    /// Current display fraction in `0.0..=1.0`.
    pub fn fraction(&self) -> f32 {
        match self.started {
            Some(started) => Self::fraction_after(started.elapsed()),
            None => 1.0,
        }
    }

    fn fraction_after(elapsed: Duration) -> f32 {
        let ticks = (elapsed.as_millis() / TICK.as_millis()) as f32;
        (ticks * STEP).min(CAP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(millis: u64) -> f32 {
        ProgressSim::fraction_after(Duration::from_millis(millis))
    }

    #[test]
    fn test_idle_reads_full() {
        let sim = ProgressSim::default();
        assert!(!sim.is_running());
        assert_eq!(sim.fraction(), 1.0);
    }

    #[test]
    fn test_starts_at_zero() {
        let mut sim = ProgressSim::default();
        sim.start();
        assert!(sim.is_running());
        assert_eq!(at(0), 0.0);
        assert_eq!(at(399), 0.0);
    }

    #[test]
    fn test_steps_per_tick() {
        assert_eq!(at(400), 0.10);
        assert_eq!(at(800), 0.20);
        assert_eq!(at(1999), 0.40);
    }

    #[test]
    fn test_caps_below_full_while_running() {
        assert_eq!(at(3600), 0.90);
        assert_eq!(at(60_000), 0.90);
    }

    #[test]
    fn test_monotonic_while_running() {
        let mut last = 0.0;
        for millis in (0..10_000).step_by(137) {
            let value = at(millis);
            assert!(value >= last, "regressed at {millis}ms: {value} < {last}");
            assert!(value <= CAP);
            last = value;
        }
    }

    #[test]
    fn test_finish_snaps_to_full() {
        let mut sim = ProgressSim::default();
        sim.start();
        sim.finish();
        assert!(!sim.is_running());
        assert_eq!(sim.fraction(), 1.0);
    }
}
