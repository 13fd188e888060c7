use std::time::Duration;

pub const DEFAULT_FIXED_DT: Duration = Duration::from_millis(10);
pub const DEFAULT_MAX_FRAME_DELTA: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepPlan {
    pub ticks_to_run: u32,
    pub frame_delta: Duration,
    /// Wall-clock time discarded by the frame-delta clamp.
    pub dropped_stall: Duration,
}

/// Accumulator that turns variable frame times into fixed simulation ticks.
///
/// Times are offsets from an arbitrary epoch (usually loop start). Each call to
/// [`FixedStepScheduler::begin_frame`] consumes whole `fixed_dt` steps from the
/// accumulator; the caller runs that many updates and then renders once.
#[derive(Debug, Clone)]
pub struct FixedStepScheduler {
    fixed_dt: Duration,
    max_frame_delta: Duration,
    simulation_time: Duration,
    accumulator: Duration,
}

impl FixedStepScheduler {
    pub fn new(fixed_dt: Duration, max_frame_delta: Duration, start: Duration) -> Self {
        Self {
            fixed_dt: normalize_non_zero_duration(fixed_dt, DEFAULT_FIXED_DT),
            max_frame_delta: normalize_non_zero_duration(max_frame_delta, DEFAULT_MAX_FRAME_DELTA),
            simulation_time: start,
            accumulator: Duration::ZERO,
        }
    }

    pub fn from_tps(target_tps: u32, max_frame_delta: Duration, start: Duration) -> Self {
        let fixed_dt = Duration::from_secs_f64(1.0 / target_tps.max(1) as f64);
        Self::new(fixed_dt, max_frame_delta, start)
    }

    pub fn fixed_dt(&self) -> Duration {
        self.fixed_dt
    }

    pub fn max_frame_delta(&self) -> Duration {
        self.max_frame_delta
    }

    pub fn simulation_time(&self) -> Duration {
        self.simulation_time
    }

    pub fn accumulator(&self) -> Duration {
        self.accumulator
    }

    /// Advances to `now` and returns how many fixed ticks are due.
    pub fn begin_frame(&mut self, now: Duration) -> StepPlan {
        let raw_frame_delta = now.saturating_sub(self.simulation_time);
        let frame_delta = clamp_frame_delta(raw_frame_delta, self.max_frame_delta);
        self.accumulator = self.accumulator.saturating_add(frame_delta);
        self.simulation_time = now;

        let mut ticks_to_run = 0u32;
        while self.accumulator >= self.fixed_dt {
            self.accumulator -= self.fixed_dt;
            ticks_to_run = ticks_to_run.saturating_add(1);
        }

        StepPlan {
            ticks_to_run,
            frame_delta,
            dropped_stall: raw_frame_delta - frame_delta,
        }
    }
}

pub fn clamp_frame_delta(frame_dt: Duration, max_frame_delta: Duration) -> Duration {
    frame_dt.min(max_frame_delta)
}

pub(crate) fn normalize_non_zero_duration(value: Duration, fallback: Duration) -> Duration {
    if value.is_zero() {
        fallback
    } else {
        value
    }
}
