//! Fixed-timestep driver
//!
//! Converts variable real-time frame deltas into a whole number of fixed-size
//! simulation steps. The host calls [`FixedTimestep::frame_delta`] once per
//! frame with the current time, adds what it wants to [`accumulate`], then
//! drains the budget with [`try_step`]. Delayed frames drain several steps
//! (catch-up); the remainder carries into the next frame.
//!
//! Times are seconds as `f64`; any monotonic origin works.
//!
//! [`accumulate`]: FixedTimestep::accumulate
//! [`try_step`]: FixedTimestep::try_step

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixedTimestep {
    last: Option<f64>,
    acc: f64,
}

impl FixedTimestep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous frame.
    ///
    /// The first frame yields 0. Time running backwards yields 0.
    pub fn frame_delta(&mut self, now: f64) -> f64 {
        let dt = match self.last {
            Some(last) => (now - last).max(0.0),
            None => 0.0,
        };
        self.last = Some(now);
        dt
    }

    pub fn accumulate(&mut self, dt: f64) {
        self.acc += dt;
    }

    /// Consume one step of `step` seconds if the budget allows it.
    ///
    /// Non-positive steps never drain.
    pub fn try_step(&mut self, step: f64) -> bool {
        if step <= 0.0 || self.acc < step {
            return false;
        }
        self.acc -= step;
        true
    }

    /// One frame with a constant step: measure, accumulate, and count the
    /// steps drained.
    pub fn advance(&mut self, now: f64, step: f64) -> u32 {
        let dt = self.frame_delta(now);
        self.accumulate(dt);
        let mut steps = 0;
        while self.try_step(step) {
            steps += 1;
        }
        steps
    }

    /// Unspent budget in seconds
    pub fn accumulated(&self) -> f64 {
        self.acc
    }

    /// Drop any unspent budget; the frame clock keeps running.
    pub fn reset_accumulator(&mut self) {
        self.acc = 0.0;
    }
}
