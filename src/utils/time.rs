/// Turns variable frame deltas into tick deltas.
///
/// With a fixed interval the clock accumulates frame time and releases it in
/// whole intervals, carrying the remainder to the next frame. Without one,
/// every frame is a single tick of the raw delta.
#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Option<f32>,
    max_ticks: u32,
    accumulator: f32,
    /// Total time released as ticks
    pub elapsed: f32,
    /// Total number of ticks released
    pub tick_count: u64,
}

/// The ticks released by one [`TickClock::advance`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSteps {
    pub count: u32,
    pub delta: f32,
    /// Extra time folded into the last tick when catch-up was capped.
    pub carry: f32,
}

impl TickSteps {
    pub const NONE: Self = Self {
        count: 0,
        delta: 0.0,
        carry: 0.0,
    };

    /// Tick deltas in order. Their sum is the time this advance released.
    pub fn iter(self) -> impl Iterator<Item = f32> {
        let last = self.count.saturating_sub(1);
        (0..self.count).map(move |i| {
            if i == last {
                self.delta + self.carry
            } else {
                self.delta
            }
        })
    }

    #[must_use]
    pub fn total(self) -> f32 {
        self.count as f32 * self.delta + self.carry
    }
}

impl TickClock {
    /// `interval` of `None` means one tick per frame.
    #[must_use]
    pub fn new(interval: Option<f32>, max_ticks: u32) -> Self {
        Self {
            interval,
            max_ticks: max_ticks.max(1),
            accumulator: 0.0,
            elapsed: 0.0,
            tick_count: 0,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Option<f32> {
        self.interval
    }

    /// Time received but not yet released as a tick.
    #[must_use]
    pub fn pending(&self) -> f32 {
        self.accumulator
    }

    pub fn advance(&mut self, frame_dt: f32) -> TickSteps {
        if !frame_dt.is_finite() || frame_dt <= 0.0 {
            return TickSteps::NONE;
        }

        let Some(interval) = self.interval else {
            self.elapsed += frame_dt;
            self.tick_count += 1;
            return TickSteps {
                count: 1,
                delta: frame_dt,
                carry: 0.0,
            };
        };

        self.accumulator += frame_dt;
        let due = (self.accumulator / interval).floor() as u32;
        let count = due.min(self.max_ticks);

        // Ticks over the cap are not run, but their time still reaches the
        // tasks through the last tick so nothing outlives its duration.
        let carry = if due > self.max_ticks {
            let carry = (due - self.max_ticks) as f32 * interval;
            log::warn!(
                "Tick clock fell behind: {due} ticks due, running {}; folding {carry:.3}s into the last tick",
                self.max_ticks
            );
            carry
        } else {
            0.0
        };
        self.accumulator -= due as f32 * interval;
        self.accumulator = self.accumulator.max(0.0);

        let steps = TickSteps {
            count,
            delta: interval,
            carry,
        };
        self.elapsed += steps.total();
        self.tick_count += u64::from(count);
        steps
    }
}
