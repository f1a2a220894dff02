use std::fmt;

use crate::animation::binding::{PropertyBinding, TargetPath};
use crate::animation::channel::Channel;
use crate::animation::duration::MIN_DURATION;
use crate::animation::easing::{EasingKind, ease};
use crate::host::{ApplyResult, TransformHost};
use crate::scene::ActorKey;

/// Durations at or below this complete inside `activate`, without ticking.
pub const IMMEDIATE_THRESHOLD: f32 = 1e-4;

/// Relative slack on the completion check. Deltas such as `1.0 / 60.0` do
/// not sum to exactly one second.
const COMPLETION_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskState {
    /// Parameters stored, not yet running.
    Created,
    /// Receiving ticks.
    Active,
    /// Terminal. The outcome has been reported.
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskOutcome {
    Success,
    Failed,
}

// ============================================================================
// Callbacks
// ============================================================================

pub type Callback = Box<dyn FnOnce() + Send + 'static>;

/// Notifications fired by a task. Each fires at most once.
#[derive(Default)]
pub struct TaskCallbacks {
    pub(crate) on_started: Option<Callback>,
    pub(crate) on_success: Option<Callback>,
    pub(crate) on_failed: Option<Callback>,
}

impl TaskCallbacks {
    /// Fires when the task starts ticking. Not fired for tasks that finish
    /// inside activation.
    pub fn on_started(&mut self, f: impl FnOnce() + Send + 'static) {
        self.on_started = Some(Box::new(f));
    }

    pub fn on_success(&mut self, f: impl FnOnce() + Send + 'static) {
        self.on_success = Some(Box::new(f));
    }

    pub fn on_failed(&mut self, f: impl FnOnce() + Send + 'static) {
        self.on_failed = Some(Box::new(f));
    }
}

impl fmt::Debug for TaskCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskCallbacks")
            .field("on_started", &self.on_started.is_some())
            .field("on_success", &self.on_success.is_some())
            .field("on_failed", &self.on_failed.is_some())
            .finish()
    }
}

// ============================================================================
// InterpolationTask
// ============================================================================

/// Drives one transform property of one actor from its current value to
/// `end` over a fixed duration.
///
/// # Lifecycle
///
/// ```text
/// Created --activate--> Active --tick...--> Completed
///    |                                         ^
///    +------- (target gone / instant) ---------+
/// ```
///
/// The task never owns its actor. Every transition re-checks that the actor
/// still exists; a despawned actor ends the task with [`TaskOutcome::Failed`].
/// Completion is driven by accumulated time, so any tick rate and any
/// sequence of deltas reaches the same end state.
#[derive(Debug)]
pub struct InterpolationTask<C: Channel> {
    target: ActorKey,
    channel: C,

    start: C::Value,
    end: C::Value,

    duration: f32,
    elapsed: f64,
    easing: EasingKind,

    state: TaskState,
    outcome: Option<TaskOutcome>,

    callbacks: TaskCallbacks,
}

impl<C: Channel> InterpolationTask<C> {
    /// Creates a task in the [`TaskState::Created`] state.
    ///
    /// `duration` is floored to [`MIN_DURATION`]; non-finite values become the floor.
    #[must_use]
    pub fn new(target: ActorKey, channel: C, end: C::Value, duration: f32, easing: EasingKind) -> Self {
        let duration = if duration.is_finite() {
            duration.max(MIN_DURATION)
        } else {
            MIN_DURATION
        };
        Self::with_raw_duration(target, channel, end, duration, easing)
    }

    /// Creates a task that writes `end` directly when activated, in the same frame.
    #[must_use]
    pub fn instant(target: ActorKey, channel: C, end: C::Value) -> Self {
        Self::with_raw_duration(target, channel, end, 0.0, EasingKind::Linear)
    }

    fn with_raw_duration(
        target: ActorKey,
        channel: C,
        end: C::Value,
        duration: f32,
        easing: EasingKind,
    ) -> Self {
        Self {
            target,
            channel,
            start: end,
            end,
            duration,
            elapsed: 0.0,
            easing,
            state: TaskState::Created,
            outcome: None,
            callbacks: TaskCallbacks::default(),
        }
    }

    #[must_use]
    pub fn with_callbacks(mut self, callbacks: TaskCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    pub fn callbacks_mut(&mut self) -> &mut TaskCallbacks {
        &mut self.callbacks
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    #[must_use]
    pub fn target(&self) -> ActorKey {
        self.target
    }

    #[inline]
    #[must_use]
    pub fn binding(&self) -> PropertyBinding {
        PropertyBinding {
            target: self.target,
            path: C::PATH,
        }
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> TargetPath {
        C::PATH
    }

    #[inline]
    #[must_use]
    pub fn channel(&self) -> &C {
        &self.channel
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> TaskState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn outcome(&self) -> Option<TaskOutcome> {
        self.outcome
    }

    #[inline]
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    #[inline]
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed as f32
    }

    #[inline]
    #[must_use]
    pub fn easing(&self) -> EasingKind {
        self.easing
    }

    /// Start value sampled at activation (equal to `end` before that).
    #[inline]
    #[must_use]
    pub fn start_value(&self) -> C::Value {
        self.start
    }

    #[inline]
    #[must_use]
    pub fn end_value(&self) -> C::Value {
        self.end
    }

    /// Raw (un-eased) progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return if self.state == TaskState::Completed { 1.0 } else { 0.0 };
        }
        if self.is_due() {
            return 1.0;
        }
        (self.elapsed / f64::from(self.duration)).clamp(0.0, 1.0) as f32
    }

    fn is_due(&self) -> bool {
        self.elapsed >= f64::from(self.duration) * (1.0 - COMPLETION_TOLERANCE)
    }

    // ========================================================================
    // State machine
    // ========================================================================

    /// Starts the task: samples the start value and begins accepting ticks.
    ///
    /// May complete the task right away (missing target, instant task).
    /// Calling this on a task that is not [`TaskState::Created`] does nothing.
    pub fn activate<H: TransformHost + ?Sized>(&mut self, host: &mut H) -> TaskState {
        if self.state != TaskState::Created {
            log::warn!(
                "Ignoring activate on {:?} task ({:?})",
                self.state,
                C::PATH
            );
            return self.state;
        }

        if !host.contains(self.target) {
            log::debug!("{:?} task target {:?} missing at activation", C::PATH, self.target);
            self.finish(TaskOutcome::Failed);
            return self.state;
        }

        if self.duration <= IMMEDIATE_THRESHOLD {
            let result = self.channel.apply(host, self.target, self.end);
            self.elapsed = f64::from(self.duration);
            self.finish(outcome_of(result));
            return self.state;
        }

        let Some(start) = self.channel.sample(&*host, self.target) else {
            self.finish(TaskOutcome::Failed);
            return self.state;
        };

        let (start, end) = self.channel.prepare(start, self.end);
        self.start = start;
        self.end = end;
        self.elapsed = 0.0;
        self.state = TaskState::Active;

        log::debug!(
            "{:?} task started on {:?}: {:?} -> {:?} over {:.3}s ({:?})",
            C::PATH,
            self.target,
            self.start,
            self.end,
            self.duration,
            self.easing
        );

        if let Some(on_started) = self.callbacks.on_started.take() {
            on_started();
        }

        self.state
    }

    /// Advances the task by `dt` seconds and writes the interpolated value.
    ///
    /// Ticks delivered to a task that is not [`TaskState::Active`] are ignored.
    pub fn tick<H: TransformHost + ?Sized>(&mut self, host: &mut H, dt: f32) -> TaskState {
        if self.state != TaskState::Active {
            log::warn!("Ignoring tick on {:?} task ({:?})", self.state, C::PATH);
            return self.state;
        }

        if !host.contains(self.target) {
            log::debug!("{:?} task target {:?} lost mid-flight", C::PATH, self.target);
            self.finish(TaskOutcome::Failed);
            return self.state;
        }

        if dt.is_finite() && dt > 0.0 {
            self.elapsed += f64::from(dt);
        }

        let due = self.is_due();
        let raw_alpha = self.progress();
        let value = if due {
            self.end
        } else {
            let eased = ease(raw_alpha, self.easing);
            self.channel.interpolate(self.start, self.end, eased)
        };

        log::trace!(
            "{:?} tick: elapsed {:.4}/{:.4} alpha {raw_alpha:.4} -> {value:?}",
            C::PATH,
            self.elapsed,
            self.duration
        );

        let result = self.channel.apply(host, self.target, value);

        if result == ApplyResult::TargetLost {
            self.finish(TaskOutcome::Failed);
        } else if due {
            self.finish(outcome_of(result));
        }

        self.state
    }

    fn finish(&mut self, outcome: TaskOutcome) {
        self.state = TaskState::Completed;
        self.outcome = Some(outcome);

        log::debug!("{:?} task on {:?} completed: {outcome:?}", C::PATH, self.target);

        self.callbacks.on_started = None;
        let callback = match outcome {
            TaskOutcome::Success => self.callbacks.on_success.take(),
            TaskOutcome::Failed => self.callbacks.on_failed.take(),
        };
        self.callbacks.on_success = None;
        self.callbacks.on_failed = None;

        if let Some(callback) = callback {
            callback();
        }
    }
}

fn outcome_of(result: ApplyResult) -> TaskOutcome {
    if result.is_applied() {
        TaskOutcome::Success
    } else {
        TaskOutcome::Failed
    }
}
