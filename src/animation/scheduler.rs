use slotmap::{SlotMap, new_key_type};

use crate::animation::binding::TargetPath;
use crate::animation::channel::{Rotation, Scale, Translation};
use crate::animation::duration::DurationPolicy;
use crate::animation::factory::{MoveRequest, RotateRequest, ScaleRequest};
use crate::animation::task::{InterpolationTask, TaskOutcome, TaskState};
use crate::config::{TaskDefaults, TweenSettings};
use crate::errors::{Result, TweenError};
use crate::host::TransformHost;
use crate::scene::{ActorKey, Rotator};
use crate::utils::time::TickClock;

new_key_type! {
    pub struct TaskHandle;
}

/// Any of the three task kinds, so they can share one scheduler.
#[derive(Debug)]
pub enum TransformTask {
    Move(InterpolationTask<Translation>),
    Rotate(InterpolationTask<Rotation>),
    Scale(InterpolationTask<Scale>),
}

macro_rules! dispatch {
    ($self:expr, $task:ident => $body:expr) => {
        match $self {
            TransformTask::Move($task) => $body,
            TransformTask::Rotate($task) => $body,
            TransformTask::Scale($task) => $body,
        }
    };
}

impl TransformTask {
    pub fn activate<H: TransformHost + ?Sized>(&mut self, host: &mut H) -> TaskState {
        dispatch!(self, task => task.activate(host))
    }

    pub fn tick<H: TransformHost + ?Sized>(&mut self, host: &mut H, dt: f32) -> TaskState {
        dispatch!(self, task => task.tick(host, dt))
    }

    #[must_use]
    pub fn state(&self) -> TaskState {
        dispatch!(self, task => task.state())
    }

    #[must_use]
    pub fn outcome(&self) -> Option<TaskOutcome> {
        dispatch!(self, task => task.outcome())
    }

    #[must_use]
    pub fn target(&self) -> ActorKey {
        dispatch!(self, task => task.target())
    }

    #[must_use]
    pub fn path(&self) -> TargetPath {
        dispatch!(self, task => task.path())
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        dispatch!(self, task => task.progress())
    }
}

impl From<InterpolationTask<Translation>> for TransformTask {
    fn from(task: InterpolationTask<Translation>) -> Self {
        TransformTask::Move(task)
    }
}

impl From<InterpolationTask<Rotation>> for TransformTask {
    fn from(task: InterpolationTask<Rotation>) -> Self {
        TransformTask::Rotate(task)
    }
}

impl From<InterpolationTask<Scale>> for TransformTask {
    fn from(task: InterpolationTask<Scale>) -> Self {
        TransformTask::Scale(task)
    }
}

/// Terminal notification of one task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskEvent {
    pub handle: TaskHandle,
    pub target: ActorKey,
    pub path: TargetPath,
    pub outcome: TaskOutcome,
}

/// Owns running tasks and ticks them at a fixed rate.
///
/// Completed tasks are removed as soon as they report, so a handle stops
/// resolving once its [`TaskEvent`] has been emitted.
pub struct TaskScheduler {
    tasks: SlotMap<TaskHandle, TransformTask>,
    clock: TickClock,
    policy: DurationPolicy,
    defaults: TaskDefaults,
    events: Vec<TaskEvent>,
}

impl TaskScheduler {
    /// Builds a scheduler from `settings`, rejecting values that would stall
    /// or misfire the tick clock.
    pub fn new(settings: &TweenSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self::from_valid_settings(settings))
    }

    fn from_valid_settings(settings: &TweenSettings) -> Self {
        Self {
            tasks: SlotMap::with_key(),
            clock: TickClock::new(settings.tick_interval(), settings.max_ticks_per_update),
            policy: settings.duration_policy(),
            defaults: settings.defaults,
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn policy(&self) -> &DurationPolicy {
        &self.policy
    }

    #[must_use]
    pub fn clock(&self) -> &TickClock {
        &self.clock
    }

    // ========================================================================
    // Requests using the configured defaults
    // ========================================================================

    #[must_use]
    pub fn move_request(&self, target: ActorKey, location: glam::Vec3) -> MoveRequest {
        MoveRequest::with_defaults(target, location, &self.defaults)
    }

    #[must_use]
    pub fn rotate_request(&self, target: ActorKey, rotation: Rotator) -> RotateRequest {
        RotateRequest::with_defaults(target, rotation, &self.defaults)
    }

    #[must_use]
    pub fn scale_request(&self, target: ActorKey, scale: glam::Vec3) -> ScaleRequest {
        ScaleRequest::with_defaults(target, scale, &self.defaults)
    }

    // ========================================================================
    // Entry points
    // ========================================================================

    pub fn start_move<H: TransformHost + ?Sized>(
        &mut self,
        host: &mut H,
        request: MoveRequest,
    ) -> Result<TaskHandle> {
        let task = request.build(&*host, &self.policy)?;
        Ok(self.start(host, task))
    }

    pub fn start_rotate<H: TransformHost + ?Sized>(
        &mut self,
        host: &mut H,
        request: RotateRequest,
    ) -> Result<TaskHandle> {
        let task = request.build(&*host, &self.policy)?;
        Ok(self.start(host, task))
    }

    pub fn start_scale<H: TransformHost + ?Sized>(
        &mut self,
        host: &mut H,
        request: ScaleRequest,
    ) -> Result<TaskHandle> {
        let task = request.build(&*host, &self.policy)?;
        Ok(self.start(host, task))
    }

    /// Spawns and activates a task in one step.
    pub fn start<H: TransformHost + ?Sized>(
        &mut self,
        host: &mut H,
        task: impl Into<TransformTask>,
    ) -> TaskHandle {
        let handle = self.spawn(task);
        self.activate_inner(handle, host);
        handle
    }

    /// Stores a task without starting it.
    ///
    /// Tasks left in `Created` are activated by the next [`update`](Self::update).
    pub fn spawn(&mut self, task: impl Into<TransformTask>) -> TaskHandle {
        self.tasks.insert(task.into())
    }

    pub fn activate<H: TransformHost + ?Sized>(
        &mut self,
        handle: TaskHandle,
        host: &mut H,
    ) -> Result<TaskState> {
        if !self.tasks.contains_key(handle) {
            return Err(TweenError::TaskNotFound);
        }
        Ok(self.activate_inner(handle, host))
    }

    fn activate_inner<H: TransformHost + ?Sized>(&mut self, handle: TaskHandle, host: &mut H) -> TaskState {
        let Some(task) = self.tasks.get_mut(handle) else {
            return TaskState::Completed;
        };
        let state = task.activate(host);
        if state == TaskState::Completed {
            self.retire(handle);
        }
        state
    }

    // ========================================================================
    // Update
    // ========================================================================

    /// Advances all tasks by one frame of `dt` seconds.
    ///
    /// Returns the outcomes reported during this update, including those of
    /// tasks that finished in [`start`](Self::start) since the last update.
    pub fn update<H: TransformHost + ?Sized>(&mut self, dt: f32, host: &mut H) -> Vec<TaskEvent> {
        let pending: Vec<TaskHandle> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.state() == TaskState::Created)
            .map(|(handle, _)| handle)
            .collect();
        for handle in pending {
            self.activate_inner(handle, host);
        }

        let steps = self.clock.advance(dt);
        let mut finished = Vec::new();

        for step in steps.iter() {
            for (handle, task) in &mut self.tasks {
                if task.state() == TaskState::Active && task.tick(host, step) == TaskState::Completed {
                    finished.push(handle);
                }
            }
            for handle in finished.drain(..) {
                self.retire(handle);
            }
            if self.tasks.is_empty() {
                break;
            }
        }

        std::mem::take(&mut self.events)
    }

    fn retire(&mut self, handle: TaskHandle) {
        let Some(task) = self.tasks.remove(handle) else {
            return;
        };
        if let Some(outcome) = task.outcome() {
            self.events.push(TaskEvent {
                handle,
                target: task.target(),
                path: task.path(),
                outcome,
            });
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    #[must_use]
    pub fn state(&self, handle: TaskHandle) -> Option<TaskState> {
        self.tasks.get(handle).map(TransformTask::state)
    }

    #[must_use]
    pub fn get(&self, handle: TaskHandle) -> Option<&TransformTask> {
        self.tasks.get(handle)
    }

    #[must_use]
    pub fn is_running(&self, handle: TaskHandle) -> bool {
        self.state(handle) == Some(TaskState::Active)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Handles of the tasks currently driving `target`.
    pub fn tasks_for(&self, target: ActorKey) -> impl Iterator<Item = TaskHandle> + '_ {
        self.tasks
            .iter()
            .filter(move |(_, task)| task.target() == target)
            .map(|(handle, _)| handle)
    }
}

impl Default for TaskScheduler {
    fn default() -> Self {
        Self::from_valid_settings(&TweenSettings::default())
    }
}
