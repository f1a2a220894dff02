use glam::{Quat, Vec3};
use slotmap::SlotMap;

use crate::host::{ApplyResult, TransformHost};
use crate::scene::collision::Aabb;
use crate::scene::node::Actor;
use crate::scene::{ActorKey, BlockerKey};

/// Distance kept between a swept actor and the surface it hit.
const SWEEP_SKIN: f32 = 1e-3;

/// Actor container and reference [`TransformHost`].
///
/// Actors are addressed by [`ActorKey`]. Despawning an actor invalidates its
/// key; tasks still holding it fail on their next tick.
#[derive(Debug, Default)]
pub struct Stage {
    actors: SlotMap<ActorKey, Actor>,
    blockers: SlotMap<BlockerKey, Aabb>,
}

impl Stage {
    #[must_use]
    pub fn new() -> Self {
        Self {
            actors: SlotMap::with_key(),
            blockers: SlotMap::with_key(),
        }
    }

    /// 添加 Actor，返回其句柄
    pub fn spawn(&mut self, actor: Actor) -> ActorKey {
        self.actors.insert(actor)
    }

    /// 删除 Actor（句柄随之失效）
    pub fn despawn(&mut self, key: ActorKey) -> Option<Actor> {
        let actor = self.actors.remove(key);
        if let Some(actor) = &actor {
            log::debug!("Despawned actor '{}'", actor.name);
        }
        actor
    }

    #[must_use]
    pub fn get(&self, key: ActorKey) -> Option<&Actor> {
        self.actors.get(key)
    }

    pub fn get_mut(&mut self, key: ActorKey) -> Option<&mut Actor> {
        self.actors.get_mut(key)
    }

    pub fn actors(&self) -> impl Iterator<Item = (ActorKey, &Actor)> {
        self.actors.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    // ========================================================================
    // Blocking geometry
    // ========================================================================

    pub fn add_blocker(&mut self, bounds: Aabb) -> BlockerKey {
        self.blockers.insert(bounds)
    }

    pub fn remove_blocker(&mut self, key: BlockerKey) -> Option<Aabb> {
        self.blockers.remove(key)
    }

    /// Earliest time of impact in `[0, 1]` of a box of `half_extents` moving
    /// `from -> to` against all blockers.
    #[must_use]
    pub fn sweep(&self, from: Vec3, to: Vec3, half_extents: Vec3) -> Option<f32> {
        self.blockers
            .values()
            .filter_map(|blocker| blocker.expanded(half_extents).sweep_segment(from, to))
            .min_by(f32::total_cmp)
    }
}

impl TransformHost for Stage {
    fn contains(&self, actor: ActorKey) -> bool {
        self.actors.contains_key(actor)
    }

    fn location(&self, actor: ActorKey) -> Option<Vec3> {
        self.actors.get(actor).map(|a| a.transform.position)
    }

    fn set_location(&mut self, actor: ActorKey, location: Vec3, sweep: bool) -> ApplyResult {
        let Some(entry) = self.actors.get(actor) else {
            return ApplyResult::TargetLost;
        };

        let from = entry.transform.position;
        let half = entry.extent.unwrap_or(Vec3::ZERO);

        let (position, result) = match sweep.then(|| self.sweep(from, location, half)).flatten() {
            Some(toi) => {
                let travel = location - from;
                let length = travel.length();
                let allowed = (toi * length - SWEEP_SKIN).max(0.0);
                let stop = from + travel.normalize_or_zero() * allowed;
                (stop, ApplyResult::Blocked)
            }
            None => (location, ApplyResult::Applied),
        };

        if let Some(entry) = self.actors.get_mut(actor) {
            entry.transform.position = position;
        }
        if result == ApplyResult::Blocked {
            log::trace!("Sweep blocked actor {actor:?} at {position}");
        }
        result
    }

    fn rotation(&self, actor: ActorKey) -> Option<Quat> {
        self.actors.get(actor).map(|a| a.transform.rotation)
    }

    fn set_rotation(&mut self, actor: ActorKey, rotation: Quat) -> ApplyResult {
        match self.actors.get_mut(actor) {
            Some(entry) => {
                entry.transform.rotation = rotation;
                ApplyResult::Applied
            }
            None => ApplyResult::TargetLost,
        }
    }

    fn scale(&self, actor: ActorKey) -> Option<Vec3> {
        self.actors.get(actor).map(|a| a.transform.scale)
    }

    fn set_scale(&mut self, actor: ActorKey, scale: Vec3) -> ApplyResult {
        match self.actors.get_mut(actor) {
            Some(entry) => {
                entry.transform.scale = scale;
                ApplyResult::Applied
            }
            None => ApplyResult::TargetLost,
        }
    }
}
