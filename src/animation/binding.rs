use crate::scene::ActorKey;

/// The transform property a task drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetPath {
    Translation, // Maps to transform.position
    Rotation,    // Maps to transform.rotation
    Scale,       // Maps to transform.scale
}

/// Binding relationship: the actor a task writes to and which of its
/// properties it drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyBinding {
    pub target: ActorKey,
    pub path: TargetPath,
}
