//! 场景模块
//!
//! 提供动画任务的参考宿主：
//! - Stage: Actor 容器，实现 `TransformHost`
//! - Actor: 可动画的对象（变换 + 碰撞范围）
//! - Transform: 变换组件（位置、旋转、缩放）
//! - Rotator: 角度制欧拉角
//! - Aabb: 阻挡几何与扫掠检测

pub mod collision;
pub mod manager;
pub mod node;
pub mod rotator;
pub mod transform;

// 重新导出常用类型
pub use collision::Aabb;
pub use manager::Stage;
pub use node::Actor;
pub use rotator::Rotator;
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    pub struct ActorKey;
    pub struct BlockerKey;
}
