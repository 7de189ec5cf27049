pub mod entity;
pub mod intent;

pub use entity::{EntityClass, Helper, Relationship, ResolvedEntity, Task};
pub use intent::{Intent, InteractionType};
