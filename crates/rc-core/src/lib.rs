pub mod design;
pub mod progress;

pub use design::{DesignStyle, RoomType};
pub use progress::ProgressSim;
