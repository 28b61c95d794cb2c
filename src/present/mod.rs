//! 视图模型：后端 DTO 到页面展示数据的映射，以及页面交互状态

pub mod assignments;
pub mod bookings;
pub mod slots;
pub mod technician;

pub use slots::{TimeSlot, slot_label};
