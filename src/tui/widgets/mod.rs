//! Reusable TUI widgets

pub mod input;
pub mod notification;
pub mod select;

pub use input::TextInput;
pub use notification::{Notification, NotificationQueue, NotificationType};
pub use select::CategorySelect;
