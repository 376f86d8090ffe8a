pub mod state;
pub mod store;

pub use state::{Category, Filter, Notification};
pub use store::{NotificationEvent, NotificationStore};
