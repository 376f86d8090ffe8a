pub mod state;
pub mod store;

pub use state::{Contact, Message, Sender};
pub use store::{ConversationEvent, ConversationStore};
