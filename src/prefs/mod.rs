pub mod persist;
pub mod store;
pub mod theme;

pub use persist::{MemoryStorage, PersistError, ThemeStorage, TomlFileStorage};
pub use store::{PrefEvent, PreferenceStore};
pub use theme::Theme;
