//! Application layer - Entry store and use cases

pub mod editor;
pub mod manage_config;
pub mod store;

pub use editor::EditorSession;
pub use manage_config::ConfigService;
pub use store::{EntryStore, StoreEvent, SubscriptionId};
