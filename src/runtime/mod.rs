//! Focus state and command notification.

pub mod command_registry;
pub mod focus;

pub use command_registry::{CommandHandler, CommandOutput, CommandSubscribers, SubscriptionId};
pub use focus::DeferredFocus;
