pub mod commands;
pub mod errors;
pub mod notifications;
pub mod types;

pub use commands::{Command, CommandResponse};
pub use errors::{ConfigError, PolyError, SyncError, ViewError};
pub use notifications::{Notification, NotificationLevel, NotificationQueue, ERROR_BANNER_TTL};
pub use types::{Position, ProviderChoice, ProviderKey, Rect};

pub type Result<T> = std::result::Result<T, PolyError>;
