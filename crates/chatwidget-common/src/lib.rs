pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{ConfigError, ValidationError, WidgetError};
pub use events::{EventBus, WidgetEvent};
pub use id::{new_correlation_id, SessionId};
pub use types::{Author, ChatMessage, UserInfo};

pub type Result<T> = std::result::Result<T, WidgetError>;
