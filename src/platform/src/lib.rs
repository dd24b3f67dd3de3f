pub mod error;
pub mod events;
pub mod http;

pub use error::PlatformError;
pub use error::Result;
pub use events::Events;
