//! Error taxonomy and user-facing translation.

mod translate;
mod types;

pub use translate::CORS_GUIDANCE;
pub use translate::NETWORK_GUIDANCE;
pub use translate::PARSE_GUIDANCE;
pub use translate::TIMEOUT_GUIDANCE;
pub use translate::UNEXPECTED_GUIDANCE;
pub use translate::user_message;
pub use types::ExtractError;
pub use types::Result;
