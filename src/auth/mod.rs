//! Authentication: token generation, credential check and the request gate.

pub mod credentials;
pub mod middleware;
pub mod session;

pub use credentials::check_credentials;
pub use middleware::{AppState, AuthSession};
pub use session::generate_session_token;
