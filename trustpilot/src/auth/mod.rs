//! OAuth2 password-grant authentication.
//!
//! The client exchanges resource-owner credentials for a bearer token at
//! construction time; [`TokenSource`] caches the token and refreshes it
//! transparently once it nears expiry.

pub mod source;
pub mod types;

pub use source::TokenSource;
pub use types::{PasswordGrantConfig, TokenErrorResponse, TokenResponse, TokenSet};
