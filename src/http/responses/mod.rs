//! Various generic HTTP responses.

mod error;
pub use error::ErrorResponse;

mod not_found;
pub use not_found::NotFound;
