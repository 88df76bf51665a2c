//! Various middlewares.

pub(super) mod catch_panic;
pub(super) mod request_id;
pub(super) mod trace;
