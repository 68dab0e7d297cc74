//! Resume download tracking.

pub mod handlers;
pub mod store;
