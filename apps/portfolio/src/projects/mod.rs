pub mod handlers;
pub mod input;
pub mod store;

/// Published projects per listing page.
pub const PER_PAGE: i64 = 12;
