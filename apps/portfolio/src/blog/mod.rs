pub mod handlers;
pub mod input;
pub mod store;

/// Visible posts per listing page.
pub const PER_PAGE: i64 = 9;
