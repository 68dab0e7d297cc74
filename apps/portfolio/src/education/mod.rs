//! Education history and professional certifications.

pub mod handlers;
pub mod input;
pub mod store;
