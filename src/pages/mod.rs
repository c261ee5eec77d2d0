//! Top-level pages served by the router.

pub mod home;
pub mod not_found;
