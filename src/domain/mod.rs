//! Domain model of the hedging workflow: records, fixtures, and the
//! exposure intake form.

pub mod form;
pub mod mock;
pub mod types;
