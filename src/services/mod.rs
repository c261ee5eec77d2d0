//! Clients for the services behind the dashboard: the venue market feed
//! and the chat-completion agent that analyzes exposures.

use thiserror::Error;

pub mod agent;
pub mod polymarket;

/// Failures surfaced by the service clients.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ServiceError {
	/// The HTTP request itself failed.
	#[error("request to {url} failed: {message}")]
	Transport {
		/// Requested URL.
		url: String,
		/// Underlying failure description.
		message: String,
	},
	/// The response arrived but did not have the expected shape.
	#[error("malformed response: {0}")]
	Malformed(String),
}
