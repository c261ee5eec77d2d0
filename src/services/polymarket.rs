//! Market-data client for the Polymarket venue.
//!
//! Serves a fixture snapshot of the venue catalog until the live
//! integration lands; the call shapes already match the eventual API.

use crate::domain::mock::mock_markets;
use crate::domain::types::Market;

#[cfg(test)]
#[path = "polymarket_test.rs"]
mod polymarket_test;

/// Venue API root the live integration will target.
pub const POLYMARKET_BASE_URL: &str = "https://api.polymarket.com";

/// Client for the Polymarket catalog.
#[derive(Clone, Copy, Debug, Default)]
pub struct PolymarketService;

impl PolymarketService {
	/// A catalog client.
	pub fn new() -> Self {
		Self
	}

	/// Up to `limit` markets from the venue catalog, keyed by
	/// venue-native ids.
	pub fn markets(&self, limit: usize) -> Vec<Market> {
		mock_markets()
			.into_iter()
			.take(limit)
			.enumerate()
			.map(|(i, mut market)| {
				market.id = (i + 1).to_string();
				market
			})
			.collect()
	}

	/// Look up one market by its venue-native id.
	pub fn market_by_id(&self, id: &str) -> Option<Market> {
		self.markets(usize::MAX).into_iter().find(|m| m.id == id)
	}
}
