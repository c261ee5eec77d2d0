//! Fixture data backing the prototype screens. Everything derives from
//! one exposure and four markets the way a real session would produce
//! it, so the screens stay consistent with each other.

use super::types::{
	Basket, BasketItem, Candidate, ExecutionCandidate, ExecutionSheet, ExposureSpec, HedgePosition,
	Market, MarketWindow, Order, OrderLimits, OrderStatus, PositionStatus, Side,
};

#[cfg(test)]
#[path = "mock_test.rs"]
mod mock_test;

fn full_year_2025() -> MarketWindow {
	MarketWindow {
		start: "2025-01-01T00:00:00Z".into(),
		end: "2025-12-31T23:59:59Z".into(),
	}
}

/// The exposure every other fixture hangs off.
pub fn mock_exposure_spec() -> ExposureSpec {
	ExposureSpec {
		id: "exp-1".into(),
		statement: "We have significant exposure to EUR/USD fluctuations due to our European \
		            operations and USD-denominated debt."
			.into(),
		horizon: "6 months".into(),
		budget: 500_000.0,
		venues_allowed: vec!["Polymarket".into(), "Kalshi".into()],
		jurisdiction: "US".into(),
		created_at: "2025-10-28T10:00:00Z".into(),
		updated_at: "2025-10-28T10:00:00Z".into(),
	}
}

/// Four live-looking markets across different risk themes.
pub fn mock_markets() -> Vec<Market> {
	vec![
		Market {
			id: "mkt-1".into(),
			venue: "Polymarket".into(),
			title: "Will the Fed cut rates by 50bps in 2025?".into(),
			rule_text: "This market resolves to \"Yes\" if the Federal Reserve cuts interest \
			            rates by 50 basis points or more in 2025."
				.into(),
			window: full_year_2025(),
			tick_size: 0.01,
			fee: 0.02,
			tags: vec!["economy".into(), "fed".into(), "interest-rates".into()],
			current_price: 0.65,
			liquidity: 1_000_000.0,
			volume: 5_000_000.0,
		},
		Market {
			id: "mkt-2".into(),
			venue: "Polymarket".into(),
			title: "Will oil prices exceed $100/barrel in 2025?".into(),
			rule_text: "This market resolves to \"Yes\" if the price of West Texas Intermediate \
			            crude oil exceeds $100 per barrel at any point in 2025."
				.into(),
			window: full_year_2025(),
			tick_size: 0.01,
			fee: 0.02,
			tags: vec!["commodities".into(), "oil".into(), "energy".into()],
			current_price: 0.42,
			liquidity: 750_000.0,
			volume: 3_200_000.0,
		},
		Market {
			id: "mkt-3".into(),
			venue: "Polymarket".into(),
			title: "Will the Nikkei 225 close above 40,000 in 2025?".into(),
			rule_text: "This market resolves to \"Yes\" if the Nikkei 225 index closes above \
			            40,000 at any point in 2025."
				.into(),
			window: full_year_2025(),
			tick_size: 0.01,
			fee: 0.02,
			tags: vec!["stocks".into(), "japan".into(), "indices".into()],
			current_price: 0.28,
			liquidity: 500_000.0,
			volume: 1_800_000.0,
		},
		Market {
			id: "mkt-4".into(),
			venue: "Polymarket".into(),
			title: "Will Elon Musk remain CEO of Tesla at end of 2025?".into(),
			rule_text: "This market resolves to \"Yes\" if Elon Musk is still the CEO of Tesla \
			            Inc. on December 31, 2025."
				.into(),
			window: full_year_2025(),
			tick_size: 0.01,
			fee: 0.02,
			tags: vec!["tech".into(), "tesla".into(), "executives".into()],
			current_price: 0.75,
			liquidity: 1_200_000.0,
			volume: 4_500_000.0,
		},
	]
}

/// One scored candidate per market, best fit first.
pub fn mock_candidates() -> Vec<ExecutionCandidate> {
	mock_markets()
		.into_iter()
		.enumerate()
		.map(|(i, market)| {
			let i = i as f64;
			ExecutionCandidate {
				candidate: Candidate {
					exposure_id: "exp-1".into(),
					market_id: market.id.clone(),
					fit: 0.85 - i * 0.1,
					depth_est: market.liquidity,
					cost_est: 50_000.0 + i * 25_000.0,
					weight: 0.4 - i * 0.1,
					coverage: 0.75 - i * 0.1,
					slippage: 0.02 + i * 0.01,
				},
				market,
			}
		})
		.collect()
}

/// A basket holding one buy intent per market.
pub fn mock_basket() -> Basket {
	Basket {
		exposure_id: "exp-1".into(),
		items: mock_markets()
			.into_iter()
			.enumerate()
			.map(|(i, market)| BasketItem {
				market_id: market.id,
				side: Side::Buy,
				weight: 0.4 - i as f64 * 0.1,
				order_type: "market".into(),
				limits: OrderLimits {
					max_spend: Some(100_000.0 + i as f64 * 50_000.0),
					slippage_guard: Some(0.05),
				},
			})
			.collect(),
		total_cost: 350_000.0,
		expected_coverage: 0.85,
		created_at: "2025-10-28T14:30:00Z".into(),
	}
}

/// Placed orders corresponding to the mock basket.
pub fn mock_orders() -> Vec<Order> {
	mock_markets()
		.into_iter()
		.enumerate()
		.map(|(i, market)| Order {
			id: format!("ord-{}", i + 1),
			basket_id: "basket-1".into(),
			market_id: market.id,
			side: Side::Buy,
			quantity: 100.0 + i as f64 * 50.0,
			price: market.current_price,
			order_type: "market".into(),
			status: OrderStatus::Placed,
			created_at: "2025-10-28T15:00:00Z".into(),
			updated_at: "2025-10-28T15:00:00Z".into(),
		})
		.collect()
}

/// A fully populated execution preview.
pub fn mock_execution_sheet() -> ExecutionSheet {
	ExecutionSheet {
		id: "exec-1".into(),
		exposure_id: "exp-1".into(),
		basket: mock_basket(),
		orders: mock_orders(),
		estimated_cost: 350_000.0,
		estimated_pnl: 25_000.0,
		confidence: 0.85,
		slippage: 0.03,
		fees: 7_000.0,
		receipt_preview: "Receipt preview hash".into(),
		created_at: "2025-10-28T10:00:00Z".into(),
		updated_at: "2025-10-28T14:30:00Z".into(),
	}
}

/// Open positions, one per market.
pub fn mock_positions() -> Vec<HedgePosition> {
	mock_markets()
		.into_iter()
		.enumerate()
		.map(|(i, market)| HedgePosition {
			id: format!("pos-{}", i + 1),
			market_id: market.id,
			venue: market.venue,
			title: market.title,
			side: Side::Buy,
			quantity: 100.0 + i as f64 * 50.0,
			avg_price: market.current_price,
			mark: market.current_price + i as f64 * 0.05,
			pnl: 1_000.0 + i as f64 * 500.0,
			pnl_percentage: 2.5 + i as f64 * 1.5,
			resolve_date: market.window.end,
			status: PositionStatus::Open,
			coverage: 0.8 - i as f64 * 0.1,
			residual_risk: 0.2 + i as f64 * 0.05,
		})
		.collect()
}
