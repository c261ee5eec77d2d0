//! Core records for the hedging workflow: the exposure a treasury team
//! describes, the prediction markets that can offset it, and the basket,
//! orders and positions that come out of executing a hedge.
//!
//! Everything serializes with the camelCase field names the JSON fixtures
//! and upstream APIs use.

use serde::{Deserialize, Serialize};

/// Which side of a binary market an order takes.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
	/// Buy the YES outcome.
	Buy,
	/// Sell the YES outcome.
	Sell,
}

impl Side {
	/// Lowercase wire name, also used as a CSS class suffix.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Buy => "buy",
			Self::Sell => "sell",
		}
	}
}

/// Lifecycle of a single order.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
	/// Accepted locally, not yet sent.
	Pending,
	/// Sent to the venue.
	Placed,
	/// Fully filled.
	Filled,
	/// Cancelled before filling.
	Cancelled,
}

impl OrderStatus {
	/// Lowercase wire name.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Pending => "pending",
			Self::Placed => "placed",
			Self::Filled => "filled",
			Self::Cancelled => "cancelled",
		}
	}
}

/// Lifecycle of a held position.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionStatus {
	/// Still held.
	Open,
	/// Closed out before resolution.
	Closed,
	/// The market resolved.
	Resolved,
}

impl PositionStatus {
	/// Lowercase wire name.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Open => "open",
			Self::Closed => "closed",
			Self::Resolved => "resolved",
		}
	}
}

/// A risk exposure as stated by the user: what they are exposed to and
/// the constraints a hedge has to respect.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExposureSpec {
	/// Unique identifier.
	pub id: String,
	/// Free-form description of the risk.
	pub statement: String,
	/// How long the hedge should hold, e.g. "6 months".
	pub horizon: String,
	/// Maximum spend in dollars.
	pub budget: f64,
	/// Venues the user allows orders on.
	pub venues_allowed: Vec<String>,
	/// Governing jurisdiction code.
	pub jurisdiction: String,
	/// Creation timestamp, ISO 8601.
	pub created_at: String,
	/// Last update timestamp, ISO 8601.
	pub updated_at: String,
}

/// The window in which a market trades and resolves.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct MarketWindow {
	/// Window opens, ISO 8601.
	pub start: String,
	/// Window closes, ISO 8601.
	pub end: String,
}

/// A tradable prediction market on some venue.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
	/// Unique identifier.
	pub id: String,
	/// Venue name, e.g. "Polymarket".
	pub venue: String,
	/// Market question shown to users.
	pub title: String,
	/// Resolution criteria text.
	pub rule_text: String,
	/// Trading and resolution window.
	pub window: MarketWindow,
	/// Minimum price increment.
	pub tick_size: f64,
	/// Venue fee rate.
	pub fee: f64,
	/// Free-form topic tags.
	pub tags: Vec<String>,
	/// Current YES price in [0, 1].
	pub current_price: f64,
	/// Available liquidity in dollars.
	pub liquidity: f64,
	/// Traded volume in dollars.
	pub volume: f64,
}

/// How well one market hedges one exposure, with sizing estimates.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
	/// The exposure being hedged.
	pub exposure_id: String,
	/// The market under consideration.
	pub market_id: String,
	/// Hedge-fit score in [0, 1].
	pub fit: f64,
	/// Estimated usable depth in dollars.
	pub depth_est: f64,
	/// Estimated cost in dollars.
	pub cost_est: f64,
	/// Suggested portfolio weight in [0, 1].
	pub weight: f64,
	/// Share of the exposure this hedge covers, in [0, 1].
	pub coverage: f64,
	/// Expected slippage rate.
	pub slippage: f64,
}

/// A candidate joined with its full market record, as shown in lists.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ExecutionCandidate {
	/// The scored candidate.
	#[serde(flatten)]
	pub candidate: Candidate,
	/// The market it refers to.
	pub market: Market,
}

/// Spend and slippage caps on a basket item.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLimits {
	/// Spend cap in dollars, when set.
	pub max_spend: Option<f64>,
	/// Abort threshold on slippage rate, when set.
	pub slippage_guard: Option<f64>,
}

/// One order intent inside a basket.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketItem {
	/// Target market.
	pub market_id: String,
	/// Order side.
	pub side: Side,
	/// Portfolio weight of this leg, in [0, 1].
	pub weight: f64,
	/// Order type, e.g. "market".
	pub order_type: String,
	/// Execution caps.
	pub limits: OrderLimits,
}

/// A set of order intents built from selected candidates.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Basket {
	/// The exposure this basket hedges.
	pub exposure_id: String,
	/// Order intents.
	pub items: Vec<BasketItem>,
	/// Total estimated cost in dollars.
	pub total_cost: f64,
	/// Expected coverage of the exposure, in [0, 1].
	pub expected_coverage: f64,
	/// Creation timestamp, ISO 8601.
	pub created_at: String,
}

/// A concrete order derived from a basket item.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
	/// Unique identifier.
	pub id: String,
	/// Basket this order came from.
	pub basket_id: String,
	/// Target market.
	pub market_id: String,
	/// Order side.
	pub side: Side,
	/// Contract quantity.
	pub quantity: f64,
	/// Limit or reference price.
	pub price: f64,
	/// Order type, e.g. "market".
	pub order_type: String,
	/// Current lifecycle state.
	pub status: OrderStatus,
	/// Creation timestamp, ISO 8601.
	pub created_at: String,
	/// Last update timestamp, ISO 8601.
	pub updated_at: String,
}

/// A partial or full execution of one order.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fill {
	/// Unique identifier.
	pub id: String,
	/// Order this fill belongs to.
	pub order_id: String,
	/// Filled quantity.
	pub quantity: f64,
	/// Fill price.
	pub price: f64,
	/// Fill timestamp, ISO 8601.
	pub timestamp: String,
}

/// Content hashes binding a receipt to what was decided and done.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ReceiptHashes {
	/// Hash of the exposure spec.
	pub spec: String,
	/// Hash of the sizing decisions.
	pub decisions: String,
	/// Hash of the order set.
	pub orders: String,
	/// Hash of the fill set.
	pub fills: String,
}

/// When each hashed artifact was produced.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ReceiptTimestamps {
	/// Exposure spec timestamp, ISO 8601.
	pub spec: String,
	/// Sizing decisions timestamp, ISO 8601.
	pub decisions: String,
	/// Order set timestamp, ISO 8601.
	pub orders: String,
	/// Fill set timestamp, ISO 8601.
	pub fills: String,
}

/// Signed audit record of a completed execution.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
	/// Unique identifier.
	pub id: String,
	/// The exposure that was hedged.
	pub exposure_id: String,
	/// The basket that was executed.
	pub basket_id: String,
	/// Orders placed.
	pub orders: Vec<Order>,
	/// Fills received.
	pub fills: Vec<Fill>,
	/// Content hashes of each artifact.
	pub hashes: ReceiptHashes,
	/// Production time of each artifact.
	pub timestamps: ReceiptTimestamps,
	/// Identity that signed the receipt.
	pub signer: String,
}

/// A held market position with live valuation.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HedgePosition {
	/// Unique identifier.
	pub id: String,
	/// Market held.
	pub market_id: String,
	/// Venue name.
	pub venue: String,
	/// Market title, denormalized for display.
	pub title: String,
	/// Position side.
	pub side: Side,
	/// Contract quantity.
	pub quantity: f64,
	/// Average entry price.
	pub avg_price: f64,
	/// Current mark price.
	pub mark: f64,
	/// Unrealized profit and loss in dollars.
	pub pnl: f64,
	/// Unrealized profit and loss as a percentage.
	pub pnl_percentage: f64,
	/// When the market resolves, ISO 8601.
	pub resolve_date: String,
	/// Current lifecycle state.
	pub status: PositionStatus,
	/// Share of the exposure this position covers, in [0, 1].
	pub coverage: f64,
	/// Residual unhedged share, in [0, 1].
	pub residual_risk: f64,
}

/// Preview of what executing a basket is expected to do.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionSheet {
	/// Unique identifier.
	pub id: String,
	/// The exposure being hedged.
	pub exposure_id: String,
	/// The basket under execution.
	pub basket: Basket,
	/// Orders the basket expands into.
	pub orders: Vec<Order>,
	/// Total estimated cost in dollars.
	pub estimated_cost: f64,
	/// Expected profit and loss in dollars.
	#[serde(rename = "estimatedPnL")]
	pub estimated_pnl: f64,
	/// Confidence in the estimate, in [0, 1].
	pub confidence: f64,
	/// Expected slippage rate.
	pub slippage: f64,
	/// Total venue fees in dollars.
	pub fees: f64,
	/// Hash preview of the execution receipt.
	pub receipt_preview: String,
	/// Creation timestamp, ISO 8601.
	pub created_at: String,
	/// Last update timestamp, ISO 8601.
	pub updated_at: String,
}
