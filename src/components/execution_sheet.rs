//! Execution sheet: basket preview, cost summary, and order intents.

use leptos::prelude::*;

use super::format;
use crate::domain::mock::mock_execution_sheet;
use crate::domain::types;

/// Read-only preview of a basket about to execute: headline metrics,
/// cost summary, and the per-market order intents.
#[component]
pub fn ExecutionSheet(
	#[prop(default = mock_execution_sheet())] execution_sheet: types::ExecutionSheet,
) -> impl IntoView {
	let sheet = execution_sheet;
	let pnl_sign = if sheet.estimated_pnl > 0.0 { "+" } else { "" };

	view! {
		<div class="execution-sheet glass-card">
			<div class="sheet-header">
				<div class="sheet-title-section">
					<h2 class="sheet-title">"Execution Sheet"</h2>
					<p class="sheet-description">"Orders preview and execution summary"</p>
				</div>
				<div class="sheet-metrics">
					<div class="metric-card">
						<div class="metric-label">"Total Cost"</div>
						<div class="metric-value">
							{format!("${}", format::thousands(sheet.basket.total_cost))}
						</div>
					</div>
					<div class="metric-card">
						<div class="metric-label">"Expected Coverage"</div>
						<div class="metric-value">{format::pct(sheet.basket.expected_coverage)}</div>
					</div>
					<div class="metric-card">
						<div class="metric-label">"Slippage"</div>
						<div class="metric-value">{format!("{:.2}%", sheet.slippage * 100.0)}</div>
					</div>
					<div class="metric-card">
						<div class="metric-label">"Fees"</div>
						<div class="metric-value">{format!("${}", format::thousands(sheet.fees))}</div>
					</div>
				</div>
			</div>

			<div class="sheet-summary">
				<div class="summary-item">
					<div class="summary-label">"Estimated Cost"</div>
					<div class="summary-value">
						{format!("${}", format::thousands(sheet.estimated_cost))}
					</div>
				</div>
				<div class="summary-item">
					<div class="summary-label">"Estimated P&L"</div>
					<div class="summary-value pnl-positive">
						{format!("{pnl_sign}${}", format::thousands(sheet.estimated_pnl))}
					</div>
				</div>
				<div class="summary-item">
					<div class="summary-label">"Confidence"</div>
					<div class="summary-value">{format::pct(sheet.confidence)}</div>
				</div>
			</div>

			<div class="sheet-actions">
				<button class="action-btn primary">"Execute Hedge"</button>
				<button class="action-btn secondary">"Save Draft"</button>
				<button class="action-btn tertiary">"Export"</button>
			</div>

			<div class="candidates-section">
				<h3 class="section-title">"Basket Items"</h3>
				<div class="candidates-list">
					{sheet
						.basket
						.items
						.iter()
						.enumerate()
						.map(|(index, item)| {
							view! {
								<div class="candidate-card">
									<div class="candidate-header">
										<div class="candidate-symbol">{item.market_id.clone()}</div>
										<div class="candidate-name">{format!("Market {}", index + 1)}</div>
										<div class="candidate-type">{item.side.as_str()}</div>
									</div>
									<div class="candidate-metrics">
										<div class="metric">
											<div class="metric-label">"Weight"</div>
											<div class="metric-value">{format::pct(item.weight)}</div>
										</div>
										<div class="metric">
											<div class="metric-label">"Order Type"</div>
											<div class="metric-value">{item.order_type.clone()}</div>
										</div>
										<div class="metric">
											<div class="metric-label">"Max Spend"</div>
											<div class="metric-value">
												{item
													.limits
													.max_spend
													.map(format::thousands)
													.unwrap_or_else(|| "N/A".to_owned())}
											</div>
										</div>
										<div class="metric">
											<div class="metric-label">"Slippage Guard"</div>
											<div class="metric-value">
												{format!("{:.0}%", item.limits.slippage_guard.unwrap_or(0.0) * 100.0)}
											</div>
										</div>
									</div>
									<div class="candidate-actions">
										<button class="action-btn small primary">"View Order"</button>
										<button class="action-btn small secondary">"Details"</button>
									</div>
								</div>
							}
						})
						.collect_view()}
				</div>
			</div>
		</div>
	}
}
