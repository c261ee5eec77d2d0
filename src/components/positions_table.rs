//! Open-positions table with click-to-sort columns.

use leptos::prelude::*;

use super::format;
use crate::domain::mock::mock_positions;
use crate::domain::types::HedgePosition;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SortKey {
	Title,
	Venue,
	Side,
	Quantity,
	AvgPrice,
	Mark,
	Pnl,
	Coverage,
	ResidualRisk,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SortDir {
	Asc,
	Desc,
}

/// Current positions, sortable by any column. Clicking a sorted column
/// flips its direction.
#[component]
pub fn PositionsTable(
	#[prop(default = mock_positions())] positions: Vec<HedgePosition>,
) -> impl IntoView {
	let sort_config = RwSignal::new(None::<(SortKey, SortDir)>);

	let handle_sort = move |key: SortKey| {
		sort_config.update(|config| {
			let dir = match config {
				Some((active, SortDir::Asc)) if *active == key => SortDir::Desc,
				_ => SortDir::Asc,
			};
			*config = Some((key, dir));
		});
	};

	let indicator = move |key: SortKey| match sort_config.get() {
		Some((active, SortDir::Asc)) if active == key => " ↑",
		Some((active, SortDir::Desc)) if active == key => " ↓",
		_ => "",
	};

	let sorted = move || {
		let mut rows = positions.clone();
		if let Some((key, dir)) = sort_config.get() {
			rows.sort_by(|a, b| {
				let ord = match key {
					SortKey::Title => a.title.cmp(&b.title),
					SortKey::Venue => a.venue.cmp(&b.venue),
					SortKey::Side => a.side.as_str().cmp(b.side.as_str()),
					SortKey::Quantity => a.quantity.total_cmp(&b.quantity),
					SortKey::AvgPrice => a.avg_price.total_cmp(&b.avg_price),
					SortKey::Mark => a.mark.total_cmp(&b.mark),
					SortKey::Pnl => a.pnl.total_cmp(&b.pnl),
					SortKey::Coverage => a.coverage.total_cmp(&b.coverage),
					SortKey::ResidualRisk => a.residual_risk.total_cmp(&b.residual_risk),
				};
				match dir {
					SortDir::Asc => ord,
					SortDir::Desc => ord.reverse(),
				}
			});
		}
		rows
	};

	view! {
		<div class="positions-table-container glass-card">
			<div class="table-header">
				<h3 class="table-title">"Current Positions"</h3>
				<div class="table-actions">
					<button class="action-btn small secondary">"Add Position"</button>
					<button class="action-btn small tertiary">"Export"</button>
				</div>
			</div>
			<div class="table-wrapper">
				<table class="positions-table">
					<thead>
						<tr>
							<th class="sortable" on:click=move |_| handle_sort(SortKey::Title)>
								"Title" {move || indicator(SortKey::Title)}
							</th>
							<th class="sortable" on:click=move |_| handle_sort(SortKey::Venue)>
								"Venue" {move || indicator(SortKey::Venue)}
							</th>
							<th class="sortable" on:click=move |_| handle_sort(SortKey::Side)>
								"Side" {move || indicator(SortKey::Side)}
							</th>
							<th class="sortable text-right" on:click=move |_| handle_sort(SortKey::Quantity)>
								"Quantity" {move || indicator(SortKey::Quantity)}
							</th>
							<th class="sortable text-right" on:click=move |_| handle_sort(SortKey::AvgPrice)>
								"Avg Price" {move || indicator(SortKey::AvgPrice)}
							</th>
							<th class="sortable text-right" on:click=move |_| handle_sort(SortKey::Mark)>
								"Mark" {move || indicator(SortKey::Mark)}
							</th>
							<th class="sortable text-right" on:click=move |_| handle_sort(SortKey::Pnl)>
								"P&L" {move || indicator(SortKey::Pnl)}
							</th>
							<th class="sortable text-right" on:click=move |_| handle_sort(SortKey::Coverage)>
								"Coverage" {move || indicator(SortKey::Coverage)}
							</th>
							<th class="sortable text-right" on:click=move |_| handle_sort(SortKey::ResidualRisk)>
								"Residual Risk" {move || indicator(SortKey::ResidualRisk)}
							</th>
							<th>"Actions"</th>
						</tr>
					</thead>
					<tbody>
						{move || {
							sorted()
								.into_iter()
								.map(|position| {
									view! {
										<tr>
											<td class="font-medium">{position.title.clone()}</td>
											<td>{position.venue.clone()}</td>
											<td>
												<span class=format!("type-badge {}", position.side.as_str())>
													{position.side.as_str()}
												</span>
											</td>
											<td class="text-right">{format::thousands(position.quantity)}</td>
											<td class="text-right">{format::price(position.avg_price)}</td>
											<td class="text-right">{format::price(position.mark)}</td>
											<td class="text-right">
												<div class={if position.pnl >= 0.0 { "pnl-positive" } else { "pnl-negative" }}>
													{format::signed_pnl(position.pnl, position.pnl_percentage)}
												</div>
											</td>
											<td class="text-right">{format::pct(position.coverage)}</td>
											<td class="text-right">{format::pct(position.residual_risk)}</td>
											<td>
												<div class="action-buttons">
													<button class="icon-button">
														<svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
															<path d="M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z" />
															<circle cx="12" cy="12" r="3" />
														</svg>
													</button>
													<button class="icon-button">
														<svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
															<polyline points="3 6 5 6 21 6" />
															<path d="M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6m3 0V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2" />
														</svg>
													</button>
												</div>
											</td>
										</tr>
									}
								})
								.collect_view()
						}}
					</tbody>
				</table>
			</div>
		</div>
	}
}
