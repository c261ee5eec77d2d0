//! Hedge candidate browser: filterable card grid with multi-select.

use std::collections::HashSet;

use leptos::prelude::*;

use super::format;
use crate::domain::mock::mock_candidates;
use crate::domain::types::ExecutionCandidate;

/// Scored market candidates as selectable cards. Selection is keyed by
/// market id; `on_add_to_hedge` fires once per candidate added.
#[component]
pub fn CandidateList(
	#[prop(default = mock_candidates())] candidates: Vec<ExecutionCandidate>,
	#[prop(optional, into)] on_add_to_hedge: Option<Callback<ExecutionCandidate>>,
) -> impl IntoView {
	let selected = RwSignal::new(HashSet::<String>::new());
	let filter_venue = RwSignal::new("all".to_owned());

	let toggle_selected = move |market_id: String| {
		selected.update(|set| {
			if !set.remove(&market_id) {
				set.insert(market_id);
			}
		});
	};

	let total = candidates.len();
	let all_ids: Vec<String> = candidates.iter().map(|c| c.candidate.market_id.clone()).collect();
	let handle_select_all = move |_| {
		selected.update(|set| {
			if set.len() == all_ids.len() {
				set.clear();
			} else {
				*set = all_ids.iter().cloned().collect();
			}
		});
	};

	let all = candidates.clone();
	let handle_add_selected = move |_| {
		if let Some(cb) = on_add_to_hedge {
			for market_id in selected.get() {
				if let Some(candidate) = all.iter().find(|c| c.candidate.market_id == market_id) {
					cb.run(candidate.clone());
				}
			}
		}
	};

	let filtered = move || {
		let venue = filter_venue.get();
		candidates
			.iter()
			.filter(|c| venue == "all" || c.market.venue == venue)
			.cloned()
			.collect::<Vec<_>>()
	};

	view! {
		<div class="candidate-list-container glass-card">
			<div class="list-header">
				<h3 class="list-title">"Hedge Candidates"</h3>
				<div class="list-controls">
					<div class="filter-control">
						<label for="venue-filter">"Venue:"</label>
						<select
							id="venue-filter"
							class="filter-select"
							prop:value=move || filter_venue.get()
							on:change=move |ev| filter_venue.set(event_target_value(&ev))
						>
							<option value="all">"All Venues"</option>
							<option value="Polymarket">"Polymarket"</option>
							<option value="Kalshi">"Kalshi"</option>
							<option value="Other">"Other"</option>
						</select>
					</div>
					<button class="action-btn small secondary" on:click=handle_select_all>
						{move || {
							if total > 0 && selected.with(|set| set.len()) == total {
								"Clear All"
							} else {
								"Select All"
							}
						}}
					</button>
					<div class="selection-info">
						{move || format!("{} selected", selected.with(|set| set.len()))}
					</div>
					<button
						class="action-btn small primary"
						prop:disabled=move || selected.with(|set| set.is_empty())
						on:click=handle_add_selected
					>
						{move || format!("Add Selected ({})", selected.with(|set| set.len()))}
					</button>
				</div>
			</div>

			<div class="list-content">
				<div class="candidates-grid">
					{move || {
						filtered()
							.into_iter()
							.map(|candidate| {
								let market_id = candidate.candidate.market_id.clone();
								let toggle_id = market_id.clone();
								let check_id = market_id.clone();
								let card_candidate = candidate.clone();
								view! {
									<div
										class="candidate-card"
										class:selected={
											let market_id = market_id.clone();
											move || selected.with(|set| set.contains(&market_id))
										}
										on:click=move |_| toggle_selected(toggle_id.clone())
									>
										<div class="card-header">
											<div class="selection-indicator">
												{move || {
													if selected.with(|set| set.contains(&check_id)) {
														view! { <div class="checkmark">"✓"</div> }.into_any()
													} else {
														view! { <div class="empty-circle"></div> }.into_any()
													}
												}}
											</div>
											<div class="candidate-info">
												<div class="candidate-symbol">{candidate.market.title.clone()}</div>
												<div class="candidate-name">{candidate.market.venue.clone()}</div>
											</div>
											<div class="candidate-type-badge">
												{candidate.market.tags.first().cloned().unwrap_or_else(|| "Market".to_owned())}
											</div>
										</div>

										<div class="card-body">
											<div class="metric-grid">
												<div class="metric-item">
													<div class="metric-label">"Current Price"</div>
													<div class="metric-value">
														{format!("${}", format::price(candidate.market.current_price))}
													</div>
												</div>
												<div class="metric-item">
													<div class="metric-label">"Fit Score"</div>
													<div class="metric-value">{format::pct(candidate.candidate.fit)}</div>
												</div>
												<div class="metric-item">
													<div class="metric-label">"Liquidity"</div>
													<div class="metric-value">
														{format!("${}", format::millions(candidate.market.liquidity))}
													</div>
												</div>
												<div class="metric-item">
													<div class="metric-label">"Depth Estimate"</div>
													<div class="metric-value">
														{format!("${}", format::millions(candidate.candidate.depth_est))}
													</div>
												</div>
												<div class="metric-item">
													<div class="metric-label">"Cost Estimate"</div>
													<div class="metric-value">
														{format!("${}", format::thousands(candidate.candidate.cost_est))}
													</div>
												</div>
												<div class="metric-item">
													<div class="metric-label">"Weight"</div>
													<div class="metric-value">{format::pct(candidate.candidate.weight)}</div>
												</div>
											</div>
										</div>

										<div class="card-footer">
											<div class="estimated-cost">
												"Estimated Cost: "
												<span class="cost-value">
													{format!("${}", format::thousands(candidate.candidate.cost_est))}
												</span>
											</div>
											<button
												class="action-btn small secondary"
												on:click=move |ev| {
													ev.stop_propagation();
													if let Some(cb) = on_add_to_hedge {
														cb.run(card_candidate.clone());
													}
												}
											>
												"Add to Hedge"
											</button>
										</div>
									</div>
								}
							})
							.collect_view()
					}}
				</div>
			</div>
		</div>
	}
}
