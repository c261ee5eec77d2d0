//! Chat intake surface that flips into the hedge graph.
//!
//! Three states share this panel: the welcome prompt, the force graph
//! with its node detail overlay, and the structured exposure form.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::debug;

use super::exposure_form::ExposureForm;
use super::force_graph::adapter::exposure_graph;
use super::force_graph::{GraphCanvas, GraphNode, NodeCategory};
use super::format;
use crate::domain::form::ExposureForm as ExposureFormValues;
use crate::domain::mock::{mock_candidates, mock_exposure_spec, mock_markets};
use crate::services::agent::AgentService;
use crate::services::polymarket::PolymarketService;

const EXAMPLE_PROMPTS: [(&str, &str); 7] = [
	("Electronics Trade", "Help me hedge against electronics trade risks"),
	("Agricultural Exports", "How can I protect agricultural exports?"),
	("Pharmaceuticals", "What's the best way to hedge pharmaceuticals?"),
	("Automotive Parts", "I need protection for automotive parts"),
	("Seafood Exports", "How to hedge seafood exports?"),
	("Natural Gas", "Natural gas price protection"),
	("Luxury Goods", "Luxury goods market hedging"),
];

/// Chat-first intake. Submitting a statement kicks off agent analysis
/// in the background and reveals the hedge graph; from there the user
/// can open the structured exposure form or drop back to chat.
#[component]
pub fn Chat(show_canvas: RwSignal<bool>) -> impl IntoView {
	let input_value = RwSignal::new(String::new());
	let selected_node = RwSignal::new(None::<GraphNode>);
	let show_exposure_form = RwSignal::new(false);
	let textarea_ref = NodeRef::<leptos::html::Textarea>::new();

	let markets = mock_markets();
	let candidates = mock_candidates();
	let graph_data = Signal::derive(move || exposure_graph(&markets, &candidates));

	let handle_node_click = Callback::new(move |node: GraphNode| selected_node.set(Some(node)));

	let handle_exposure_submit = Callback::new(move |_values: ExposureFormValues| {
		show_exposure_form.set(false);
		show_canvas.set(true);
	});

	let handle_input = move || {
		if let Some(textarea) = textarea_ref.get() {
			let style = web_sys::HtmlElement::style(&textarea);
			let _ = style.set_property("height", "auto");
			let height = textarea.scroll_height().min(200);
			let _ = style.set_property("height", &format!("{height}px"));
		}
	};

	let handle_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let statement = input_value.get();
		if statement.trim().is_empty() {
			return;
		}
		input_value.set(String::new());
		show_canvas.set(true);
		show_exposure_form.set(false);
		// TODO: surface these replies in a chat transcript once one exists.
		spawn_local(async move {
			let agent = AgentService::new();
			let venue_markets = PolymarketService::new().markets(4);
			let analysis = agent.analyze_exposure(&statement, &venue_markets).await;
			debug!("exposure analysis: {analysis}");
			for market in &venue_markets {
				let score = agent.score_market_fit(&statement, market).await;
				debug!("fit {:.2} for {}", score.fit, market.title);
			}
		});
	};

	// Focus the input whenever the welcome screen is showing.
	Effect::new(move |_| {
		if !show_canvas.get() {
			if let Some(textarea) = textarea_ref.get() {
				let _ = textarea.focus();
			}
		}
	});

	view! {
		<div class="chat-container">
			{move || {
				if !show_canvas.get() {
					view! {
						<div class="welcome-section">
							<h1 class="welcome-title">"Welcome back, John!"</h1>
							<p class="welcome-subtitle">"How can I help you create a hedge today?"</p>
						</div>
						<div class="chat-input-section">
							<form class="chat-form" on:submit=handle_submit>
								<div class="chat-input-container">
									<textarea
										node_ref=textarea_ref
										class="chat-input"
										rows="1"
										placeholder="How can I help you today?"
										prop:value=move || input_value.get()
										on:input=move |ev| {
											input_value.set(event_target_value(&ev));
											handle_input();
										}
									></textarea>
								</div>
								<button
									type="submit"
									class="send-button"
									prop:disabled=move || input_value.with(|v| v.trim().is_empty())
								>
									<svg
										width="18"
										height="18"
										viewBox="0 0 24 24"
										fill="none"
										stroke="currentColor"
										stroke-width="2.5"
										stroke-linecap="round"
										stroke-linejoin="round"
									>
										<path d="M12 19V5M5 12l7-7 7 7" />
									</svg>
								</button>
							</form>
							<div class="example-prompts">
								<div class="prompts-row">
									{EXAMPLE_PROMPTS
										.into_iter()
										.map(|(label, prompt)| {
											view! {
												<button
													class="prompt-tag"
													on:click=move |_| input_value.set(prompt.to_owned())
												>
													{label}
												</button>
											}
										})
										.collect_view()}
								</div>
							</div>
						</div>
					}
						.into_any()
				} else if show_exposure_form.get() {
					view! {
						<div class="form-screen">
							<div class="form-screen-nav">
								<button
									class="action-btn secondary"
									on:click=move |_| show_exposure_form.set(false)
								>
									"← Back to Graph"
								</button>
							</div>
							<ExposureForm on_submit=handle_exposure_submit />
						</div>
					}
						.into_any()
				} else {
					view! {
						<div class="graph-area">
							<GraphCanvas data=graph_data on_node_click=handle_node_click />
							{move || {
								selected_node
									.get()
									.map(|node| {
										let is_central = node.category == NodeCategory::Central;
										let fit_good = node.fit > 0.6;
										let fit_pct = node.fit * 100.0;
										let liquidity_pct = (node.liquidity / 1_000_000.0 * 100.0).min(100.0);
										let description = if is_central {
											view! { <div>{mock_exposure_spec().statement}</div> }.into_any()
										} else {
											view! {
												<div>{format!("Market: {}", node.label)}</div>
												<div>{format!("Fit Score: {}%", fit_pct.round())}</div>
												<div>
													{format!("Liquidity: ${}", format::thousands(node.liquidity))}
												</div>
											}
												.into_any()
										};
										view! {
											<div class="node-panel">
												<button
													class="node-panel-close"
													on:click=move |_| selected_node.set(None)
												>
													"×"
												</button>
												<h3 class="node-panel-title">{node.label.clone()}</h3>
												<div class=format!(
													"node-badge {}",
													if is_central { "central" } else { "market" },
												)>
													{if is_central { "Exposure Statement" } else { "Market Node" }}
												</div>
												<div class="panel-section">
													<div class="panel-label">"Description"</div>
													<div class="node-description">{description}</div>
												</div>
												<div class="panel-section">
													<div class="indicator-header">
														<div class="indicator-label">"Fit Score"</div>
														<div class=format!(
															"indicator-value {}",
															if fit_good { "good" } else { "bad" },
														)>{format!("{}%", fit_pct.round())}</div>
													</div>
													<div class="indicator-track">
														<div
															class=format!(
																"indicator-fill {}",
																if fit_good { "good" } else { "bad" },
															)
															style=format!("width: {fit_pct}%")
														></div>
													</div>
												</div>
												<div class="panel-section">
													<div class="indicator-header">
														<div class="indicator-label">"Liquidity"</div>
														<div class="indicator-value accent">
															{format!("${}", format::thousands(node.liquidity))}
														</div>
													</div>
													<div class="indicator-track">
														<div
															class="indicator-fill liquidity"
															style=format!("width: {liquidity_pct}%")
														></div>
													</div>
												</div>
											</div>
										}
									})
							}}
							<button class="graph-cta define" on:click=move |_| show_exposure_form.set(true)>
								"Define Exposure"
							</button>
							<button class="graph-cta back" on:click=move |_| show_canvas.set(false)>
								"← Back to Chat"
							</button>
						</div>
					}
						.into_any()
				}
			}}
		</div>
	}
}
