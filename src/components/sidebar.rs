//! App sidebar: hedge list, section navigation, and the signed-in user.

use leptos::prelude::*;
use log::debug;

/// Sections the sidebar can navigate to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
	/// Chat intake and the hedge graph.
	Chat,
	/// Exposure definition form.
	Exposure,
	/// Execution sheet preview.
	Execution,
	/// Open positions table.
	Positions,
	/// Hedge candidate browser.
	Candidates,
}

fn hedge_icon() -> impl IntoView {
	view! {
		<svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
			<path d="M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z" />
			<polyline points="3.27 6.96 12 12.01 20.73 6.96" />
			<line x1="12" y1="22.08" x2="12" y2="12" />
		</svg>
	}
}

/// Left-hand navigation rail. Hedge entries are display-only for now;
/// section buttons report through `on_view_change`.
#[component]
pub fn Sidebar(
	#[prop(optional, into)] on_new_hedge: Option<Callback<()>>,
	#[prop(optional, into)] on_view_change: Option<Callback<View>>,
) -> impl IntoView {
	let active_hedge = RwSignal::new(None::<&'static str>);

	let handle_new_hedge = move |_| {
		debug!("creating new hedge");
		if let Some(cb) = on_new_hedge {
			cb.run(());
		}
	};

	let change_view = move |view: View| {
		if let Some(cb) = on_view_change {
			cb.run(view);
		}
	};

	let hedge_items = ["Currency Risk Shield", "Commodity Protection"];

	view! {
		<aside class="sidebar glass-sidebar">
			<div class="sidebar-header">
				<div class="logo-container">
					<span class="logo-text">"Polyhedg"</span>
				</div>
			</div>
			<div class="sidebar-content">
				<button class="create-hedge-btn glass-button-primary" on:click=handle_new_hedge>
					<svg
						class="btn-icon"
						width="18"
						height="18"
						viewBox="0 0 24 24"
						fill="none"
						stroke="currentColor"
						stroke-width="2.5"
						stroke-linecap="round"
						stroke-linejoin="round"
					>
						<path d="M12 5v14M5 12h14" />
					</svg>
					<span class="btn-text">"New Hedge"</span>
				</button>
				<div class="hedges-section">
					<div class="section-header">
						<h3 class="hedges-title">"Your Hedges"</h3>
						<span class="hedges-count">{hedge_items.len()}</span>
					</div>
					<div class="hedges-list">
						{hedge_items
							.into_iter()
							.map(|name| {
								view! {
									<div
										class="hedge-item"
										class:selected=move || active_hedge.get() == Some(name)
										on:click=move |_| {
											active_hedge
												.update(|current| {
													*current = if *current == Some(name) { None } else { Some(name) };
												});
											debug!("selected hedge: {name}");
										}
									>
										<div class="hedge-icon">{hedge_icon()}</div>
										<span class="hedge-name">{name}</span>
									</div>
								}
							})
							.collect_view()}
					</div>
				</div>
				<div class="navigation-section">
					<div class="section-header">
						<h3 class="hedges-title">"Navigation"</h3>
					</div>
					<div class="navigation-list">
						<button class="hedge-item" on:click=move |_| change_view(View::Exposure)>
							<div class="hedge-icon">
								<svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
									<path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z" />
								</svg>
							</div>
							<span class="hedge-name">"Define Exposure"</span>
						</button>
						<button class="hedge-item" on:click=move |_| change_view(View::Execution)>
							<div class="hedge-icon">
								<svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
									<rect x="3" y="3" width="18" height="18" rx="2" ry="2" />
									<line x1="3" y1="9" x2="21" y2="9" />
									<line x1="9" y1="21" x2="9" y2="9" />
								</svg>
							</div>
							<span class="hedge-name">"Execution Sheet"</span>
						</button>
						<button class="hedge-item" on:click=move |_| change_view(View::Positions)>
							<div class="hedge-icon">
								<svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
									<polyline points="22 12 18 12 15 21 9 3 6 12 2 12" />
								</svg>
							</div>
							<span class="hedge-name">"Positions"</span>
						</button>
						<button class="hedge-item" on:click=move |_| change_view(View::Candidates)>
							<div class="hedge-icon">
								<svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
									<path d="M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2" />
									<circle cx="12" cy="7" r="4" />
								</svg>
							</div>
							<span class="hedge-name">"Candidates"</span>
						</button>
					</div>
				</div>
			</div>
			<div class="sidebar-footer glass-footer">
				<div class="user-info">
					<div class="user-avatar">
						<span class="user-initials">"JD"</span>
					</div>
					<div class="user-details">
						<span class="user-name">"John Doe"</span>
						<span class="user-description">"CFO at Stephens and Co"</span>
					</div>
					<button class="user-menu-btn">
						<svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
							<circle cx="12" cy="12" r="1" />
							<circle cx="12" cy="5" r="1" />
							<circle cx="12" cy="19" r="1" />
						</svg>
					</button>
				</div>
			</div>
		</aside>
	}
}
