//! Exposure intake form with per-field validation messages.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::domain::form::{ExposureForm as FormValues, FormErrors};

/// Structured exposure intake. Validation runs on submit; `on_submit`
/// only fires once every field passes.
#[component]
pub fn ExposureForm(#[prop(into)] on_submit: Callback<FormValues>) -> impl IntoView {
	let defaults = FormValues::default();
	let statement = RwSignal::new(defaults.statement);
	let horizon = RwSignal::new(defaults.horizon);
	let budget = RwSignal::new(defaults.budget);
	let venues = RwSignal::new(defaults.venues_allowed);
	let jurisdiction = RwSignal::new(defaults.jurisdiction);

	let errors = RwSignal::new(FormErrors::default());
	let coverage = RwSignal::new(None::<f64>);
	let residual_risk = RwSignal::new(None::<f64>);

	let handle_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let form = FormValues {
			statement: statement.get(),
			horizon: horizon.get(),
			budget: budget.get(),
			venues_allowed: venues.get(),
			jurisdiction: jurisdiction.get(),
		};
		match form.validate() {
			Ok(()) => {
				errors.set(FormErrors::default());
				coverage.set(Some(0.75));
				residual_risk.set(Some(0.25));
				on_submit.run(form);
			}
			Err(failed) => errors.set(failed),
		}
	};

	view! {
		<div class="exposure-form glass-card">
			<h3 class="form-title">"Define Your Exposure"</h3>
			<p class="form-description">
				"Describe your risk exposure to get tailored hedging recommendations"
			</p>

			<form class="form-content" on:submit=handle_submit>
				<div class="form-group">
					<label for="statement" class="form-label">"Risk Statement *"</label>
					<textarea
						id="statement"
						class="form-input textarea"
						class:error=move || errors.with(|e| e.statement.is_some())
						rows="4"
						placeholder="e.g., We have significant exposure to EUR/USD fluctuations due to our European operations and USD-denominated debt"
						prop:value=move || statement.get()
						on:input=move |ev| statement.set(event_target_value(&ev))
					></textarea>
					{move || {
						errors
							.with(|e| e.statement)
							.map(|msg| view! { <span class="error-message">{msg}</span> })
					}}
				</div>

				<div class="form-row">
					<div class="form-group">
						<label for="horizon" class="form-label">"Time Horizon *"</label>
						<select
							id="horizon"
							class="form-input"
							class:error=move || errors.with(|e| e.horizon.is_some())
							prop:value=move || horizon.get()
							on:change=move |ev| horizon.set(event_target_value(&ev))
						>
							<option value="7d">"7 days"</option>
							<option value="30d">"30 days"</option>
							<option value="90d">"90 days"</option>
							<option value="180d">"180 days"</option>
							<option value="1y">"1 year"</option>
						</select>
						{move || {
							errors
								.with(|e| e.horizon)
								.map(|msg| view! { <span class="error-message">{msg}</span> })
						}}
					</div>

					<div class="form-group">
						<label for="budget" class="form-label">"Budget *"</label>
						<input
							type="number"
							id="budget"
							class="form-input"
							class:error=move || errors.with(|e| e.budget.is_some())
							placeholder="Enter your hedging budget"
							min="1000"
							prop:value=move || budget.get().to_string()
							on:input=move |ev| {
								budget.set(event_target_value(&ev).parse().unwrap_or(f64::NAN));
							}
						/>
						{move || {
							errors
								.with(|e| e.budget)
								.map(|msg| view! { <span class="error-message">{msg}</span> })
						}}
					</div>
				</div>

				<div class="form-group">
					<label class="form-label">"Allowed Venues *"</label>
					<div class="checkbox-group">
						{["Polymarket", "Kalshi", "Other"]
							.into_iter()
							.map(|venue| {
								view! {
									<label class="checkbox-label">
										<input
											type="checkbox"
											class="checkbox-input"
											value=venue
											prop:checked=move || {
												venues.with(|list| list.iter().any(|v| v == venue))
											}
											on:change=move |ev| {
												venues
													.update(|list| {
														if event_target_checked(&ev) {
															list.push(venue.to_owned());
														} else {
															list.retain(|v| v != venue);
														}
													});
											}
										/>
										{venue}
									</label>
								}
							})
							.collect_view()}
					</div>
					{move || {
						errors
							.with(|e| e.venues_allowed)
							.map(|msg| view! { <span class="error-message">{msg}</span> })
					}}
				</div>

				<div class="form-group">
					<label for="jurisdiction" class="form-label">"Jurisdiction *"</label>
					<select
						id="jurisdiction"
						class="form-input"
						class:error=move || errors.with(|e| e.jurisdiction.is_some())
						prop:value=move || jurisdiction.get()
						on:change=move |ev| jurisdiction.set(event_target_value(&ev))
					>
						<option value="US">"United States"</option>
						<option value="EU">"European Union"</option>
						<option value="UK">"United Kingdom"</option>
						<option value="JP">"Japan"</option>
						<option value="SG">"Singapore"</option>
						<option value="OTHER">"Other"</option>
					</select>
					{move || {
						errors
							.with(|e| e.jurisdiction)
							.map(|msg| view! { <span class="error-message">{msg}</span> })
					}}
				</div>

				{move || {
					(coverage.get().is_some() || residual_risk.get().is_some())
						.then(|| {
							view! {
								<div class="risk-summary">
									<div class="summary-item">
										<div class="summary-label">"Expected Coverage"</div>
										<div class="summary-value">
											{format!("{:.1}%", coverage.get().unwrap_or(0.0) * 100.0)}
										</div>
									</div>
									<div class="summary-item">
										<div class="summary-label">"Residual Risk"</div>
										<div class="summary-value">
											{format!("{:.1}%", residual_risk.get().unwrap_or(0.0) * 100.0)}
										</div>
									</div>
								</div>
							}
						})
				}}

				<button type="submit" class="action-btn primary submit-btn">
					"Find Hedging Options"
				</button>
			</form>
		</div>
	}
}
