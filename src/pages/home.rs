use leptos::prelude::*;

use crate::components::{
	CandidateList, Chat, ExecutionSheet, ExposureForm, PositionsTable, Sidebar, View,
};
use crate::domain::form::ExposureForm as ExposureFormValues;

/// Default Home Page: sidebar shell around the active workspace view.
#[component]
pub fn Home() -> impl IntoView {
	let show_canvas = RwSignal::new(false);
	let current_view = RwSignal::new(View::Chat);

	let handle_new_hedge = Callback::new(move |()| {
		show_canvas.set(false);
		current_view.set(View::Chat);
	});

	let handle_view_change = Callback::new(move |view: View| current_view.set(view));

	// A completed exposure form lands on the hedge graph.
	let handle_exposure_submit = Callback::new(move |_values: ExposureFormValues| {
		show_canvas.set(true);
		current_view.set(View::Chat);
	});

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="app-container">
				<Sidebar on_new_hedge=handle_new_hedge on_view_change=handle_view_change />
				<main class="main-content">
					{move || match current_view.get() {
						View::Chat => view! { <Chat show_canvas=show_canvas /> }.into_any(),
						View::Exposure => {
							view! {
								<div class="view-screen">
									<ExposureForm on_submit=handle_exposure_submit />
								</div>
							}
								.into_any()
						}
						View::Execution => {
							view! {
								<div class="view-screen">
									<ExecutionSheet />
								</div>
							}
								.into_any()
						}
						View::Positions => {
							view! {
								<div class="view-screen">
									<PositionsTable />
								</div>
							}
								.into_any()
						}
						View::Candidates => {
							view! {
								<div class="view-screen">
									<CandidateList />
								</div>
							}
								.into_any()
						}
					}}
				</main>
			</div>
		</ErrorBoundary>
	}
}
