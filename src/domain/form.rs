//! Exposure intake form: the values the user fills in and the
//! validation gate they have to pass before hedging starts.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Values captured by the exposure intake form.
#[derive(Clone, Debug, PartialEq)]
pub struct ExposureForm {
	/// Free-form description of the risk.
	pub statement: String,
	/// Horizon key, e.g. "30d".
	pub horizon: String,
	/// Hedging budget in dollars.
	pub budget: f64,
	/// Venues the hedge may use.
	pub venues_allowed: Vec<String>,
	/// Jurisdiction code.
	pub jurisdiction: String,
}

impl Default for ExposureForm {
	fn default() -> Self {
		Self {
			statement: String::new(),
			horizon: "30d".into(),
			budget: 10_000.0,
			venues_allowed: vec!["Polymarket".into()],
			jurisdiction: "US".into(),
		}
	}
}

/// Per-field validation failures. A `None` field passed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormErrors {
	/// Risk statement failure.
	pub statement: Option<&'static str>,
	/// Time horizon failure.
	pub horizon: Option<&'static str>,
	/// Budget failure.
	pub budget: Option<&'static str>,
	/// Venue selection failure.
	pub venues_allowed: Option<&'static str>,
	/// Jurisdiction failure.
	pub jurisdiction: Option<&'static str>,
}

impl FormErrors {
	/// True when every field passed.
	pub fn is_empty(&self) -> bool {
		self.statement.is_none()
			&& self.horizon.is_none()
			&& self.budget.is_none()
			&& self.venues_allowed.is_none()
			&& self.jurisdiction.is_none()
	}
}

impl ExposureForm {
	/// Check every field at once, reporting all failures together.
	pub fn validate(&self) -> Result<(), FormErrors> {
		let errors = FormErrors {
			statement: (self.statement.chars().count() < 10)
				.then_some("Risk statement must be at least 10 characters"),
			horizon: self.horizon.is_empty().then_some("Time horizon is required"),
			budget: (!(self.budget >= 1000.0)).then_some("Budget must be at least $1,000"),
			venues_allowed: self
				.venues_allowed
				.is_empty()
				.then_some("At least one venue must be selected"),
			jurisdiction: (self.jurisdiction.chars().count() < 2)
				.then_some("Jurisdiction is required"),
		};
		if errors.is_empty() { Ok(()) } else { Err(errors) }
	}
}
