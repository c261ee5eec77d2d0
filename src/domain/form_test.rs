use super::*;

fn valid_form() -> ExposureForm {
	ExposureForm {
		statement: "Heavy EUR/USD exposure from European operations".into(),
		..ExposureForm::default()
	}
}

#[test]
fn defaults_fail_only_on_the_empty_statement() {
	let errors = ExposureForm::default().validate().unwrap_err();
	assert_eq!(errors.statement, Some("Risk statement must be at least 10 characters"));
	assert_eq!(errors.horizon, None);
	assert_eq!(errors.budget, None);
	assert_eq!(errors.venues_allowed, None);
	assert_eq!(errors.jurisdiction, None);
}

#[test]
fn complete_form_validates() {
	assert_eq!(valid_form().validate(), Ok(()));
}

#[test]
fn statement_boundary_is_ten_characters() {
	let mut form = valid_form();
	form.statement = "123456789".into();
	assert!(form.validate().unwrap_err().statement.is_some());
	form.statement = "1234567890".into();
	assert_eq!(form.validate(), Ok(()));
}

#[test]
fn empty_horizon_is_rejected() {
	let mut form = valid_form();
	form.horizon = String::new();
	let errors = form.validate().unwrap_err();
	assert_eq!(errors.horizon, Some("Time horizon is required"));
}

#[test]
fn budget_boundary_is_one_thousand() {
	let mut form = valid_form();
	form.budget = 999.99;
	let errors = form.validate().unwrap_err();
	assert_eq!(errors.budget, Some("Budget must be at least $1,000"));
	form.budget = 1000.0;
	assert_eq!(form.validate(), Ok(()));
}

#[test]
fn non_numeric_budget_is_rejected() {
	let mut form = valid_form();
	form.budget = f64::NAN;
	assert!(form.validate().unwrap_err().budget.is_some());
}

#[test]
fn no_venues_is_rejected() {
	let mut form = valid_form();
	form.venues_allowed.clear();
	let errors = form.validate().unwrap_err();
	assert_eq!(errors.venues_allowed, Some("At least one venue must be selected"));
}

#[test]
fn short_jurisdiction_is_rejected() {
	let mut form = valid_form();
	form.jurisdiction = "U".into();
	let errors = form.validate().unwrap_err();
	assert_eq!(errors.jurisdiction, Some("Jurisdiction is required"));
	form.jurisdiction = "US".into();
	assert_eq!(form.validate(), Ok(()));
}

#[test]
fn all_failures_report_together() {
	let form = ExposureForm {
		statement: "too short".into(),
		horizon: String::new(),
		budget: 0.0,
		venues_allowed: Vec::new(),
		jurisdiction: String::new(),
	};
	let errors = form.validate().unwrap_err();
	assert!(errors.statement.is_some());
	assert!(errors.horizon.is_some());
	assert!(errors.budget.is_some());
	assert!(errors.venues_allowed.is_some());
	assert!(errors.jurisdiction.is_some());
	assert!(!errors.is_empty());
}
