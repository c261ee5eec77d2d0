use super::*;

#[test]
fn thousands_groups_integer_digits() {
	assert_eq!(thousands(0.0), "0");
	assert_eq!(thousands(100.0), "100");
	assert_eq!(thousands(1_000.0), "1,000");
	assert_eq!(thousands(350_000.0), "350,000");
	assert_eq!(thousands(5_000_000.0), "5,000,000");
}

#[test]
fn thousands_keeps_the_minus_ahead_of_the_groups() {
	assert_eq!(thousands(-1_000.0), "-1,000");
	assert_eq!(thousands(-42.0), "-42");
}

#[test]
fn thousands_keeps_fractions_without_trailing_zeros() {
	assert_eq!(thousands(0.45), "0.45");
	assert_eq!(thousands(1_234.5), "1,234.5");
	assert_eq!(thousands(2.125), "2.125");
}

#[test]
fn price_always_shows_four_decimals() {
	assert_eq!(price(0.65), "0.6500");
	assert_eq!(price(0.4275), "0.4275");
}

#[test]
fn pct_scales_fractions_to_one_decimal() {
	assert_eq!(pct(0.85), "85.0%");
	assert_eq!(pct(0.025), "2.5%");
	assert_eq!(pct(1.0), "100.0%");
}

#[test]
fn millions_compresses_liquidity_figures() {
	assert_eq!(millions(1_000_000.0), "1.00M");
	assert_eq!(millions(750_000.0), "0.75M");
}

#[test]
fn signed_pnl_marks_gains_on_both_figures() {
	assert_eq!(signed_pnl(1_000.0, 2.5), "+$1,000 (+2.50%)");
	assert_eq!(signed_pnl(0.0, 0.0), "+$0 (+0.00%)");
}

#[test]
fn signed_pnl_leaves_losses_with_their_bare_minus() {
	assert_eq!(signed_pnl(-1_500.0, -3.25), "$-1,500 (-3.25%)");
}
