use super::*;

#[test]
fn ease_out_cubic_covers_the_unit_interval() {
	assert_eq!(ease_out_cubic(0.0), 0.0);
	assert_eq!(ease_out_cubic(1.0), 1.0);
	assert!(ease_out_cubic(0.5) > 0.5);
}

#[test]
fn short_labels_stay_on_one_line() {
	assert_eq!(wrap_label("Exposure", 14.0, 100.0), vec!["Exposure"]);
}

#[test]
fn long_titles_wrap_without_losing_words() {
	let title = "Will the Fed cut rates by 50bps in 2025?";
	let lines = wrap_label(title, 11.0, 60.0);

	assert!(lines.len() > 1);
	assert_eq!(lines.join(" "), title);
}

#[test]
fn multi_word_lines_respect_the_width_budget() {
	let advance = 11.0 * 0.55;
	let lines = wrap_label("Will the Fed cut rates by 50bps in 2025?", 11.0, 60.0);

	for line in &lines {
		if line.contains(' ') {
			assert!(line.chars().count() as f64 * advance <= 60.0);
		}
	}
}

#[test]
fn overlong_single_words_get_their_own_line() {
	let lines = wrap_label("Antidisestablishmentarianism now", 11.0, 40.0);

	assert_eq!(lines, vec!["Antidisestablishmentarianism", "now"]);
}

#[test]
fn empty_labels_produce_no_lines() {
	assert!(wrap_label("", 14.0, 100.0).is_empty());
	assert!(wrap_label("   ", 14.0, 100.0).is_empty());
}
