//! Display formatting for dollar amounts, prices and rates.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Comma-grouped number, keeping up to three decimals when present.
pub fn thousands(n: f64) -> String {
	let negative = n < 0.0;
	let rounded = (n.abs() * 1000.0).round() / 1000.0;
	let digits = (rounded.trunc() as u64).to_string();

	let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
	if negative {
		out.push('-');
	}
	for (i, ch) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			out.push(',');
		}
		out.push(ch);
	}

	let frac = rounded.fract();
	if frac > 0.0 {
		let s = format!("{:.3}", frac);
		out.push_str(s[1..].trim_end_matches('0').trim_end_matches('.'));
	}
	out
}

/// Price with four decimals, the venue tick display convention.
pub fn price(p: f64) -> String {
	format!("{:.4}", p)
}

/// A [0, 1] fraction as a one-decimal percentage.
pub fn pct(fraction: f64) -> String {
	format!("{:.1}%", fraction * 100.0)
}

/// Dollar amount in millions, two decimals.
pub fn millions(n: f64) -> String {
	format!("{:.2}M", n / 1_000_000.0)
}

/// Profit and loss with its percentage. Gains carry an explicit plus on
/// both figures; losses keep the bare minus from the numbers themselves.
pub fn signed_pnl(pnl: f64, pct: f64) -> String {
	let sign = if pnl >= 0.0 { "+" } else { "" };
	format!("{sign}${} ({sign}{:.2}%)", thousands(pnl), pct)
}
