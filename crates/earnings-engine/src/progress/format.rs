//! Number formatting for the progress raster.

/// Formats `value` with `,` between thousands and up to three fractional
/// digits, dropping trailing zeros: `100000` → `100,000`, `1234.5` → `1,234.5`.
pub fn group_thousands(value: f64) -> String {
    // Work from the float's own decimal digits so large amounts stay exact.
    let fixed = format!("{:.3}", value.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac.trim_end_matches('0');

    let mut out = String::with_capacity(whole.len() + whole.len() / 3 + frac.len() + 2);
    if value < 0.0 && (whole != "0" || !frac.is_empty()) {
        out.push('-');
    }
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// `"{current} / {target}"` with pound signs and thousands grouping.
pub fn amount_text(current: f64, target: f64) -> String {
    format!("£{} / £{}", group_thousands(current), group_thousands(target))
}

/// Whole-number percentage of a fraction in `[0, 1]`, rounded half up.
pub fn percentage_text(fraction: f64) -> String {
    format!("{}%", (fraction * 100.0).round() as u32)
}
