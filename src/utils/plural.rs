//! Pluralization for log lines.

/// "s" suffix unless `n` is exactly one.
#[inline]
fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// `"1 location"`, `"0 locations"`, `"12 locations"`.
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}
