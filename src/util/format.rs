//! Display formatting for prices, timestamps, and listing badges.
//!
//! All formatting is pure string work; the only browser touch points are
//! the millisecond clock readers at the bottom, which stub out off-browser.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Age below which a listing shows the "New" badge.
pub const NEW_LISTING_WINDOW_MS: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Stock level at or below which a listing shows the "Low stock" badge.
pub const LOW_STOCK_THRESHOLD: i32 = 5;

/// Format a dollar amount as `$1,234.50`.
pub fn format_usd(amount: f64) -> String {
    let negative = amount.is_sign_negative() && amount != 0.0;
    let raw = format!("{:.2}", amount.abs());
    let (whole, cents) = raw.split_once('.').unwrap_or((raw.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if negative {
        format!("-${grouped}.{cents}")
    } else {
        format!("${grouped}.{cents}")
    }
}

/// Normalize a server timestamp for parsing and comparison.
///
/// The server emits `2025-08-20T14:30:00`; some rows use a space
/// separator instead of `T`.
pub fn normalize_timestamp(raw: &str) -> String {
    raw.replacen(' ', "T", 1)
}

/// The `YYYY-MM-DD` part of a server timestamp.
pub fn display_date(raw: &str) -> String {
    let normalized = normalize_timestamp(raw);
    normalized.split('T').next().unwrap_or_default().to_owned()
}

/// `YYYY-MM-DD HH:MM` from a server timestamp; falls back to the date
/// part when no time is present.
pub fn display_date_time(raw: &str) -> String {
    let normalized = normalize_timestamp(raw);
    let mut parts = normalized.splitn(2, 'T');
    let date = parts.next().unwrap_or_default();
    let hhmm: String = parts.next().unwrap_or_default().chars().take(5).collect();
    if hhmm.is_empty() {
        date.to_owned()
    } else {
        format!("{date} {hhmm}")
    }
}

/// Whether a listing created at `created_ms` still counts as new at
/// `now_ms`. An unparseable timestamp never reaches this point.
pub fn is_new_listing(created_ms: f64, now_ms: f64) -> bool {
    now_ms - created_ms < NEW_LISTING_WINDOW_MS
}

/// Whether remaining stock warrants the "Low stock" badge. Zero stock is
/// sold out, not low.
pub fn low_stock(stock_count: i32) -> bool {
    stock_count > 0 && stock_count <= LOW_STOCK_THRESHOLD
}

/// Parse a server timestamp to epoch milliseconds, browser only.
pub fn created_at_ms(raw: &str) -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        let ms = js_sys::Date::parse(&normalize_timestamp(raw));
        if ms.is_nan() { None } else { Some(ms) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = raw;
        None
    }
}

/// Current epoch milliseconds, browser only.
pub fn now_ms() -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        Some(js_sys::Date::now())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
