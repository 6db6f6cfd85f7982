//! Display helpers shared by the presentation layer

use crate::constants::{BPS_DENOM, MIST_PER_SUI, SECS_PER_HOUR};
use crate::Mist;

/// Format a MIST balance as SUI with 4 decimals (e.g. "1.0000")
pub fn format_balance(mist: Mist) -> String {
    format!("{:.4}", mist as f64 / MIST_PER_SUI as f64)
}

/// Shorten an address to its first 6 and last 4 characters.
///
/// The `0x` prefix counts towards the first 6, so
/// `0xABCDEF...ABCDEF01` renders as `0xABCD...EF01`.
pub fn format_address(address: &str) -> String {
    let len = address.len();
    if len <= 10 {
        return address.to_string();
    }
    match (address.get(..6), address.get(len - 4..)) {
        (Some(head), Some(tail)) => format!("{}...{}", head, tail),
        _ => address.to_string(),
    }
}

/// Shorten an object ID to its first 10 characters plus an ellipsis
pub fn format_object_id(id: &str) -> String {
    match id.get(..10) {
        Some(head) if id.len() > 10 => format!("{}...", head),
        _ => id.to_string(),
    }
}

/// Render basis points as a percentage (100 bps = "1.00%")
pub fn bps_to_percent(bps: u64) -> String {
    format!("{:.2}%", bps as f64 * 100.0 / BPS_DENOM as f64)
}

/// Render a lock period in hours (86400 s = "24 h")
pub fn format_lock_period(secs: u64) -> String {
    if secs % SECS_PER_HOUR == 0 {
        format!("{} h", secs / SECS_PER_HOUR)
    } else {
        format!("{:.2} h", secs as f64 / SECS_PER_HOUR as f64)
    }
}
