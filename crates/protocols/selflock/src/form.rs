//! Lock creation form draft and client-side validation
//!
//! The draft keeps numeric fields as the strings the user typed so a
//! half-edited form can round-trip through the UI unchanged. Validation
//! turns it into a [`LockRequest`] before anything reaches the wallet.

use restart_core::{format_object_id, FormError};
use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::{
    DEFAULT_FEE_RATE_BPS, DEFAULT_MAX_WITHDRAWAL_PER_DAY, DEFAULT_MIN_LOCK_PERIOD_SECS,
    MAX_FEE_RATE_BPS,
};
use crate::state::{LockRequest, LockResult};

/// User-editable draft of a lock request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LockForm {
    pub name: String,
    pub description: String,
    #[serde(deserialize_with = "text_or_number")]
    pub min_lock_period: String,
    #[serde(deserialize_with = "text_or_number")]
    pub max_withdrawal_per_day: String,
    #[serde(deserialize_with = "text_or_number")]
    pub withdrawal_fee_rate: String,
    pub auto_reinvest: bool,
    pub emergency_withdrawal: bool,
}

impl Default for LockForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            min_lock_period: DEFAULT_MIN_LOCK_PERIOD_SECS.to_string(),
            max_withdrawal_per_day: DEFAULT_MAX_WITHDRAWAL_PER_DAY.to_string(),
            withdrawal_fee_rate: DEFAULT_FEE_RATE_BPS.to_string(),
            auto_reinvest: false,
            emergency_withdrawal: false,
        }
    }
}

/// Numeric draft fields accept either the typed string or a JSON number
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Unsigned(n) => n.to_string(),
        Raw::Signed(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    })
}

fn required_text(field: &'static str, value: &str) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FormError::Required { field });
    }
    Ok(value.to_string())
}

fn bounded_number(field: &'static str, value: &str, min: u64, max: u64) -> Result<u64, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FormError::Required { field });
    }
    let parsed: i128 = value.parse().map_err(|_| FormError::NotANumber { field })?;
    if parsed < min as i128 || parsed > max as i128 {
        return Err(FormError::OutOfRange { field, min, max });
    }
    Ok(parsed as u64)
}

impl LockForm {
    /// Validate the draft, in field order, and build a request
    pub fn validate(&self) -> Result<LockRequest, FormError> {
        Ok(LockRequest {
            name: required_text("name", &self.name)?,
            description: required_text("description", &self.description)?,
            min_lock_period: bounded_number("minLockPeriod", &self.min_lock_period, 1, u64::MAX)?,
            max_withdrawal_per_day: bounded_number(
                "maxWithdrawalPerDay",
                &self.max_withdrawal_per_day,
                0,
                u64::MAX,
            )?,
            withdrawal_fee_rate: bounded_number(
                "withdrawalFeeRate",
                &self.withdrawal_fee_rate,
                0,
                MAX_FEE_RATE_BPS,
            )?,
            auto_reinvest: self.auto_reinvest,
            emergency_withdrawal: self.emergency_withdrawal,
        })
    }

    /// Restore every field to its default
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Severity of a form message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Success,
    Error,
}

/// Banner shown above the form after a submission attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormMessage {
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub text: String,
}

impl FormMessage {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }

    pub fn not_connected() -> Self {
        Self::error("Please connect your wallet first")
    }

    pub fn invalid(err: &FormError) -> Self {
        Self::error(format!("Invalid input: {}", err))
    }

    pub fn created(result: &LockResult) -> Self {
        Self {
            kind: MessageKind::Success,
            text: format!(
                "Locked object created! Object ID: {}",
                format_object_id(result.object_id.as_str())
            ),
        }
    }

    pub fn failed(reason: impl std::fmt::Display) -> Self {
        Self::error(format!("Creation failed: {}", reason))
    }
}
