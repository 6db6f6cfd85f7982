//! Data Transfer Objects for API requests and responses

use restart_core::constants::TOKEN_SYMBOL;
use restart_core::{
    bps_to_percent, format_address, format_balance, format_lock_period, AppConfig, Network,
};
use selflock::{calculate_withdrawal_fee, FormMessage, LockForm, LockResult};
use serde::{Deserialize, Serialize};
use wallet_session::Session;

use crate::state::{FormState, SubmitError};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Info panel response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoResponse {
    pub app_name: String,
    pub network: Network,
    pub network_label: String,
    pub token: String,
    pub backend: String,
    pub environment: String,
}

impl InfoResponse {
    pub fn new(config: &AppConfig, backend: &str) -> Self {
        let environment = if config.network.is_test_environment() {
            "Test environment: all transactions use test tokens with no real value"
        } else {
            "Production environment"
        };
        Self {
            app_name: "Restart".to_string(),
            network: config.network,
            network_label: config.network.label().to_string(),
            token: TOKEN_SYMBOL.to_string(),
            backend: backend.to_string(),
            environment: environment.to_string(),
        }
    }
}

/// Connection widget view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletViewResponse {
    pub connected: bool,
    pub busy: bool,
    pub address: Option<String>,
    /// First 6 + "..." + last 4 characters
    pub short_address: Option<String>,
    pub balance_mist: u64,
    /// e.g. "1.0000 SUI"
    pub balance_formatted: String,
    pub connect_label: String,
    pub connect_disabled: bool,
    pub refresh_label: String,
    pub refresh_disabled: bool,
}

impl From<&Session> for WalletViewResponse {
    fn from(session: &Session) -> Self {
        let address = session.address.as_ref().map(|a| a.as_str().to_string());
        Self {
            connected: session.connected,
            busy: session.busy,
            short_address: address.as_deref().map(format_address),
            address,
            balance_mist: session.balance_mist,
            balance_formatted: format!("{} {}", format_balance(session.balance_mist), TOKEN_SYMBOL),
            connect_label: if session.busy { "Connecting..." } else { "Connect Wallet" }.to_string(),
            connect_disabled: session.busy,
            refresh_label: if session.busy { "Refreshing..." } else { "Refresh" }.to_string(),
            refresh_disabled: session.busy || !session.connected,
        }
    }
}

/// Field hints derived from the current draft.
///
/// A hint is absent while its field does not hold a whole number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormHints {
    pub min_lock_period: Option<String>,
    pub max_withdrawal_per_day: Option<String>,
    pub withdrawal_fee_rate: Option<String>,
    /// Fee charged on a withdrawal of the full daily cap
    pub fee_at_daily_cap: Option<String>,
}

fn parse_field(value: &str) -> Option<u64> {
    value.trim().parse().ok()
}

impl FormHints {
    fn for_draft(draft: &LockForm) -> Self {
        let period = parse_field(&draft.min_lock_period);
        let cap = parse_field(&draft.max_withdrawal_per_day);
        let bps = parse_field(&draft.withdrawal_fee_rate);
        Self {
            min_lock_period: period.map(|secs| format!("{} s = {}", secs, format_lock_period(secs))),
            max_withdrawal_per_day: cap
                .map(|mist| format!("{} {}", format_balance(mist), TOKEN_SYMBOL)),
            withdrawal_fee_rate: bps.map(|bps| format!("{} bps = {}", bps, bps_to_percent(bps))),
            fee_at_daily_cap: cap.zip(bps).map(|(cap, bps)| {
                format!(
                    "{} {}",
                    format_balance(calculate_withdrawal_fee(cap, bps)),
                    TOKEN_SYMBOL
                )
            }),
        }
    }
}

/// Lock creation form view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockFormViewResponse {
    /// False renders the "connect your wallet" notice instead of the form
    pub available: bool,
    pub notice: Option<String>,
    pub draft: LockForm,
    pub hints: FormHints,
    pub message: Option<FormMessage>,
    pub submit_label: String,
    pub submit_disabled: bool,
}

impl LockFormViewResponse {
    pub fn new(session: &Session, form: &FormState) -> Self {
        Self {
            available: session.connected,
            notice: (!session.connected)
                .then(|| "Connect your wallet to create a self-locked object".to_string()),
            draft: form.draft.clone(),
            hints: FormHints::for_draft(&form.draft),
            message: form.message.clone(),
            submit_label: if session.busy { "Creating..." } else { "Create Locked Object" }
                .to_string(),
            submit_disabled: session.busy,
        }
    }
}

/// Successful lock submission response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockSubmitResponse {
    pub result: LockResult,
    pub message: FormMessage,
}

/// Generic API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    /// Offending form field, for validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
        }
    }
}

impl From<&restart_core::SessionError> for ApiError {
    fn from(err: &restart_core::SessionError) -> Self {
        Self::new(err.error_code(), err.to_string())
    }
}

impl From<&SubmitError> for ApiError {
    fn from(err: &SubmitError) -> Self {
        match err {
            SubmitError::Session(e) => e.into(),
            SubmitError::Form(e) => Self {
                field: Some(e.field().to_string()),
                ..Self::new(e.error_code(), e.to_string())
            },
        }
    }
}
