//! Self-lock request and result types

use restart_core::{Mist, ObjectId};
use serde::{Deserialize, Serialize};

/// Parameters of a validated self-lock creation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockRequest {
    /// Object name (non-empty)
    pub name: String,
    /// Object description (non-empty)
    pub description: String,
    /// Minimum lock period in seconds (> 0)
    pub min_lock_period: u64,
    /// Maximum withdrawal per day in MIST
    pub max_withdrawal_per_day: Mist,
    /// Withdrawal fee rate in basis points (0..=10000)
    pub withdrawal_fee_rate: u64,
    pub auto_reinvest: bool,
    pub emergency_withdrawal: bool,
}

/// Outcome tag of a lock creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LockStatus {
    Success,
}

impl LockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
        }
    }
}

/// Result of a lock creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockResult {
    pub object_id: ObjectId,
    pub status: LockStatus,
}

impl LockResult {
    pub fn success(object_id: ObjectId) -> Self {
        Self {
            object_id,
            status: LockStatus::Success,
        }
    }
}
