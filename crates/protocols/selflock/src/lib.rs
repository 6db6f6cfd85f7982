//! Self-Lock Object Protocol Types
//!
//! A self-locked object holds funds that the owner can only withdraw
//! after a minimum lock period, subject to a daily withdrawal cap and a
//! withdrawal fee expressed in basis points.

pub mod constants;
pub mod form;
pub mod state;

pub use constants::{calculate_withdrawal_fee, MAX_FEE_RATE_BPS};
pub use form::{FormMessage, LockForm, MessageKind};
pub use state::{LockRequest, LockResult, LockStatus};
