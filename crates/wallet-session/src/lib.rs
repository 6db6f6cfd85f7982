//! Wallet session: in-memory session store, the controller that owns it,
//! and the wallet backends the controller talks to.
//!
//! The controller is the only writer of the session. Presentation code
//! holds an `Arc<SessionController>` and reads snapshots.

pub mod backend;
pub mod controller;
pub mod store;

pub use backend::{Account, MockWallet, WalletBackend};
pub use controller::SessionController;
pub use store::{BusyGuard, Session, SessionStore};
