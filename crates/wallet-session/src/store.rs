//! In-memory session record and busy flag

use std::sync::atomic::{AtomicBool, Ordering};

use restart_core::{Address, Mist};
use tokio::sync::RwLock;

/// Snapshot of the wallet session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub connected: bool,
    /// Present iff `connected`
    pub address: Option<Address>,
    pub balance_mist: Mist,
    /// True while an asynchronous wallet operation is in flight
    pub busy: bool,
}

#[derive(Debug, Default)]
struct SessionFields {
    address: Option<Address>,
    balance_mist: Mist,
}

/// Session store owned by the controller.
///
/// Connection state lives behind an async lock; the busy flag is atomic so
/// [`BusyGuard`] can release it from `Drop` on every exit path.
#[derive(Debug, Default)]
pub struct SessionStore {
    fields: RwLock<SessionFields>,
    busy: AtomicBool,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current session state
    pub async fn snapshot(&self) -> Session {
        let fields = self.fields.read().await;
        Session {
            connected: fields.address.is_some(),
            address: fields.address.clone(),
            balance_mist: fields.balance_mist,
            busy: self.is_busy(),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Connected address, if any
    pub async fn address(&self) -> Option<Address> {
        self.fields.read().await.address.clone()
    }

    /// Mark the session busy. Returns `None` if an operation is already
    /// in flight.
    pub fn try_acquire(&self) -> Option<BusyGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard { store: self })
    }

    /// Attach an account
    pub async fn attach(&self, address: Address, balance_mist: Mist) {
        let mut fields = self.fields.write().await;
        fields.address = Some(address);
        fields.balance_mist = balance_mist;
    }

    /// Detach the account and zero the balance. Busy is left untouched.
    pub async fn detach(&self) {
        let mut fields = self.fields.write().await;
        fields.address = None;
        fields.balance_mist = 0;
    }

    /// Update the balance if `address` is still the attached account.
    /// Returns whether the update applied.
    pub async fn set_balance_for(&self, address: &Address, balance_mist: Mist) -> bool {
        let mut fields = self.fields.write().await;
        if fields.address.as_ref() != Some(address) {
            return false;
        }
        fields.balance_mist = balance_mist;
        true
    }
}

/// Holds the session busy flag; clears it when dropped
#[derive(Debug)]
pub struct BusyGuard<'a> {
    store: &'a SessionStore,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.store.busy.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr() -> Address {
        Address::new("0xABCDEF0123456789ABCDEF0123456789ABCDEF01")
    }

    #[tokio::test]
    async fn test_starts_disconnected() {
        let store = SessionStore::new();
        assert_eq!(store.snapshot().await, Session::default());
    }

    #[tokio::test]
    async fn test_attach_and_detach() {
        let store = SessionStore::new();
        store.attach(addr(), 42).await;

        let session = store.snapshot().await;
        assert!(session.connected);
        assert_eq!(session.address, Some(addr()));
        assert_eq!(session.balance_mist, 42);

        store.detach().await;
        let session = store.snapshot().await;
        assert!(!session.connected);
        assert_eq!(session.address, None);
        assert_eq!(session.balance_mist, 0);
    }

    #[test]
    fn test_busy_guard_is_exclusive() {
        let store = SessionStore::new();
        let guard = store.try_acquire().unwrap();
        assert!(store.is_busy());
        assert!(store.try_acquire().is_none());
        drop(guard);
        assert!(!store.is_busy());
        assert!(store.try_acquire().is_some());
    }

    #[tokio::test]
    async fn test_detach_keeps_busy() {
        let store = SessionStore::new();
        store.attach(addr(), 1).await;
        let _guard = store.try_acquire().unwrap();
        store.detach().await;
        assert!(store.snapshot().await.busy);
    }

    #[tokio::test]
    async fn test_balance_ignored_after_account_change() {
        let store = SessionStore::new();
        store.attach(addr(), 1).await;
        store.detach().await;
        assert!(!store.set_balance_for(&addr(), 99).await);
        assert_eq!(store.snapshot().await.balance_mist, 0);

        store.attach(addr(), 1).await;
        assert!(store.set_balance_for(&addr(), 99).await);
        assert_eq!(store.snapshot().await.balance_mist, 99);
    }
}
