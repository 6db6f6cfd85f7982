//! Session controller: the single writer of the wallet session

use std::sync::Arc;

use restart_core::{Address, Mist, SessionConfig, SessionError};
use selflock::{LockRequest, LockResult};

use crate::backend::{MockWallet, WalletBackend};
use crate::store::{BusyGuard, Session, SessionStore};

/// Owns the session and serializes wallet operations through the busy flag.
pub struct SessionController {
    store: SessionStore,
    backend: Arc<dyn WalletBackend>,
    allow_reconnect: bool,
}

impl SessionController {
    /// Create a controller backed by the mock wallet
    pub fn mock(config: &SessionConfig) -> Self {
        Self::with_backend(Arc::new(MockWallet::new(config)), config)
    }

    pub fn with_backend(backend: Arc<dyn WalletBackend>, config: &SessionConfig) -> Self {
        Self {
            store: SessionStore::new(),
            backend,
            allow_reconnect: config.allow_reconnect,
        }
    }

    /// Current session state
    pub async fn session(&self) -> Session {
        self.store.snapshot().await
    }

    pub fn is_busy(&self) -> bool {
        self.store.is_busy()
    }

    pub fn backend_name(&self) -> &str {
        self.backend.backend_name()
    }

    fn acquire(&self) -> Result<BusyGuard<'_>, SessionError> {
        self.store
            .try_acquire()
            .ok_or(SessionError::OperationInProgress)
    }

    /// Attach a wallet account.
    ///
    /// While already connected this either replaces the account or fails
    /// with `AlreadyConnected`, depending on `allow_reconnect`.
    pub async fn connect(&self) -> Result<Address, SessionError> {
        if !self.allow_reconnect && self.store.address().await.is_some() {
            return Err(SessionError::AlreadyConnected);
        }

        let _busy = self.acquire()?;
        let account = self.backend.connect().await.map_err(|e| {
            tracing::warn!("Wallet connect failed: {}", e);
            e
        })?;

        self.store
            .attach(account.address.clone(), account.balance_mist)
            .await;
        tracing::info!(
            "Wallet connected: {} (balance {} MIST)",
            account.address,
            account.balance_mist
        );
        Ok(account.address)
    }

    /// Detach the wallet. Never fails and does not touch the busy flag.
    pub async fn disconnect(&self) {
        self.store.detach().await;
        tracing::info!("Wallet disconnected");
    }

    /// Re-read the balance of the connected account.
    ///
    /// Returns `Ok(None)` without doing anything when disconnected. On
    /// backend failure the balance is zeroed and the error returned.
    pub async fn refresh_balance(&self) -> Result<Option<Mist>, SessionError> {
        let Some(address) = self.store.address().await else {
            return Ok(None);
        };

        let _busy = self.acquire()?;
        match self.backend.balance(&address).await {
            Ok(balance) => {
                if self.store.set_balance_for(&address, balance).await {
                    tracing::debug!("Balance refreshed for {}: {} MIST", address, balance);
                } else {
                    tracing::debug!("Discarding balance for detached account {}", address);
                }
                Ok(Some(balance))
            }
            Err(e) => {
                tracing::warn!("Balance refresh failed for {}: {}", address, e);
                self.store.set_balance_for(&address, 0).await;
                Err(e)
            }
        }
    }

    /// Create a self-locked object for the connected account.
    ///
    /// Fails with `NotConnected` and leaves the session unchanged when no
    /// wallet is attached.
    pub async fn submit_lock_request(
        &self,
        request: &LockRequest,
    ) -> Result<LockResult, SessionError> {
        let owner = self
            .store
            .address()
            .await
            .ok_or(SessionError::NotConnected)?;

        let _busy = self.acquire()?;
        tracing::info!("Submitting lock request '{}' for {}", request.name, owner);
        let result = self
            .backend
            .create_locked_object(&owner, request)
            .await
            .map_err(|e| {
                tracing::error!("Lock request '{}' failed: {}", request.name, e);
                e
            })?;

        tracing::info!(
            "Locked object created: {} ({})",
            result.object_id,
            result.status.as_str()
        );
        Ok(result)
    }
}
