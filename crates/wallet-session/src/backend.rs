//! Wallet backends
//!
//! The controller only talks to a [`WalletBackend`]. [`MockWallet`]
//! fabricates accounts, balances and object IDs after configurable
//! delays; a real wallet or RPC client implements the same trait.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use restart_core::{
    Address, Mist, ObjectId, SessionConfig, SessionError, ADDRESS_BYTES, OBJECT_ID_BYTES,
};
use selflock::{LockRequest, LockResult};

/// Account handed back by a successful connect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub address: Address,
    pub balance_mist: Mist,
}

/// Abstraction over wallet backends (mock vs a real wallet/RPC client).
#[async_trait]
pub trait WalletBackend: Send + Sync {
    /// Ask the wallet for an account.
    async fn connect(&self) -> Result<Account, SessionError>;

    /// Current balance of `address` in MIST.
    async fn balance(&self, address: &Address) -> Result<Mist, SessionError>;

    /// Create a self-locked object owned by `owner`.
    async fn create_locked_object(
        &self,
        owner: &Address,
        request: &LockRequest,
    ) -> Result<LockResult, SessionError>;

    /// Human-readable backend name (e.g. "mock").
    fn backend_name(&self) -> &str;
}

/// Mock wallet for development.
///
/// Every call succeeds. Addresses and object IDs are random, the seed
/// balance is fixed, refreshed balances are random.
#[derive(Debug, Clone)]
pub struct MockWallet {
    connect_latency: Duration,
    refresh_latency: Duration,
    submit_latency: Duration,
    seed_balance_mist: Mist,
    max_random_balance_mist: Mist,
}

impl MockWallet {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            connect_latency: Duration::from_millis(config.connect_latency_ms),
            refresh_latency: Duration::from_millis(config.refresh_latency_ms),
            submit_latency: Duration::from_millis(config.submit_latency_ms),
            seed_balance_mist: config.seed_balance_mist,
            max_random_balance_mist: config.max_random_balance_mist,
        }
    }
}

impl Default for MockWallet {
    fn default() -> Self {
        Self::new(&SessionConfig::default())
    }
}

async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}

#[async_trait]
impl WalletBackend for MockWallet {
    async fn connect(&self) -> Result<Account, SessionError> {
        simulate_latency(self.connect_latency).await;
        let bytes: [u8; ADDRESS_BYTES] = rand::random();
        Ok(Account {
            address: Address::from_bytes(&bytes),
            balance_mist: self.seed_balance_mist,
        })
    }

    async fn balance(&self, _address: &Address) -> Result<Mist, SessionError> {
        simulate_latency(self.refresh_latency).await;
        if self.max_random_balance_mist == 0 {
            return Ok(0);
        }
        Ok(rand::thread_rng().gen_range(0..self.max_random_balance_mist))
    }

    async fn create_locked_object(
        &self,
        owner: &Address,
        request: &LockRequest,
    ) -> Result<LockResult, SessionError> {
        tracing::debug!(
            owner = %owner,
            name = %request.name,
            min_lock_period = request.min_lock_period,
            "Creating locked object"
        );
        simulate_latency(self.submit_latency).await;
        let bytes: [u8; OBJECT_ID_BYTES] = rand::random();
        Ok(LockResult::success(ObjectId::from_bytes(&bytes)))
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use selflock::{LockForm, LockStatus};

    fn instant_wallet() -> MockWallet {
        MockWallet::new(&SessionConfig {
            submit_latency_ms: 0,
            ..SessionConfig::default()
        })
    }

    #[tokio::test]
    async fn test_connect_yields_seeded_account() {
        let account = instant_wallet().connect().await.unwrap();
        assert!(account.address.is_well_formed());
        assert_eq!(account.balance_mist, 1_000_000_000);
    }

    #[tokio::test]
    async fn test_connect_randomizes_address() {
        let wallet = instant_wallet();
        let a = wallet.connect().await.unwrap();
        let b = wallet.connect().await.unwrap();
        assert_ne!(a.address, b.address);
    }

    #[tokio::test]
    async fn test_balance_within_bounds() {
        let wallet = instant_wallet();
        let addr = wallet.connect().await.unwrap().address;
        for _ in 0..100 {
            assert!(wallet.balance(&addr).await.unwrap() < 10_000_000_000);
        }
    }

    #[tokio::test]
    async fn test_zero_balance_bound() {
        let wallet = MockWallet::new(&SessionConfig {
            max_random_balance_mist: 0,
            ..SessionConfig::default()
        });
        let addr = Address::from_bytes(&[1; ADDRESS_BYTES]);
        assert_eq!(wallet.balance(&addr).await.unwrap(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_create_waits_for_submit_latency() {
        let wallet = MockWallet::default();
        let owner = wallet.connect().await.unwrap().address;
        let request = LockForm {
            name: "x".into(),
            description: "y".into(),
            ..LockForm::default()
        }
        .validate()
        .unwrap();

        let start = tokio::time::Instant::now();
        let result = wallet.create_locked_object(&owner, &request).await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(2));
        assert_eq!(result.status, LockStatus::Success);
        assert!(result.object_id.is_well_formed());
        assert_eq!(wallet.backend_name(), "mock");
    }
}
