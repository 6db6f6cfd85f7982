//! Application state shared across API handlers

use std::sync::Arc;

use restart_core::{AppConfig, FormError, SessionError};
use selflock::{FormMessage, LockForm, LockResult};
use thiserror::Error;
use tokio::sync::Mutex;
use wallet_session::SessionController;

/// Errors from a lock form submission
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Form(#[from] FormError),
}

impl SubmitError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Session(e) => e.error_code(),
            Self::Form(e) => e.error_code(),
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Self::Session(e) => e.status_code(),
            Self::Form(e) => e.status_code(),
        }
    }
}

/// Draft and last banner of the lock creation form
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub draft: LockForm,
    pub message: Option<FormMessage>,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AppConfig,
    controller: Arc<SessionController>,
    form: Mutex<FormState>,
}

impl AppState {
    /// Create a new application state with default config and the mock wallet
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create with a specific config and the mock wallet
    pub fn with_config(config: AppConfig) -> Self {
        let controller = Arc::new(SessionController::mock(&config.session));
        Self::with_controller(config, controller)
    }

    /// Create around an existing controller (e.g. one with a real backend)
    pub fn with_controller(config: AppConfig, controller: Arc<SessionController>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                controller,
                form: Mutex::new(FormState::default()),
            }),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn controller(&self) -> &Arc<SessionController> {
        &self.inner.controller
    }

    /// Current form draft and message
    pub async fn form(&self) -> FormState {
        self.inner.form.lock().await.clone()
    }

    /// Replace the form draft
    pub async fn set_draft(&self, draft: LockForm) {
        self.inner.form.lock().await.draft = draft;
    }

    /// Submit the form draft (optionally replacing it first).
    ///
    /// Not connected and invalid input are reported without calling the
    /// controller and keep the draft. Once the controller resolves, the
    /// outcome is recorded as the form message and the draft is reset.
    /// A submission rejected because another operation is in flight
    /// leaves the form untouched.
    pub async fn submit_lock_form(
        &self,
        draft: Option<LockForm>,
    ) -> Result<LockResult, SubmitError> {
        let controller = self.controller();

        let request = {
            let mut form = self.inner.form.lock().await;
            if controller.is_busy() {
                return Err(SessionError::OperationInProgress.into());
            }
            if let Some(draft) = draft {
                form.draft = draft;
            }
            if !controller.session().await.connected {
                form.message = Some(FormMessage::not_connected());
                return Err(SessionError::NotConnected.into());
            }

            match form.draft.validate() {
                Ok(request) => {
                    form.message = None;
                    request
                }
                Err(e) => {
                    tracing::debug!("Lock form rejected: {}", e);
                    form.message = Some(FormMessage::invalid(&e));
                    return Err(e.into());
                }
            }
        };

        let outcome = controller.submit_lock_request(&request).await;

        let mut form = self.inner.form.lock().await;
        match outcome {
            Ok(result) => {
                form.message = Some(FormMessage::created(&result));
                form.draft.reset();
                Ok(result)
            }
            Err(SessionError::OperationInProgress) => Err(SessionError::OperationInProgress.into()),
            Err(e) => {
                form.message = Some(FormMessage::failed(&e));
                form.draft.reset();
                Err(e.into())
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use selflock::MessageKind;

    fn filled() -> LockForm {
        LockForm {
            name: "x".into(),
            description: "y".into(),
            ..LockForm::default()
        }
    }

    #[tokio::test]
    async fn test_submit_while_disconnected() {
        let state = AppState::new();
        let err = state.submit_lock_form(Some(filled())).await.unwrap_err();
        assert!(matches!(err, SubmitError::Session(SessionError::NotConnected)));

        let form = state.form().await;
        assert_eq!(form.draft, filled());
        assert_eq!(form.message, Some(FormMessage::not_connected()));
    }

    #[tokio::test]
    async fn test_invalid_fee_never_reaches_controller() {
        let state = AppState::new();
        state.controller().connect().await.unwrap();

        let draft = LockForm {
            withdrawal_fee_rate: "10001".into(),
            ..filled()
        };
        let err = state.submit_lock_form(Some(draft.clone())).await.unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert!(!state.controller().is_busy());

        let form = state.form().await;
        assert_eq!(form.draft, draft);
        let message = form.message.unwrap();
        assert_eq!(message.kind, MessageKind::Error);
        assert!(message.text.contains("withdrawalFeeRate"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_resets_draft() {
        let state = AppState::new();
        state.controller().connect().await.unwrap();

        let result = state.submit_lock_form(Some(filled())).await.unwrap();
        assert!(result.object_id.is_well_formed());

        let form = state.form().await;
        assert_eq!(form.draft, LockForm::default());
        let message = form.message.unwrap();
        assert_eq!(message.kind, MessageKind::Success);
        assert!(message.text.ends_with("..."));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_while_busy_keeps_pending_draft() {
        let state = AppState::new();
        state.controller().connect().await.unwrap();

        let first = LockForm {
            name: "a".into(),
            ..filled()
        };
        let pending = {
            let state = state.clone();
            tokio::spawn(async move { state.submit_lock_form(Some(first)).await })
        };
        for _ in 0..10 {
            if state.controller().is_busy() {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert!(state.controller().is_busy());

        let second = LockForm {
            name: "b".into(),
            ..filled()
        };
        let err = state.submit_lock_form(Some(second)).await.unwrap_err();
        assert!(matches!(
            err,
            SubmitError::Session(SessionError::OperationInProgress)
        ));
        let form = state.form().await;
        assert_eq!(form.draft.name, "a");
        assert_eq!(form.message, None);

        assert!(pending.await.unwrap().is_ok());
        assert_eq!(state.form().await.draft, LockForm::default());
    }
}
