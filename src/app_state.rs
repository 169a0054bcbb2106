//! Implements a struct that holds the state of the web server.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{Error, transaction::TransactionManager};

/// The state of the web server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The transactions and the state of the transaction form.
    pub transaction_manager: Arc<Mutex<TransactionManager>>,
}

impl AppState {
    /// Create a new [AppState] around `transaction_manager`.
    pub fn new(transaction_manager: TransactionManager) -> Self {
        Self {
            transaction_manager: Arc::new(Mutex::new(transaction_manager)),
        }
    }

    /// Lock the transaction manager for the duration of a request.
    ///
    /// # Errors
    ///
    /// Returns [Error::StateLockError] if another handler panicked while
    /// holding the lock.
    pub fn lock_transactions(&self) -> Result<MutexGuard<'_, TransactionManager>, Error> {
        self.transaction_manager
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire transaction lock: {error}"))
            .map_err(|_| Error::StateLockError)
    }
}

impl Default for AppState {
    /// State holding the placeholder transactions.
    fn default() -> Self {
        Self::new(TransactionManager::default())
    }
}
