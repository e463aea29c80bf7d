//! User store: owns the [`GlobalState`] and the two API-backed operations.
//!
//! The store is created once and shared by `Arc` with every component that
//! reads users or triggers a request. State changes only go through
//! [`UserStore::dispatch`], which runs [`reduce`] under the write lock.
//!
pub mod reducer;

use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::api::UserApi;
use crate::error::ApiResult;
use crate::model::{NewUser, User};

pub use reducer::{Action, GlobalState, reduce};

pub struct UserStore {
    api: Arc<dyn UserApi>,
    state: RwLock<GlobalState>,
    in_flight: AtomicUsize,
}

impl UserStore {
    /// Create a store with an empty user list.
    pub fn new(api: Arc<dyn UserApi>) -> Self {
        Self {
            api,
            state: RwLock::new(GlobalState::default()),
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Snapshot of the current users, in display order.
    pub fn users(&self) -> Vec<User> {
        self.state.read().users.clone()
    }

    pub fn len(&self) -> usize {
        self.state.read().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of API calls that have not resolved yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn dispatch(&self, action: Action) {
        tracing::debug!(kind = action.kind(), "dispatch");
        let mut state = self.state.write();
        let current = std::mem::take(&mut *state);
        *state = reduce(current, action);
    }

    /// Create a user through the API and append the server's copy.
    ///
    /// On failure the error is logged and returned; the list is untouched.
    pub async fn add_user(&self, input: &NewUser) -> ApiResult<User> {
        let _guard = InFlight::enter(&self.in_flight);
        match self.api.create_user(input).await {
            Ok(created) => {
                tracing::info!(id = %created.key(), "user created");
                self.dispatch(Action::AddUser(created.clone()));
                Ok(created)
            }
            Err(e) => {
                tracing::error!(error = %e, "add user failed");
                Err(e)
            }
        }
    }

    /// Fetch the full list and replace the current one. Returns the count.
    pub async fn read_users(&self) -> ApiResult<usize> {
        let _guard = InFlight::enter(&self.in_flight);
        match self.api.list_users().await {
            Ok(users) => {
                let count = users.len();
                tracing::info!(count, "users loaded");
                self.dispatch(Action::ReadUsers(users));
                Ok(count)
            }
            Err(e) => {
                tracing::error!(error = %e, "read users failed");
                Err(e)
            }
        }
    }
}

/// Counts a request as in flight until dropped, so cancellation still decrements.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}
