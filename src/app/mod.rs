//! Application state types and entry glue.
//!
//! `AppState` holds the UI-local state (form draft, list selection, focus,
//! overlay) and a shared handle to the [`UserStore`]. Network work is spawned
//! on the tokio runtime so the draw loop never waits on a request.
//!
pub mod form;
pub mod keymap;
pub mod list;
pub mod theme;
pub mod update;

use std::sync::Arc;
use std::time::Instant;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::store::UserStore;

pub use form::{Field, FormState};
pub use keymap::{KeyAction, Keymap};
pub use list::ListState;
pub use theme::Theme;

/// Which widget receives key input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Focus {
    Input(Field),
    Submit,
    List,
}

impl Focus {
    const RING: [Focus; 5] = [
        Focus::Input(Field::FirstName),
        Focus::Input(Field::LastName),
        Focus::Input(Field::Email),
        Focus::Submit,
        Focus::List,
    ];

    fn position(self) -> usize {
        Self::RING.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::RING[(self.position() + 1) % Self::RING.len()]
    }

    pub fn prev(self) -> Self {
        let n = Self::RING.len();
        Self::RING[(self.position() + n - 1) % n]
    }

    /// The text input under focus, if any.
    pub fn field(self) -> Option<Field> {
        match self {
            Focus::Input(f) => Some(f),
            Focus::Submit | Focus::List => None,
        }
    }

    pub fn is_form(self) -> bool {
        !matches!(self, Focus::List)
    }

    pub fn label(self) -> &'static str {
        match self {
            Focus::Input(f) => f.label(),
            Focus::Submit => "Submit",
            Focus::List => "Users",
        }
    }
}

/// Overlays drawn above the main screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Overlay {
    Help,
}

pub struct AppState {
    pub started_at: Instant,
    pub store: Arc<UserStore>,
    pub runtime: Handle,
    pub form: FormState,
    pub list: ListState,
    pub focus: Focus,
    pub overlay: Option<Overlay>,
    pub theme: Theme,
    pub keymap: Keymap,
    pub api_url: String,
}

impl AppState {
    pub fn new(
        store: Arc<UserStore>,
        runtime: Handle,
        theme: Theme,
        api_url: impl Into<String>,
    ) -> Self {
        Self {
            started_at: Instant::now(),
            store,
            runtime,
            form: FormState::new(),
            list: ListState::new(),
            focus: Focus::Input(Field::FirstName),
            overlay: None,
            theme,
            keymap: Keymap::default(),
            api_url: api_url.into(),
        }
    }

    /// Load the users the first time the list is shown. Later calls do nothing.
    pub fn mount_list(&mut self) -> Option<JoinHandle<()>> {
        if self.list.mount() {
            Some(self.refresh_users())
        } else {
            None
        }
    }

    pub fn refresh_users(&self) -> JoinHandle<()> {
        let store = Arc::clone(&self.store);
        self.runtime.spawn(async move {
            if let Ok(count) = store.read_users().await {
                tracing::debug!(count, "list refreshed");
            }
        })
    }

    /// Send the current draft. The draft is kept and the call is not awaited.
    pub fn submit_form(&self) -> JoinHandle<()> {
        let store = Arc::clone(&self.store);
        let draft = self.form.submit();
        self.runtime.spawn(async move {
            if let Ok(user) = store.add_user(&draft).await {
                tracing::debug!(id = %user.key(), "form submitted");
            }
        })
    }
}

/// Re-export the application event loop entry function.
pub use update::run_app as run;
