//! Pure state transitions for the user list.
use serde_json::Value;

use crate::model::User;

pub const READ_USERS: &str = "READ_USERS";
pub const ADD_USER: &str = "ADD_USER";

/// State shared by the form and the list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlobalState {
    pub users: Vec<User>,
}

/// A requested state transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Replace the whole list.
    ReadUsers(Vec<User>),
    /// Append one user.
    AddUser(User),
    /// A kind this reducer does not know. Reduces to the identity.
    Unrecognized(String),
}

impl Action {
    pub fn kind(&self) -> &str {
        match self {
            Action::ReadUsers(_) => READ_USERS,
            Action::AddUser(_) => ADD_USER,
            Action::Unrecognized(kind) => kind,
        }
    }

    /// Build an action from its `{ type, payload }` form.
    ///
    /// Unknown kinds are accepted and become [`Action::Unrecognized`]; a known
    /// kind with a malformed payload is an error.
    pub fn decode(kind: &str, payload: Value) -> Result<Self, serde_json::Error> {
        Ok(match kind {
            READ_USERS => Action::ReadUsers(serde_json::from_value(payload)?),
            ADD_USER => Action::AddUser(serde_json::from_value(payload)?),
            other => Action::Unrecognized(other.to_string()),
        })
    }
}

pub fn reduce(state: GlobalState, action: Action) -> GlobalState {
    match action {
        Action::ReadUsers(users) => GlobalState { users },
        Action::AddUser(user) => {
            let mut users = state.users;
            users.push(user);
            GlobalState { users }
        }
        Action::Unrecognized(kind) => {
            tracing::warn!(%kind, "ignoring unrecognized action");
            state
        }
    }
}
