//! Draft state of the "create user" form.
use crate::model::NewUser;

/// One of the three form inputs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Email,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::FirstName, Field::LastName, Field::Email];

    /// Wire name of the field, as sent in the request body.
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::Email => "email",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::Email => "Email",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    draft: NewUser,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &NewUser {
        &self.draft
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.draft.first_name,
            Field::LastName => &self.draft.last_name,
            Field::Email => &self.draft.email,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.draft.first_name,
            Field::LastName => &mut self.draft.last_name,
            Field::Email => &mut self.draft.email,
        }
    }

    /// Replace the value of one field, leaving the others as they are.
    pub fn change(&mut self, field: Field, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
    }

    pub fn push_char(&mut self, field: Field, c: char) {
        self.value_mut(field).push(c);
    }

    pub fn pop_char(&mut self, field: Field) {
        self.value_mut(field).pop();
    }

    /// The body to send. The draft itself is kept as is.
    pub fn submit(&self) -> NewUser {
        self.draft.clone()
    }
}
