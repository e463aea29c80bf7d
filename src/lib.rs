//! Library crate for users-ui.
//!
//! This crate exposes the building blocks of the TUI:
//! - REST client for the users API (`api`)
//! - Wire types (`model`)
//! - User store, reducer and actions (`store`)
//! - Application state and update loop (`app`)
//! - UI rendering (`ui`)
//! - Command-line options and logging setup (`cli`, `logging`)
//!
//! It is used by the `users-ui` binary and by tests.
#![doc = include_str!("../README.md")]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod api;
pub mod app;
pub mod cli;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;
pub mod ui;

pub use error::{ApiError, ApiResult, Result};
pub use model::{NewUser, User, UserId};
pub use store::{Action, GlobalState, UserStore, reduce};
