//! # API crate: backend access for the FamilyQ client
//!
//! This crate is the only place the client talks to the FamilyQ REST API. It owns the
//! configured HTTP [`Gateway`], the error type every call returns, and the flows the
//! views drive. Flows are generic over [`Backend`] so they run unchanged against the
//! gateway in the app and against an in-memory backend in tests.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Backend origin and debug toggle, from environment or TOML |
//! | [`error`] | `ApiError`: status, server message, transport and validation failures |
//! | [`backend`] | The `Backend` trait: one method per REST endpoint |
//! | [`gateway`] | `reqwest` implementation of `Backend` with credentials and 401 events |
//! | [`session`] | Session probe, login, signup, logout, refresh and auth-event handling |
//! | [`family`] | Family phase overview, create, join, start questions |
//! | [`question`] | Today's question, history, detail, answer submission |
//! | [`admin`] | Question pool management and the debug controls |
//!
//! ## Conventions
//!
//! - Client-side validation runs before any request; a rejected input never reaches
//!   the backend and surfaces as [`ApiError::Validation`].
//! - Session operations never fail: they return a [`store::SessionChange`] plus an
//!   [`store::ActionResult`]. Everything else returns [`ApiResult`], and views turn
//!   errors into text with [`ApiError::user_message`] and a fallback constant from
//!   the flow's module.

pub mod admin;
pub mod backend;
pub mod config;
pub mod error;
pub mod family;
pub mod gateway;
pub mod question;
pub mod session;

#[cfg(test)]
mod testing;

pub use backend::{ApiResult, Backend};
pub use config::ClientConfig;
pub use error::ApiError;
pub use family::{FamilyOverview, Membership, Started};
pub use gateway::{auth_events, AuthEvent, AuthEventSender, AuthEvents, Gateway};
pub use session::Outcome;
