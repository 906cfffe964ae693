#![forbid(unsafe_code)]

//! formbench — call-based test harness for interactive form components.
//!
//! The recurring protocol under test is: fill a form, submit it, observe the
//! captured payload. This crate packages that protocol as two cooperating
//! pieces:
//!
//! 1. **Form harness** — mounts a component into an isolated rendering target,
//!    locates fields by accessible label (or structurally, in degraded mode),
//!    assigns values, and triggers submission through either the form-level
//!    path or a click on the submit control.
//! 2. **Capture verifier** — wraps the submission callback in an invocation
//!    spy and, after an optional microtask flush, asserts call count and
//!    structural payload equality.
//!
//! Components receive their collaborators by injection: the post editor takes
//! a [`collab::PostApi`] and a [`collab::Navigator`] rather than reaching for
//! any ambient module. Submission is an explicit call, not a simulated UI
//! event.
//!
//! # Library usage
//!
//! Use the [`prelude`] for convenient access to the most common types:
//!
//! ```rust,no_run
//! use formbench::prelude::*;
//! ```
//!
//! Individual modules can also be imported directly:
//!
//! ```rust,no_run
//! use formbench::component::login::LoginForm;
//! use formbench::harness::FormHarness;
//! ```

pub mod prelude;

pub mod collab;
pub mod component;
pub mod core;
pub mod harness;
pub mod verify;
