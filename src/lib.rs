// vim: tw=80
//! Delegation fixtures and a cookbook of mock object testing patterns.
//!
//! This crate provides a pair of collaborator contracts and three trivial
//! forwarding components built on them.  None of the components does
//! anything beyond passing a call through to the collaborator it was
//! constructed with, which is exactly what makes them useful: every
//! observable behavior comes from the collaborator, so a test can drive
//! the whole fixture through a mock and exercise stubbing, argument
//! matching, call counting, sequencing, and checkpointing in isolation.
//! The `tests/` directory is the cookbook proper, one pattern per file.
//!
//! # The contracts
//!
//! * [`Transform`] is the value-returning capability.  `Ok(None)` means
//!   the collaborator had no output for that input; [`Rejected`] is the
//!   one failure it can raise.
//! * [`Sink`] is the side-effecting capability, with the same failure.
//!
//! Both contracts are mocked with [`mockall`], and the generated
//! [`MockTransform`] and [`MockSink`] are exported alongside the real
//! types.  [`Echo`], the identity transform, is the "real object"
//! baseline for partial-mock scenarios.
//!
//! # The fixtures
//!
//! [`Relay`] forwards to one `Transform`, [`Pipe`] to one `Sink`, and
//! [`Tee`] to two `Sink`s in strict first-then-second order, stopping at
//! the first failure.
//!
//! # Getting started
//!
//! ```
//! use mockall::predicate::*;
//! use mockall_cookbook::{MockTransform, Relay};
//!
//! let mut stage = MockTransform::new();
//! stage.expect_transform()
//!     .with(eq("qwe"))
//!     .times(1)
//!     .returning(|_| Ok(Some("asd".to_owned())));
//!
//! let relay = Relay::new(stage);
//! assert_eq!(Some("asd".to_owned()), relay.relay("qwe").unwrap());
//! ```
//!
//! Expectations are verified when the mock drops, so the assertion above
//! is only half the test; the `times(1)` requirement is checked when
//! `relay` (and the mock inside it) goes out of scope.

pub mod contract;
pub mod pipeline;

pub use contract::{Echo, MockSink, MockTransform, Rejected, Sink, Transform};
pub use pipeline::{Pipe, Relay, Tee};
