// vim: tw=80
//! The collaborator contracts, the identity baseline, and the one error
//! type a collaborator can raise.

use mockall::automock;
use thiserror::Error;

/// Raised by a collaborator that rejects an input.
///
/// Fixtures pass this through untouched, so a test can compare the error
/// it observed against the one the collaborator produced.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{reason}: {input:?}")]
pub struct Rejected {
    /// The input the collaborator refused.
    pub input: String,
    /// Why it refused.
    pub reason: &'static str,
}

impl Rejected {
    pub fn new(input: impl Into<String>, reason: &'static str) -> Self {
        Rejected {
            input: input.into(),
            reason,
        }
    }
}

/// A value-returning collaborator.
///
/// `Ok(None)` means the collaborator had no output for that input, as
/// opposed to `Err`, which means it refused the input outright.
#[automock]
pub trait Transform {
    fn transform(&self, input: &str) -> Result<Option<String>, Rejected>;
}

/// A side-effecting collaborator.
#[automock]
pub trait Sink {
    fn consume(&self, input: &str) -> Result<(), Rejected>;
}

impl<T: Transform + ?Sized> Transform for &T {
    fn transform(&self, input: &str) -> Result<Option<String>, Rejected> {
        (**self).transform(input)
    }
}

impl<S: Sink + ?Sized> Sink for &S {
    fn consume(&self, input: &str) -> Result<(), Rejected> {
        (**self).consume(input)
    }
}

/// The identity transform: every input comes back unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct Echo;

impl Transform for Echo {
    fn transform(&self, input: &str) -> Result<Option<String>, Rejected> {
        Ok(Some(input.to_owned()))
    }
}
