// vim: tw=80
//! Forwarding fixtures.  Each one binds its collaborator(s) at
//! construction and does nothing but pass calls through; every observable
//! behavior, including failure, belongs to the collaborator.

use tracing::instrument;

use crate::contract::{Rejected, Sink, Transform};

/// Forwards to a single value-returning collaborator.
pub struct Relay<T: Transform> {
    stage: T,
}

impl<T: Transform> Relay<T> {
    pub fn new(stage: T) -> Self {
        Relay { stage }
    }

    /// Invoke the bound collaborator exactly once and return its result
    /// unmodified.
    #[instrument(level = "trace", skip(self))]
    pub fn relay(&self, input: &str) -> Result<Option<String>, Rejected> {
        self.stage.transform(input)
    }
}

/// Forwards to a single side-effecting collaborator.
pub struct Pipe<S: Sink> {
    sink: S,
}

impl<S: Sink> Pipe<S> {
    pub fn new(sink: S) -> Self {
        Pipe { sink }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn feed(&self, input: &str) -> Result<(), Rejected> {
        self.sink.consume(input)
    }
}

/// Forwards to two side-effecting collaborators, first then second, with
/// the same input.  If the first one fails, the second is never invoked.
pub struct Tee<A: Sink, B: Sink> {
    first: A,
    second: B,
}

impl<A: Sink, B: Sink> Tee<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Tee { first, second }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn feed(&self, input: &str) -> Result<(), Rejected> {
        self.first.consume(input)?;
        self.second.consume(input)
    }
}
