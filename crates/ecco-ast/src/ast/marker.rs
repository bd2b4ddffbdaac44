//! Terminal sentinels.
//!
//! A parser hands back [`Accept`] for a successful terminal state and
//! [`Error`] where a program is malformed. Both are zero-arity and carry no
//! payload; callers branch on which one they got and must not traverse an
//! `Error` as if it held program structure.

use crate::factory::{Marker, Shape};
use crate::node::{Node, NodeKind};

/// Successful terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Accept;

impl Shape for Accept {
    const KIND: NodeKind = NodeKind::Accept;
    const ARITY: usize = 0;
}

impl Marker for Accept {
    fn mark() -> Self {
        Accept
    }
}

impl From<Accept> for Node {
    fn from(marker: Accept) -> Self {
        Node::Accept(marker)
    }
}

/// Failure terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Error;

impl Shape for Error {
    const KIND: NodeKind = NodeKind::Error;
    const ARITY: usize = 0;
}

impl Marker for Error {
    fn mark() -> Self {
        Error
    }
}

impl From<Error> for Node {
    fn from(marker: Error) -> Self {
        Node::Error(marker)
    }
}
