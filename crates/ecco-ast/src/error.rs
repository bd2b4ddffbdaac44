//! Structural errors raised when building or patching nodes.
//!
//! Most structural mistakes are rejected by the compiler (see
//! [`crate::factory::create`]). These errors cover the runtime-checked paths
//! used when the number of children is only known while parsing.
//!
//! Malformed programs are not errors of this layer: they are represented
//! in-tree by the [`crate::ast::Error`] marker node.

use crate::node::NodeKind;
use std::fmt;

/// A violation of a node shape's fixed arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// More children were supplied than the shape has slots.
    ///
    /// ```text
    /// Stat(elif) takes 2 children, 3 supplied
    /// ```
    TooManyChildren {
        /// Shape being built
        shape: NodeKind,
        /// Slots the shape declares
        arity: usize,
        /// Children handed to the constructor
        supplied: usize,
    },

    /// A slot index past the end of the node's slots.
    SlotOutOfRange {
        /// Shape being accessed
        shape: NodeKind,
        /// Slots the shape declares
        arity: usize,
        /// Requested slot
        index: usize,
    },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyChildren {
                shape,
                arity,
                supplied,
            } => write!(f, "{shape} takes {arity} children, {supplied} supplied"),
            Self::SlotOutOfRange {
                shape,
                arity,
                index,
            } => write!(f, "{shape} has {arity} slots, no slot {index}"),
        }
    }
}

impl std::error::Error for ShapeError {}

/// Result type for shape-checked operations.
pub type ShapeResult<T> = Result<T, ShapeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::StatKind;

    #[test]
    fn test_too_many_children_display() {
        let err = ShapeError::TooManyChildren {
            shape: NodeKind::Stat(StatKind::Elif),
            arity: 2,
            supplied: 3,
        };
        assert_eq!(err.to_string(), "Stat(elif) takes 2 children, 3 supplied");
    }

    #[test]
    fn test_slot_out_of_range_display() {
        let err = ShapeError::SlotOutOfRange {
            shape: NodeKind::Ident,
            arity: 0,
            index: 1,
        };
        assert_eq!(err.to_string(), "Ident has 0 slots, no slot 1");
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<ShapeError>();
    }
}
