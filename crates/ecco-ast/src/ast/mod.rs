//! The node catalogue of the Ecco language.
//!
//! Every shape here is either a leaf (no slot array at all) or a branch that
//! owns a [`Tree<N>`](crate::tree::Tree) of fixed arity. Branch shapes
//! dereference to their tree, so slot accessors such as `get`, `left` and
//! `slots_mut` are available directly on them.
//!
//! | Shape | Arity | Payload |
//! |---|---|---|
//! | [`Ident`] / [`Name`] | 0 | symbol id |
//! | [`NumLit`] | 0 | `f64` |
//! | [`StrLit`] | 0 | constant id |
//! | [`BinExpr`] | 2 | operator |
//! | [`Args`], [`Params`], [`Stats`] | 2 | cons-cell |
//! | [`FuncDef`] | 3 | |
//! | [`FuncCall`] | 2 | |
//! | [`Echo`], [`If`], [`Elif`], [`Else`] | 1, 3, 2, 1 | keyword |
//! | [`Accept`], [`Error`] | 0 | |
//!
//! # Modules
//!
//! - [`expr`] - Leaves, operators, calls and argument lists
//! - [`decl`] - Function definitions and parameter lists
//! - [`stmt`] - Statement sequences and control-flow statements
//! - [`marker`] - Terminal sentinels

/// Declares a branch shape owning a `Tree<$arity>`.
macro_rules! branch_shape {
    (
        $(#[$meta:meta])*
        $name:ident, kind: $kind:expr, arity: $arity:literal,
        $(tag: $tag:expr,)?
        into: $into:expr $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default)]
        pub struct $name($crate::tree::Tree<$arity>);

        impl $name {
            /// Builds the node, filling slots left to right from `children`.
            ///
            /// Passing more children than the shape has slots does not compile.
            #[must_use]
            pub fn create<const K: usize>(children: [$crate::tree::Child; K]) -> Self {
                $crate::factory::create::<Self, $arity, K>(children)
            }
        }

        impl $crate::factory::Shape for $name {
            const KIND: $crate::node::NodeKind = $kind;
            const ARITY: usize = $arity;
            $(const TAG: $crate::tag::Tag = $tag;)?
        }

        impl $crate::factory::Branch<$arity> for $name {
            fn from_tree(tree: $crate::tree::Tree<$arity>) -> Self {
                Self(tree)
            }

            fn tree(&self) -> &$crate::tree::Tree<$arity> {
                &self.0
            }

            fn tree_mut(&mut self) -> &mut $crate::tree::Tree<$arity> {
                &mut self.0
            }
        }

        impl $crate::tag::Tagged for $name {
            fn tag(&self) -> $crate::tag::Tag {
                <Self as $crate::factory::Shape>::TAG
            }
        }

        impl std::ops::Deref for $name {
            type Target = $crate::tree::Tree<$arity>;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl std::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }

        impl From<$name> for $crate::node::Node {
            fn from(shape: $name) -> Self {
                ($into)(shape)
            }
        }
    };
}

pub mod decl;
pub mod expr;
pub mod marker;
pub mod stmt;

// Re-exports for convenience
pub use decl::{FuncDef, Params};
pub use expr::{Args, BinExpr, BinaryOp, FuncCall, Ident, Name, NumLit, StrLit};
pub use marker::{Accept, Error};
pub use stmt::{Echo, Elif, Else, If, Stat, StatKind, Stats};
