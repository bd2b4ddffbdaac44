//! Ecco Syntax Tree: node catalogue, fixed-arity ownership and construction
//!
//! This crate is the AST layer shared by the Ecco parser, diagnostic printer
//! and evaluator. It defines:
//! - The closed set of node shapes ([`Node`] and the [`ast`] catalogue)
//! - Fixed-arity, single-owner child slots ([`tree::Tree`])
//! - Short diagnostic tags for operators and keywords ([`tag::Tag`])
//! - Arity-checked construction ([`factory`])
//!
//! Parsing source text and evaluating trees live in other crates; they build
//! trees through [`factory`] and walk them through [`Node::for_each_child`].
//!
//! # Modules
//!
//! - [`node`] - The polymorphic [`Node`] and its traversal primitive
//! - [`tree`] - Fixed-arity child slots
//! - [`tag`] - Diagnostic tags
//! - [`ast`] - Concrete node shapes
//! - [`factory`] - Construction entry points
//! - [`symbol`] - Ids into external symbol and constant tables
//! - [`error`] - Structural error types
//!
//! # Examples
//!
//! ## Building `echo 3 + 4`
//!
//! ```
//! use ecco_ast::{child, BinExpr, BinaryOp, Echo, Node, NumLit, Stats, Tagged};
//!
//! let sum = BinExpr::new(
//!     BinaryOp::Add,
//!     child(NumLit::new(3.0)),
//!     child(NumLit::new(4.0)),
//! );
//! let program = Node::from(Stats::create([child(Echo::create([child(sum)]))]));
//!
//! let echo = program.child(0).unwrap();
//! let expr = echo.child(0).unwrap();
//! assert_eq!(expr.decode(), "+");
//! assert_eq!(expr.child(0), Some(&Node::from(NumLit::new(3.0))));
//! ```
//!
//! ## Walking a tree
//!
//! ```
//! use ecco_ast::{child, Ident, If, Node};
//!
//! fn count(node: &Node) -> usize {
//!     let mut total = 1;
//!     node.for_each_child(|c| {
//!         if let Some(c) = c {
//!             total += count(c);
//!         }
//!     });
//!     total
//! }
//!
//! let tree = Node::from(If::create([child(Ident::new(0)), child(Ident::new(1))]));
//! assert_eq!(count(&tree), 3);
//! ```

#![warn(missing_docs)]

// Public modules
pub mod ast;
pub mod error;
pub mod factory;
pub mod node;
pub mod symbol;
pub mod tag;
pub mod tree;

// Re-exports for convenience
pub use ast::{
    Accept, Args, BinExpr, BinaryOp, Echo, Elif, Else, Error, FuncCall, FuncDef, Ident, If, Name,
    NumLit, Params, Stat, StatKind, Stats, StrLit,
};
pub use error::{ShapeError, ShapeResult};
pub use factory::{
    bin_expr, child, create, create_marker, create_with_id, create_with_value, try_create, Branch,
    IdLeaf, Marker, NumLeaf, Shape,
};
pub use node::{Node, NodeKind};
pub use symbol::Symbol;
pub use tag::{Tag, Tagged};
pub use tree::{Child, Tree};
