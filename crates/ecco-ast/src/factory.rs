//! The sanctioned ways to construct catalogue nodes.
//!
//! Four construction classes exist:
//!
//! - **Child lists**: [`create`] fills a branch shape's slots left to right
//!   from an array of children. An array longer than the shape's arity does
//!   not compile. [`try_create`] is the runtime-checked counterpart for
//!   dynamically sized child lists.
//! - **Integer leaves**: [`create_with_id`] builds identifier and
//!   string-literal leaves from a [`Symbol`].
//! - **Number leaves**: [`create_with_value`] builds numeric literals.
//! - **Markers**: [`create_marker`] builds the `Accept`/`Error` sentinels.
//!
//! [`bin_expr`] is the shortcut a parser uses when reducing a binary operator
//! production.
//!
//! # Examples
//!
//! ```
//! use ecco_ast::factory::{bin_expr, child, create, create_with_value};
//! use ecco_ast::{Args, BinaryOp, NumLit, Tagged};
//!
//! let three: NumLit = create_with_value(3.0);
//! let four: NumLit = create_with_value(4.0);
//! let sum = bin_expr(BinaryOp::Add, child(three), child(four));
//! assert_eq!(sum.decode(), "+");
//!
//! let args = create::<Args, 2, 1>([child(sum)]);
//! assert_eq!(args.filled(), 1);
//! ```
//!
//! Supplying more children than slots is rejected by the compiler:
//!
//! ```compile_fail
//! use ecco_ast::factory::create;
//! use ecco_ast::Args;
//!
//! let _ = create::<Args, 2, 3>([None, None, None]);
//! ```

use crate::ast::{BinExpr, BinaryOp};
use crate::error::{ShapeError, ShapeResult};
use crate::node::{Node, NodeKind};
use crate::symbol::Symbol;
use crate::tag::Tag;
use crate::tree::{Child, Tree};

/// A node shape of the catalogue.
pub trait Shape: Into<Node> {
    /// Shape identity.
    const KIND: NodeKind;
    /// Number of child slots.
    const ARITY: usize;
    /// Tag fixed by the shape itself.
    ///
    /// Only keyword statements set it. Shapes whose tag depends on the
    /// instance, such as [`BinExpr`] and its operator, leave it as
    /// [`Tag::NONE`]; ask the node through [`Tagged`](crate::tag::Tagged).
    const TAG: Tag = Tag::NONE;
}

/// A shape whose state is exactly one [`Tree<N>`].
pub trait Branch<const N: usize>: Shape {
    /// Wraps a filled tree.
    fn from_tree(tree: Tree<N>) -> Self;

    /// The slots of this node.
    fn tree(&self) -> &Tree<N>;

    /// The slots of this node, for reassignment.
    fn tree_mut(&mut self) -> &mut Tree<N>;
}

/// A leaf carrying an integer id.
pub trait IdLeaf: Shape {
    /// Builds the leaf around `id`.
    fn from_id(id: Symbol) -> Self;
}

/// A leaf carrying a double-precision value.
pub trait NumLeaf: Shape {
    /// Builds the leaf around `value`.
    fn from_value(value: f64) -> Self;
}

/// A payload-free, child-free sentinel.
pub trait Marker: Shape {
    /// Builds the sentinel.
    fn mark() -> Self;
}

/// Builds `T` with slots `0..K` taken from `children` and the rest empty.
///
/// Ownership of every supplied child moves into the new node. `K > N` is a
/// compile error.
#[must_use]
pub fn create<T, const N: usize, const K: usize>(children: [Child; K]) -> T
where
    T: Branch<N>,
{
    ecco_log::trace!("create {} with {}/{} children", T::KIND, K, N);
    T::from_tree(Tree::with_children(children))
}

/// Builds `T` from a child list whose length is only known at runtime.
///
/// # Errors
///
/// [`ShapeError::TooManyChildren`] if `children` is longer than the shape's
/// arity. Nothing is truncated; the children are dropped with the error.
pub fn try_create<T, const N: usize>(children: Vec<Child>) -> ShapeResult<T>
where
    T: Branch<N>,
{
    let supplied = children.len();
    match Tree::try_from_vec(children) {
        Ok(tree) => {
            ecco_log::trace!("create {} with {}/{} children", T::KIND, supplied, N);
            Ok(T::from_tree(tree))
        }
        Err(_) => {
            let err = ShapeError::TooManyChildren {
                shape: T::KIND,
                arity: N,
                supplied,
            };
            ecco_log::debug!("{err}");
            Err(err)
        }
    }
}

/// Builds an integer-payload leaf.
#[must_use]
pub fn create_with_id<T: IdLeaf>(id: impl Into<Symbol>) -> T {
    let id = id.into();
    ecco_log::trace!("create {} {}", T::KIND, id);
    T::from_id(id)
}

/// Builds a number-payload leaf.
#[must_use]
pub fn create_with_value<T: NumLeaf>(value: f64) -> T {
    ecco_log::trace!("create {} {}", T::KIND, value);
    T::from_value(value)
}

/// Builds a sentinel marker.
#[must_use]
pub fn create_marker<T: Marker>() -> T {
    ecco_log::trace!("create {}", T::KIND);
    T::mark()
}

/// Builds a binary expression applying `op` to `lhs` and `rhs`.
#[must_use]
pub fn bin_expr(op: BinaryOp, lhs: Child, rhs: Child) -> BinExpr {
    ecco_log::trace!("create {} '{}'", NodeKind::Binary, op);
    BinExpr::from_parts(op, Tree::with_children([lhs, rhs]))
}

/// Boxes a node into a filled child slot.
#[must_use]
pub fn child(node: impl Into<Node>) -> Child {
    Some(Box::new(node.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Accept, Args, Error, FuncDef, Ident, NumLit, Params, StrLit};

    #[test]
    fn test_create_fills_prefix() {
        let def = create::<FuncDef, 3, 2>([child(Ident::new(1)), child(Params::create([]))]);

        assert_eq!(def.get(0), Some(&Node::from(Ident::new(1))));
        assert_eq!(def.get(1).map(Node::kind), Some(NodeKind::Params));
        assert!(def.get(2).is_none());
    }

    #[test]
    fn test_create_with_no_children() {
        let args = create::<Args, 2, 0>([]);
        assert_eq!(args.arity(), 2);
        assert_eq!(args.filled(), 0);
    }

    #[test]
    fn test_try_create_accepts_up_to_arity() {
        let params = try_create::<Params, 2>(vec![child(Ident::new(1)), None]).unwrap();
        assert_eq!(params.filled(), 1);
    }

    #[test]
    fn test_try_create_rejects_overflow() {
        let err = try_create::<Params, 2>(vec![None, None, child(Ident::new(1))]).unwrap_err();
        assert_eq!(
            err,
            ShapeError::TooManyChildren {
                shape: NodeKind::Params,
                arity: 2,
                supplied: 3,
            }
        );
    }

    #[test]
    fn test_leaf_constructors() {
        let name: Ident = create_with_id(7u32);
        let text: StrLit = create_with_id(Symbol::new(2));
        let num: NumLit = create_with_value(3.5);

        assert_eq!(name.id(), Symbol::new(7));
        assert_eq!(text.id(), Symbol::new(2));
        assert_eq!(num.value(), 3.5);
    }

    #[test]
    fn test_marker_constructors() {
        let ok: Accept = create_marker();
        let failed: Error = create_marker();

        assert!(Node::from(ok).is_accept());
        assert!(Node::from(failed).is_error());
    }

    #[test]
    fn test_bin_expr_slots() {
        let expr = bin_expr(
            BinaryOp::Sub,
            child(NumLit::new(3.0)),
            child(NumLit::new(4.0)),
        );

        assert_eq!(expr.op(), BinaryOp::Sub);
        assert_eq!(expr.lhs(), Some(&Node::from(NumLit::new(3.0))));
        assert_eq!(expr.rhs(), Some(&Node::from(NumLit::new(4.0))));
    }

    #[test]
    fn test_child_boxes_node() {
        let slot = child(Ident::new(4));
        assert_eq!(slot.as_deref(), Some(&Node::from(Ident::new(4))));
    }
}
