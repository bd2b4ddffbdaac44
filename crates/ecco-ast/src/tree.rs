//! Fixed-arity ownership of child nodes.
//!
//! A [`Tree<N>`] owns exactly `N` child slots. The slot count is part of the
//! type and can never change; individual slots may be empty ([`None`]), which
//! is how an `if` without an `else` still reports three children.
//!
//! Every child is owned through a `Box`, so the tree is a strict
//! single-owner hierarchy: no sharing, no cycles. Dropping a tree releases
//! its whole subtree exactly once. Release walks the subtree with an explicit
//! stack, so long left-recursive chains cannot exhaust the call stack.
//!
//! # Examples
//!
//! ```
//! use ecco_ast::tree::Tree;
//! use ecco_ast::{child, NumLit};
//!
//! let tree: Tree<3> = Tree::with_children([child(NumLit::new(1.0))]);
//!
//! assert_eq!(tree.arity(), 3);
//! assert_eq!(tree.filled(), 1);
//! assert!(tree.get(0).is_some());
//! assert!(tree.get(2).is_none());
//! ```

use crate::node::Node;
use std::cell::Cell;
use std::fmt;

/// A child slot: an owned node, or `None` when the child is absent.
pub type Child = Option<Box<Node>>;

/// Nesting depth past which `Debug` output elides subtrees as `[..]`.
pub const DEBUG_DEPTH: usize = 64;

thread_local! {
    static DEBUG_NESTING: Cell<usize> = const { Cell::new(0) };
}

/// An owner of exactly `N` child slots.
///
/// `Clone`, `PartialEq` and `Drop` walk the subtree with an explicit stack,
/// so they handle chains of any depth. `Debug` stops at [`DEBUG_DEPTH`].
pub struct Tree<const N: usize> {
    slots: [Child; N],
}

impl<const N: usize> Tree<N> {
    /// Number of slots of this tree type.
    pub const ARITY: usize = N;

    /// Creates a tree with every slot empty.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }

    /// Fills slots `0..K` from `children` in order and leaves the rest empty.
    ///
    /// Supplying more children than the tree has slots is a compile error:
    ///
    /// ```compile_fail
    /// use ecco_ast::tree::Tree;
    ///
    /// let _too_many: Tree<1> = Tree::with_children([None, None]);
    /// ```
    #[must_use]
    pub fn with_children<const K: usize>(children: [Child; K]) -> Self {
        const { assert!(K <= N, "more children supplied than the shape has slots") };

        let mut tree = Self::new();
        for (slot, child) in tree.slots.iter_mut().zip(children) {
            *slot = child;
        }
        tree
    }

    /// Runtime-checked variant of [`Tree::with_children`].
    ///
    /// Hands the children back untouched when there are more than `N`.
    pub fn try_from_vec(children: Vec<Child>) -> Result<Self, Vec<Child>> {
        if children.len() > N {
            return Err(children);
        }

        let mut tree = Self::new();
        for (slot, child) in tree.slots.iter_mut().zip(children) {
            *slot = child;
        }
        Ok(tree)
    }

    /// Number of slots, filled or not.
    #[must_use]
    pub const fn arity(&self) -> usize {
        N
    }

    /// Number of slots holding a child.
    #[must_use]
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// All slots in order.
    #[must_use]
    pub fn slots(&self) -> &[Child] {
        &self.slots
    }

    /// All slots in order, for in-place reassignment.
    ///
    /// The slice length is fixed, so the slot count cannot change.
    pub fn slots_mut(&mut self) -> &mut [Child] {
        &mut self.slots
    }

    /// The child in slot `index`, if the slot exists and is filled.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Node> {
        self.slots.get(index)?.as_deref()
    }

    /// Mutable access to slot `index`, if it exists.
    pub fn slot_mut(&mut self, index: usize) -> Option<&mut Child> {
        self.slots.get_mut(index)
    }

    /// Calls `visit` once per slot, in order, including empty slots.
    pub fn for_each_child<'a>(&'a self, mut visit: impl FnMut(Option<&'a Node>)) {
        for slot in &self.slots {
            visit(slot.as_deref());
        }
    }

    /// Moves every slot out, leaving the tree empty.
    #[must_use]
    pub fn into_slots(mut self) -> [Child; N] {
        std::mem::replace(&mut self.slots, std::array::from_fn(|_| None))
    }

    /// The child in slot 0. Only available on trees with at least one slot.
    #[must_use]
    pub fn left(&self) -> Option<&Node> {
        const { assert!(N >= 1, "left() needs a tree with at least one slot") };
        self.slots.as_slice()[0].as_deref()
    }

    /// Slot 0, for reassignment.
    pub fn left_mut(&mut self) -> &mut Child {
        const { assert!(N >= 1, "left_mut() needs a tree with at least one slot") };
        &mut self.slots.as_mut_slice()[0]
    }

    /// The child in slot 1. Only available on trees with at least two slots.
    #[must_use]
    pub fn right(&self) -> Option<&Node> {
        const { assert!(N >= 2, "right() needs a tree with at least two slots") };
        self.slots.as_slice()[1].as_deref()
    }

    /// Slot 1, for reassignment.
    pub fn right_mut(&mut self) -> &mut Child {
        const { assert!(N >= 2, "right_mut() needs a tree with at least two slots") };
        &mut self.slots.as_mut_slice()[1]
    }
}

impl<const N: usize> Default for Tree<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Clone for Tree<N> {
    fn clone(&self) -> Self {
        let mut tree = Self::new();
        for (slot, copy) in tree.slots.iter_mut().zip(clone_slots(&self.slots)) {
            *slot = copy;
        }
        tree
    }
}

impl<const N: usize> PartialEq for Tree<N> {
    fn eq(&self, other: &Self) -> bool {
        slots_eq(&self.slots, &other.slots)
    }
}

impl<const N: usize> fmt::Debug for Tree<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match DebugNesting::enter() {
            Some(_nesting) => f.debug_list().entries(self.slots.iter()).finish(),
            None => f.write_str("[..]"),
        }
    }
}

/// One level of `Debug` nesting on this thread, released on drop.
struct DebugNesting;

impl DebugNesting {
    fn enter() -> Option<Self> {
        DEBUG_NESTING.with(|depth| {
            if depth.get() >= DEBUG_DEPTH {
                return None;
            }
            depth.set(depth.get() + 1);
            Some(DebugNesting)
        })
    }
}

impl Drop for DebugNesting {
    fn drop(&mut self) {
        DEBUG_NESTING.with(|depth| depth.set(depth.get() - 1));
    }
}

/// Deep-copies `slots`. Children are assembled bottom-up from a work stack.
fn clone_slots(slots: &[Child]) -> Vec<Child> {
    enum Step<'a> {
        Visit(&'a Child),
        Assemble(&'a Node),
    }

    let mut steps: Vec<Step<'_>> = slots.iter().rev().map(Step::Visit).collect();
    let mut built: Vec<Child> = Vec::with_capacity(slots.len());

    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(None) => built.push(None),
            Step::Visit(Some(node)) => {
                steps.push(Step::Assemble(&**node));
                steps.extend(node.slots().iter().rev().map(Step::Visit));
            }
            Step::Assemble(node) => {
                // The node's copied children sit on top of `built`, in order.
                let children = built.split_off(built.len() - node.arity());
                let mut copy = node.empty_like();
                for (slot, child) in copy.slots_mut().iter_mut().zip(children) {
                    *slot = child;
                }
                built.push(Some(Box::new(copy)));
            }
        }
    }
    built
}

/// Structural equality of two slot lists, compared pair by pair from a work
/// stack.
fn slots_eq(lhs: &[Child], rhs: &[Child]) -> bool {
    if lhs.len() != rhs.len() {
        return false;
    }

    let mut pending: Vec<(&Child, &Child)> = lhs.iter().zip(rhs).collect();
    while let Some(pair) = pending.pop() {
        match pair {
            (None, None) => {}
            (Some(a), Some(b)) => {
                if !a.eq_ignoring_children(b) {
                    return false;
                }
                pending.extend(a.slots().iter().zip(b.slots()));
            }
            _ => return false,
        }
    }
    true
}

impl<const N: usize> Drop for Tree<N> {
    fn drop(&mut self) {
        // Detach grandchildren before each box is freed so that no drop
        // recurses deeper than one level.
        let mut pending: Vec<Box<Node>> = self.slots.iter_mut().filter_map(Option::take).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.slots_mut().iter_mut().filter_map(Option::take));
        }
    }
}
