//! The polymorphic root of every AST node.
//!
//! [`Node`] is a closed sum over the node catalogue. Whatever the concrete
//! shape, a node can enumerate its direct child slots through
//! [`Node::for_each_child`], which is the only traversal primitive the tree
//! offers; depth-first or breadth-first walks are built by callers on top of
//! it.
//!
//! # Examples
//!
//! ```
//! use ecco_ast::{child, If, Node, NumLit};
//!
//! let node = Node::from(If::create([child(NumLit::new(1.0))]));
//!
//! let mut visits = 0;
//! node.for_each_child(|_| visits += 1);
//! assert_eq!(visits, 3);
//! ```

use crate::ast::{
    Accept, Args, BinExpr, Error, FuncCall, FuncDef, Ident, NumLit, Params, Stat, StatKind,
    Stats, StrLit,
};
use crate::error::{ShapeError, ShapeResult};
use crate::tag::{Tag, Tagged};
use crate::tree::{Child, Tree};
use std::fmt;

/// An element of the abstract syntax tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    // ===== Leaves =====
    /// Variable or function reference
    Ident(Ident),
    /// Numeric literal
    Num(NumLit),
    /// String literal
    Str(StrLit),

    // ===== Expressions =====
    /// Operator application
    Binary(BinExpr),
    /// Function call: (callee, argument list)
    FuncCall(FuncCall),
    /// Argument list cons-cell
    Args(Args),

    // ===== Declarations =====
    /// Function definition: (name, parameter list, body)
    FuncDef(FuncDef),
    /// Parameter list cons-cell
    Params(Params),

    // ===== Statements =====
    /// Statement sequence cons-cell
    Stats(Stats),
    /// Control-flow statement
    Stat(Stat),

    // ===== Markers =====
    /// Successful terminal state
    Accept(Accept),
    /// Failure terminal state
    Error(Error),
}

/// Shape identity of a node, without its payload or children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// [`Ident`]
    Ident,
    /// [`NumLit`]
    Num,
    /// [`StrLit`]
    Str,
    /// [`BinExpr`]
    Binary,
    /// [`FuncCall`]
    FuncCall,
    /// [`Args`]
    Args,
    /// [`FuncDef`]
    FuncDef,
    /// [`Params`]
    Params,
    /// [`Stats`]
    Stats,
    /// One of the [`Stat`] shapes
    Stat(StatKind),
    /// [`Accept`]
    Accept,
    /// [`Error`]
    Error,
}

impl NodeKind {
    /// Name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ident => "Ident",
            Self::Num => "NumLit",
            Self::Str => "StrLit",
            Self::Binary => "BinExpr",
            Self::FuncCall => "FuncCall",
            Self::Args => "Args",
            Self::FuncDef => "FuncDef",
            Self::Params => "Params",
            Self::Stats => "Stats",
            Self::Stat(StatKind::Echo) => "Stat(echo)",
            Self::Stat(StatKind::If) => "Stat(if)",
            Self::Stat(StatKind::Elif) => "Stat(elif)",
            Self::Stat(StatKind::Else) => "Stat(else)",
            Self::Accept => "Accept",
            Self::Error => "Error",
        }
    }

    /// Number of child slots every node of this kind has.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Ident | Self::Num | Self::Str | Self::Accept | Self::Error => 0,
            Self::Binary | Self::FuncCall | Self::Args | Self::Params | Self::Stats => 2,
            Self::FuncDef => 3,
            Self::Stat(kind) => kind.arity(),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Node {
    /// Shape identity of this node.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Ident(_) => NodeKind::Ident,
            Self::Num(_) => NodeKind::Num,
            Self::Str(_) => NodeKind::Str,
            Self::Binary(_) => NodeKind::Binary,
            Self::FuncCall(_) => NodeKind::FuncCall,
            Self::Args(_) => NodeKind::Args,
            Self::FuncDef(_) => NodeKind::FuncDef,
            Self::Params(_) => NodeKind::Params,
            Self::Stats(_) => NodeKind::Stats,
            Self::Stat(stat) => NodeKind::Stat(stat.kind()),
            Self::Accept(_) => NodeKind::Accept,
            Self::Error(_) => NodeKind::Error,
        }
    }

    /// Number of child slots, filled or not.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.slots().len()
    }

    /// All child slots in order. Leaves have none.
    #[must_use]
    pub fn slots(&self) -> &[Child] {
        match self {
            Self::Binary(n) => n.slots(),
            Self::FuncCall(n) => n.slots(),
            Self::Args(n) => n.slots(),
            Self::FuncDef(n) => n.slots(),
            Self::Params(n) => n.slots(),
            Self::Stats(n) => n.slots(),
            Self::Stat(n) => n.slots(),
            Self::Ident(_) | Self::Num(_) | Self::Str(_) | Self::Accept(_) | Self::Error(_) => &[],
        }
    }

    /// All child slots in order, for reassignment. The slot count is fixed.
    pub fn slots_mut(&mut self) -> &mut [Child] {
        match self {
            Self::Binary(n) => n.slots_mut(),
            Self::FuncCall(n) => n.slots_mut(),
            Self::Args(n) => n.slots_mut(),
            Self::FuncDef(n) => n.slots_mut(),
            Self::Params(n) => n.slots_mut(),
            Self::Stats(n) => n.slots_mut(),
            Self::Stat(n) => n.slots_mut(),
            Self::Ident(_) | Self::Num(_) | Self::Str(_) | Self::Accept(_) | Self::Error(_) => {
                &mut []
            }
        }
    }

    /// Calls `visit` once per child slot, in order, passing `None` for empty
    /// slots. Leaves never call `visit`.
    pub fn for_each_child<'a>(&'a self, mut visit: impl FnMut(Option<&'a Node>)) {
        for slot in self.slots() {
            visit(slot.as_deref());
        }
    }

    /// Calls `visit` once per child slot with mutable access to the slot.
    pub fn for_each_child_mut(&mut self, mut visit: impl FnMut(&mut Child)) {
        for slot in self.slots_mut() {
            visit(slot);
        }
    }

    /// The child in slot `index`, if the slot exists and is filled.
    #[must_use]
    pub fn child(&self, index: usize) -> Option<&Node> {
        self.slots().get(index)?.as_deref()
    }

    /// Mutable access to the child in slot `index`, if filled.
    pub fn child_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.slots_mut().get_mut(index)?.as_deref_mut()
    }

    /// Replaces slot `index` and returns its previous occupant.
    ///
    /// # Errors
    ///
    /// [`ShapeError::SlotOutOfRange`] if the node has no slot `index`; the
    /// rejected child is dropped.
    pub fn set_child(&mut self, index: usize, child: Child) -> ShapeResult<Child> {
        let kind = self.kind();
        let arity = self.arity();
        match self.slots_mut().get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, child)),
            None => {
                let err = ShapeError::SlotOutOfRange {
                    shape: kind,
                    arity,
                    index,
                };
                ecco_log::debug!("{err}");
                Err(err)
            }
        }
    }

    /// Empties slot `index` and returns what it held.
    ///
    /// # Errors
    ///
    /// [`ShapeError::SlotOutOfRange`] if the node has no slot `index`.
    pub fn take_child(&mut self, index: usize) -> ShapeResult<Child> {
        self.set_child(index, None)
    }

    /// Whether the node has no child slots.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.arity() == 0
    }

    /// Whether the node belongs to the expression family: identifiers,
    /// numeric literals and binary expressions.
    #[must_use]
    pub fn is_expr(&self) -> bool {
        matches!(self, Self::Ident(_) | Self::Num(_) | Self::Binary(_))
    }

    /// Whether the node is a statement or a statement sequence.
    #[must_use]
    pub fn is_stat(&self) -> bool {
        matches!(self, Self::Stats(_) | Self::Stat(_))
    }

    /// Whether the node is one of the terminal sentinels.
    #[must_use]
    pub fn is_marker(&self) -> bool {
        matches!(self, Self::Accept(_) | Self::Error(_))
    }

    /// Whether the node is the success sentinel.
    #[must_use]
    pub fn is_accept(&self) -> bool {
        matches!(self, Self::Accept(_))
    }

    /// Whether the node is the failure sentinel.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Same shape and payload as `self`, every slot empty.
    pub(crate) fn empty_like(&self) -> Node {
        match self {
            Self::Ident(n) => Self::Ident(*n),
            Self::Num(n) => Self::Num(*n),
            Self::Str(n) => Self::Str(*n),
            Self::Binary(n) => Self::Binary(BinExpr::from_parts(n.op(), Tree::new())),
            Self::FuncCall(_) => Self::FuncCall(FuncCall::default()),
            Self::Args(_) => Self::Args(Args::default()),
            Self::FuncDef(_) => Self::FuncDef(FuncDef::default()),
            Self::Params(_) => Self::Params(Params::default()),
            Self::Stats(_) => Self::Stats(Stats::default()),
            Self::Stat(n) => Self::Stat(Stat::empty(n.kind())),
            Self::Accept(n) => Self::Accept(*n),
            Self::Error(n) => Self::Error(*n),
        }
    }

    /// Compares kind and payload only; children are not looked at.
    pub(crate) fn eq_ignoring_children(&self, other: &Node) -> bool {
        match (self, other) {
            (Self::Ident(a), Self::Ident(b)) => a == b,
            (Self::Num(a), Self::Num(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Binary(a), Self::Binary(b)) => a.op() == b.op(),
            _ => self.kind() == other.kind(),
        }
    }
}

impl Tagged for Node {
    fn tag(&self) -> Tag {
        match self {
            Self::Binary(n) => n.tag(),
            Self::Stat(n) => n.tag(),
            _ => Tag::NONE,
        }
    }
}
