//! Expression nodes in the Ecco AST.
//!
//! Leaves ([`Ident`], [`NumLit`], [`StrLit`]) carry a payload and no slots.
//! [`BinExpr`] applies a [`BinaryOp`] to two operands, [`FuncCall`] applies a
//! callee to an [`Args`] cons-list.

use crate::factory::{Branch, IdLeaf, NumLeaf, Shape};
use crate::node::{Node, NodeKind};
use crate::symbol::Symbol;
use crate::tag::{Tag, Tagged};
use crate::tree::{Child, Tree};
use std::fmt;

// ===== Leaves =====

/// Reference to a variable or function by its symbol-table id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Ident {
    id: Symbol,
}

/// Alias used where an identifier names a definition.
pub type Name = Ident;

impl Ident {
    /// Creates an identifier leaf.
    #[must_use]
    pub fn new(id: impl Into<Symbol>) -> Self {
        crate::factory::create_with_id(id)
    }

    /// Symbol-table id of the referenced name.
    #[must_use]
    pub const fn id(&self) -> Symbol {
        self.id
    }
}

impl Shape for Ident {
    const KIND: NodeKind = NodeKind::Ident;
    const ARITY: usize = 0;
}

impl IdLeaf for Ident {
    fn from_id(id: Symbol) -> Self {
        Self { id }
    }
}

impl From<Ident> for Node {
    fn from(leaf: Ident) -> Self {
        Node::Ident(leaf)
    }
}

/// Numeric literal: `3`, `4.25`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NumLit {
    value: f64,
}

impl NumLit {
    /// Creates a numeric literal leaf.
    #[must_use]
    pub fn new(value: f64) -> Self {
        crate::factory::create_with_value(value)
    }

    /// The literal value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }
}

impl Shape for NumLit {
    const KIND: NodeKind = NodeKind::Num;
    const ARITY: usize = 0;
}

impl NumLeaf for NumLit {
    fn from_value(value: f64) -> Self {
        Self { value }
    }
}

impl From<NumLit> for Node {
    fn from(leaf: NumLit) -> Self {
        Node::Num(leaf)
    }
}

/// String literal, stored as an id into the constant table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StrLit {
    id: Symbol,
}

impl StrLit {
    /// Creates a string literal leaf.
    #[must_use]
    pub fn new(id: impl Into<Symbol>) -> Self {
        crate::factory::create_with_id(id)
    }

    /// Constant-table id of the string.
    #[must_use]
    pub const fn id(&self) -> Symbol {
        self.id
    }
}

impl Shape for StrLit {
    const KIND: NodeKind = NodeKind::Str;
    const ARITY: usize = 0;
}

impl IdLeaf for StrLit {
    fn from_id(id: Symbol) -> Self {
        Self { id }
    }
}

impl From<StrLit> for Node {
    fn from(leaf: StrLit) -> Self {
        Node::Str(leaf)
    }
}

// ===== Operators =====

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// Addition: `+`
    Add,
    /// Subtraction: `-`
    Sub,
    /// Multiplication: `*`
    Mul,
    /// Division: `/`
    Div,
    /// Modulo: `%`
    Mod,
    /// Concatenation: `++`
    Concat,
    /// Equality: `==`
    Eq,
    /// Inequality: `!=`
    Neq,
    /// Less than: `<`
    Lt,
    /// Greater than: `>`
    Gt,
    /// Less than or equal: `<=`
    Lte,
    /// Greater than or equal: `>=`
    Gte,
    /// Logical AND: `&&`
    And,
    /// Logical OR: `||`
    Or,
    /// Assignment: `=`
    Assign,
}

impl BinaryOp {
    /// Every operator, in declaration order.
    pub const ALL: [BinaryOp; 15] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Mod,
        Self::Concat,
        Self::Eq,
        Self::Neq,
        Self::Lt,
        Self::Gt,
        Self::Lte,
        Self::Gte,
        Self::And,
        Self::Or,
        Self::Assign,
    ];

    /// The operator spelling as a diagnostic tag.
    #[must_use]
    pub const fn tag(self) -> Tag {
        match self {
            Self::Add => Tag::new("+"),
            Self::Sub => Tag::new("-"),
            Self::Mul => Tag::new("*"),
            Self::Div => Tag::new("/"),
            Self::Mod => Tag::new("%"),
            Self::Concat => Tag::new("++"),
            Self::Eq => Tag::new("=="),
            Self::Neq => Tag::new("!="),
            Self::Lt => Tag::new("<"),
            Self::Gt => Tag::new(">"),
            Self::Lte => Tag::new("<="),
            Self::Gte => Tag::new(">="),
            Self::And => Tag::new("&&"),
            Self::Or => Tag::new("||"),
            Self::Assign => Tag::new("="),
        }
    }

    /// Looks an operator up by its spelling.
    ///
    /// ```
    /// use ecco_ast::BinaryOp;
    ///
    /// assert_eq!(BinaryOp::from_tag("<="), Some(BinaryOp::Lte));
    /// assert_eq!(BinaryOp::from_tag("<>"), None);
    /// ```
    #[must_use]
    pub fn from_tag(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.tag().decode() == text)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag().decode())
    }
}

/// Operator application: `lhs op rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinExpr {
    op: BinaryOp,
    operands: Tree<2>,
}

impl BinExpr {
    /// Applies `op` to two operands.
    #[must_use]
    pub fn new(op: BinaryOp, lhs: Child, rhs: Child) -> Self {
        crate::factory::bin_expr(op, lhs, rhs)
    }

    pub(crate) fn from_parts(op: BinaryOp, operands: Tree<2>) -> Self {
        Self { op, operands }
    }

    /// The operator.
    #[must_use]
    pub const fn op(&self) -> BinaryOp {
        self.op
    }

    /// Left operand.
    #[must_use]
    pub fn lhs(&self) -> Option<&Node> {
        self.operands.left()
    }

    /// Right operand.
    #[must_use]
    pub fn rhs(&self) -> Option<&Node> {
        self.operands.right()
    }
}

// `TAG` stays `Tag::NONE`: the operator, and so the tag, varies per instance.
impl Shape for BinExpr {
    const KIND: NodeKind = NodeKind::Binary;
    const ARITY: usize = 2;
}

impl Tagged for BinExpr {
    fn tag(&self) -> Tag {
        self.op.tag()
    }
}

impl std::ops::Deref for BinExpr {
    type Target = Tree<2>;

    fn deref(&self) -> &Self::Target {
        &self.operands
    }
}

impl std::ops::DerefMut for BinExpr {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.operands
    }
}

impl From<BinExpr> for Node {
    fn from(expr: BinExpr) -> Self {
        Node::Binary(expr)
    }
}

// ===== Calls =====

branch_shape! {
    /// Function call: `(callee, argument list)`.
    FuncCall, kind: NodeKind::FuncCall, arity: 2, into: Node::FuncCall,
}

impl FuncCall {
    /// The called expression.
    #[must_use]
    pub fn callee(&self) -> Option<&Node> {
        self.tree().left()
    }

    /// The argument list, absent for a call without arguments.
    #[must_use]
    pub fn args(&self) -> Option<&Node> {
        self.tree().right()
    }
}

branch_shape! {
    /// Argument list cons-cell: one argument and the rest of the list.
    Args, kind: NodeKind::Args, arity: 2, into: Node::Args,
}

impl Args {
    /// This cell's argument.
    #[must_use]
    pub fn head(&self) -> Option<&Node> {
        self.tree().left()
    }

    /// The rest of the list; absent at the end.
    #[must_use]
    pub fn tail(&self) -> Option<&Node> {
        self.tree().right()
    }
}
