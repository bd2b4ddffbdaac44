//! Statement nodes in the Ecco AST.
//!
//! A program body is a [`Stats`] cons-list of statements. Control-flow
//! statements are grouped under [`Stat`]; each keyword fixes its arity:
//!
//! | Keyword | Shape | Slots |
//! |---|---|---|
//! | `echo` | [`Echo`] | value |
//! | `if` | [`If`] | condition, then-branch, else-branch |
//! | `elif` | [`Elif`] | condition, then-branch |
//! | `else` | [`Else`] | body |

use crate::error::ShapeResult;
use crate::factory::{try_create, Branch};
use crate::node::{Node, NodeKind};
use crate::tag::{Tag, Tagged};
use crate::tree::Child;
use std::fmt;

branch_shape! {
    /// Statement sequence cons-cell: one statement and the rest.
    Stats, kind: NodeKind::Stats, arity: 2, into: Node::Stats,
}

impl Stats {
    /// This cell's statement.
    #[must_use]
    pub fn head(&self) -> Option<&Node> {
        self.tree().left()
    }

    /// The rest of the sequence; absent at the end.
    #[must_use]
    pub fn tail(&self) -> Option<&Node> {
        self.tree().right()
    }
}

/// Control-flow statement keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    /// `echo value`
    Echo,
    /// `if cond then [else]`
    If,
    /// `elif cond then`
    Elif,
    /// `else body`
    Else,
}

impl StatKind {
    /// The keyword spelling.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        self.tag().decode()
    }

    /// The keyword as a diagnostic tag.
    #[must_use]
    pub const fn tag(self) -> Tag {
        match self {
            Self::Echo => Tag::new("echo"),
            Self::If => Tag::new("if"),
            Self::Elif => Tag::new("elif"),
            Self::Else => Tag::new("else"),
        }
    }

    /// Child slots of statements with this keyword.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Echo | Self::Else => 1,
            Self::Elif => 2,
            Self::If => 3,
        }
    }

    /// Looks a statement keyword up by its spelling.
    #[must_use]
    pub fn from_keyword(text: &str) -> Option<Self> {
        match text {
            "echo" => Some(Self::Echo),
            "if" => Some(Self::If),
            "elif" => Some(Self::Elif),
            "else" => Some(Self::Else),
            _ => None,
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

branch_shape! {
    /// `echo value`
    Echo,
    kind: NodeKind::Stat(StatKind::Echo),
    arity: 1,
    tag: StatKind::Echo.tag(),
    into: |s| Node::Stat(Stat::Echo(s)),
}

impl Echo {
    /// The echoed expression.
    #[must_use]
    pub fn value(&self) -> Option<&Node> {
        self.tree().left()
    }
}

branch_shape! {
    /// `if condition then-branch else-branch`
    ///
    /// The else slot stays present, and empty, when there is no else-branch.
    If,
    kind: NodeKind::Stat(StatKind::If),
    arity: 3,
    tag: StatKind::If.tag(),
    into: |s| Node::Stat(Stat::If(s)),
}

impl If {
    /// The condition.
    #[must_use]
    pub fn condition(&self) -> Option<&Node> {
        self.tree().get(0)
    }

    /// Taken when the condition holds.
    #[must_use]
    pub fn then_branch(&self) -> Option<&Node> {
        self.tree().get(1)
    }

    /// An [`Elif`], an [`Else`], or absent.
    #[must_use]
    pub fn else_branch(&self) -> Option<&Node> {
        self.tree().get(2)
    }
}

branch_shape! {
    /// `elif condition then-branch`
    Elif,
    kind: NodeKind::Stat(StatKind::Elif),
    arity: 2,
    tag: StatKind::Elif.tag(),
    into: |s| Node::Stat(Stat::Elif(s)),
}

impl Elif {
    /// The condition.
    #[must_use]
    pub fn condition(&self) -> Option<&Node> {
        self.tree().left()
    }

    /// Taken when the condition holds.
    #[must_use]
    pub fn then_branch(&self) -> Option<&Node> {
        self.tree().right()
    }
}

branch_shape! {
    /// `else body`
    Else,
    kind: NodeKind::Stat(StatKind::Else),
    arity: 1,
    tag: StatKind::Else.tag(),
    into: |s| Node::Stat(Stat::Else(s)),
}

impl Else {
    /// The else body.
    #[must_use]
    pub fn body(&self) -> Option<&Node> {
        self.tree().left()
    }
}

/// A control-flow statement, one variant per keyword.
#[derive(Debug, Clone, PartialEq)]
pub enum Stat {
    /// `echo`
    Echo(Echo),
    /// `if`
    If(If),
    /// `elif`
    Elif(Elif),
    /// `else`
    Else(Else),
}

impl Stat {
    /// Builds the statement for `kind` from a runtime-sized child list.
    ///
    /// # Errors
    ///
    /// [`ShapeError::TooManyChildren`](crate::ShapeError::TooManyChildren)
    /// if `children` exceeds the keyword's arity.
    ///
    /// ```
    /// use ecco_ast::{child, Ident, Stat, StatKind};
    ///
    /// let stat = Stat::build(StatKind::Elif, vec![child(Ident::new(1))]).unwrap();
    /// assert_eq!(stat.kind(), StatKind::Elif);
    ///
    /// assert!(Stat::build(StatKind::Echo, vec![None, None]).is_err());
    /// ```
    pub fn build(kind: StatKind, children: Vec<Child>) -> ShapeResult<Self> {
        let stat = match kind {
            StatKind::Echo => Self::Echo(try_create::<Echo, 1>(children)?),
            StatKind::If => Self::If(try_create::<If, 3>(children)?),
            StatKind::Elif => Self::Elif(try_create::<Elif, 2>(children)?),
            StatKind::Else => Self::Else(try_create::<Else, 1>(children)?),
        };
        Ok(stat)
    }

    /// A statement for `kind` with every slot empty.
    pub(crate) fn empty(kind: StatKind) -> Self {
        match kind {
            StatKind::Echo => Self::Echo(Echo::default()),
            StatKind::If => Self::If(If::default()),
            StatKind::Elif => Self::Elif(Elif::default()),
            StatKind::Else => Self::Else(Else::default()),
        }
    }

    /// The statement keyword.
    #[must_use]
    pub const fn kind(&self) -> StatKind {
        match self {
            Self::Echo(_) => StatKind::Echo,
            Self::If(_) => StatKind::If,
            Self::Elif(_) => StatKind::Elif,
            Self::Else(_) => StatKind::Else,
        }
    }

    /// All child slots in order.
    #[must_use]
    pub fn slots(&self) -> &[Child] {
        match self {
            Self::Echo(s) => s.slots(),
            Self::If(s) => s.slots(),
            Self::Elif(s) => s.slots(),
            Self::Else(s) => s.slots(),
        }
    }

    /// All child slots in order, for reassignment.
    pub fn slots_mut(&mut self) -> &mut [Child] {
        match self {
            Self::Echo(s) => s.slots_mut(),
            Self::If(s) => s.slots_mut(),
            Self::Elif(s) => s.slots_mut(),
            Self::Else(s) => s.slots_mut(),
        }
    }
}

impl Tagged for Stat {
    fn tag(&self) -> Tag {
        self.kind().tag()
    }
}

impl From<Stat> for Node {
    fn from(stat: Stat) -> Self {
        Node::Stat(stat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Ident, NumLit};
    use crate::error::ShapeError;
    use crate::factory::child;

    #[test]
    fn test_keyword_tags() {
        assert_eq!(Echo::default().decode(), "echo");
        assert_eq!(If::default().decode(), "if");
        assert_eq!(Elif::default().decode(), "elif");
        assert_eq!(Else::default().decode(), "else");
    }

    #[test]
    fn test_arity_per_keyword() {
        assert_eq!(Echo::default().arity(), 1);
        assert_eq!(If::default().arity(), 3);
        assert_eq!(Elif::default().arity(), 2);
        assert_eq!(Else::default().arity(), 1);

        for kind in [StatKind::Echo, StatKind::If, StatKind::Elif, StatKind::Else] {
            let stat = Stat::build(kind, Vec::new()).unwrap();
            assert_eq!(stat.slots().len(), kind.arity());
        }
    }

    #[test]
    fn test_if_without_else_still_has_three_slots() {
        let stat = Node::from(If::create([child(Ident::new(1)), child(Echo::create([]))]));

        let mut visits = 0;
        let mut absent = 0;
        stat.for_each_child(|c| {
            visits += 1;
            if c.is_none() {
                absent += 1;
            }
        });
        assert_eq!(visits, 3);
        assert_eq!(absent, 1);
    }

    #[test]
    fn test_if_elif_else_chain() {
        let otherwise = Else::create([child(Echo::create([child(NumLit::new(3.0))]))]);
        let elif = Elif::create([child(Ident::new(2)), child(otherwise)]);
        let stat = If::create([
            child(Ident::new(1)),
            child(Echo::create([child(NumLit::new(1.0))])),
            child(elif),
        ]);

        assert_eq!(stat.condition(), Some(&Node::from(Ident::new(1))));
        let next = stat.else_branch().unwrap();
        assert_eq!(next.kind(), NodeKind::Stat(StatKind::Elif));
        assert_eq!(next.decode(), "elif");
    }

    #[test]
    fn test_build_rejects_overflow() {
        let err = Stat::build(StatKind::Else, vec![None, None]).unwrap_err();
        assert_eq!(
            err,
            ShapeError::TooManyChildren {
                shape: NodeKind::Stat(StatKind::Else),
                arity: 1,
                supplied: 2,
            }
        );
    }

    #[test]
    fn test_from_keyword() {
        assert_eq!(StatKind::from_keyword("elif"), Some(StatKind::Elif));
        assert_eq!(StatKind::from_keyword("while"), None);
        assert_eq!(StatKind::If.to_string(), "if");
    }

    #[test]
    fn test_stats_sequence() {
        let seq = Stats::create([
            child(Echo::create([child(NumLit::new(1.0))])),
            child(Stats::create([child(Echo::create([child(NumLit::new(2.0))]))])),
        ]);

        assert_eq!(seq.head().map(Node::kind), Some(NodeKind::Stat(StatKind::Echo)));
        let rest = seq.tail().unwrap();
        assert!(rest.child(1).is_none());
        assert_eq!(seq.decode(), "");
    }
}
