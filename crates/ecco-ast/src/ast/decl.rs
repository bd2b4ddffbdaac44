//! Declaration nodes: function definitions and their parameter lists.

use crate::factory::Branch;
use crate::node::{Node, NodeKind};

branch_shape! {
    /// Function definition: `(name, parameter list, body)`.
    ///
    /// The parameter list is absent for a function without parameters.
    FuncDef, kind: NodeKind::FuncDef, arity: 3, into: Node::FuncDef,
}

impl FuncDef {
    /// The defined name, normally an [`Ident`](crate::ast::Ident).
    #[must_use]
    pub fn name(&self) -> Option<&Node> {
        self.tree().get(0)
    }

    /// The parameter list.
    #[must_use]
    pub fn params(&self) -> Option<&Node> {
        self.tree().get(1)
    }

    /// The function body.
    #[must_use]
    pub fn body(&self) -> Option<&Node> {
        self.tree().get(2)
    }
}

branch_shape! {
    /// Parameter list cons-cell: one parameter and the rest of the list.
    Params, kind: NodeKind::Params, arity: 2, into: Node::Params,
}

impl Params {
    /// This cell's parameter.
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
