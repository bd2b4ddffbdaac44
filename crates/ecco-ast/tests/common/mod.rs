// Shared fixtures for the ecco-ast integration tests.
//
// Each test binary includes this module, so not every helper is used
// everywhere.

#![allow(dead_code)]

use ecco_ast::{child, BinExpr, BinaryOp, Child, Echo, Ident, Node, NumLit, Stats};

/// `echo <value>` as a filled child slot.
pub fn echo_num(value: f64) -> Child {
    child(Echo::create([child(NumLit::new(value))]))
}

/// `lhs op rhs` over two numeric literals.
pub fn num_expr(op: BinaryOp, lhs: f64, rhs: f64) -> BinExpr {
    BinExpr::new(op, child(NumLit::new(lhs)), child(NumLit::new(rhs)))
}

/// A right-nested statement sequence of `len` echo statements.
///
/// Built bottom-up so that construction never recurses.
pub fn stats_chain(len: usize) -> Node {
    assert!(len > 0, "a sequence needs at least one statement");

    let mut seq = Stats::create([echo_num((len - 1) as f64)]);
    for i in (0..len - 1).rev() {
        seq = Stats::create([echo_num(i as f64), child(seq)]);
    }
    seq.into()
}

/// Number of filled slots in the subtree below `node`.
pub fn count_filled(node: &Node) -> usize {
    let mut total = 0;
    let mut pending = vec![node];
    while let Some(next) = pending.pop() {
        next.for_each_child(|c| {
            if let Some(c) = c {
                total += 1;
                pending.push(c);
            }
        });
    }
    total
}

/// A small program using every branch shape.
///
/// ```text
/// fn f(a, b) { echo a + b }
/// f(1, 2)
/// ```
pub fn sample_program() -> Node {
    use ecco_ast::{Args, FuncCall, FuncDef, Params};

    let params = Params::create([
        child(Ident::new(1)),
        child(Params::create([child(Ident::new(2))])),
    ]);
    let sum = BinExpr::new(BinaryOp::Add, child(Ident::new(1)), child(Ident::new(2)));
    let body = Stats::create([child(Echo::create([child(sum)]))]);
    let def = FuncDef::create([child(Ident::new(0)), child(params), child(body)]);

    let args = Args::create([
        child(NumLit::new(1.0)),
        child(Args::create([child(NumLit::new(2.0))])),
    ]);
    let call = FuncCall::create([child(Ident::new(0)), child(args)]);

    Stats::create([
        child(def),
        child(Stats::create([child(Echo::create([child(call)]))])),
    ])
    .into()
}
