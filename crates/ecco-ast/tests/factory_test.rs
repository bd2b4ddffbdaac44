//! Integration tests for node construction.
//!
//! Covers slot filling, operator and keyword tags, markers and the
//! runtime-checked construction paths a parser uses.

mod common;

use common::{num_expr, sample_program};
use ecco_ast::{
    child, create, create_marker, create_with_id, create_with_value, try_create, Accept, Args,
    BinaryOp, Echo, Elif, Else, Error, FuncDef, Ident, If, Node, NodeKind, NumLit, Params,
    ShapeError, Stat, StatKind, Stats, StrLit, Symbol, Tag, Tagged,
};

#[test]
fn test_binary_expression_of_two_literals() {
    let expr = num_expr(BinaryOp::Add, 3.0, 4.0);

    assert_eq!(expr.lhs(), Some(&Node::from(NumLit::new(3.0))));
    assert_eq!(expr.rhs(), Some(&Node::from(NumLit::new(4.0))));
    assert_eq!(expr.decode(), "+");

    let node = Node::from(expr);
    assert_eq!(node.kind(), NodeKind::Binary);
    assert_eq!(node.child(0).map(Node::kind), Some(NodeKind::Num));
}

#[test]
fn test_tag_decoding() {
    assert_eq!(Tag::new("++").decode(), "++");
    assert_eq!(Tag::new("a").decode(), "a");
    assert_eq!(Node::from(Ident::new(1)).decode(), "");
    assert_eq!(num_expr(BinaryOp::Concat, 1.0, 2.0).decode(), "++");
}

#[test]
fn test_prefix_filled_rest_absent() {
    let def = create::<FuncDef, 3, 1>([child(Ident::new(9))]);
    let node = Node::from(def);

    let mut filled = Vec::new();
    node.for_each_child(|c| filled.push(c.is_some()));
    assert_eq!(filled, [true, false, false]);
}

#[test]
fn test_explicit_absent_markers_keep_positions() {
    let stat = If::create([child(Ident::new(1)), None, child(Else::create([]))]);

    assert!(stat.condition().is_some());
    assert!(stat.then_branch().is_none());
    assert_eq!(stat.else_branch().map(Node::kind), Some(NodeKind::Stat(StatKind::Else)));
}

#[test]
fn test_if_visits_three_slots_without_else() {
    let node = Node::from(If::create([child(Ident::new(1)), child(Echo::create([]))]));

    let mut visits = 0;
    node.for_each_child(|_| visits += 1);
    assert_eq!(visits, 3);
    assert!(node.child(2).is_none());
}

#[test]
fn test_leaves_visit_nothing() {
    let leaves: [Node; 5] = [
        Ident::new(1).into(),
        NumLit::new(1.0).into(),
        StrLit::new(1).into(),
        Accept.into(),
        Error.into(),
    ];

    for leaf in &leaves {
        let mut visits = 0;
        leaf.for_each_child(|_| visits += 1);
        assert_eq!(visits, 0, "{}", leaf.kind());
    }
}

#[test]
fn test_markers_are_distinguishable() {
    let ok = Node::from(create_marker::<Accept>());
    let failed = Node::from(create_marker::<Error>());

    assert_eq!(ok.arity(), 0);
    assert_eq!(failed.arity(), 0);
    assert!(ok.is_accept() && !ok.is_error());
    assert!(failed.is_error() && !failed.is_accept());

    let outcome = |node: &Node| match node {
        Node::Accept(_) => "accepted",
        Node::Error(_) => "rejected",
        _ => "program",
    };
    assert_eq!(outcome(&ok), "accepted");
    assert_eq!(outcome(&failed), "rejected");
}

#[test]
fn test_payload_leaves() {
    let name: Ident = create_with_id(12u32);
    let text: StrLit = create_with_id(Symbol::new(4));
    let num: NumLit = create_with_value(-0.5);

    assert_eq!(name.id().as_u32(), 12);
    assert_eq!(text.id(), Symbol::new(4));
    assert_eq!(num.value(), -0.5);
}

#[test]
fn test_runtime_construction_rejects_overflow() {
    let children = vec![child(Ident::new(1)), child(Ident::new(2)), child(Ident::new(3))];
    let err = try_create::<Args, 2>(children).unwrap_err();

    assert_eq!(
        err,
        ShapeError::TooManyChildren {
            shape: NodeKind::Args,
            arity: 2,
            supplied: 3,
        }
    );
    assert_eq!(err.to_string(), "Args takes 2 children, 3 supplied");
}

#[test]
fn test_statement_built_from_keyword() {
    let kind = StatKind::from_keyword("echo").unwrap();
    let stat = Stat::build(kind, vec![child(NumLit::new(7.0))]).unwrap();

    let node = Node::from(stat);
    assert_eq!(node.decode(), "echo");
    assert_eq!(node.child(0), Some(&Node::from(NumLit::new(7.0))));

    assert!(Stat::build(StatKind::Elif, vec![None, None, None]).is_err());
}

#[test]
fn test_left_recursive_accumulation() {
    // The parser appends each new statement by patching the tail slot of
    // the last cell it built.
    let mut root = Node::from(Stats::create([common::echo_num(0.0)]));
    let mut cursor = &mut root;
    for i in 1..5 {
        let previous = cursor
            .set_child(1, child(Stats::create([common::echo_num(f64::from(i))])))
            .unwrap();
        assert!(previous.is_none());
        cursor = cursor.child_mut(1).unwrap();
    }

    let mut values = Vec::new();
    let mut cell = Some(&root);
    while let Some(node) = cell {
        let echo = node.child(0).unwrap();
        if let Some(Node::Num(num)) = echo.child(0) {
            values.push(num.value());
        }
        cell = node.child(1);
    }
    assert_eq!(values, [0.0, 1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_sample_program_shape() {
    let program = sample_program();

    let def = program.child(0).unwrap();
    assert_eq!(def.kind(), NodeKind::FuncDef);
    assert_eq!(def.child(1).map(Node::kind), Some(NodeKind::Params));

    let call_stat = program.child(1).and_then(|rest| rest.child(0)).unwrap();
    let call = call_stat.child(0).unwrap();
    assert_eq!(call.kind(), NodeKind::FuncCall);
    assert_eq!(call.child(1).map(Node::kind), Some(NodeKind::Args));
}

#[test]
fn test_error_marker_inside_tree() {
    let program = Node::from(Stats::create([
        common::echo_num(1.0),
        child(Stats::create([child(Error)])),
    ]));

    fn contains_error(node: &Node) -> bool {
        if node.is_error() {
            return true;
        }
        let mut found = false;
        node.for_each_child(|c| found |= c.is_some_and(contains_error));
        found
    }

    assert!(contains_error(&program));
    assert!(!contains_error(&common::stats_chain(3)));
}

#[test]
fn test_shape_constants_match_nodes() {
    use ecco_ast::Shape;

    assert_eq!(<If as Shape>::ARITY, 3);
    assert_eq!(<Elif as Shape>::TAG.decode(), "elif");
    assert_eq!(<Params as Shape>::KIND, NodeKind::Params);
    assert_eq!(<Accept as Shape>::ARITY, 0);
}
