//! Property checks over every branch shape and child count.
//!
//! These loops exercise each shape with every child count from zero to a few
//! past its arity, checking the slot layout or the rejection.

mod common;

use ecco_ast::{
    child, try_create, Args, Branch, Child, Echo, Elif, Else, FuncCall, FuncDef, Ident, If, Node,
    Params, Shape, ShapeError, Stats,
};

fn numbered_children(count: usize) -> Vec<Child> {
    (0..count).map(|i| child(Ident::new(i as u32))).collect()
}

fn check_shape<T, const N: usize>()
where
    T: Branch<N>,
{
    assert_eq!(T::ARITY, N, "{} declares the wrong arity", T::KIND);

    for supplied in 0..=N + 3 {
        match try_create::<T, N>(numbered_children(supplied)) {
            Ok(shape) => {
                assert!(supplied <= N, "{} accepted {supplied} children", T::KIND);

                let node: Node = shape.into();
                assert_eq!(node.arity(), N);
                assert_eq!(node.kind(), T::KIND);

                let mut index = 0;
                node.for_each_child(|c| {
                    match c {
                        Some(Node::Ident(ident)) => {
                            assert!(index < supplied);
                            assert_eq!(ident.id().as_usize(), index);
                        }
                        Some(other) => panic!("unexpected {} in slot {index}", other.kind()),
                        None => assert!(index >= supplied),
                    }
                    index += 1;
                });
                assert_eq!(index, N);
            }
            Err(err) => {
                assert!(supplied > N, "{} rejected {supplied} children", T::KIND);
                assert_eq!(
                    err,
                    ShapeError::TooManyChildren {
                        shape: T::KIND,
                        arity: N,
                        supplied,
                    }
                );
            }
        }
    }
}

#[test]
fn test_every_branch_shape() {
    check_shape::<Args, 2>();
    check_shape::<Params, 2>();
    check_shape::<FuncCall, 2>();
    check_shape::<FuncDef, 3>();
    check_shape::<Stats, 2>();
    check_shape::<Echo, 1>();
    check_shape::<If, 3>();
    check_shape::<Elif, 2>();
    check_shape::<Else, 1>();
}

#[test]
fn test_fresh_nodes_have_all_slots_absent() {
    let fresh: Vec<Node> = vec![
        Args::default().into(),
        Params::default().into(),
        FuncCall::default().into(),
        FuncDef::default().into(),
        Stats::default().into(),
        Echo::default().into(),
        If::default().into(),
        Elif::default().into(),
        Else::default().into(),
    ];

    for node in &fresh {
        assert_eq!(node.arity(), node.kind().arity());
        assert!(node.slots().iter().all(Option::is_none), "{}", node.kind());
    }
}

#[test]
fn test_slot_access_past_arity_is_rejected() {
    let mut nodes: Vec<Node> = vec![
        Ident::new(0).into(),
        Echo::default().into(),
        If::default().into(),
        FuncDef::default().into(),
    ];

    for node in &mut nodes {
        let arity = node.arity();
        for index in arity..arity + 3 {
            assert!(node.child(index).is_none());
            assert_eq!(
                node.set_child(index, None),
                Err(ShapeError::SlotOutOfRange {
                    shape: node.kind(),
                    arity,
                    index,
                })
            );
        }
        assert_eq!(node.arity(), arity);
    }
}

#[test]
fn test_chains_of_every_length() {
    for len in 1..50 {
        let chain = common::stats_chain(len);
        // Each cell holds an echo with a literal, plus the link to the next cell.
        assert_eq!(common::count_filled(&chain), 3 * len - 1);
    }
}
