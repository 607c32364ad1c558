#![allow(dead_code)]


use ctl_rewrite::{Formula, Operator};
use proptest::prelude::*;

const UNARY: [Operator; 7] = [
    Operator::Not,
    Operator::EX,
    Operator::AX,
    Operator::EG,
    Operator::AG,
    Operator::EF,
    Operator::AF,
];

const BINARY: [Operator; 6] = [
    Operator::And,
    Operator::Or,
    Operator::Implies,
    Operator::Equivalence,
    Operator::EU,
    Operator::AU,
];

/// Formulas over the atoms p, q and r using every operator, nested at most four deep
pub fn arb_formula() -> impl Strategy<Value = Formula> {
    let leaf = prop_oneof![
        1 => Just(Formula::True),
        1 => Just(Formula::False),
        4 => prop::sample::select(vec!["p", "q", "r"]).prop_map(Formula::atom),
    ];
    leaf.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (prop::sample::select(UNARY.to_vec()), inner.clone())
                .prop_map(|(op, f)| Formula::unary(op, f).unwrap()),
            (prop::sample::select(BINARY.to_vec()), inner.clone(), inner)
                .prop_map(|(op, l, r)| Formula::binary(op, l, r).unwrap()),
        ]
    })
}
