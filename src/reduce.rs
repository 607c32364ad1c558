use tracing::debug;

use crate::ctl::{Formula, Shape};
use crate::eliminate::eliminate_implications;
use crate::fixpoint::fixpoint;

/// Single pass of reduction to the minimal basis {-, &, |, EX, EU, AU}
///
/// * `EF f = T EU f`
/// * `AF f = T AU f`
/// * `EG f = -AF-f`
/// * `AG f = -EF-f`
/// * `AX f = -EX-f`
///
/// Operands are reduced before the outer rule is applied, but the `AF`/`EF`
/// introduced for `EG`/`AG` are not, and implications only get their operands
/// run through implication elimination. [`reduce_fully`] repeats the pass
/// until none of these remain.
///
/// Nodes that cannot be rebuilt are passed through unchanged: unlike
/// implication elimination, this pass never fails.
pub fn reduce_to_minimal_basis(f: &Formula) -> Formula {
    let z = reduce_to_minimal_basis;
    match f {
        Formula::EF(x) => Formula::eu(Formula::True, z(x)),
        Formula::AF(x) => Formula::au(Formula::True, z(x)),
        Formula::EG(x) => Formula::not(Formula::af(Formula::not(z(x)))),
        Formula::AG(x) => Formula::not(Formula::ef(Formula::not(z(x)))),
        Formula::AX(x) => Formula::not(Formula::ex(Formula::not(z(x)))),
        Formula::Implies(..) | Formula::Equivalence(..) => {
            eliminate_implications(f).unwrap_or_else(|_| f.clone())
        }
        _ => match f.shape() {
            Shape::Constant(_) | Shape::Atom(_) => f.clone(),
            Shape::Unary(op, x) => Formula::unary(op, z(x)).unwrap_or_else(|| f.clone()),
            Shape::Binary(op, l, r) => {
                Formula::binary(op, z(l), z(r)).unwrap_or_else(|| f.clone())
            }
        },
    }
}

/// Repeat [`reduce_to_minimal_basis`] until the formula stops changing
///
/// The result contains no EF, AF, EG, AG, AX, implication or equivalence.
pub fn reduce_fully(f: &Formula) -> Formula {
    let run = fixpoint(reduce_to_minimal_basis);
    let result = run(f.clone());
    debug!(
        before = f.derived_count(),
        after = result.derived_count(),
        size = result.size(),
        "reduced to minimal basis"
    );
    result
}
