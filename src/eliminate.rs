use tracing::{debug, trace};

use crate::ctl::{Formula, Shape};
use crate::error::{Error, Result};
use crate::fixpoint::try_fixpoint_with;

/// Single pass of implication elimination
///
/// * `P => Q` becomes `-P | Q`
/// * `P <=> Q` becomes `(P => Q) & (Q => P)`
///
/// The implications introduced by the second rule are left in place, so the
/// result of one pass may still contain `Implies` nodes. Use
/// [`eliminate_implications_fully`] to remove them all.
///
/// Fails with `Error::UnrecognizedFormula` if a node cannot be rebuilt from its
/// operator tag, which the closed set of variants rules out.
pub fn eliminate_implications(f: &Formula) -> Result<Formula> {
    let z = eliminate_implications;
    match f {
        Formula::Implies(l, r) => Ok(Formula::or(Formula::not(z(l)?), z(r)?)),
        Formula::Equivalence(l, r) => {
            let (l, r) = (z(l)?, z(r)?);
            Ok(Formula::and(
                Formula::implies(l.clone(), r.clone()),
                Formula::implies(r, l),
            ))
        }
        _ => match f.shape() {
            Shape::Constant(_) | Shape::Atom(_) => Ok(f.clone()),
            Shape::Unary(op, x) => rebuild(f, Formula::unary(op, z(x)?)),
            Shape::Binary(op, l, r) => rebuild(f, Formula::binary(op, z(l)?, z(r)?)),
        },
    }
}

/// Repeat [`eliminate_implications`] until no `Implies` or `Equivalence` node remains
pub fn eliminate_implications_fully(f: &Formula) -> Result<Formula> {
    let run = try_fixpoint_with(eliminate_implications, |before: &Formula, after: &Formula| {
        trace!(
            before = before.implication_count(),
            after = after.implication_count(),
            "elimination step"
        );
    });
    let result = run(f.clone())?;
    debug!(
        before = f.implication_count(),
        after = result.implication_count(),
        "eliminated implications"
    );
    Ok(result)
}

fn rebuild(f: &Formula, rebuilt: Option<Formula>) -> Result<Formula> {
    // Only reachable if shape() and the builders disagree on an arity
    rebuilt.ok_or_else(|| Error::UnrecognizedFormula(format!("{:?}", f)))
}
