use ctl_rewrite::{
    eliminate_implications, fixpoint_with, reduce_to_minimal_basis, render, Formula,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn samples() -> Vec<Formula> {
    type F = Formula;
    vec![
        F::and(
            F::or(
                F::not(F::and("A", F::equivalence("B", "C"))),
                F::or(
                    F::not(F::implies("D", "E")),
                    F::and(F::not("F"), F::eu("G", "H")),
                ),
            ),
            F::and(
                F::ax(F::af("I")),
                F::eg(F::or(
                    F::and(F::not(F::implies("J", "K")), F::eu("L", F::ag("M"))),
                    F::and(
                        F::ef("N"),
                        F::au(F::or("O", F::eg("P")), F::equivalence("Q", F::not("R"))),
                    ),
                )),
            ),
        ),
        F::or(
            F::and(F::not(F::ax(F::or("A", "B"))), F::eu(F::eg("C"), F::ag(F::not("D")))),
            F::and(F::not(F::ef(F::implies("E", "F"))), F::ag(F::au("G", F::ef("H")))),
        ),
        F::or(
            F::and(F::ex(F::or("A", F::not("B"))), F::au(F::eg("C"), F::ef("D"))),
            F::and(F::not(F::eg(F::implies("E", "F"))), F::af(F::au("G", F::ef("H")))),
        ),
        F::and(
            F::or(
                F::not(F::ax(F::au("A", "B"))),
                F::au(F::eg(F::implies("C", "D")), F::ef(F::or("E", "F"))),
            ),
            F::and(
                F::not(F::eg(F::or("G", "H"))),
                F::ag(F::eu("I", F::equivalence("J", "K"))),
            ),
        ),
        F::ag(F::implies(F::ag(F::eu("x", F::af("y"))), F::implies("x", "z"))),
    ]
}

fn main() -> ctl_rewrite::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let reduce = fixpoint_with(reduce_to_minimal_basis, |before: &Formula, after: &Formula| {
        debug!(
            before = before.derived_count(),
            after = after.derived_count(),
            "reduction step"
        );
    });

    for f in samples() {
        println!("formula:    {}", render(&f)?);
        println!("no imp:     {}", render(&eliminate_implications(&f)?)?);
        println!("one pass:   {}", render(&reduce_to_minimal_basis(&f))?);
        println!("minimal:    {}", render(&reduce(f.clone()))?);
        println!();
    }
    Ok(())
}
