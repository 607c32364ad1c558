//! Rewriting of CTL (Computation Tree Logic) formulas
//!
//! Formulas are plain trees built with the constructors on [`Formula`].
//! Three passes are provided: rendering, elimination of implications and
//! equivalences, and reduction to the minimal basis {-, &, |, EX, EU, AU}.
//! The rewriting passes work one step at a time; the `*_fully` variants drive
//! them to a fixpoint.

pub mod ctl;
pub mod eliminate;
pub mod error;
pub mod fixpoint;
pub mod printer;
pub mod reduce;

pub use ctl::{symbol_of, Arity, Formula, Operator, Shape};
pub use eliminate::{eliminate_implications, eliminate_implications_fully};
pub use error::{Error, Result};
pub use fixpoint::{fixpoint, fixpoint_with, try_fixpoint, try_fixpoint_with};
pub use printer::render;
pub use reduce::{reduce_fully, reduce_to_minimal_basis};
