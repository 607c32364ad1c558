use std::fmt;

use tracing::trace;

use crate::ctl::{Formula, Shape};
use crate::error::Result;

/// Render a formula: prefix unary operators, fully parenthesized binary ones
///
/// `-x`, `(x & y)`, `EX(a EU b)`, ... Atoms are written as their name, even
/// an empty one.
pub fn render(f: &Formula) -> Result<String> {
    trace!(formula = ?f, "render");
    Ok(f.to_string())
}

impl Formula {
    pub fn render(&self) -> Result<String> {
        render(self)
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.shape() {
            Shape::Constant(op) => f.write_str(op.symbol()),
            Shape::Atom(name) => f.write_str(name),
            Shape::Unary(op, x) => write!(f, "{}{}", op.symbol(), x),
            Shape::Binary(op, l, r) => write!(f, "({} {} {})", l, op.symbol(), r),
        }
    }
}
