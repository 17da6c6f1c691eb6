//! Evaluation of compiled math expressions.
//!
//! The front end ([`smartcalc_parser`]) compiles a source string into postfix order; this
//! crate runs the result on an operand stack, with IEEE-754 double-precision semantics and
//! domain checks on `/`, `mod`, and the builtin functions.
//!
//! One-shot callers use [`calculate`]; callers that evaluate the same expression many times,
//! such as a plotting loop, compile a [`Formula`] once and call [`Formula::eval`] or
//! [`Formula::sample`] per point.

pub mod error;
pub mod eval;
pub mod formula;
mod funcs;

pub use eval::evaluate;
pub use formula::Formula;
pub use smartcalc_error::Error;

/// Evaluates the expression once with the given value for `x`.
///
/// Every call scans, converts, and evaluates from scratch; compile a [`Formula`] to reuse the
/// compiled form instead.
pub fn calculate(source: &str, x: f64) -> Result<f64, Error> {
    Formula::new(source)?.eval(x)
}
