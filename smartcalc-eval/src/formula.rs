use crate::eval;
use smartcalc_error::Error;
use smartcalc_parser::rpn::Rpn;

/// An expression compiled once and evaluated as often as needed.
///
/// This is the path meant for plotting: the source is scanned and converted a single time, and
/// each sample point only re-runs the cheap postfix evaluation. A `Formula` is read-only after
/// construction, so it can be shared between threads behind a shared reference; it performs no
/// synchronization of its own.
#[derive(Debug, Clone)]
pub struct Formula {
    rpn: Rpn,
}

impl Formula {
    /// Compiles the given source expression.
    pub fn new(source: &str) -> Result<Formula, Error> {
        Ok(Formula { rpn: Rpn::compile(source)? })
    }

    /// Evaluates the formula with the given value for `x`.
    pub fn eval(&self, x: f64) -> Result<f64, Error> {
        eval::evaluate(&self.rpn, x)
    }

    /// Evaluates the formula at `n` evenly spaced values of `x` over `[x_min, x_max]`,
    /// inclusive of both ends, returning the sample positions and their values as parallel
    /// vectors.
    ///
    /// The first sample that fails to evaluate fails the whole call; partial plots are never
    /// returned.
    pub fn sample(&self, x_min: f64, x_max: f64, n: usize) -> Result<(Vec<f64>, Vec<f64>), Error> {
        let step = if n > 1 {
            (x_max - x_min) / (n - 1) as f64
        } else {
            0.0
        };

        let mut xs = Vec::with_capacity(n);
        let mut ys = Vec::with_capacity(n);
        for i in 0..n {
            let x = x_min + step * i as f64;
            xs.push(x);
            ys.push(self.eval(x)?);
        }

        Ok((xs, ys))
    }
}
