//! Application of the builtin functions, with their domain checks.

use crate::error::OutOfDomain;
use smartcalc_error::Error;
use smartcalc_parser::lexer::func::Func;
use std::ops::Range;

/// Applies a builtin function to its argument.
///
/// The inverse trigonometric functions `asin` and `acos` require an argument in `[-1, 1]`,
/// `sqrt` a non-negative one, and the logarithms a positive one; outside those ranges the
/// result would not be a real number and the call fails instead. `sin`, `cos`, `tan`, and
/// `atan` are defined everywhere.
pub fn apply(func: Func, value: f64, span: &Range<usize>) -> Result<f64, Error> {
    let out_of_domain =
        || Error::new(vec![span.clone()], OutOfDomain { name: func.name(), value });

    Ok(match func {
        Func::Sin => value.sin(),
        Func::Cos => value.cos(),
        Func::Tan => value.tan(),
        Func::Asin => {
            if !(-1.0..=1.0).contains(&value) {
                return Err(out_of_domain());
            }
            value.asin()
        },
        Func::Acos => {
            if !(-1.0..=1.0).contains(&value) {
                return Err(out_of_domain());
            }
            value.acos()
        },
        Func::Atan => value.atan(),
        Func::Sqrt => {
            if value < 0.0 {
                return Err(out_of_domain());
            }
            value.sqrt()
        },
        Func::Ln => {
            if value <= 0.0 {
                return Err(out_of_domain());
            }
            value.ln()
        },
        Func::Log => {
            if value <= 0.0 {
                return Err(out_of_domain());
            }
            value.log10()
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domains() {
        assert_eq!(apply(Func::Sqrt, 9.0, &(0..0)).unwrap(), 3.0);
        assert_eq!(apply(Func::Asin, 1.0, &(0..0)).unwrap(), std::f64::consts::FRAC_PI_2);
        assert!(apply(Func::Sqrt, -4.0, &(0..0)).is_err());
        assert!(apply(Func::Asin, 2.0, &(0..0)).is_err());
        assert!(apply(Func::Acos, -1.5, &(0..0)).is_err());
        assert!(apply(Func::Ln, 0.0, &(0..0)).is_err());
        assert!(apply(Func::Log, -1.0, &(0..0)).is_err());
        // tangent has no restriction, even at its poles
        assert!(apply(Func::Tan, std::f64::consts::FRAC_PI_2, &(0..0)).is_ok());
    }
}
