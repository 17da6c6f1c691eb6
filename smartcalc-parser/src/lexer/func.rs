/// The functions that can be called in an expression. Each takes exactly one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sqrt,
    Ln,

    /// Base-10 logarithm; the natural logarithm is [`Ln`](Func::Ln).
    Log,
}

impl Func {
    /// Resolves a keyword to its function, if there is one.
    pub fn from_keyword(name: &str) -> Option<Func> {
        match name {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "asin" => Some(Self::Asin),
            "acos" => Some(Self::Acos),
            "atan" => Some(Self::Atan),
            "sqrt" => Some(Self::Sqrt),
            "ln" => Some(Self::Ln),
            "log" => Some(Self::Log),
            _ => None,
        }
    }

    /// Returns the name of the function as it appears in the source.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sqrt => "sqrt",
            Self::Ln => "ln",
            Self::Log => "log",
        }
    }
}
