use std::fmt;

/// The value a scanned token can carry alongside its lexeme. Only `NUMBER`
/// and `STRING` tokens ever have one; every other token's `literal` is
/// `None`.
#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Number(f64),
    String(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{n}"),
            Literal::String(s) => write!(f, "{s}"),
        }
    }
}
