use num_bigint::BigUint;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid base {0:?}: expected an integer between 2 and 36")]
    InvalidBase(String),

    #[error("invalid digit {digit:?} at position {position} for base {radix}")]
    InvalidDigit {
        digit: char,
        position: usize,
        radix: u32,
    },

    #[error("empty value string")]
    EmptyValue,

    #[error("invalid threshold k = {k} for {n} shares")]
    InvalidThreshold { k: usize, n: usize },

    #[error("insufficient points: need {needed}, got {available}")]
    InsufficientPoints { needed: usize, available: usize },

    #[error("duplicate abscissa x = {x}")]
    DuplicateAbscissa { x: BigUint },

    #[error("singular system{}", at_column(.column))]
    SingularSystem { column: Option<usize> },

    #[error("division by zero")]
    DivisionByZero,

    #[error("interpolation methods disagree on the secret")]
    MethodsDisagree,

    #[error("share {key:?} is not a value/base record: {reason}")]
    MalformedShare { key: String, reason: String },
}

fn at_column(column: &Option<usize>) -> String {
    match column {
        Some(c) => format!(" at column {c}"),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, Error>;
