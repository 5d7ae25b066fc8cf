use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// Indicates a matrix built from rows whose lengths disagree with the row count.
    NonSquareMatrix,

    /// Indicates an edge endpoint that exceeds the vertex count (N).
    NodeIndexOutOfBounds(usize),

    /// Indicates a single-source vertex outside `[0, n)`.
    SourceOutOfBounds(usize),

    /// A sampled semiring law check failed; carries the name of the violated law.
    SemiringLawViolation(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NonSquareMatrix => write!(f, "Weight matrix is not square."),

            Error::NodeIndexOutOfBounds(n) => write!(f, "Node index {} is out of bounds.", n),

            Error::SourceOutOfBounds(s) => {
                write!(f, "Source vertex {} is outside the vertex range.", s)
            }

            Error::SemiringLawViolation(law) => {
                write!(f, "Semiring law check failed: {}.", law)
            }
        }
    }
}

impl std::error::Error for Error {}
