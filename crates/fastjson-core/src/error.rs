//! Error types for parsing, serialization, and stream adaptation.

use num_bigint::BigInt;
use thiserror::Error;

/// Errors raised by the codec.
///
/// Variants fall into three families, which host bindings map onto their
/// native exception classes:
///
/// - malformed JSON text, with the offset where the violation was found
///   (`Syntax`);
/// - a document or value tree nested past the recursion bound
///   (`DepthLimit`);
/// - a well-shaped input in an unusable state: a float with no JSON
///   representation, an integer that cannot cross an interop boundary, a
///   stream that is empty, undecodable, or failing (`InvalidFloat`,
///   `IntOutOfRange`, `Utf8`, `Exhausted`, `Io`).
#[derive(Error, Debug)]
pub enum JsonError {
    /// The input is not valid JSON. `offset` counts Unicode scalar values
    /// from the start of the document.
    #[error("syntax error at offset {offset}: {message}")]
    Syntax { offset: usize, message: String },

    /// Arrays/objects nested deeper than the supported bound.
    #[error("maximum nesting depth of {0} exceeded")]
    DepthLimit(usize),

    /// NaN, an infinity, or negative zero was asked to serialize.
    #[error("float value {0} has no JSON representation")]
    InvalidFloat(f64),

    /// An integer too large for the target number representation.
    #[error("integer {0} does not fit the target number representation")]
    IntOutOfRange(BigInt),

    /// The input stream did not decode as UTF-8.
    #[error("invalid UTF-8 in input at offset {offset}")]
    Utf8 { offset: usize },

    /// A readable endpoint produced no data at the moment of the call.
    #[error("stream is empty or exhausted")]
    Exhausted,

    /// The underlying endpoint failed to read or write.
    #[error("stream error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, JsonError>;
