//! # fastjson-core
//!
//! A self-contained streaming JSON codec: a strict tokenizer and
//! recursive-descent parser that build an order-preserving [`Value`] tree,
//! and a canonical serializer that writes it back as compact JSON. Both
//! directions work over in-memory strings and over arbitrary
//! [`std::io::Read`]/[`std::io::Write`] endpoints.
//!
//! ## Quick start
//!
//! ```rust
//! use fastjson_core::{dumps, loads};
//!
//! let value = loads(r#"{"test": [1, "hello"]}"#).unwrap();
//! assert_eq!(dumps(&value).unwrap(), r#"{"test":[1,"hello"]}"#);
//! ```
//!
//! Integers and floats are distinct value cases, decided by the lexical
//! form of the source number and preserved end-to-end: `loads("12")` is an
//! integer, `loads("12.0")` a float, and each serializes back in its own
//! form. Integers carry arbitrary precision, so 19-digit (and longer)
//! numerals reproduce their exact digits.
//!
//! ## Modules
//!
//! - [`scanner`] — tokenizer over a character source
//! - [`parser`] — recursive-descent parser with an explicit depth guard
//! - [`value`] — the `Value` tree and its accessors
//! - [`serializer`] — compact canonical JSON output
//! - [`stream`] — source/sink adaptation and incremental UTF-8 decoding
//! - [`convert`] — host-value conversions and mapping-key coercion
//! - [`error`] — the error type shared by all of the above

pub mod convert;
pub mod error;
pub mod parser;
pub mod scanner;
pub mod serializer;
pub mod stream;
pub mod value;

pub use convert::{from_value, object_from_pairs, to_value, MapKey};
pub use error::{JsonError, Result};
pub use value::Value;

use stream::CharSource;

/// Maximum nesting depth for arrays/objects, enforced with an explicit
/// counter on both parse and serialize so overly deep data fails with
/// [`JsonError::DepthLimit`] instead of exhausting the call stack.
pub const MAX_DEPTH: usize = 512;

/// Parse a complete in-memory JSON document.
///
/// The whole input must be consumed: content after the first value is an
/// error, as is an empty or whitespace-only string.
pub fn loads(text: &str) -> Result<Value> {
    parser::parse_source(CharSource::from_str(text))
}

/// Serialize a value to a compact JSON string.
///
/// Fails with [`JsonError::InvalidFloat`] for floats that have no JSON
/// representation (NaN, the infinities, negative zero).
pub fn dumps(value: &Value) -> Result<String> {
    serializer::to_string(value)
}

/// Parse a complete JSON document from a readable endpoint.
///
/// Bytes are decoded as UTF-8 incrementally; the endpoint is never closed
/// and is read only as far as the document requires. An endpoint that
/// yields no data at all fails with [`JsonError::Exhausted`] before any
/// parsing begins; a failing read surfaces as [`JsonError::Io`].
pub fn load<R: std::io::Read>(mut reader: R) -> Result<Value> {
    let mut source = CharSource::from_reader(&mut reader);
    if source.peek()?.is_none() {
        return Err(JsonError::Exhausted);
    }
    parser::parse_source(source)
}

/// Serialize a value to a writable endpoint as compact JSON.
///
/// The endpoint is never closed or flushed. On failure the bytes already
/// written are unspecified; serialize to a buffer first if atomicity
/// matters.
pub fn dump<W: std::io::Write>(value: &Value, writer: W) -> Result<()> {
    serializer::to_writer(writer, value)
}
