//! jsontree core
//!
//! Owned JSON value tree with a recursive-descent parser and a text
//! serializer.
//!
//! # Architecture
//!
//! - **value.rs** - `Value` sum type, `JsonType` tag, constructors
//! - **access.rs** - typed access, indexing, size/length, conversions
//! - **parser.rs** - recursive-descent parser over `&str`
//! - **serializer.rs** - compact and tab-indented text output
//! - **error.rs** - `Error`, `ParseError`, `ParseErrorCode`
//!
//! # Example
//!
//! ```
//! use jsontree_core::{parse, Value};
//!
//! let mut data = parse(r#"{"test": {"number": 45.54545}, "boolean": true}"#).unwrap();
//! assert_eq!(*data["test"]["number"].get::<f64>().unwrap(), 45.54545);
//!
//! data["list"] = Value::from(vec![Value::from(1), Value::from(2)]);
//! assert_eq!(data.size().unwrap(), 3);
//! ```

pub mod access;
pub mod error;
pub mod parser;
pub mod serializer;
pub mod value;

pub use access::Payload;
pub use error::{Error, ParseError, ParseErrorCode, Result};
pub use parser::{parse, parse_value, Parser, ParserConfig};
pub use serializer::{to_text, Indent};
pub use value::{Array, JsonType, Object, Value};
