//! Recursive-descent JSON parser.
//!
//! Single forward scan with no backtracking. The cursor always sits on the
//! next unconsumed byte: every production starts by inspecting `peek()` and
//! leaves `pos` one past the last byte it consumed.
//!
//! Deliberate limitations:
//! - string content is taken verbatim; the first `"` closes the string and
//!   backslash escapes are not interpreted
//! - an array's element rule is fixed by its first element, so `[1, "a"]`
//!   is rejected
//! - content after the top-level value is not inspected
//!
//! # Example
//!
//! ```
//! use jsontree_core::parse;
//!
//! let doc = parse(r#"{"name": "demo", "tags": [1, 2]}"#).unwrap();
//! assert_eq!(doc["tags"].size().unwrap(), 2);
//! ```

use phf::phf_map;

use crate::error::{ParseError, ParseErrorCode, Result};
use crate::value::{Array, Object, Value};

type PResult<T> = std::result::Result<T, ParseError>;

/// Parser limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum array/object nesting depth.
    pub max_depth: usize,
}

impl ParserConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 128;

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig { max_depth: Self::DEFAULT_MAX_DEPTH }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    Null,
    True,
    False,
}

static KEYWORDS: phf::Map<&'static str, Keyword> = phf_map! {
    "null" => Keyword::Null,
    "true" => Keyword::True,
    "false" => Keyword::False,
};

/// Grammar production selected by a lookahead byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    Object,
    Array,
    String,
    Boolean,
    Number,
    Null,
}

impl Rule {
    #[inline]
    fn for_lookahead(b: u8) -> Option<Rule> {
        match b {
            b'{' => Some(Rule::Object),
            b'[' => Some(Rule::Array),
            b'"' => Some(Rule::String),
            b't' | b'f' => Some(Rule::Boolean),
            b'0'..=b'9' | b'-' => Some(Rule::Number),
            b'n' => Some(Rule::Null),
            _ => None,
        }
    }
}

/// C-locale `isspace`: space, `\t`, `\n`, `\v`, `\f`, `\r`.
#[inline]
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

/// Parse a JSON document. The top-level value must be an array or object.
pub fn parse(text: &str) -> Result<Value> {
    Parser::new(text).parse_document()
}

/// Parse any single JSON value, including bare scalars.
///
/// ```
/// use jsontree_core::{parse_value, Value};
///
/// assert_eq!(parse_value("true").unwrap(), Value::Boolean(true));
/// ```
pub fn parse_value(text: &str) -> Result<Value> {
    Parser::new(text).parse_value()
}

/// Parser state over one input string.
#[derive(Debug)]
pub struct Parser<'a> {
    input: &'a str,
    pos: usize,
    depth: usize,
    config: ParserConfig,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, ParserConfig::default())
    }

    pub fn with_config(input: &'a str, config: ParserConfig) -> Self {
        Parser { input, pos: 0, depth: 0, config }
    }

    /// Byte offset of the next unconsumed byte.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Parse a document whose top-level value is an array or object.
    pub fn parse_document(&mut self) -> Result<Value> {
        log::trace!("parsing document ({} bytes)", self.input.len());
        self.depth = 0;
        self.skip_whitespace();
        let result = match self.peek() {
            Some(b'{') => self.parse_object(),
            Some(b'[') => self.parse_array(),
            Some(_) => Err(self.error(ParseErrorCode::NotAContainer)),
            None => Err(self.error(ParseErrorCode::UnexpectedEof)),
        };
        result.inspect_err(|e| log::debug!("parse failed: {e}")).map_err(Into::into)
    }

    /// Parse one value of any variant.
    pub fn parse_value(&mut self) -> Result<Value> {
        log::trace!("parsing value ({} bytes)", self.input.len());
        self.depth = 0;
        self.skip_whitespace();
        let result = self.lookahead_rule().and_then(|rule| self.parse_rule(rule));
        result.inspect_err(|e| log::debug!("parse failed: {e}")).map_err(Into::into)
    }

    // ------------------------------------------------------------------
    // Cursor
    // ------------------------------------------------------------------

    #[inline]
    fn bytes(&self) -> &'a [u8] {
        self.input.as_bytes()
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.bytes().get(self.pos).copied()
    }

    #[inline]
    fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            if !is_space(b) {
                break;
            }
            self.pos += 1;
        }
    }

    fn error(&self, code: ParseErrorCode) -> ParseError {
        self.error_at(code, self.pos)
    }

    fn error_at(&self, code: ParseErrorCode, offset: usize) -> ParseError {
        let found = self.input.get(offset..).and_then(|rest| rest.chars().next());
        ParseError::new(code, found, offset)
    }

    /// Consume `byte` or fail with `code`.
    fn expect(&mut self, byte: u8, code: ParseErrorCode) -> PResult<()> {
        match self.peek() {
            Some(b) if b == byte => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(self.error(code)),
        }
    }

    fn enter(&mut self) -> PResult<()> {
        if self.depth >= self.config.max_depth {
            return Err(self.error(ParseErrorCode::DepthExceeded));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    // ------------------------------------------------------------------
    // Productions
    // ------------------------------------------------------------------

    fn lookahead_rule(&self) -> PResult<Rule> {
        match self.peek() {
            Some(b) => Rule::for_lookahead(b).ok_or_else(|| self.error(ParseErrorCode::UnexpectedChar)),
            None => Err(self.error(ParseErrorCode::UnexpectedEof)),
        }
    }

    fn parse_rule(&mut self, rule: Rule) -> PResult<Value> {
        match rule {
            Rule::Object => self.parse_object(),
            Rule::Array => self.parse_array(),
            Rule::String => self.parse_string().map(Value::String),
            Rule::Boolean => self.parse_boolean(),
            Rule::Number => self.parse_number(),
            Rule::Null => self.parse_null(),
        }
    }

    /// Keyword at the cursor: the run of ASCII lowercase letters, looked up
    /// whole so `nul` and `truex` are both rejected.
    fn read_keyword(&self) -> Option<(Keyword, usize)> {
        let len = self.bytes()[self.pos..]
            .iter()
            .take_while(|b| b.is_ascii_lowercase())
            .count();
        let word = &self.input[self.pos..self.pos + len];
        KEYWORDS.get(word).map(|&keyword| (keyword, len))
    }

    fn parse_null(&mut self) -> PResult<Value> {
        match self.read_keyword() {
            Some((Keyword::Null, len)) => {
                self.pos += len;
                Ok(Value::Null)
            }
            _ => Err(self.error(ParseErrorCode::InvalidLiteral)),
        }
    }

    fn parse_boolean(&mut self) -> PResult<Value> {
        let (value, len) = match self.read_keyword() {
            Some((Keyword::True, len)) => (true, len),
            Some((Keyword::False, len)) => (false, len),
            _ => return Err(self.error(ParseErrorCode::InvalidLiteral)),
        };
        self.pos += len;
        Ok(Value::Boolean(value))
    }

    fn parse_number(&mut self) -> PResult<Value> {
        let rest = &self.bytes()[self.pos..];
        if rest.first() == Some(&b'-') && !rest.get(1).is_some_and(u8::is_ascii_digit) {
            return Err(self.error_at(ParseErrorCode::InvalidNumber, self.pos + 1));
        }

        match lexical_core::parse_partial::<f64>(rest) {
            Ok((n, consumed)) if consumed > 0 && n.is_finite() => {
                self.pos += consumed;
                Ok(Value::Number(n))
            }
            // out of f64 range: the scanner saturates to infinity
            Ok((n, _)) if n.is_infinite() => Err(ParseError {
                source: Some(lexical_core::Error::Overflow(0)),
                ..self.error(ParseErrorCode::InvalidNumber)
            }),
            Ok(_) => Err(self.error(ParseErrorCode::InvalidNumber)),
            Err(e) => {
                let offset = self.pos + e.index().copied().unwrap_or(0);
                Err(ParseError {
                    source: Some(e),
                    ..self.error_at(ParseErrorCode::InvalidNumber, offset)
                })
            }
        }
    }

    fn parse_string(&mut self) -> PResult<String> {
        self.expect(b'"', ParseErrorCode::UnexpectedChar)?;
        let start = self.pos;
        match memchr::memchr(b'"', &self.bytes()[start..]) {
            Some(len) => {
                let end = start + len;
                self.pos = end + 1;
                Ok(self.input[start..end].to_owned())
            }
            None => Err(self.error_at(ParseErrorCode::UnclosedString, self.input.len())),
        }
    }

    fn parse_array(&mut self) -> PResult<Value> {
        self.enter()?;
        self.expect(b'[', ParseErrorCode::UnexpectedChar)?;
        let mut items = Array::new();

        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.pos += 1;
            self.leave();
            return Ok(Value::Array(items));
        }

        let rule = self.lookahead_rule()?;
        loop {
            items.push(self.parse_rule(rule)?);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    self.skip_whitespace();
                    if self.lookahead_rule()? != rule {
                        return Err(self.error(ParseErrorCode::MixedArray));
                    }
                }
                Some(b']') => {
                    self.pos += 1;
                    break;
                }
                _ => return Err(self.error(ParseErrorCode::UnclosedArray)),
            }
        }

        self.leave();
        Ok(Value::Array(items))
    }

    fn parse_object(&mut self) -> PResult<Value> {
        self.enter()?;
        self.expect(b'{', ParseErrorCode::UnexpectedChar)?;
        let mut map = Object::new();

        self.skip_whitespace();
        if self.peek() == Some(b'}') {
            self.pos += 1;
            self.leave();
            return Ok(Value::Object(map));
        }

        loop {
            let key_code = if self.peek().is_some() {
                ParseErrorCode::ExpectedKey
            } else {
                ParseErrorCode::UnclosedObject
            };
            if self.peek() != Some(b'"') {
                return Err(self.error(key_code));
            }
            let key = self.parse_string()?;

            self.skip_whitespace();
            self.expect(b':', ParseErrorCode::ExpectedColon)?;
            self.skip_whitespace();

            let rule = self.lookahead_rule()?;
            let value = self.parse_rule(rule)?;
            map.insert(key, value);

            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    self.skip_whitespace();
                }
                Some(b'}') => {
                    self.pos += 1;
                    break;
                }
                _ => return Err(self.error(ParseErrorCode::UnclosedObject)),
            }
        }

        self.leave();
        Ok(Value::Object(map))
    }
}
