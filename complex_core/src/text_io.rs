//! # Text Input / Output
//!
//! Plain-text formatting and parsing for [`Complex`].
//!
//! ## Output
//!
//! `Display` writes `<re><sign><im>i`. The sign is `+` unless the imaginary
//! part is strictly negative, in which case the number's own `-` is used:
//!
//! ```rust
//! use complex_core::Complex;
//!
//! assert_eq!(Complex::new(3.0, -2.0).to_string(), "3-2i");
//! assert_eq!(Complex::new(3.0, 0.0).to_string(), "3+0i");
//! assert_eq!(format!("{:.2}", Complex::new(0.5, 1.0)), "0.50+1.00i");
//! ```
//!
//! ## Input
//!
//! Input is a real number, an imaginary number, and a trailing token that is
//! consumed and ignored (typically `i`). Each number is the longest numeric
//! prefix at the read position, so the parts need not be separated by
//! whitespace and text written by `Display` reads back:
//!
//! ```rust
//! use complex_core::Complex;
//!
//! let z: Complex = "3-2i".parse().unwrap();
//! assert_eq!((z.re, z.im), (3.0, -2.0));
//!
//! let w: Complex = "1 2 i".parse().unwrap();
//! assert_eq!((w.re, w.im), (1.0, 2.0));
//! ```
//!
//! - [`FromStr`] is strict and reports malformed text as [`ComplexError`].
//! - [`Complex::read_from`] follows stream-extraction rules: it reads from a
//!   [`TokenReader`], stops at the first bad or missing number, and leaves the
//!   parts it did not reach untouched.
//!
//! ```rust
//! use std::io::Cursor;
//! use complex_core::{Complex, Extraction, TokenReader};
//!
//! let mut tokens = TokenReader::new(Cursor::new("1 2 i\n-4+0.5i"));
//! let mut z = Complex::default();
//!
//! assert_eq!(z.read_from(&mut tokens).unwrap(), Extraction::Complete);
//! assert_eq!((z.re, z.im), (1.0, 2.0));
//!
//! z.read_from(&mut tokens).unwrap();
//! assert_eq!((z.re, z.im), (-4.0, 0.5));
//! ```

use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use log::{debug, trace};

use crate::complex::Complex;
use crate::errors::{ComplexError, ComplexResult};

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // NaN and -0.0 are "not less than zero" and get the explicit plus
        let sign = if self.im < 0.0 { "" } else { "+" };
        match f.precision() {
            Some(p) => write!(f, "{:.*}{}{:.*}i", p, self.re, sign, p, self.im),
            None => write!(f, "{}{}{}i", self.re, sign, self.im),
        }
    }
}

/// Character-level reader for numbers and whitespace-delimited tokens over
/// any buffered reader.
///
/// Input is pulled one line at a time; whatever is left of the line after a
/// read stays buffered for the next call, so consecutive extractions share one
/// stream. Numbers never span a line break.
pub struct TokenReader<R> {
    reader: R,
    line: String,
    pos: usize,
}

/// Result of scanning for a number at the read position.
enum Scan {
    Number(f64),
    /// Non-numeric text; nothing was consumed
    Malformed(String),
    End,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        TokenReader {
            reader,
            line: String::new(),
            pos: 0,
        }
    }

    /// Skip whitespace, refilling from the reader as needed. Returns `false`
    /// at end of input.
    fn skip_whitespace(&mut self) -> ComplexResult<bool> {
        loop {
            let rest = &self.line[self.pos..];
            let trimmed = rest.trim_start();
            self.pos += rest.len() - trimmed.len();
            if self.pos < self.line.len() {
                return Ok(true);
            }

            self.line.clear();
            self.pos = 0;
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(false);
            }
        }
    }

    /// Next whitespace-delimited token, or `None` at end of input.
    pub fn next_token(&mut self) -> ComplexResult<Option<String>> {
        if !self.skip_whitespace()? {
            return Ok(None);
        }
        let rest = &self.line[self.pos..];
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let token = rest[..end].to_owned();
        self.pos += end;
        trace!("token {:?}", token);
        Ok(Some(token))
    }

    fn scan_number(&mut self) -> ComplexResult<Scan> {
        if !self.skip_whitespace()? {
            return Ok(Scan::End);
        }
        let rest = &self.line[self.pos..];
        let len = number_prefix_len(rest);
        match rest[..len].parse::<f64>() {
            Ok(value) if len > 0 => {
                trace!("number {:?}", &rest[..len]);
                self.pos += len;
                Ok(Scan::Number(value))
            }
            _ => {
                let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
                Ok(Scan::Malformed(rest[..end].to_owned()))
            }
        }
    }
}

/// Length of the longest floating-point literal at the start of `text`:
/// optional sign, then `inf`/`infinity`/`nan` or digits with an optional
/// fraction and exponent. Zero when no number starts here.
fn number_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i = 1;
    }

    for word in ["infinity", "inf", "nan"] {
        let candidate = &bytes[i..];
        if candidate.len() >= word.len() && candidate[..word.len()].eq_ignore_ascii_case(word.as_bytes()) {
            return i + word.len();
        }
    }

    let digits = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut mantissa = digits(i);
    i += mantissa;
    if bytes.get(i) == Some(&b'.') {
        let fraction = digits(i + 1);
        mantissa += fraction;
        i += 1 + fraction;
    }
    if mantissa == 0 {
        return 0;
    }

    // an exponent only counts when it has digits
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exponent = digits(j);
        if exponent > 0 {
            i = j + exponent;
        }
    }
    i
}

/// Outcome of [`Complex::read_from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction {
    /// Real part, imaginary part and the trailing token were all consumed
    Complete,
    /// Extraction stopped early; `parts` of the two numbers were assigned
    Incomplete { parts: usize },
}

impl Extraction {
    pub fn is_complete(&self) -> bool {
        matches!(self, Extraction::Complete)
    }
}

impl Complex {
    /// Read `<re><im><ignored>` from a token stream into `self`.
    ///
    /// Malformed or missing input is not an error: extraction stops at the
    /// first number that is absent or unreadable, and any part not yet
    /// assigned keeps its previous value. Only failures of the underlying
    /// reader are returned as `Err`.
    pub fn read_from<R: BufRead>(&mut self, tokens: &mut TokenReader<R>) -> ComplexResult<Extraction> {
        let Some(re) = read_part(tokens, "re")? else {
            return Ok(Extraction::Incomplete { parts: 0 });
        };
        self.re = re;

        let Some(im) = read_part(tokens, "im")? else {
            return Ok(Extraction::Incomplete { parts: 1 });
        };
        self.im = im;

        match tokens.next_token()? {
            Some(suffix) => {
                trace!("ignoring trailing token {:?}", suffix);
                Ok(Extraction::Complete)
            }
            None => {
                debug!("input ended before trailing token");
                Ok(Extraction::Incomplete { parts: 2 })
            }
        }
    }

    /// Strict parse of `<re><im><ignored>`.
    pub fn parse_text(text: &str) -> ComplexResult<Complex> {
        text.parse()
    }
}

fn read_part<R: BufRead>(tokens: &mut TokenReader<R>, field: &str) -> ComplexResult<Option<f64>> {
    match tokens.scan_number()? {
        Scan::Number(value) => Ok(Some(value)),
        Scan::Malformed(token) => {
            debug!("'{}' token {:?} is not a number", field, token);
            Ok(None)
        }
        Scan::End => {
            debug!("input ended before '{}'", field);
            Ok(None)
        }
    }
}

fn parse_number<R: BufRead>(tokens: &mut TokenReader<R>, field: &str) -> ComplexResult<f64> {
    match tokens.scan_number()? {
        Scan::Number(value) => Ok(value),
        Scan::Malformed(token) => Err(ComplexError::invalid_input(field, token, "not a number")),
        Scan::End => Err(ComplexError::missing_field(field)),
    }
}

impl FromStr for Complex {
    type Err = ComplexError;

    fn from_str(s: &str) -> ComplexResult<Self> {
        let mut tokens = TokenReader::new(s.as_bytes());
        let re = parse_number(&mut tokens, "re")?;
        let im = parse_number(&mut tokens, "im")?;
        tokens
            .next_token()?
            .ok_or_else(|| ComplexError::missing_field("suffix"))?;
        if let Some(extra) = tokens.next_token()? {
            return Err(ComplexError::unexpected_token(extra));
        }
        Ok(Complex::new(re, im))
    }
}
