//! Placeholder substitution for `{{TOKEN}}` markers in asset text.
//!
//! The renderer is deliberately tiny: tokens are plain names compared
//! exactly, there are no expressions or loops. Tokens without a substitution
//! are copied to the output verbatim, delimiters included.
//!
//! ```
//! use blinkhub_domain::template::{Substitutions, render};
//!
//! let subs = Substitutions::new().with("LED_STATE", "ON");
//! let out = render(b"<p>LED is {{LED_STATE}}</p>", &subs).unwrap();
//! assert_eq!(out, b"<p>LED is ON</p>");
//! ```

use std::collections::HashMap;

use crate::error::RenderError;

/// Opening token delimiter.
pub const OPEN: &[u8] = b"{{";
/// Closing token delimiter.
pub const CLOSE: &[u8] = b"}}";

/// Mapping from token name to replacement text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitutions {
    values: HashMap<String, String>,
}

impl Substitutions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, token: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(token, text);
        self
    }

    /// Set the replacement for `token`, overwriting any previous value.
    pub fn insert(&mut self, token: impl Into<String>, text: impl Into<String>) {
        self.values.insert(token.into(), text.into());
    }

    /// Replacement text for the token named by `name`, if any.
    #[must_use]
    pub fn get(&self, name: &[u8]) -> Option<&str> {
        let name = std::str::from_utf8(name).ok()?;
        self.values.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One piece of the output, in order.
enum Piece<'a> {
    Literal(&'a [u8]),
    Replacement(&'a str),
}

impl Piece<'_> {
    fn len(&self) -> usize {
        match self {
            Self::Literal(bytes) => bytes.len(),
            Self::Replacement(text) => text.len(),
        }
    }

    fn bytes(&self) -> &[u8] {
        match self {
            Self::Literal(bytes) => bytes,
            Self::Replacement(text) => text.as_bytes(),
        }
    }
}

/// Render `input`, substituting every known token.
///
/// The output buffer is reserved once at its exact final size,
/// `input.len() - removed_token_bytes + replacement_bytes`.
///
/// # Errors
///
/// Returns [`RenderError::AllocationFailure`] if the output buffer cannot be
/// reserved. `input` is only borrowed, so it is untouched in that case.
pub fn render(input: &[u8], substitutions: &Substitutions) -> Result<Vec<u8>, RenderError> {
    let pieces = scan(input, substitutions);
    let requested = pieces
        .iter()
        .try_fold(0usize, |total, piece| total.checked_add(piece.len()))
        .ok_or(RenderError::AllocationFailure {
            requested: usize::MAX,
        })?;

    let mut output = Vec::new();
    output
        .try_reserve_exact(requested)
        .map_err(|_| RenderError::AllocationFailure { requested })?;
    for piece in &pieces {
        output.extend_from_slice(piece.bytes());
    }
    debug_assert_eq!(output.len(), requested);
    Ok(output)
}

/// Single left-to-right pass splitting `input` into output pieces.
///
/// Each `}}` closes the nearest `{{` before it, so `x={{{LED_STATE}}}` yields
/// `x={`, the replacement and `}`. The cursor only moves forward.
fn scan<'a>(input: &'a [u8], substitutions: &'a Substitutions) -> Vec<Piece<'a>> {
    let mut pieces = Vec::new();
    let mut literal_start = 0;
    let mut cursor = 0;

    while let Some(first_open) = find(&input[cursor..], OPEN).map(|at| cursor + at) {
        let Some(close) = find(&input[first_open + OPEN.len()..], CLOSE)
            .map(|at| first_open + OPEN.len() + at)
        else {
            break;
        };
        let open = rfind(&input[first_open..close], OPEN).map_or(first_open, |at| first_open + at);
        if let Some(text) = substitutions.get(&input[open + OPEN.len()..close]) {
            if literal_start < open {
                pieces.push(Piece::Literal(&input[literal_start..open]));
            }
            pieces.push(Piece::Replacement(text));
            literal_start = close + CLOSE.len();
        }
        cursor = close + CLOSE.len();
    }

    if literal_start < input.len() {
        pieces.push(Piece::Literal(&input[literal_start..]));
    }
    pieces
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn rfind(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .rposition(|window| window == needle)
}
