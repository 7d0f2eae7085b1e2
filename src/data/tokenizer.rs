// ============================================================
// Layer 4 — Whitespace Tokenizer
// ============================================================
// Splits text into tokens: every maximal run of non-whitespace
// characters is one token. Nothing else — no punctuation
// stripping, no case folding, no Unicode normalisation. A word
// followed by a full stop ("રાજપુત્ર.") is a different token
// from the bare word.
//
// Two views of the same split:
//   tokenize()  — just the tokens, in order, duplicates kept
//   segments()  — tokens AND the whitespace runs between them,
//                 so a caller can rebuild the text exactly
//
// "Whitespace" is char::is_whitespace, the same definition
// str::split_whitespace uses, so the two views always agree.
//
// Reference: Rust Book §8 (Strings), §13 (Iterators)

/// A piece of the input text: either a token or the whitespace around it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Token(&'a str),
    Space(&'a str),
}

impl<'a> Segment<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Segment::Token(s) | Segment::Space(s) => s,
        }
    }
}

pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// All tokens of `text`, left to right, duplicates included.
    /// Returns an empty Vec for empty or whitespace-only text.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_whitespace().collect()
    }

    /// Split `text` into alternating token / whitespace segments.
    /// Concatenating every segment's text gives back `text` exactly.
    pub fn segments<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        let mut out      = Vec::new();
        let mut start    = 0usize;
        let mut in_space = None::<bool>;

        for (i, c) in text.char_indices() {
            let space = c.is_whitespace();
            match in_space {
                Some(prev) if prev != space => {
                    out.push(make_segment(&text[start..i], prev));
                    start = i;
                }
                _ => {}
            }
            in_space = Some(space);
        }

        if let Some(prev) = in_space {
            out.push(make_segment(&text[start..], prev));
        }

        out
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

fn make_segment(s: &str, space: bool) -> Segment<'_> {
    if space { Segment::Space(s) } else { Segment::Token(s) }
}
