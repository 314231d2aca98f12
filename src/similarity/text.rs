//! Text normalization shared by variant storage and query scoring.

use std::borrow::Cow;

/// Normalize text for comparison: trim, lowercase, and collapse whitespace
/// runs to a single ASCII space.
///
/// Returns the input unchanged (borrowed) when it is already normalized.
pub fn normalize(s: &str) -> Cow<'_, str> {
    if is_normalized(s) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    for word in s.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        for c in word.chars() {
            out.extend(c.to_lowercase());
        }
    }
    Cow::Owned(out)
}

fn is_normalized(s: &str) -> bool {
    let mut prev_space = true;
    for c in s.chars() {
        if c.is_whitespace() {
            // leading, doubled, or non-' ' whitespace
            if prev_space || c != ' ' {
                return false;
            }
            prev_space = true;
        } else {
            // titlecase letters such as 'ǅ' are not uppercase yet still fold
            if !c.to_lowercase().eq(std::iter::once(c)) {
                return false;
            }
            prev_space = false;
        }
    }
    // trailing space
    !(prev_space && !s.is_empty())
}

/// A normalized string with its tokens precomputed.
///
/// Variants are prepared once when the index is rebuilt and each query once
/// per batch, so scoring never re-normalizes inside the comparison loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedText {
    text: String,
    sorted_tokens: Vec<String>,
    sorted_joined: String,
}

impl PreparedText {
    pub fn new(raw: &str) -> Self {
        let text = normalize(raw).into_owned();
        let mut sorted_tokens: Vec<String> = text
            .split(' ')
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        sorted_tokens.sort_unstable();
        let sorted_joined = sorted_tokens.join(" ");
        Self {
            text,
            sorted_tokens,
            sorted_joined,
        }
    }

    /// The normalized text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whitespace tokens in lexical order (duplicates kept).
    pub fn sorted_tokens(&self) -> &[String] {
        &self.sorted_tokens
    }

    /// Sorted tokens joined by single spaces.
    pub fn sorted_joined(&self) -> &str {
        &self.sorted_joined
    }

    pub fn token_count(&self) -> usize {
        self.sorted_tokens.len()
    }
}
