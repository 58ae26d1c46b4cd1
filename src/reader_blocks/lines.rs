use std::io::{self, BufRead};

/// One non-blank, non-comment input line split on whitespace.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TokenLine {
    /// 1-based physical line number.
    pub number: usize,
    pub tokens: Vec<String>,
}

impl TokenLine {
    pub fn directive(&self) -> &str {
        // substantive lines always have at least one token
        &self.tokens[0]
    }

    pub fn token(&self, i: usize) -> Option<&str> {
        self.tokens.get(i).map(String::as_str)
    }
}

/// `c` and `%...` lines are comments, as are lines with no tokens at all.
pub(crate) fn is_skippable(first: Option<&str>) -> bool {
    match first {
        None => true,
        Some(t) => t == "c" || t.starts_with('%'),
    }
}

/// Pulls lines from a buffered stream and hands out the substantive ones.
pub(crate) struct LineSource<R> {
    inner: R,
    buf: String,
    line: usize,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(inner: R) -> Self {
        LineSource {
            inner,
            buf: String::new(),
            line: 0,
        }
    }

    /// Skips blank and comment lines. `Ok(None)` means the stream is exhausted.
    pub fn next_line(&mut self) -> io::Result<Option<TokenLine>> {
        loop {
            self.buf.clear();
            if self.inner.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;

            let mut tokens = self.buf.split_whitespace().peekable();
            if is_skippable(tokens.peek().copied()) {
                continue;
            }
            return Ok(Some(TokenLine {
                number: self.line,
                tokens: tokens.map(str::to_owned).collect(),
            }));
        }
    }
}
