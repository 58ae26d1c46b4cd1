use super::lines::TokenLine;
use crate::DimacsError;

/// Parsed `p` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Format word such as `edge` or `col`, if the line has one.
    pub format: Option<String>,
    /// Number of vertices to create.
    pub vertices: usize,
    /// Declared number of edges. Only informative.
    pub edges: Option<usize>,
    /// Line the header was found on.
    pub line: usize,
}

impl Header {
    /// Accepts `p <format> <n> [<m>]` as well as the bare `p <n> [<m>]`.
    pub(crate) fn parse(line: &TokenLine) -> Result<Header, DimacsError> {
        if line.directive() != "p" {
            return Err(DimacsError::MalformedHeader {
                line: line.number,
                found: line.tokens.join(" "),
            });
        }

        let mut rest = line.tokens[1..].iter().map(String::as_str).peekable();
        let format = match rest.peek() {
            Some(t) if !t.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '+') => {
                rest.next().map(str::to_owned)
            }
            _ => None,
        };

        let Some(count) = rest.next() else {
            return Err(DimacsError::MissingToken {
                line: line.number,
                expected: "vertex count",
            });
        };
        let vertices = count
            .parse::<usize>()
            .map_err(|source| DimacsError::InvalidVertexCount {
                line: line.number,
                token: count.to_owned(),
                source,
            })?;
        let edges = rest.next().and_then(|m| m.parse::<usize>().ok());

        Ok(Header {
            format,
            vertices,
            edges,
            line: line.number,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str) -> TokenLine {
        TokenLine {
            number: 3,
            tokens: text.split_whitespace().map(str::to_owned).collect(),
        }
    }

    #[test]
    fn test_edge_format() {
        let header = Header::parse(&line("p edge 5 7")).unwrap();
        assert_eq!(header.format.as_deref(), Some("edge"));
        assert_eq!(header.vertices, 5);
        assert_eq!(header.edges, Some(7));
        assert_eq!(header.line, 3);
    }

    #[test]
    fn test_without_format_word() {
        let header = Header::parse(&line("p 4")).unwrap();
        assert_eq!(header.format, None);
        assert_eq!(header.vertices, 4);
        assert_eq!(header.edges, None);
    }

    #[test]
    fn test_not_a_header() {
        let err = Header::parse(&line("e 1 2")).unwrap_err();
        assert!(matches!(err, DimacsError::MalformedHeader { line: 3, ref found } if found == "e 1 2"));
    }

    #[test]
    fn test_bad_counts() {
        assert!(matches!(
            Header::parse(&line("p edge")).unwrap_err(),
            DimacsError::MissingToken { .. }
        ));
        assert!(matches!(
            Header::parse(&line("p edge x 2")).unwrap_err(),
            DimacsError::InvalidVertexCount { ref token, .. } if token == "x"
        ));
        assert!(matches!(
            Header::parse(&line("p edge -3 2")).unwrap_err(),
            DimacsError::InvalidVertexCount { ref token, .. } if token == "-3"
        ));
    }
}
