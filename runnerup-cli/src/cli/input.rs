//! Parser for the whitespace-separated graph format.
//!
//! The first two tokens are the vertex count `n` and edge count `m`; the
//! next `3m` tokens are `u v w` triples. Line breaks carry no meaning beyond
//! the line numbers reported in errors.

use runnerup_core::GraphInput;

use super::CliError;

/// Parses `text` into a [`GraphInput`].
///
/// Vertex ids are only checked for being non-negative integers here; range
/// checks against `n` happen in the core.
pub(super) fn parse_graph(text: &str) -> Result<GraphInput, CliError> {
    let mut tokens = Tokens::new(text);
    let vertex_count: usize = tokens.next_value("vertex count")?;
    let edge_count: usize = tokens.next_value("edge count")?;

    let mut triples = Vec::new();
    for index in 0..edge_count {
        let u: usize = tokens.next_value(&format!("first endpoint of edge {}", index + 1))?;
        let v: usize = tokens.next_value(&format!("second endpoint of edge {}", index + 1))?;
        let w: i64 = tokens.next_value(&format!("weight of edge {}", index + 1))?;
        triples.push((u, v, w));
    }

    if let Some((line, token)) = tokens.inner.next() {
        return Err(CliError::Parse {
            line,
            reason: format!("unexpected trailing token `{token}` after {edge_count} edges"),
        });
    }
    Ok(GraphInput::new(vertex_count, triples))
}

/// Tokens paired with their 1-based line numbers.
struct Tokens<'a> {
    inner: std::vec::IntoIter<(usize, &'a str)>,
    last_line: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        let tokens: Vec<(usize, &'a str)> = text
            .lines()
            .enumerate()
            .flat_map(|(index, line)| {
                line.split_whitespace()
                    .map(move |token| (index + 1, token))
            })
            .collect();
        Self {
            inner: tokens.into_iter(),
            last_line: text.lines().count().max(1),
        }
    }

    fn next_value<T: std::str::FromStr>(&mut self, expected: &str) -> Result<T, CliError> {
        let Some((line, token)) = self.inner.next() else {
            return Err(CliError::Parse {
                line: self.last_line,
                reason: format!("unexpected end of input, expected {expected}"),
            });
        };
        token.parse().map_err(|_| CliError::Parse {
            line,
            reason: format!("expected {expected}, found `{token}`"),
        })
    }
}
