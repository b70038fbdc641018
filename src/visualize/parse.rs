//! Reader for the DOT subset produced by [`Graph`]'s `Display` impl.
//!
//! Accepts one statement per line: `ID;` for nodes and
//! `ID -> ID [ label=ID ];` for edges. Identifiers are double-quoted
//! strings with backslash escapes, or bare words of letters, digits, `_`
//! and `.`. The trailing semicolon and the attribute list are optional.
//! Inside quotes, `\n` and `\r` stand for line breaks and any other escaped
//! character stands for itself.
//!
//! The header `digraph [NAME] {` and the closing `}` must each sit on their
//! own line; single-line graphs such as `digraph { a; }` are rejected.

use super::error::VisualizeError;
use super::graph::{Edge, Graph};

/// Parse a graph description back into a [`Graph`].
///
/// # Example
///
/// ```rust
/// use waypoint::visualize::parse_dot;
///
/// let graph = parse_dot("digraph {\n\ta;\n\ta -> b [ label=\"go\" ];\n}\n").unwrap();
///
/// assert_eq!(graph.nodes, vec!["a"]);
/// assert_eq!(graph.edges[0].label, "go");
/// ```
pub fn parse_dot(input: &str) -> Result<Graph, VisualizeError> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(index, text)| Line {
            number: index + 1,
            rest: text,
        })
        .filter(|line| !line.rest.trim().is_empty());

    let mut header = lines.next().ok_or(VisualizeError::Parse {
        line: 1,
        message: "empty graph description".to_string(),
    })?;
    header.keyword("digraph")?;
    if !header.peek("{") {
        header.id()?;
    }
    header.expect("{")?;
    header.finish()?;

    let mut graph = Graph::default();
    let mut closed = false;

    for mut line in lines {
        if closed {
            return Err(line.error("content after closing brace"));
        }
        if line.eat("}") {
            line.finish()?;
            closed = true;
            continue;
        }

        let from = line.id()?;
        if line.eat("->") {
            let to = line.id()?;
            let label = line.attributes()?.unwrap_or_default();
            graph.edges.push(Edge { from, to, label });
        } else if !graph.nodes.contains(&from) {
            graph.nodes.push(from);
        }
        line.eat(";");
        line.finish()?;
    }

    if !closed {
        return Err(VisualizeError::Parse {
            line: input.lines().count(),
            message: "missing closing brace".to_string(),
        });
    }

    Ok(graph)
}

struct Line<'a> {
    number: usize,
    rest: &'a str,
}

impl Line<'_> {
    fn error(&self, message: impl Into<String>) -> VisualizeError {
        VisualizeError::Parse {
            line: self.number,
            message: message.into(),
        }
    }

    fn peek(&mut self, token: &str) -> bool {
        self.rest = self.rest.trim_start();
        self.rest.starts_with(token)
    }

    fn eat(&mut self, token: &str) -> bool {
        let found = self.peek(token);
        if found {
            self.rest = &self.rest[token.len()..];
        }
        found
    }

    fn expect(&mut self, token: &str) -> Result<(), VisualizeError> {
        if self.eat(token) {
            Ok(())
        } else {
            Err(self.error(format!("expected `{token}`")))
        }
    }

    /// Like `expect`, but the token must not run on into an identifier.
    fn keyword(&mut self, token: &str) -> Result<(), VisualizeError> {
        self.expect(token)?;
        match self.rest.chars().next() {
            Some(c) if c.is_alphanumeric() || c == '_' || c == '.' => {
                Err(self.error(format!("expected whitespace or `{{` after `{token}`")))
            }
            _ => Ok(()),
        }
    }

    fn finish(&mut self) -> Result<(), VisualizeError> {
        self.rest = self.rest.trim_start();
        if self.rest.is_empty() {
            Ok(())
        } else {
            Err(self.error(format!("unexpected `{}`", self.rest)))
        }
    }

    fn id(&mut self) -> Result<String, VisualizeError> {
        self.rest = self.rest.trim_start();

        if let Some(quoted) = self.rest.strip_prefix('"') {
            let mut id = String::new();
            let mut chars = quoted.char_indices();
            while let Some((index, c)) = chars.next() {
                match c {
                    '\\' => match chars.next() {
                        Some((_, 'n')) => id.push('\n'),
                        Some((_, 'r')) => id.push('\r'),
                        Some((_, escaped)) => id.push(escaped),
                        None => break,
                    },
                    '"' => {
                        self.rest = &quoted[index + 1..];
                        return Ok(id);
                    }
                    _ => id.push(c),
                }
            }
            return Err(self.error("unterminated string"));
        }

        let end = self
            .rest
            .find(|c: char| !(c.is_alphanumeric() || c == '_' || c == '.'))
            .unwrap_or(self.rest.len());
        if end == 0 {
            return Err(self.error("expected identifier"));
        }
        let (id, rest) = self.rest.split_at(end);
        self.rest = rest;
        Ok(id.to_string())
    }

    /// Parse an optional `[ key=value, ... ]` list, returning the label.
    fn attributes(&mut self) -> Result<Option<String>, VisualizeError> {
        if !self.eat("[") {
            return Ok(None);
        }

        let mut label = None;
        while !self.eat("]") {
            let key = self.id()?;
            self.expect("=")?;
            let value = self.id()?;
            if key == "label" {
                label = Some(value);
            }
            self.eat(",");
        }
        Ok(label)
    }
}
