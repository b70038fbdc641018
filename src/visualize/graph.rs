//! Directed-graph view of a machine's transition table.

use crate::core::State;
use crate::machine::Fsm;
use std::fmt;

/// One labelled edge: a transition from one of its origins to its
/// destination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub label: String,
}

/// Nodes and edges of a machine, by state and transition name.
///
/// Renders as DOT through [`Display`](fmt::Display): one node statement per
/// line, a blank line, then one edge statement per origin/destination pair.
///
/// # Example
///
/// ```rust
/// use waypoint::core::Transition;
/// use waypoint::machine::Fsm;
/// use waypoint::visualize::Graph;
///
/// let fsm = Fsm::new("locked")
///     .set_transitions([Transition::new("coin", ["locked"], "unlocked")]);
///
/// let dot = Graph::from_fsm(&fsm).to_string();
/// assert!(dot.contains("\"locked\" -> \"unlocked\" [ label=\"coin\" ];"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    pub nodes: Vec<String>,
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Read the graph off a machine's query surface.
    ///
    /// Nodes follow [`Fsm::all_states`]; edges follow transitions in name
    /// order, one per origin.
    pub fn from_fsm<S: State>(fsm: &Fsm<S>) -> Self {
        let nodes = fsm
            .all_states()
            .into_iter()
            .map(|state| state.name().to_string())
            .collect();

        let edges = fsm
            .transitions()
            .iter()
            .flat_map(|transition| {
                transition.from.iter().map(move |origin| Edge {
                    from: origin.name().to_string(),
                    to: transition.to.name().to_string(),
                    label: transition.name.clone(),
                })
            })
            .collect();

        Self { nodes, edges }
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph {{")?;
        for node in &self.nodes {
            writeln!(f, "\t{};", Quoted(node))?;
        }
        writeln!(f)?;
        for edge in &self.edges {
            writeln!(
                f,
                "\t{} -> {} [ label={} ];",
                Quoted(&edge.from),
                Quoted(&edge.to),
                Quoted(&edge.label)
            )?;
        }
        writeln!(f, "}}")
    }
}

/// A DOT identifier in double quotes, with `"` and `\` escaped and line
/// breaks written as `\n` and `\r`, so every statement stays on one line.
struct Quoted<'a>(&'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for c in self.0.chars() {
            match c {
                '"' | '\\' => write!(f, "\\{c}")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                _ => write!(f, "{c}")?,
            }
        }
        f.write_str("\"")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Transition;

    fn turnstile() -> Fsm<&'static str> {
        Fsm::new("locked").set_transitions(vec![
            Transition::new("coin", ["locked", "unlocked"], "unlocked"),
            Transition::new("push", ["locked", "unlocked"], "locked"),
        ])
    }

    #[test]
    fn graph_lists_states_and_one_edge_per_origin() {
        let graph = Graph::from_fsm(&turnstile());

        assert_eq!(graph.nodes, vec!["locked", "unlocked"]);
        assert_eq!(graph.edges.len(), 4);
        assert_eq!(
            graph.edges[0],
            Edge {
                from: "locked".to_string(),
                to: "unlocked".to_string(),
                label: "coin".to_string(),
            }
        );
    }

    #[test]
    fn renders_dot() {
        let dot = Graph::from_fsm(&turnstile()).to_string();

        let expected = "digraph {\n\
            \t\"locked\";\n\
            \t\"unlocked\";\n\
            \n\
            \t\"locked\" -> \"unlocked\" [ label=\"coin\" ];\n\
            \t\"unlocked\" -> \"unlocked\" [ label=\"coin\" ];\n\
            \t\"locked\" -> \"locked\" [ label=\"push\" ];\n\
            \t\"unlocked\" -> \"locked\" [ label=\"push\" ];\n\
            }\n";
        assert_eq!(dot, expected);
    }

    #[test]
    fn quotes_and_backslashes_are_escaped() {
        let graph = Graph {
            nodes: vec![r#"say "hi"\now"#.to_string()],
            edges: Vec::new(),
        };

        assert!(graph.to_string().contains(r#""say \"hi\"\\now";"#));
    }

    #[test]
    fn line_breaks_are_escaped() {
        let graph = Graph {
            nodes: vec!["line1\nline2\r".to_string()],
            edges: Vec::new(),
        };

        let dot = graph.to_string();
        assert!(dot.contains(r#""line1\nline2\r";"#));
        assert_eq!(dot.lines().count(), 4);
    }

    #[test]
    fn empty_machine_renders_empty_digraph() {
        let graph = Graph::from_fsm(&Fsm::new("idle"));

        assert_eq!(graph.to_string(), "digraph {\n\n}\n");
    }
}
