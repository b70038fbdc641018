//! Graph export for machines.
//!
//! A read-only consumer of the machine's query surface: it turns the states
//! and transitions of an [`Fsm`] into a DOT `digraph` and can read that text
//! back. Exporting never changes the machine.

mod error;
mod graph;
mod parse;

pub use error::VisualizeError;
pub use graph::{Edge, Graph};
pub use parse::parse_dot;

use crate::core::State;
use crate::machine::Fsm;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Render a machine as DOT text.
pub fn to_dot<S: State>(fsm: &Fsm<S>) -> String {
    Graph::from_fsm(fsm).to_string()
}

/// Write a machine's DOT rendering to `writer`.
pub fn write_dot<S: State, W: Write>(fsm: &Fsm<S>, mut writer: W) -> Result<(), VisualizeError> {
    writer.write_all(to_dot(fsm).as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Create (or truncate) the file at `path` and write a machine's DOT
/// rendering to it.
pub fn write_dot_file<S: State>(
    fsm: &Fsm<S>,
    path: impl AsRef<Path>,
) -> Result<(), VisualizeError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_dot(fsm, BufWriter::new(file))?;
    debug!(path = %path.display(), "wrote machine graph");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Transition;
    use std::io;

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn turnstile() -> Fsm<&'static str> {
        Fsm::with_history("locked").set_transitions(vec![
            Transition::new("coin", ["locked", "unlocked"], "unlocked"),
            Transition::new("push", ["locked", "unlocked"], "locked"),
        ])
    }

    #[test]
    fn write_dot_writes_rendering() {
        let fsm = turnstile();
        let mut buffer = Vec::new();

        write_dot(&fsm, &mut buffer).unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), to_dot(&fsm));
    }

    #[test]
    fn write_failure_surfaces_as_io_error() {
        let fsm = turnstile().execute("coin");

        let err = write_dot(&fsm, BrokenWriter).unwrap_err();

        assert!(matches!(err, VisualizeError::Io(_)));
        assert!(fsm.is(&"unlocked"));
        assert_eq!(fsm.history(), &["locked", "unlocked"]);
    }

    #[test]
    fn write_dot_file_to_missing_directory_fails() {
        let path = std::env::temp_dir()
            .join("waypoint-missing-dir")
            .join("nested")
            .join("graph.dot");

        let err = write_dot_file(&turnstile(), path).unwrap_err();

        assert!(matches!(err, VisualizeError::Io(_)));
    }

    #[test]
    fn rendering_round_trips_through_parser() {
        let graph = Graph::from_fsm(&turnstile());

        assert_eq!(parse_dot(&graph.to_string()).unwrap(), graph);
    }

    #[test]
    fn names_with_line_breaks_round_trip() {
        let fsm = Fsm::new("a").set_transitions([
            Transition::new("go", ["a"], "line1\nline2"),
            Transition::new("back\r\n", ["line1\nline2"], "a"),
        ]);

        let dot = to_dot(&fsm);

        assert_eq!(dot.lines().count(), 7);
        assert_eq!(parse_dot(&dot).unwrap(), Graph::from_fsm(&fsm));
    }
}
