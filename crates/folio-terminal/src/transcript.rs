//! The transcript: an append-only log of styled output lines.

use serde::{Deserialize, Serialize};

/// Visual style of one transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    /// Echo of a submitted command, prompt marker included.
    CommandEcho,
    Success,
    Error,
    Info,
    Warning,
}

/// One rendered entry in the terminal transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputLine {
    pub kind: LineKind,
    pub text: String,
    /// Monotonically increasing per-session counter. Stable render key;
    /// insertion order equals display order.
    pub seq: u64,
}

/// Append-only log of output lines with a monotonic sequence counter.
///
/// Lines are never mutated in place. `clear` empties the log in bulk
/// but the counter keeps climbing, so sequence numbers stay unique for
/// the lifetime of the session.
#[derive(Debug, Default)]
pub struct Transcript {
    lines: Vec<OutputLine>,
    next_seq: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line, assigning it the next sequence number.
    pub fn push(&mut self, kind: LineKind, text: impl Into<String>) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.lines.push(OutputLine {
            kind,
            text: text.into(),
            seq,
        });
    }

    /// Empty the transcript. Sequence numbers are not reused.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_preserves_insertion_order() {
        let mut t = Transcript::new();
        t.push(LineKind::Info, "first");
        t.push(LineKind::Error, "second");
        t.push(LineKind::Success, "third");
        let texts: Vec<&str> = t.lines().iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, ["first", "second", "third"]);
    }

    #[test]
    fn seq_is_strictly_increasing() {
        let mut t = Transcript::new();
        for i in 0..10 {
            t.push(LineKind::Info, format!("line {i}"));
        }
        let seqs: Vec<u64> = t.lines().iter().map(|l| l.seq).collect();
        for pair in seqs.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn clear_empties_but_does_not_reuse_seq() {
        let mut t = Transcript::new();
        t.push(LineKind::Info, "a");
        t.push(LineKind::Info, "b");
        t.clear();
        assert!(t.is_empty());
        t.push(LineKind::Info, "c");
        // Sequence numbers continue past the cleared entries.
        assert_eq!(t.lines()[0].seq, 2);
    }

    #[test]
    fn len_tracks_pushes() {
        let mut t = Transcript::new();
        assert_eq!(t.len(), 0);
        t.push(LineKind::Warning, "w");
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn output_line_serde_roundtrip() {
        let line = OutputLine {
            kind: LineKind::CommandEcho,
            text: "$ help".to_string(),
            seq: 7,
        };
        let json = serde_json::to_string(&line).unwrap();
        let back: OutputLine = serde_json::from_str(&json).unwrap();
        assert_eq!(line, back);
    }

    #[test]
    fn line_kinds_distinct() {
        let kinds = [
            LineKind::CommandEcho,
            LineKind::Success,
            LineKind::Error,
            LineKind::Info,
            LineKind::Warning,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for (j, b) in kinds.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b);
                }
            }
        }
    }
}
