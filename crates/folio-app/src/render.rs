//! Console rendering of transcript lines.

use folio_terminal::{LineKind, OutputLine};

/// Format one transcript line for a monochrome console.
///
/// Command echoes are printed as-is (they already carry the prompt);
/// every other kind gets a short marker so the line styles stay
/// distinguishable without color.
pub fn format_line(line: &OutputLine) -> String {
    match line.kind {
        LineKind::CommandEcho => line.text.clone(),
        LineKind::Success => format!("  ok   {}", line.text),
        LineKind::Error => format!("  err  {}", line.text),
        LineKind::Warning => format!("  hint {}", line.text),
        LineKind::Info => format!("       {}", line.text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(kind: LineKind, text: &str) -> OutputLine {
        OutputLine {
            kind,
            text: text.to_string(),
            seq: 0,
        }
    }

    #[test]
    fn echo_is_unprefixed() {
        assert_eq!(format_line(&line(LineKind::CommandEcho, "$ ls")), "$ ls");
    }

    #[test]
    fn kinds_have_distinct_markers() {
        let rendered = [
            format_line(&line(LineKind::Success, "x")),
            format_line(&line(LineKind::Error, "x")),
            format_line(&line(LineKind::Warning, "x")),
            format_line(&line(LineKind::Info, "x")),
        ];
        for (i, a) in rendered.iter().enumerate() {
            for b in rendered.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn info_preserves_indentation() {
        let l = line(LineKind::Info, "  cd <section>    Navigate");
        assert!(format_line(&l).ends_with("  cd <section>    Navigate"));
    }
}
