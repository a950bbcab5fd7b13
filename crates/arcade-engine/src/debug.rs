//! Debug overlay log.

/// Origin of a log line.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LineKind {
    /// Written by user code through `UpdateCtx::debug_log`.
    User,
    /// Written by the engine (load failures, runtime errors).
    Diagnostic,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub kind: LineKind,
    pub text: String,
}

/// Ordered lines shown in the debug overlay.
///
/// Frame-scoped: the synchronizer clears it after each frame unless the
/// scene has faulted, in which case it is frozen and shown as-is.
#[derive(Debug, Default, Clone)]
pub struct DebugLog {
    lines: Vec<LogLine>,
}

impl DebugLog {
    pub fn push(&mut self, text: impl Into<String>) {
        self.lines.push(LogLine { kind: LineKind::User, text: text.into() });
    }

    pub fn push_diagnostic(&mut self, text: impl Into<String>) {
        self.lines.push(LogLine { kind: LineKind::Diagnostic, text: text.into() });
    }

    pub fn lines(&self) -> &[LogLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.lines.iter().any(|l| l.text == text)
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Overlay text, one line per entry. User lines are skipped unless `include_user`.
    pub fn render(&self, include_user: bool) -> String {
        self.lines
            .iter()
            .filter(|l| include_user || l.kind == LineKind::Diagnostic)
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
