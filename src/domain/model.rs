/// Outcome of a single script run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub lines_written: usize,
    /// Includes the trailing newline of every line.
    pub bytes_written: usize,
}
