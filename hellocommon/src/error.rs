/// Error messages
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    // === arithmetic ===
    #[error("integer overflow when adding {0} and {1}")]
    Overflow(i64, i64),
}
