use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination (stdout, file, etc.)
/// where downloaded report bytes are presented. Content is raw bytes
/// because some report formats (PDF) are not text.
pub trait OutputPresenter {
    /// Presents content to the output destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    fn present(&self, content: &[u8]) -> Result<()>;
}
