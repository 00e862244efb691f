use crate::utils::error::Result;

/// Source of packaged flag images, keyed by lowercase resource name.
pub trait FlagImageSource: Send + Sync {
    /// Raw bytes of `<name>.<ext>`, or `None` when no such image exists.
    fn image_data(&self, name: &str, ext: &str) -> Result<Option<Vec<u8>>>;

    /// Same as [`image_data`](Self::image_data) with `code` trimmed and
    /// lowercased first ("FR" reads "fr.png").
    fn image_data_for_country_code(&self, code: &str, ext: &str) -> Result<Option<Vec<u8>>> {
        let name = code.trim().to_ascii_lowercase();
        self.image_data(&name, ext)
    }
}
