use crate::domain::ports::FlagImageSource;
use crate::utils::error::Result;
use crate::utils::validation::is_file_token;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Flag images stored as `<base_path>/<name>.<ext>` on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalAssets {
    base_path: PathBuf,
}

impl LocalAssets {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Where `<name>.<ext>` would live, or `None` if either part could escape
    /// the asset directory.
    pub fn asset_path(&self, name: &str, ext: &str) -> Option<PathBuf> {
        if !is_file_token(name) || !is_file_token(ext) {
            return None;
        }
        Some(self.base_path.join(format!("{}.{}", name, ext)))
    }

    /// Uppercase codes of every two-letter `<code>.<ext>` file, sorted.
    pub fn available_country_codes(&self, ext: &str) -> Result<Vec<String>> {
        let mut codes = Vec::new();
        for entry in fs::read_dir(&self.base_path)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(ext) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if stem.len() == 2 && stem.bytes().all(|b| b.is_ascii_lowercase()) {
                codes.push(stem.to_ascii_uppercase());
            }
        }
        codes.sort();
        tracing::debug!(
            path = %self.base_path.display(),
            count = codes.len(),
            "scanned flag assets"
        );
        Ok(codes)
    }
}

impl FlagImageSource for LocalAssets {
    fn image_data(&self, name: &str, ext: &str) -> Result<Option<Vec<u8>>> {
        let Some(full_path) = self.asset_path(name, ext) else {
            tracing::debug!(name, ext, "rejected asset name");
            return Ok(None);
        };

        match fs::read(&full_path) {
            Ok(data) => {
                tracing::debug!(path = %full_path.display(), bytes = data.len(), "loaded flag asset");
                Ok(Some(data))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %full_path.display(), "flag asset not found");
                Ok(None)
            }
            Err(e) => {
                tracing::warn!(path = %full_path.display(), error = %e, "failed to read flag asset");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_asset_path_rejects_traversal() {
        let assets = LocalAssets::new("/flags");
        assert_eq!(
            assets.asset_path("us", "png"),
            Some(PathBuf::from("/flags/us.png"))
        );
        assert_eq!(assets.asset_path("../us", "png"), None);
        assert_eq!(assets.asset_path("us", "png/../x"), None);
        assert_eq!(assets.asset_path("", "png"), None);
        assert_eq!(assets.asset_path("US", "png"), None);
    }

    #[test]
    fn test_image_data_reads_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("fr.png"), b"french").unwrap();

        let assets = LocalAssets::new(dir.path());
        assert_eq!(
            assets.image_data("fr", "png").unwrap(),
            Some(b"french".to_vec())
        );
        assert_eq!(
            assets.image_data_for_country_code(" FR ", "png").unwrap(),
            Some(b"french".to_vec())
        );
        assert_eq!(assets.image_data("de", "png").unwrap(), None);
    }

    #[test]
    fn test_available_country_codes_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        for name in ["us.png", "cz.png", "eu.svg", "readme.png", "ab.txt"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }

        let assets = LocalAssets::new(dir.path());
        assert_eq!(assets.available_country_codes("png").unwrap(), vec!["CZ", "US"]);
        assert_eq!(assets.available_country_codes("svg").unwrap(), vec!["EU"]);
    }

    #[test]
    fn test_available_country_codes_missing_dir_is_error() {
        let dir = TempDir::new().unwrap();
        let assets = LocalAssets::new(dir.path().join("nope"));
        assert!(assets.available_country_codes("png").is_err());
    }
}
