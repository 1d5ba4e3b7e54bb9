use crate::error::{Error, Result};
use std::path::Path;

pub const DEFAULT_BACKDROP_PATH: &str = "images/wallpaper.jpeg";

/// Background image bytes, read once and held in memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Backdrop {
    bytes: Vec<u8>,
}

impl Backdrop {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Reads the whole file; the handle is closed before this returns.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| Error::Backdrop {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded backdrop {} ({} bytes)", path.display(), bytes.len());
        Ok(Self { bytes })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn mime_type(&self) -> &'static str {
        match self.bytes.as_slice() {
            [0xFF, 0xD8, 0xFF, ..] => "image/jpeg",
            [0x89, b'P', b'N', b'G', ..] => "image/png",
            [b'G', b'I', b'F', b'8', ..] => "image/gif",
            [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => "image/webp",
            _ => "image/png",
        }
    }

    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type(), base64::encode(&self.bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jpeg_bytes_become_a_jpeg_data_uri() {
        let backdrop = Backdrop::from_bytes(vec![0xFF, 0xD8, 0xFF, 0xE0]);
        assert_eq!(backdrop.mime_type(), "image/jpeg");
        assert_eq!(backdrop.data_uri(), "data:image/jpeg;base64,/9j/4A==");
    }

    #[test]
    fn unknown_bytes_fall_back_to_png() {
        let backdrop = Backdrop::from_bytes(b"abc".to_vec());
        assert_eq!(backdrop.data_uri(), "data:image/png;base64,YWJj");
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = Backdrop::load("images/does-not-exist.jpeg").unwrap_err();
        assert!(matches!(err, Error::Backdrop { .. }));
        assert!(err.to_string().contains("images/does-not-exist.jpeg"));
    }

    #[test]
    fn load_reads_the_whole_file() {
        let path = std::env::temp_dir().join(format!("light-minutes-backdrop-{}.png", std::process::id()));
        std::fs::write(&path, [0x89, b'P', b'N', b'G', 1, 2, 3]).unwrap();
        let backdrop = Backdrop::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(backdrop.len(), 7);
        assert_eq!(backdrop.mime_type(), "image/png");
    }
}
