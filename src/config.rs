/// Configuration module for the PWA icon generator.
///
/// The generator takes no arguments and reads no files: everything it needs
/// lives in [`IconConfig::default`], including:
/// - The square edge lengths to render (192 and 512)
/// - Background and label colors
/// - The label text
/// - The ordered list of fonts to try
/// - The output directory (`public/icons` under the crate root)
///
/// # Example
///
/// ```rust
/// use pwa_icon_gen::config::{icon_file_name, IconConfig};
///
/// let config = IconConfig::default();
/// assert_eq!(config.sizes, vec![192, 512]);
/// assert_eq!(icon_file_name(192), "icon-192x192.png");
/// ```
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Icon edge lengths in pixels
pub const ICON_SIZES: [u32; 2] = [192, 512];

/// #2563eb
pub const BACKGROUND: [u8; 3] = [37, 99, 235];

pub const FOREGROUND: [u8; 3] = [255, 255, 255];

pub const LABEL: &str = "TL";

/// Point size is a quarter of the edge length
pub const FONT_SIZE_DIVISOR: u32 = 4;

/// A font to try when rendering the label
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum FontCandidate {
    /// Bare file name, looked up in the working directory and the font directories
    SystemName(String),
    /// Fixed location on disk
    Path(PathBuf),
}

impl std::fmt::Display for FontCandidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontCandidate::SystemName(name) => write!(f, "{}", name),
            FontCandidate::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Everything a generation pass needs
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct IconConfig {
    /// Edge lengths to render, in order
    pub sizes: Vec<u32>,
    /// Canvas fill color (RGB)
    pub background: [u8; 3],
    /// Label color (RGB)
    pub foreground: [u8; 3],
    /// Text drawn on every icon
    pub label: String,
    /// Directory receiving `icon-{size}x{size}.png`
    pub output_dir: PathBuf,
    /// Fonts tried in order before the built-in font
    pub font_candidates: Vec<FontCandidate>,
}

impl Default for IconConfig {
    fn default() -> Self {
        IconConfig {
            sizes: ICON_SIZES.to_vec(),
            background: BACKGROUND,
            foreground: FOREGROUND,
            label: LABEL.to_string(),
            output_dir: default_output_dir(),
            font_candidates: default_font_candidates(),
        }
    }
}

impl IconConfig {
    /// Same configuration, writing somewhere else
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Path of the icon for `size` inside the output directory
    pub fn icon_path(&self, size: u32) -> PathBuf {
        self.output_dir.join(icon_file_name(size))
    }
}

/// Primary system font, then the macOS Helvetica collection
pub fn default_font_candidates() -> Vec<FontCandidate> {
    vec![
        FontCandidate::SystemName("arial.ttf".to_string()),
        FontCandidate::Path(PathBuf::from("/System/Library/Fonts/Helvetica.ttc")),
    ]
}

/// `public/icons` under the crate root
pub fn default_output_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("public").join("icons")
}

pub fn icon_file_name(size: u32) -> String {
    format!("icon-{}x{}.png", size, size)
}

/// Point size used for the label on a canvas of `size` pixels
pub fn font_size_for(size: u32) -> u32 {
    size / FONT_SIZE_DIVISOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IconConfig::default();
        assert_eq!(config.sizes, vec![192, 512]);
        assert_eq!(config.background, [37, 99, 235]);
        assert_eq!(config.foreground, [255, 255, 255]);
        assert_eq!(config.label, "TL");
        assert_eq!(config.font_candidates.len(), 2);
    }

    #[test]
    fn test_default_output_dir() {
        let dir = default_output_dir();
        assert!(dir.ends_with("public/icons"));
        assert!(dir.starts_with(env!("CARGO_MANIFEST_DIR")));
    }

    #[test]
    fn test_icon_path() {
        let config = IconConfig::default().with_output_dir("/tmp/out");
        assert_eq!(config.icon_path(512), PathBuf::from("/tmp/out/icon-512x512.png"));
    }

    #[test]
    fn test_font_size_for() {
        assert_eq!(font_size_for(192), 48);
        assert_eq!(font_size_for(512), 128);
        assert_eq!(font_size_for(7), 1);
    }

    #[test]
    fn test_config_serializes() {
        let json = serde_json::to_string(&IconConfig::default()).unwrap();
        assert!(json.contains("\"label\":\"TL\""));
        assert!(json.contains("arial.ttf"));
    }
}
