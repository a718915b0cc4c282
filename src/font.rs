//! Font resolution for the icon label
//!
//! Candidates are tried in order. A candidate that cannot be found or parsed
//! is logged and skipped; the chain always ends in the built-in bitmap font,
//! so resolution itself never fails.

use crate::bitmap_font::BitmapFont;
use crate::config::FontCandidate;
use ab_glyph::{Font, FontVec, PxScale};
use directories::UserDirs;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[cfg(windows)]
const SYSTEM_FONT_DIRS: &[&str] = &[r"C:\Windows\Fonts"];

#[cfg(target_os = "macos")]
const SYSTEM_FONT_DIRS: &[&str] = &["/Library/Fonts", "/System/Library/Fonts"];

#[cfg(all(unix, not(target_os = "macos")))]
const SYSTEM_FONT_DIRS: &[&str] = &["/usr/share/fonts", "/usr/local/share/fonts"];

#[cfg(not(any(unix, windows)))]
const SYSTEM_FONT_DIRS: &[&str] = &[];

/// Font chosen for one icon
pub enum LabelFont {
    /// TrueType/OpenType outline font scaled to the requested em size
    Outline {
        font: FontVec,
        scale: PxScale,
        source: PathBuf,
    },
    /// Built-in fallback, ignores the exact point size
    Builtin(BitmapFont),
}

impl LabelFont {
    /// Short description for status output
    pub fn describe(&self) -> String {
        match self {
            LabelFont::Outline { source, .. } => source.display().to_string(),
            LabelFont::Builtin(_) => "built-in bitmap font".to_string(),
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, LabelFont::Builtin(_))
    }
}

impl std::fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LabelFont::Outline { scale, source, .. } => f
                .debug_struct("Outline")
                .field("scale", scale)
                .field("source", source)
                .finish(),
            LabelFont::Builtin(font) => f.debug_tuple("Builtin").field(font).finish(),
        }
    }
}

/// Resolve the first usable candidate at `em_px` pixels per em
pub fn resolve_font(candidates: &[FontCandidate], em_px: u32) -> LabelFont {
    if em_px > 0 {
        for candidate in candidates {
            match load_candidate(candidate, em_px) {
                Some(font) => {
                    tracing::debug!("Using font {} at {}px", candidate, em_px);
                    return font;
                }
                None => tracing::debug!("Font {} not available", candidate),
            }
        }
    }

    tracing::warn!("No outline font available, using built-in bitmap font");
    LabelFont::Builtin(BitmapFont::for_em(em_px))
}

fn load_candidate(candidate: &FontCandidate, em_px: u32) -> Option<LabelFont> {
    let path = match candidate {
        FontCandidate::SystemName(name) => find_system_font(name)?,
        FontCandidate::Path(path) => path.clone(),
    };

    let font = load_outline_font(&path)?;
    let scale = em_scale(&font, em_px as f32)?;
    Some(LabelFont::Outline {
        font,
        scale,
        source: path,
    })
}

/// Parse a font file; collections (.ttc) use their first face
pub fn load_outline_font(path: &Path) -> Option<FontVec> {
    let data = fs::read(path)
        .map_err(|e| tracing::debug!("Failed to read {}: {}", path.display(), e))
        .ok()?;

    FontVec::try_from_vec_and_index(data, 0)
        .map_err(|e| tracing::debug!("Failed to parse {}: {}", path.display(), e))
        .ok()
}

/// Scale at which one em spans `em_px` pixels.
///
/// `PxScale` measures the full line height (ascent - descent), so the em size
/// has to be converted through the font's own metrics.
pub fn em_scale(font: &impl Font, em_px: f32) -> Option<PxScale> {
    let units_per_em = font.units_per_em()?;
    let height = font.height_unscaled();
    if units_per_em <= 0.0 || height <= 0.0 {
        return None;
    }
    Some(PxScale::from(em_px * height / units_per_em))
}

/// Look up a font file by name: working directory first, then font directories
pub fn find_system_font(name: &str) -> Option<PathBuf> {
    let local = Path::new(name);
    if local.is_file() {
        return Some(local.to_path_buf());
    }
    find_font_in(name, &font_directories())
}

/// Recursive, case-insensitive file name search
pub fn find_font_in(name: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
    dirs.iter().filter(|dir| dir.is_dir()).find_map(|dir| {
        WalkDir::new(dir)
            .follow_links(true)
            .into_iter()
            .filter_map(Result::ok)
            .find(|entry| {
                entry.file_type().is_file()
                    && entry.file_name().to_string_lossy().eq_ignore_ascii_case(name)
            })
            .map(|entry| entry.into_path())
    })
}

/// Per-user font directory followed by the platform's system font directories
pub fn font_directories() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(user_dirs) = UserDirs::new() {
        if let Some(font_dir) = user_dirs.font_dir() {
            dirs.push(font_dir.to_path_buf());
        }
    }
    dirs.extend(SYSTEM_FONT_DIRS.iter().map(PathBuf::from));
    dirs
}
