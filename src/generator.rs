//! Icon generation pass
//!
//! Renders every configured size in order and writes it as PNG. The first
//! failure aborts the pass; files already written are left in place.

use crate::config::{icon_file_name, IconConfig};
use crate::error::IconError;
use crate::render::render_icon;
use crate::verify::validate_icon;
use image::ImageFormat;
use std::fs;
use std::path::PathBuf;

/// One icon written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub size: u32,
    pub path: PathBuf,
    /// Font the label was drawn with
    pub font: String,
}

/// Generate every icon in `config`, printing a status line per file
pub fn generate_icons(config: &IconConfig) -> Result<Vec<GeneratedIcon>, IconError> {
    fs::create_dir_all(&config.output_dir).map_err(|source| IconError::CreateDir {
        path: config.output_dir.clone(),
        source,
    })?;

    let mut generated = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        let icon = generate_icon(config, size)?;
        println!("✅ {} created", icon_file_name(size));
        generated.push(icon);
    }

    println!("\n✨ Icons created in: {}", config.output_dir.display());
    Ok(generated)
}

/// Render and save a single icon
pub fn generate_icon(config: &IconConfig, size: u32) -> Result<GeneratedIcon, IconError> {
    let (canvas, font) = render_icon(config, size);
    let path = config.icon_path(size);

    canvas
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|source| IconError::Save {
            path: path.clone(),
            source,
        })?;
    validate_icon(&path, size)?;

    tracing::info!("Wrote {} ({}x{}, font: {})", path.display(), size, size, font);

    Ok(GeneratedIcon { size, path, font })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::corner_pixel;

    fn temp_config(dir: &std::path::Path) -> IconConfig {
        IconConfig::default().with_output_dir(dir.join("public").join("icons"))
    }

    #[test]
    fn test_generates_both_icons() {
        let dir = tempfile::tempdir().unwrap();
        let config = temp_config(dir.path());

        let icons = generate_icons(&config).unwrap();
        assert_eq!(icons.len(), 2);

        let mut names: Vec<String> = fs::read_dir(&config.output_dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["icon-192x192.png", "icon-512x512.png"]);

        for icon in &icons {
            let (width, height) = image::image_dimensions(&icon.path).unwrap();
            assert_eq!((width, height), (icon.size, icon.size));
            assert_eq!(corner_pixel(&icon.path).unwrap(), [37, 99, 235]);
        }
    }

    #[test]
    fn test_rerun_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let config = temp_config(dir.path());

        let first = generate_icons(&config).unwrap();
        let second = generate_icons(&config).unwrap();

        assert_eq!(
            first.iter().map(|i| &i.path).collect::<Vec<_>>(),
            second.iter().map(|i| &i.path).collect::<Vec<_>>()
        );
        assert_eq!(fs::read_dir(&config.output_dir).unwrap().count(), 2);
    }

    #[test]
    fn test_existing_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = IconConfig::default().with_output_dir(dir.path());
        assert!(generate_icons(&config).is_ok());
        assert!(dir.path().join("icon-192x192.png").is_file());
    }

    #[test]
    fn test_builtin_font_icon() {
        let dir = tempfile::tempdir().unwrap();
        let config = IconConfig {
            font_candidates: Vec::new(),
            ..temp_config(dir.path())
        };

        let icon = generate_icon(&config, 192);
        // Output directory was never created
        assert!(matches!(icon, Err(IconError::Save { .. })));

        fs::create_dir_all(&config.output_dir).unwrap();
        let icon = generate_icon(&config, 192).unwrap();
        assert_eq!(icon.font, "built-in bitmap font");
        assert_eq!(icon.path, config.output_dir.join("icon-192x192.png"));
    }

    #[test]
    fn test_unwritable_output_dir_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("icons");
        fs::write(&blocker, b"not a directory").unwrap();

        let config = IconConfig::default().with_output_dir(&blocker);
        assert!(matches!(
            generate_icons(&config),
            Err(IconError::CreateDir { .. })
        ));
    }
}
