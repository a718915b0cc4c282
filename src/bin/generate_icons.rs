//! Generates the PWA icons into `public/icons`
//!
//! Takes no arguments. Usage: generate_icons

use pwa_icon_gen::{ensure_backend, IconConfig, IconError};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = IconConfig::default();
    tracing::debug!(
        "Icon config: {}",
        serde_json::to_string(&config).unwrap_or_default()
    );

    // Checked before anything touches the filesystem
    if let Err(IconError::MissingDependency { hint }) = ensure_backend() {
        eprintln!("❌ Image rendering backend is not available!");
        eprintln!("📦 {}", hint);
        std::process::exit(1);
    }

    #[cfg(feature = "render")]
    run(&config)?;

    Ok(())
}

#[cfg(feature = "render")]
fn run(config: &IconConfig) -> anyhow::Result<()> {
    use anyhow::Context;

    let icons = pwa_icon_gen::generate_icons(config).with_context(|| {
        format!("Failed to generate icons in {}", config.output_dir.display())
    })?;
    tracing::info!("Generated {} icons", icons.len());
    Ok(())
}

