use anyhow::Context;
use mobile_icons::{Image, BRAND_BLUE};

const PWA_SIZES: [u32; 2] = [192, 512];

fn main() -> anyhow::Result<()> {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Info)
        .init();
    for size in PWA_SIZES {
        let file_name = format!("icon-{size}x{size}.png");
        let icon = Image::solid(size, BRAND_BLUE)?;
        std::fs::write(&file_name, icon.encode())
            .with_context(|| format!("failed to write {file_name}"))?;
        log::info!("generated {file_name} ({size}x{size})");
    }
    log::info!("icons created successfully");
    Ok(())
}
