use std::path::Path;

use anyhow::Context;
use mobile_icons::{sets, IconError};

fn main() -> anyhow::Result<()> {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Info)
        .init();
    log::info!("generating launcher icons");
    match sets::generate_all(Path::new(".")) {
        Ok(written) => {
            log::info!("all launcher icons generated ({} files)", written.len());
            Ok(())
        }
        // A missing drawing backend degrades to guidance, not a failure.
        Err(err @ IconError::RenderUnavailable) => {
            eprintln!("{err}");
            Ok(())
        }
        Err(err) => Err(err).context("launcher icon generation failed"),
    }
}
