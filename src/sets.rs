/// Android launcher densities, one `ic_launcher.png` per mipmap folder.
pub const ANDROID_LAUNCHERS: [(&str, u32); 5] = [
    ("mipmap-mdpi", 48),
    ("mipmap-hdpi", 72),
    ("mipmap-xhdpi", 96),
    ("mipmap-xxhdpi", 144),
    ("mipmap-xxxhdpi", 192),
];

/// Pixel sizes the iOS asset catalog expects: 1x/2x/3x renders of the 20,
/// 29, 40 and 60 point slots plus the 1024px marketing icon.
pub const IOS_ICON_SIZES: [u32; 10] = [20, 29, 40, 58, 60, 80, 87, 120, 180, 1024];

const ANDROID_RES_DIR: &str = "android/app/src/main/res";
const IOS_APPICONSET_DIR: &str = "ios/App/App/Assets.xcassets/AppIcon.appiconset";

#[cfg(feature = "render")]
mod generate {
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    use super::*;
    use crate::artwork;
    use crate::error::IconError;

    /// Renders the full launcher set into the packaging trees under `root`,
    /// creating directories as needed. Returns every path written.
    pub fn generate_all(root: &Path) -> Result<Vec<PathBuf>, IconError> {
        let mut written = generate_android(root)?;
        written.extend(generate_ios(root)?);
        Ok(written)
    }

    pub fn generate_android(root: &Path) -> Result<Vec<PathBuf>, IconError> {
        let res_dir = root.join(ANDROID_RES_DIR);
        let mut written = Vec::with_capacity(ANDROID_LAUNCHERS.len());
        for (folder, size) in ANDROID_LAUNCHERS {
            let dir = res_dir.join(folder);
            fs::create_dir_all(&dir)?;
            let icon = artwork::launcher_icon(size)?;
            let path = dir.join("ic_launcher.png");
            fs::write(&path, icon.encode())?;
            log::info!("generated {} ({}x{})", path.display(), size, size);
            written.push(path);
        }
        Ok(written)
    }

    pub fn generate_ios(root: &Path) -> Result<Vec<PathBuf>, IconError> {
        let set_dir = root.join(IOS_APPICONSET_DIR);
        fs::create_dir_all(&set_dir)?;
        let mut written = Vec::with_capacity(IOS_ICON_SIZES.len() + 1);
        for size in IOS_ICON_SIZES {
            let icon = artwork::launcher_icon(size)?;
            let path = set_dir.join(format!("icon-{size}.png"));
            fs::write(&path, icon.encode())?;
            log::info!("generated {} ({}x{})", path.display(), size, size);
            written.push(path);
        }
        let manifest = set_dir.join("Contents.json");
        let contents = serde_json::to_vec_pretty(&appiconset_manifest()).map_err(io::Error::from)?;
        fs::write(&manifest, contents)?;
        log::info!("generated {}", manifest.display());
        written.push(manifest);
        Ok(written)
    }
}

#[cfg(feature = "render")]
pub use generate::{generate_all, generate_android, generate_ios};

#[cfg(not(feature = "render"))]
pub fn generate_all(
    _root: &std::path::Path,
) -> Result<Vec<std::path::PathBuf>, crate::error::IconError> {
    Err(crate::error::IconError::RenderUnavailable)
}

/// `Contents.json` for the asset catalog; Xcode matches entries by the
/// size string against the filenames written above.
#[cfg(feature = "render")]
fn appiconset_manifest() -> serde_json::Value {
    let images: Vec<_> = IOS_ICON_SIZES
        .iter()
        .map(|size| {
            serde_json::json!({
                "filename": format!("icon-{size}.png"),
                "idiom": "universal",
                "platform": "ios",
                "size": format!("{size}x{size}"),
            })
        })
        .collect();
    serde_json::json!({
        "images": images,
        "info": { "author": "xcode", "version": 1 },
    })
}
