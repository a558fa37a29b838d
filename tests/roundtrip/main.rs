use std::io::Cursor;

use image::ImageReader;
use mobile_icons::{chunks, parse_signature, IconError, Image, Rgb, BRAND_BLUE};

fn chunk_kind(chunk: &chunks::Chunk) -> &'static str {
    match chunk {
        chunks::Chunk::IHDR(_) => "IHDR",
        chunks::Chunk::IDAT(_) => "IDAT",
        chunks::Chunk::IEND => "IEND",
        chunks::Chunk::Unknown(_) => "unknown",
    }
}

#[test]
fn output_begins_with_the_png_signature() {
    let bytes = Image::solid(192, BRAND_BLUE).unwrap().encode();
    assert!(bytes.starts_with(b"\x89PNG\x0d\x0a\x1a\x0a"));
}

#[test]
fn header_dimensions_match_the_requested_size() {
    for n in [1u32, 2, 3, 48, 192] {
        let bytes = Image::solid(n, Rgb::new(1, 2, 3)).unwrap().encode();
        let decoded = Image::decode(&bytes).unwrap();
        assert_eq!(decoded.width(), n);
        assert_eq!(decoded.height(), n);
    }
}

#[test]
fn round_trips_through_a_standard_decoder() {
    let bytes = Image::solid(2, Rgb::new(10, 20, 30)).unwrap().encode();
    let decoded = ImageReader::new(Cursor::new(&bytes))
        .with_guessed_format()
        .unwrap()
        .decode()
        .unwrap()
        .into_rgb8();
    assert_eq!(decoded.dimensions(), (2, 2));
    for pixel in decoded.pixels() {
        assert_eq!(pixel.0, [10, 20, 30]);
    }
}

#[test]
fn chunks_appear_in_order_with_valid_crcs() {
    for n in [1u32, 5, 17, 512] {
        let bytes = Image::solid(n, BRAND_BLUE).unwrap().encode();
        let (rest, _) = parse_signature(&bytes).unwrap();
        let kinds: Vec<_> = chunks::iter_chunks(rest)
            .map(|chunk| chunk_kind(&chunk.expect("chunk framing or CRC")))
            .collect();
        assert_eq!(kinds, ["IHDR", "IDAT", "IEND"]);
    }
}

#[test]
fn a_corrupted_crc_is_rejected() {
    let mut bytes = Image::solid(4, BRAND_BLUE).unwrap().encode();
    // Last byte of the IDAT CRC sits right before the 12-byte IEND chunk.
    let target = bytes.len() - 13;
    bytes[target] ^= 0xff;
    let (rest, _) = parse_signature(&bytes).unwrap();
    assert!(chunks::iter_chunks(rest).any(|chunk| chunk.is_err()));
}

#[test]
fn zero_size_fails_without_writing_anything() {
    assert!(matches!(
        Image::solid(0, BRAND_BLUE),
        Err(IconError::InvalidSize(0))
    ));
}

#[cfg(feature = "render")]
mod launcher_sets {
    use std::path::Path;

    use super::*;
    use mobile_icons::sets;

    fn scratch_dir(label: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "mobile-icons-{label}-{}",
            std::process::id()
        ));
        if dir.exists() {
            std::fs::remove_dir_all(&dir).unwrap();
        }
        dir
    }

    #[test]
    fn android_set_writes_one_icon_per_density() {
        let root = scratch_dir("android");
        let written = sets::generate_android(&root).unwrap();
        assert_eq!(written.len(), 5);
        for (path, (folder, size)) in written.iter().zip(sets::ANDROID_LAUNCHERS) {
            assert!(path.ends_with(Path::new(folder).join("ic_launcher.png")));
            let decoded = Image::decode(&std::fs::read(path).unwrap()).unwrap();
            assert_eq!((decoded.width(), decoded.height()), (size, size));
        }
        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn ios_set_covers_every_size_plus_the_manifest() {
        let root = scratch_dir("ios");
        let written = sets::generate_ios(&root).unwrap();
        assert_eq!(written.len(), sets::IOS_ICON_SIZES.len() + 1);
        let manifest = written.last().unwrap();
        assert!(manifest.ends_with("Contents.json"));
        let parsed: serde_json::Value =
            serde_json::from_slice(&std::fs::read(manifest).unwrap()).unwrap();
        assert_eq!(
            parsed["images"].as_array().unwrap().len(),
            sets::IOS_ICON_SIZES.len()
        );

        let smallest = &written[0];
        let decoded = Image::decode(&std::fs::read(smallest).unwrap()).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (20, 20));
        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn launcher_icons_decode_with_a_standard_decoder() {
        let icon = mobile_icons::launcher_icon(48).unwrap();
        let decoded = ImageReader::new(Cursor::new(icon.encode()))
            .with_guessed_format()
            .unwrap()
            .decode()
            .unwrap()
            .into_rgb8();
        assert_eq!(decoded.dimensions(), (48, 48));
        assert_eq!(decoded.get_pixel(0, 0).0, [0x3b, 0x82, 0xf6]);
        assert_eq!(decoded.get_pixel(24, 24).0, [0xff, 0xff, 0xff]);
    }
}
