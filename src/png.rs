use miniz_oxide::deflate::compress_to_vec_zlib;
use miniz_oxide::inflate::decompress_to_vec_zlib;
use nom::{bytes::complete::tag, IResult};

use crate::chunks::{self, idat::IDATChunk, iend, ihdr::IHDRChunk, Chunk};
use crate::color::Rgb;
use crate::error::IconError;

const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

/// An in-memory truecolor image, three bytes per pixel in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Image {
    /// A square of one solid color.
    pub fn solid(size: u32, color: Rgb) -> Result<Self, IconError> {
        if size == 0 {
            return Err(IconError::InvalidSize(size));
        }
        let pixel_count = size as usize * size as usize;
        let mut data = Vec::with_capacity(pixel_count * 3);
        for _ in 0..pixel_count {
            data.extend([color.red, color.green, color.blue]);
        }
        Ok(Self {
            width: size,
            height: size,
            data,
        })
    }

    pub(crate) fn from_rgb(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize * 3);
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Panics if `(x, y)` is outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        let offset = (y as usize * self.width as usize + x as usize) * 3;
        Rgb::new(self.data[offset], self.data[offset + 1], self.data[offset + 2])
    }

    /// Serializes to PNG: signature, then IHDR, IDAT and IEND, each with a
    /// CRC computed from its actual bytes.
    pub fn encode(&self) -> Vec<u8> {
        let header = IHDRChunk::truecolor(self.width, self.height);
        let compressed = compress_to_vec_zlib(&self.scanlines(), 9);
        let mut out = SIGNATURE.to_vec();
        out.extend(header.to_bytes());
        out.extend(IDATChunk { data: &compressed }.to_bytes());
        out.extend(iend::write_end());
        out
    }

    // One filter marker (0, no filtering) in front of every row of raw
    // pixel bytes.
    fn scanlines(&self) -> Vec<u8> {
        let stride = self.width as usize * 3;
        let mut raw = Vec::with_capacity(self.height as usize * (stride + 1));
        for row in self.data.chunks_exact(stride) {
            raw.push(0);
            raw.extend_from_slice(row);
        }
        raw
    }

    /// Reads back an image this crate could have written: 8-bit truecolor,
    /// no interlacing, unfiltered scanlines. Unknown ancillary chunks are
    /// skipped; every chunk's CRC is verified while walking.
    pub fn decode(bytes: &[u8]) -> Result<Self, IconError> {
        let (rest, _) = parse_signature(bytes)
            .map_err(|_| IconError::MalformedPng("missing PNG signature".into()))?;
        let mut header: Option<IHDRChunk> = None;
        let mut compressed = Vec::new();
        for chunk in chunks::iter_chunks(rest) {
            match chunk? {
                Chunk::IHDR(ihdr) => header = Some(ihdr),
                Chunk::IDAT(idat) => compressed.extend_from_slice(idat.data),
                Chunk::IEND => break,
                Chunk::Unknown(_) => (),
            }
        }
        let header = header.ok_or_else(|| IconError::MalformedPng("no IHDR chunk".into()))?;
        header.validate_truecolor()?;
        let raw = decompress_to_vec_zlib(&compressed)
            .map_err(|_| IconError::MalformedPng("failed to inflate image data".into()))?;
        let stride = header.scanline_len();
        if raw.len() != stride * header.height as usize {
            return Err(IconError::MalformedPng(
                "image data does not match header dimensions".into(),
            ));
        }
        let mut data = Vec::with_capacity(raw.len() - header.height as usize);
        for scanline in raw.chunks_exact(stride) {
            if scanline[0] != 0 {
                return Err(IconError::MalformedPng(format!(
                    "unsupported scanline filter {}",
                    scanline[0]
                )));
            }
            data.extend_from_slice(&scanline[1..]);
        }
        Ok(Self {
            width: header.width,
            height: header.height,
            data,
        })
    }
}

pub fn parse_signature(input: &[u8]) -> IResult<&[u8], &[u8]> {
    tag(b"\x89PNG\x0d\x0a\x1a\x0a")(input)
}
