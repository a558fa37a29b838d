use nom::{bytes::complete::take, number::complete::be_u32, sequence::tuple, IResult};

use crate::crc::calculate_crc;
use crate::error::IconError;

pub(crate) const HEADER: &[u8; 4] = b"IHDR";

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug)]
pub struct IHDRChunk {
    pub width: u32,
    pub height: u32,
    pub(crate) bit_depth: u8,
    pub(crate) color_type: ColorType,
    pub(crate) compression_method: u8,
    pub(crate) filter_method: u8,
    pub(crate) interlace_method: u8,
}

impl IHDRChunk {
    /// Header for the only layout this crate emits: 8-bit RGB, no
    /// interlacing.
    pub(crate) fn truecolor(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bit_depth: 8,
            color_type: ColorType::Truecolor,
            compression_method: 0,
            filter_method: 0,
            interlace_method: 0,
        }
    }

    /// Bytes of one uncompressed scanline, filter marker included.
    pub(crate) fn scanline_len(&self) -> usize {
        let sample_width = usize::max(self.bit_depth as usize / 8, 1);
        self.width as usize * self.color_type.channel_count() as usize * sample_width + 1
    }

    /// The decode path only handles the layout the encoder produces.
    pub(crate) fn validate_truecolor(&self) -> Result<(), IconError> {
        if self.bit_depth != 8 || self.color_type != ColorType::Truecolor {
            return Err(IconError::MalformedPng(
                "only 8-bit truecolor images are supported".into(),
            ));
        }
        if self.compression_method != 0 || self.filter_method != 0 {
            return Err(IconError::MalformedPng(
                "unsupported compression or filter method".into(),
            ));
        }
        if self.interlace_method != 0 {
            return Err(IconError::MalformedPng(
                "interlaced images are not supported".into(),
            ));
        }
        Ok(())
    }

    pub(crate) fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![0, 0, 0, 13];
        bytes.extend(HEADER);
        bytes.extend(self.width.to_be_bytes());
        bytes.extend(self.height.to_be_bytes());
        bytes.extend([
            self.bit_depth,
            self.color_type as u8,
            self.compression_method,
            self.filter_method,
            self.interlace_method,
        ]);
        let crc = calculate_crc(bytes[4..].iter().copied()).to_be_bytes();
        bytes.extend(crc);
        bytes
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ColorType {
    Greyscale = 0,
    #[default]
    Truecolor = 2,
    IndexedColor = 3,
    GreyscaleWithAlpha = 4,
    TruecolorWithAlpha = 6,
}

impl ColorType {
    pub(crate) fn channel_count(&self) -> u8 {
        match self {
            Self::Greyscale => 1,
            Self::IndexedColor => 1,
            Self::GreyscaleWithAlpha => 2,
            Self::Truecolor => 3,
            Self::TruecolorWithAlpha => 4,
        }
    }
}

impl TryFrom<u8> for ColorType {
    type Error = u8;
    fn try_from(value: u8) -> Result<Self, u8> {
        match value {
            0 => Ok(Self::Greyscale),
            2 => Ok(Self::Truecolor),
            3 => Ok(Self::IndexedColor),
            4 => Ok(Self::GreyscaleWithAlpha),
            6 => Ok(Self::TruecolorWithAlpha),
            other => Err(other),
        }
    }
}

pub(crate) fn parse_data(chunk_data: &[u8]) -> IResult<&[u8], IHDRChunk> {
    let (rest, (width, height, trailer)) = tuple((be_u32, be_u32, take(5usize)))(chunk_data)?;
    let color_type = ColorType::try_from(trailer[1]).map_err(|_| {
        nom::Err::Failure(nom::error::Error::new(
            chunk_data,
            nom::error::ErrorKind::Verify,
        ))
    })?;
    Ok((
        rest,
        IHDRChunk {
            width,
            height,
            bit_depth: trailer[0],
            color_type,
            compression_method: trailer[2],
            filter_method: trailer[3],
            interlace_method: trailer[4],
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_dimensions_and_a_fresh_crc() {
        let bytes = IHDRChunk::truecolor(192, 192).to_bytes();
        assert_eq!(bytes.len(), 25);
        assert_eq!(&bytes[4..8], HEADER);
        assert_eq!(u32::from_be_bytes(bytes[8..12].try_into().unwrap()), 192);
        assert_eq!(u32::from_be_bytes(bytes[12..16].try_into().unwrap()), 192);
        let stored = u32::from_be_bytes(bytes[21..25].try_into().unwrap());
        assert_eq!(stored, calculate_crc(bytes[4..21].iter().copied()));
    }

    #[test]
    fn crc_tracks_the_header_bytes() {
        let a = IHDRChunk::truecolor(192, 192).to_bytes();
        let b = IHDRChunk::truecolor(512, 512).to_bytes();
        assert_ne!(a[21..25], b[21..25]);
    }

    #[test]
    fn parses_back_what_it_wrote() {
        let bytes = IHDRChunk::truecolor(48, 48).to_bytes();
        let (_, parsed) = parse_data(&bytes[8..21]).unwrap();
        assert_eq!(parsed.width, 48);
        assert_eq!(parsed.height, 48);
        assert_eq!(parsed.bit_depth, 8);
        assert_eq!(parsed.color_type, ColorType::Truecolor);
        assert_eq!(parsed.scanline_len(), 48 * 3 + 1);
    }
}
