use nom::IResult;

use crate::crc::calculate_crc;

pub(crate) const HEADER: &[u8; 4] = b"IDAT";

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug)]
pub struct IDATChunk<'a> {
    pub(crate) data: &'a [u8],
}

impl IDATChunk<'_> {
    pub(crate) fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = (self.data.len() as u32).to_be_bytes().to_vec();
        bytes.extend(HEADER);
        bytes.extend(self.data);
        let crc = calculate_crc(bytes[4..].iter().copied()).to_be_bytes();
        bytes.extend(crc);
        bytes
    }
}

pub(crate) fn parse_data(chunk_data: &[u8]) -> IResult<&[u8], IDATChunk<'_>> {
    Ok((&chunk_data[0..0], IDATChunk { data: chunk_data }))
}
