use nom::{
    bytes::complete::{tag, take},
    combinator::map,
    multi::length_data,
    number::complete::be_u32,
    sequence::{terminated, tuple},
    IResult,
};

use crate::crc::calculate_crc;
use crate::error::IconError;

pub mod idat;
pub mod iend;
pub mod ihdr;

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug)]
pub enum Chunk<'a> {
    IHDR(ihdr::IHDRChunk),
    IDAT(idat::IDATChunk<'a>),
    IEND,
    Unknown(RawChunk<'a>),
}

pub fn iter_chunks(source: &[u8]) -> ChunkIter {
    ChunkIter {
        source,
        finished: false,
    }
}

pub struct ChunkIter<'a> {
    source: &'a [u8],
    finished: bool,
}

impl<'a> Iterator for ChunkIter<'a> {
    type Item = Result<Chunk<'a>, IconError>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match parse_chunk(self.source) {
            Ok((rest, chunk)) => {
                self.source = rest;
                if matches!(chunk, Chunk::IEND) {
                    self.finished = true;
                }
                Some(Ok(chunk))
            }
            Err(e) => {
                self.finished = true;
                Some(Err(IconError::MalformedPng(e.to_string())))
            }
        }
    }
}

fn parse_chunk(input: &[u8]) -> IResult<&[u8], Chunk<'_>> {
    let (rest, (chunk_type, chunk_data)) = framed_chunk(input)?;
    match chunk_type {
        ihdr::HEADER => Ok((rest, Chunk::IHDR(ihdr::parse_data(chunk_data)?.1))),
        idat::HEADER => Ok((rest, Chunk::IDAT(idat::parse_data(chunk_data)?.1))),
        iend::HEADER => Ok((rest, Chunk::IEND)),
        _ => Ok((
            rest,
            Chunk::Unknown(RawChunk {
                _chunk_type: chunk_type,
                _chunk_data: chunk_data,
            }),
        )),
    }
}

#[derive(Debug)]
pub struct RawChunk<'a> {
    _chunk_type: &'a [u8; 4],
    _chunk_data: &'a [u8],
}

// A chunk only parses if the CRC recomputed over its type tag and data
// matches the stored trailer.
fn framed_chunk(input: &[u8]) -> IResult<&[u8], (&[u8; 4], &[u8])> {
    let (type_len, crc_len) = (4u32, 4u32);
    let (input, framed) = length_data(map(be_u32, |data_len| data_len + type_len + crc_len))(input)?;
    let payload_end = framed.len() - crc_len as usize;
    let crc = calculate_crc(framed[..payload_end].iter().copied()).to_be_bytes();
    let (_, parsed) = tuple((
        map(take(type_len), |t: &[u8]| {
            t.try_into().expect("4 bytes should have been taken")
        }),
        terminated(take(payload_end - type_len as usize), tag(crc)),
    ))(framed)?;
    Ok((input, parsed))
}
