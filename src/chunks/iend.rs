use crate::crc::calculate_crc;

pub(crate) const HEADER: &[u8; 4] = b"IEND";

pub(crate) fn write_end() -> [u8; 12] {
    let mut bytes = [0, 0, 0, 0, b'I', b'E', b'N', b'D', 0, 0, 0, 0];
    let crc = calculate_crc(bytes[4..8].iter().copied()).to_be_bytes();
    bytes[8..].copy_from_slice(&crc);
    bytes
}
