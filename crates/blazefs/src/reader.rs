//! Seekable stream handle for object bodies

use bytes::Bytes;
use std::io::{Read, Seek, SeekFrom};

/// A reader over a downloaded object body implementing `std::io::Read` and
/// `Seek`.
///
/// Handed out by [`B2Adapter::read_stream`](crate::B2Adapter::read_stream),
/// always positioned at offset 0. The body is fully materialized: the
/// remote client owns streaming transfer internals, so by the time this
/// layer sees content it is plain bytes.
#[derive(Debug, Clone)]
pub struct ContentReader {
    data: Bytes,
    /// Current position in the body
    position: u64,
}

impl ContentReader {
    /// Wrap an object body, positioned at offset 0.
    pub fn new(data: Bytes) -> Self {
        ContentReader { data, position: 0 }
    }

    /// Total size of the body in bytes.
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    /// Consume the reader and return the underlying body.
    pub fn into_bytes(self) -> Bytes {
        self.data
    }
}

impl Read for ContentReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        if self.position >= self.size() {
            return Ok(0); // EOF
        }

        let offset = self.position as usize;
        let to_read = buf.len().min(self.data.len() - offset);
        buf[..to_read].copy_from_slice(&self.data[offset..offset + to_read]);
        self.position += to_read as u64;
        Ok(to_read)
    }
}

impl Seek for ContentReader {
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        let size = self.size();
        let new_pos = match pos {
            SeekFrom::Start(offset) => offset,
            SeekFrom::End(offset) => {
                if offset > 0 {
                    return Err(std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        "Cannot seek beyond end of file",
                    ));
                }
                (size as i64 + offset) as u64
            }
            SeekFrom::Current(offset) => {
                let new_pos = self.position as i64 + offset;
                if new_pos < 0 {
                    return Err(std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        "Cannot seek before start of file",
                    ));
                }
                new_pos as u64
            }
        };

        if new_pos > size {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Cannot seek beyond end of file",
            ));
        }

        self.position = new_pos;
        Ok(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader() -> ContentReader {
        let data: Vec<u8> = (0..100).collect();
        ContentReader::new(Bytes::from(data))
    }

    #[test]
    fn starts_at_offset_zero() {
        let mut r = reader();
        let mut buf = [0u8; 10];
        r.read_exact(&mut buf).unwrap();
        assert_eq!(buf, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn reads_to_end() {
        let mut r = reader();
        let mut all = Vec::new();
        r.read_to_end(&mut all).unwrap();
        assert_eq!(all.len(), 100);
        assert_eq!(r.read(&mut [0u8; 8]).unwrap(), 0);
    }

    #[test]
    fn seek_variants() {
        let mut r = reader();
        let mut buf = [0u8; 4];

        assert_eq!(r.seek(SeekFrom::Start(50)).unwrap(), 50);
        r.read_exact(&mut buf).unwrap();
        assert_eq!(buf, [50, 51, 52, 53]);

        assert_eq!(r.seek(SeekFrom::Current(10)).unwrap(), 64);
        r.read_exact(&mut buf).unwrap();
        assert_eq!(buf, [64, 65, 66, 67]);

        assert_eq!(r.seek(SeekFrom::End(-4)).unwrap(), 96);
        r.read_exact(&mut buf).unwrap();
        assert_eq!(buf, [96, 97, 98, 99]);
    }

    #[test]
    fn out_of_range_seeks_are_rejected() {
        let mut r = reader();
        assert!(r.seek(SeekFrom::Start(101)).is_err());
        assert!(r.seek(SeekFrom::End(1)).is_err());
        assert!(r.seek(SeekFrom::Current(-1)).is_err());
    }

    #[test]
    fn empty_body() {
        let mut r = ContentReader::new(Bytes::new());
        assert_eq!(r.size(), 0);
        assert_eq!(r.read(&mut [0u8; 4]).unwrap(), 0);
        assert_eq!(r.seek(SeekFrom::Start(0)).unwrap(), 0);
    }
}
