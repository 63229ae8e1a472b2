//! Fixed binary encoding of a [`Matrix`].
//!
//! # Format
//!
//! ```text
//! +------------------+
//! | rows (8 bytes)   |  i64 little-endian
//! +------------------+
//! | cols (8 bytes)   |  i64 little-endian
//! +------------------+
//! | data             |  rows * cols f64 little-endian, row-major
//! +------------------+
//! ```
//!
//! There is no magic, version field, padding or compression. Bytes past the
//! payload are ignored by [`decode`].

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::error::MatrixError;
use crate::matrix::{validate_dims, Dims, Matrix};

/// Header size: rows (8) + cols (8).
pub const HEADER_SIZE: usize = 16;

const F64_SIZE: usize = std::mem::size_of::<f64>();

/// Validated header: shape plus the payload length it announces.
struct Header {
    rows: usize,
    cols: usize,
    payload_len: usize,
}

impl Header {
    fn parse(bytes: &[u8]) -> std::result::Result<Self, MatrixError> {
        let (rows, cols) = match (read_i64(bytes, 0), read_i64(bytes, 8)) {
            (Some(rows), Some(cols)) => (rows, cols),
            _ => {
                return Err(MatrixError::TruncatedInput {
                    needed: HEADER_SIZE,
                    available: bytes.len(),
                })
            }
        };
        let Dims { rows, cols, len } = validate_dims(rows, cols)?;
        // An announced size that does not fit in usize can never be satisfied.
        let payload_len = len
            .checked_mul(F64_SIZE)
            .ok_or(MatrixError::TruncatedInput {
                needed: usize::MAX,
                available: bytes.len(),
            })?;
        Ok(Self {
            rows,
            cols,
            payload_len,
        })
    }

    fn total_len(&self) -> usize {
        HEADER_SIZE.saturating_add(self.payload_len)
    }
}

fn read_i64(bytes: &[u8], at: usize) -> Option<i64> {
    Some(i64::from_le_bytes(bytes.get(at..at + 8)?.try_into().ok()?))
}

fn decode_payload(header: &Header, payload: &[u8]) -> Matrix {
    let data = payload[..header.payload_len]
        .chunks_exact(F64_SIZE)
        .map(|chunk| {
            let mut raw = [0u8; F64_SIZE];
            raw.copy_from_slice(chunk);
            f64::from_le_bytes(raw)
        })
        .collect();
    Matrix::from_parts(header.rows, header.cols, data)
}

/// Serialize `m` into `16 + 8 * rows * cols` bytes.
pub fn encode(m: &Matrix) -> Vec<u8> {
    let mut buf = Vec::with_capacity(HEADER_SIZE + m.as_slice().len() * F64_SIZE);
    buf.extend_from_slice(&(m.nrows() as i64).to_le_bytes());
    buf.extend_from_slice(&(m.ncols() as i64).to_le_bytes());
    for value in m.as_slice() {
        buf.extend_from_slice(&value.to_le_bytes());
    }
    buf
}

/// Parse a matrix from the front of `bytes`.
pub fn decode(bytes: &[u8]) -> std::result::Result<Matrix, MatrixError> {
    let header = Header::parse(bytes)?;
    let needed = header.total_len();
    if bytes.len() < needed {
        return Err(MatrixError::TruncatedInput {
            needed,
            available: bytes.len(),
        });
    }
    log::trace!("decoded header ({}, {})", header.rows, header.cols);
    Ok(decode_payload(&header, &bytes[HEADER_SIZE..]))
}

/// Stream `m` into `writer` in the binary format.
pub fn write_to<W: Write>(m: &Matrix, mut writer: W) -> std::io::Result<()> {
    writer.write_all(&encode(m))?;
    writer.flush()
}

/// Read exactly one matrix from `reader`, leaving any following bytes unread.
pub fn read_from<R: Read>(mut reader: R) -> Result<Matrix> {
    let mut head = Vec::with_capacity(HEADER_SIZE);
    (&mut reader)
        .take(HEADER_SIZE as u64)
        .read_to_end(&mut head)
        .context("Failed to read matrix header")?;
    let header = Header::parse(&head)?;

    let mut payload = Vec::with_capacity(header.payload_len.min(1 << 20));
    reader
        .take(header.payload_len as u64)
        .read_to_end(&mut payload)
        .context("Failed to read matrix payload")?;
    if payload.len() < header.payload_len {
        return Err(MatrixError::TruncatedInput {
            needed: header.total_len(),
            available: HEADER_SIZE + payload.len(),
        }
        .into());
    }
    Ok(decode_payload(&header, &payload))
}

/// Write `m` to a file, replacing any existing content.
pub fn save<P: AsRef<Path>>(m: &Matrix, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create matrix file: {}", path.display()))?;
    write_to(m, BufWriter::new(file))
        .with_context(|| format!("Failed to write matrix file: {}", path.display()))?;
    log::debug!("saved {:?} matrix to {}", m.shape(), path.display());
    Ok(())
}

/// Load a matrix previously written by [`save`].
pub fn load<P: AsRef<Path>>(path: P) -> Result<Matrix> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open matrix file: {}", path.display()))?;
    let m = read_from(BufReader::new(file))
        .with_context(|| format!("Failed to decode matrix file: {}", path.display()))?;
    log::debug!("loaded {:?} matrix from {}", m.shape(), path.display());
    Ok(m)
}
