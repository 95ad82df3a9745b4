//! Raw little-endian `i16` artifacts.
//!
//! No header, length prefix or checksum: a file is exactly two bytes per
//! value. The engine knows the shapes.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Write each value as two little-endian bytes.
pub fn write_i16_le<W: Write>(writer: &mut W, values: &[i16]) -> io::Result<()> {
    for value in values {
        writer.write_all(&value.to_le_bytes())?;
    }
    Ok(())
}

/// Create (or truncate) `path` and write `values` to it.
///
/// A failure part way through leaves a partially written file behind.
pub fn write_artifact<P: AsRef<Path>>(path: P, values: &[i16]) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_i16_le(&mut writer, values)?;
    writer.flush()
}

/// Read little-endian `i16` values until end of input.
pub fn read_i16_le<R: Read>(reader: &mut R) -> io::Result<Vec<i16>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    if bytes.len() % 2 != 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("odd artifact length {}", bytes.len()),
        ));
    }
    Ok(bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect())
}

/// Read a whole artifact back.
pub fn read_artifact<P: AsRef<Path>>(path: P) -> io::Result<Vec<i16>> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    read_i16_le(&mut reader)
}
