//! JSON host format.
//!
//! Adjacency is read as a serialized [`MeshAdjacency`]; results are written as
//! a flat JSON array of integers.

use std::io::{Read, Write};

use crate::config::SymmetryOptions;
use crate::mesh_error::SymmetryError;
use crate::topology::adjacency::MeshAdjacency;

/// Parse mesh adjacency from a reader.
pub fn read_adjacency<R: Read>(reader: R) -> Result<MeshAdjacency, SymmetryError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parse run options from a reader; missing fields take their defaults.
pub fn read_options<R: Read>(reader: R) -> Result<SymmetryOptions, SymmetryError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Write a result array as JSON followed by a newline.
pub fn write_table<W: Write>(mut writer: W, table: &[i64]) -> Result<(), SymmetryError> {
    serde_json::to_writer(&mut writer, table)?;
    writer.write_all(b"\n")?;
    Ok(())
}
