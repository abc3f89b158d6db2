//! Binary STL writing and reading.
//!
//! # Binary Format
//!
//! ```text
//! UINT8[80]    – Header (not meaningful, must not be parsed)
//! UINT32       – Number of triangles, little-endian
//! foreach triangle
//!     REAL32[3] – Normal vector
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (always 0)
//! end
//! ```
//!
//! All floats are little-endian IEEE-754 single precision. The writer
//! computes each normal as the normalized cross product of the triangle's
//! edges in winding order; a degenerate triangle gets `(0, 0, 0)` rather
//! than failing.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use relief_types::{Triangle, TriangleMesh};
use tracing::debug;

use crate::error::{IoError, IoResult};

/// STL binary header size in bytes.
const HEADER_SIZE: usize = 80;

/// Size of one triangle record (normal + 3 vertices + attribute).
const TRIANGLE_SIZE: usize = 50;

/// Save a mesh as binary STL, atomically.
///
/// The bytes are written to a temporary file in the destination's
/// directory and renamed over the target only once the whole mesh has
/// been serialized and flushed. A failure at any point leaves the
/// destination untouched; no partially written file is ever visible.
///
/// The header content is a fixed tag and identical across runs, so the
/// same mesh always produces byte-identical output.
///
/// # Errors
///
/// Returns an error if the destination directory cannot be written or any
/// write fails.
///
/// # Example
///
/// ```no_run
/// use relief_io::save_stl;
/// use relief_types::TriangleMesh;
///
/// let mesh = TriangleMesh::new();
/// save_stl(&mesh, "out/surface.stl").unwrap();
/// ```
pub fn save_stl<P: AsRef<Path>>(mesh: &TriangleMesh, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let temp = tempfile::NamedTempFile::new_in(dir)?;
    let mut writer = BufWriter::new(temp);
    write_stl(mesh, &mut writer)?;
    let temp = writer
        .into_inner()
        .map_err(|e| IoError::Io(e.into_error()))?;
    temp.persist(path).map_err(|e| IoError::Io(e.error))?;

    debug!(
        triangle_count = mesh.triangle_count(),
        path = %path.display(),
        "wrote binary STL"
    );

    Ok(())
}

/// Serialize a mesh as binary STL to a writer.
fn write_stl<W: Write>(mesh: &TriangleMesh, writer: &mut W) -> IoResult<()> {
    // 80-byte header, padded with spaces. Fixed content for determinism.
    let mut header = [b' '; HEADER_SIZE];
    let tag = b"Binary STL generated by reliefforge relief-io";
    header[..tag.len()].copy_from_slice(tag);
    writer.write_all(&header)?;

    #[allow(clippy::cast_possible_truncation)]
    // Meshes beyond u32 triangles are unsupported by the format
    let count = mesh.triangle_count() as u32;
    writer.write_all(&count.to_le_bytes())?;

    for tri in mesh {
        let (nx, ny, nz) = tri
            .normal()
            .map_or((0.0, 0.0, 0.0), |n| (n.x, n.y, n.z));
        write_vec3(writer, nx, ny, nz)?;
        for v in tri.vertices() {
            write_vec3(writer, v.x, v.y, v.z)?;
        }
        writer.write_all(&0u16.to_le_bytes())?;
    }

    writer.flush()?;
    Ok(())
}

/// Write three f64 components as little-endian f32.
fn write_vec3<W: Write>(writer: &mut W, x: f64, y: f64, z: f64) -> IoResult<()> {
    #[allow(clippy::cast_possible_truncation)]
    // f64 to f32 is intentional: STL stores single precision
    {
        writer.write_all(&(x as f32).to_le_bytes())?;
        writer.write_all(&(y as f32).to_le_bytes())?;
        writer.write_all(&(z as f32).to_le_bytes())?;
    }
    Ok(())
}

/// Load a binary STL file.
///
/// Stored normals are discarded; they are derivable from the vertices.
/// ASCII STL input is rejected with an error rather than parsed.
///
/// # Errors
///
/// Returns an error if the file cannot be read, looks like ASCII STL, or
/// ends before its declared triangle count.
pub fn load_stl<P: AsRef<Path>>(path: P) -> IoResult<TriangleMesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;
    let mut reader = BufReader::new(file);

    let mut header = [0u8; HEADER_SIZE];
    reader.read_exact(&mut header).map_err(|_| {
        IoError::invalid_content("file too small to be a binary STL header")
    })?;

    // Binary headers routinely contain nulls; an ASCII file starts with
    // "solid" and has none.
    if header.starts_with(b"solid") && !header.contains(&0) {
        return Err(IoError::invalid_content(
            "ASCII STL is not supported; expected binary",
        ));
    }

    let mut count_buf = [0u8; 4];
    reader
        .read_exact(&mut count_buf)
        .map_err(|_| IoError::invalid_content("missing triangle count"))?;
    let count = u32::from_le_bytes(count_buf);

    let mut mesh = TriangleMesh::with_capacity(count as usize);
    let mut record = [0u8; TRIANGLE_SIZE];
    for i in 0..count {
        if reader.read_exact(&mut record).is_err() {
            return Err(IoError::TruncatedStl {
                expected: count,
                got: i,
            });
        }
        // Skip the 12 normal bytes; vertices start at offset 12.
        mesh.push(Triangle::from_arrays(
            read_vec3(&record[12..24]),
            read_vec3(&record[24..36]),
            read_vec3(&record[36..48]),
        ));
    }

    Ok(mesh)
}

/// Read three little-endian f32 components as f64.
fn read_vec3(buf: &[u8]) -> [f64; 3] {
    let x = f32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    let y = f32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
    let z = f32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]);
    [f64::from(x), f64::from(y), f64::from(z)]
}
