//! The delta/float compression scheme shared by line-like coordinate runs.
//!
//! A compressed run keeps its first and last coordinate at full double
//! precision and stores every interior coordinate as the float32 difference
//! from the preceding coordinate. Deltas are taken against the original
//! double-precision values on encode, so decode error is bounded by a single
//! float rounding step per coordinate instead of compounding along the run.

use crate::error::GeoBlobResult;
use crate::geom::{Coord, CoordSeq, Ordinates};
use crate::io::codec::{BlobReader, BlobWriter};

/// Encode a coordinate run, compressed or not.
///
/// Runs of fewer than three coordinates never contain delta-encoded points,
/// compression flag aside.
pub(crate) fn write_coord_run(
    writer: &mut BlobWriter,
    seq: &CoordSeq,
    ordinates: Ordinates,
    compressed: bool,
) {
    let count = seq.len();
    for i in 0..count {
        if !compressed || i == 0 || i + 1 == count {
            writer.write_f64(seq.x(i));
            writer.write_f64(seq.y(i));
            if ordinates.has_z() {
                writer.write_f64(seq.z(i));
            }
            if ordinates.has_m() {
                writer.write_f64(seq.m(i));
            }
        } else {
            writer.write_f32((seq.x(i) - seq.x(i - 1)) as f32);
            writer.write_f32((seq.y(i) - seq.y(i - 1)) as f32);
            if ordinates.has_z() {
                writer.write_f32((seq.z(i) - seq.z(i - 1)) as f32);
            }
            if ordinates.has_m() {
                writer.write_f32((seq.m(i) - seq.m(i - 1)) as f32);
            }
        }
    }
}

/// Decode a coordinate run of `count` coordinates.
///
/// `ordinates` is what the blob's type tag declares and governs how many
/// values are parsed; `handle` only bounds which of them are materialized
/// into the returned sequence.
pub(crate) fn read_coord_run(
    reader: &mut BlobReader<'_>,
    count: usize,
    ordinates: Ordinates,
    compressed: bool,
    handle: Ordinates,
) -> GeoBlobResult<CoordSeq> {
    let target = ordinates.intersection(handle);
    let mut seq = CoordSeq::with_capacity(count, target);

    let mut prev = Coord::xyzm(0., 0., 0., 0.);
    for i in 0..count {
        let coord = if !compressed || i == 0 || i + 1 == count {
            Coord {
                x: reader.read_f64()?,
                y: reader.read_f64()?,
                z: if ordinates.has_z() {
                    reader.read_f64()?
                } else {
                    f64::NAN
                },
                m: if ordinates.has_m() {
                    reader.read_f64()?
                } else {
                    f64::NAN
                },
            }
        } else {
            // deltas accumulate onto the previous decoded coordinate
            Coord {
                x: prev.x + f64::from(reader.read_f32()?),
                y: prev.y + f64::from(reader.read_f32()?),
                z: if ordinates.has_z() {
                    prev.z + f64::from(reader.read_f32()?)
                } else {
                    f64::NAN
                },
                m: if ordinates.has_m() {
                    prev.m + f64::from(reader.read_f32()?)
                } else {
                    f64::NAN
                },
            }
        };
        prev = coord;
        seq.push(coord.retain(target));
    }

    Ok(seq)
}
