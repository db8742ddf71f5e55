//! Encoder for the GeoPackage binary geometry format.

use crate::error::GeoBlobResult;
use crate::geom::{CoordSeq, Geometry, GeometryKind, Ordinates};
use crate::io::codec::{BlobWriter, Endianness};
use crate::io::gpkg::{
    wkb_type_code, EnvelopeIndicator, ENVELOPE_SHIFT, FLAG_BYTE_ORDER, FLAG_EMPTY, MAGIC,
    VERSION,
};
use crate::io::resolve_ordinates;

/// Options for [`to_gpkg`].
#[derive(Debug, Clone, Copy)]
pub struct GpkgWriteOptions {
    /// The widest ordinate set the writer may emit. The body declares the
    /// intersection of this and the ordinates actually present in the
    /// geometry.
    pub handle_ordinates: Ordinates,
}

impl Default for GpkgWriteOptions {
    fn default() -> Self {
        Self {
            handle_ordinates: Ordinates::Xyzm,
        }
    }
}

/// Encode a geometry as a GeoPackage blob (always little-endian).
pub fn to_gpkg(geom: &Geometry, options: &GpkgWriteOptions) -> GeoBlobResult<Vec<u8>> {
    let ordinates = resolve_ordinates(geom, options.handle_ordinates);
    let empty = geom.is_empty();

    // a point's envelope is degenerate, so none is written for it
    let indicator = if empty || geom.kind() == GeometryKind::Point {
        EnvelopeIndicator::None
    } else {
        EnvelopeIndicator::for_ordinates(ordinates)
    };

    let mut flags = FLAG_BYTE_ORDER;
    flags |= u8::from(indicator) << ENVELOPE_SHIFT;
    if empty {
        flags |= FLAG_EMPTY;
    }

    let mut writer = BlobWriter::new(Endianness::LittleEndian);
    writer.write_u8(MAGIC[0]);
    writer.write_u8(MAGIC[1]);
    writer.write_u8(VERSION);
    writer.write_u8(flags);
    writer.write_i32(geom.srid());

    if indicator != EnvelopeIndicator::None {
        let envelope = geom.envelope();
        writer.write_f64(envelope.min_x);
        writer.write_f64(envelope.max_x);
        writer.write_f64(envelope.min_y);
        writer.write_f64(envelope.max_y);
        if ordinates.has_z() {
            let (min_z, max_z) = ordinate_range(geom, |seq, i| seq.z(i));
            writer.write_f64(min_z);
            writer.write_f64(max_z);
        }
        if ordinates.has_m() {
            let (min_m, max_m) = ordinate_range(geom, |seq, i| seq.m(i));
            writer.write_f64(min_m);
            writer.write_f64(max_m);
        }
    }

    write_wkb_geometry(&mut writer, geom, ordinates)?;
    Ok(writer.into_inner())
}

/// Min/max of one optional ordinate across the geometry, NaN values skipped.
fn ordinate_range(geom: &Geometry, get: impl Fn(&CoordSeq, usize) -> f64) -> (f64, f64) {
    let mut min = f64::NAN;
    let mut max = f64::NAN;
    for seq in geom.coord_seqs() {
        for i in 0..seq.len() {
            let value = get(seq, i);
            if value.is_nan() {
                continue;
            }
            if min.is_nan() || value < min {
                min = value;
            }
            if max.is_nan() || value > max {
                max = value;
            }
        }
    }
    (min, max)
}

/// Write one complete WKB geometry: byte order, extended type code, body.
fn write_wkb_geometry(
    writer: &mut BlobWriter,
    geom: &Geometry,
    ordinates: Ordinates,
) -> GeoBlobResult<()> {
    match geom {
        Geometry::Point(g) => {
            write_wkb_header(writer, GeometryKind::Point, ordinates);
            write_point_coords(writer, g.coords(), ordinates);
            Ok(())
        }
        Geometry::LineString(g) => {
            write_wkb_header(writer, GeometryKind::LineString, ordinates);
            write_coord_seq(writer, g.coords(), ordinates)
        }
        Geometry::Polygon(g) => {
            write_wkb_header(writer, GeometryKind::Polygon, ordinates);
            write_wkb_polygon_body(writer, g.rings(), ordinates)
        }
        Geometry::MultiPoint(g) => {
            write_wkb_header(writer, GeometryKind::MultiPoint, ordinates);
            writer.write_count(g.points().len())?;
            for point in g.points() {
                write_wkb_header(writer, GeometryKind::Point, ordinates);
                write_point_coords(writer, point.coords(), ordinates);
            }
            Ok(())
        }
        Geometry::MultiLineString(g) => {
            write_wkb_header(writer, GeometryKind::MultiLineString, ordinates);
            writer.write_count(g.line_strings().len())?;
            for line_string in g.line_strings() {
                write_wkb_header(writer, GeometryKind::LineString, ordinates);
                write_coord_seq(writer, line_string.coords(), ordinates)?;
            }
            Ok(())
        }
        Geometry::MultiPolygon(g) => {
            write_wkb_header(writer, GeometryKind::MultiPolygon, ordinates);
            writer.write_count(g.polygons().len())?;
            for polygon in g.polygons() {
                write_wkb_header(writer, GeometryKind::Polygon, ordinates);
                write_wkb_polygon_body(writer, polygon.rings(), ordinates)?;
            }
            Ok(())
        }
        Geometry::GeometryCollection(g) => {
            write_wkb_header(writer, GeometryKind::GeometryCollection, ordinates);
            writer.write_count(g.geometries().len())?;
            for geometry in g.geometries() {
                write_wkb_geometry(writer, geometry, ordinates)?;
            }
            Ok(())
        }
    }
}

// Every WKB geometry, nested ones included, leads with its own byte order
// and extended type code.
fn write_wkb_header(writer: &mut BlobWriter, kind: GeometryKind, ordinates: Ordinates) {
    writer.write_u8(Endianness::LittleEndian.into());
    writer.write_u32(wkb_type_code(kind, ordinates));
}

fn write_wkb_polygon_body(
    writer: &mut BlobWriter,
    rings: &[CoordSeq],
    ordinates: Ordinates,
) -> GeoBlobResult<()> {
    writer.write_count(rings.len())?;
    for ring in rings {
        write_coord_seq(writer, ring, ordinates)?;
    }
    Ok(())
}

// WKB has no count on points; an empty point is written as NaN ordinates.
fn write_point_coords(writer: &mut BlobWriter, coords: &CoordSeq, ordinates: Ordinates) {
    let (x, y, z, m) = match coords.coord(0) {
        Some(coord) => (coord.x, coord.y, coord.z, coord.m),
        None => (f64::NAN, f64::NAN, f64::NAN, f64::NAN),
    };
    writer.write_f64(x);
    writer.write_f64(y);
    if ordinates.has_z() {
        writer.write_f64(z);
    }
    if ordinates.has_m() {
        writer.write_f64(m);
    }
}

fn write_coord_seq(
    writer: &mut BlobWriter,
    coords: &CoordSeq,
    ordinates: Ordinates,
) -> GeoBlobResult<()> {
    writer.write_count(coords.len())?;
    for i in 0..coords.len() {
        writer.write_f64(coords.x(i));
        writer.write_f64(coords.y(i));
        if ordinates.has_z() {
            writer.write_f64(coords.z(i));
        }
        if ordinates.has_m() {
            writer.write_f64(coords.m(i));
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::linestring::{ls0, ls0_z};
    use crate::test::point::{p0, p_empty};

    #[test]
    fn point_header_flags() {
        let blob = to_gpkg(&p0().into(), &GpkgWriteOptions::default()).unwrap();
        assert_eq!(&blob[0..2], b"GP");
        assert_eq!(blob[2], 0);
        // little-endian, no envelope
        assert_eq!(blob[3], 1);
        // header (8) + byte order (1) + type (4) + x,y
        assert_eq!(blob.len(), 8 + 1 + 4 + 16);
        assert_eq!(&blob[9..13], &1u32.to_le_bytes());
    }

    #[test]
    fn line_string_header_flags() {
        let blob = to_gpkg(&ls0().into(), &GpkgWriteOptions::default()).unwrap();
        // little-endian + XY envelope code
        assert_eq!(blob[3], 3);
        // envelope order is minx, maxx, miny, maxy
        let min_x = f64::from_le_bytes(blob[8..16].try_into().unwrap());
        let max_x = f64::from_le_bytes(blob[16..24].try_into().unwrap());
        let min_y = f64::from_le_bytes(blob[24..32].try_into().unwrap());
        let max_y = f64::from_le_bytes(blob[32..40].try_into().unwrap());
        assert_eq!((min_x, max_x, min_y, max_y), (10., 10., 10., 20.));
    }

    #[test]
    fn empty_point_header_flags() {
        let blob = to_gpkg(&p_empty().into(), &GpkgWriteOptions::default()).unwrap();
        // little-endian + empty bit, envelope code 0
        assert_eq!(blob[3], 17);
        // the body is a NaN,NaN point
        assert_eq!(blob.len(), 8 + 1 + 4 + 16);
        assert!(f64::from_le_bytes(blob[13..21].try_into().unwrap()).is_nan());
    }

    #[test]
    fn z_envelope_written_for_xyz_geometry() {
        let blob = to_gpkg(&ls0_z().into(), &GpkgWriteOptions::default()).unwrap();
        // little-endian + XYZ envelope code 2
        assert_eq!(blob[3], 1 | (2 << 1));
        let min_z = f64::from_le_bytes(blob[40..48].try_into().unwrap());
        let max_z = f64::from_le_bytes(blob[48..56].try_into().unwrap());
        assert_eq!((min_z, max_z), (5., 6.));
        // body type code is LineString Z
        assert_eq!(&blob[57..61], &1002u32.to_le_bytes());
    }

    #[test]
    fn srid_is_carried_in_the_header() {
        let mut geom: Geometry = p0().into();
        geom.set_srid(3004);
        let blob = to_gpkg(&geom, &GpkgWriteOptions::default()).unwrap();
        assert_eq!(&blob[4..8], &3004i32.to_le_bytes());
    }
}
