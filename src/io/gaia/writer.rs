//! Encoder for the Gaia blob layout.

use crate::error::GeoBlobResult;
use crate::geom::{CoordSeq, Geometry, GeometryKind, Ordinates};
use crate::io::codec::{BlobWriter, Endianness};
use crate::io::gaia::compress::write_coord_run;
use crate::io::gaia::{GaiaClass, MARK_END, MARK_ENTITY, MARK_MBR, MARK_START};
use crate::io::resolve_ordinates;

/// Options for [`to_gaia`].
#[derive(Debug, Clone, Copy)]
pub struct GaiaWriteOptions {
    /// The widest ordinate set the writer may emit. The blob declares the
    /// intersection of this and the ordinates actually present in the
    /// geometry.
    pub handle_ordinates: Ordinates,
    /// Delta-compress LineString and Polygon coordinate runs. Point-like
    /// geometries and collection headers never carry the compression bit.
    pub use_compressed: bool,
}

impl Default for GaiaWriteOptions {
    fn default() -> Self {
        Self {
            handle_ordinates: Ordinates::Xyzm,
            use_compressed: false,
        }
    }
}

/// Encode a geometry as a Gaia blob.
pub fn to_gaia(geom: &Geometry, options: &GaiaWriteOptions) -> GeoBlobResult<Vec<u8>> {
    let ordinates = resolve_ordinates(geom, options.handle_ordinates);

    let mut writer = BlobWriter::new(Endianness::LittleEndian);
    writer.write_u8(MARK_START);
    writer.write_u8(Endianness::LittleEndian.into());
    writer.write_i32(geom.srid());

    let envelope = geom.envelope();
    writer.write_f64(envelope.min_x);
    writer.write_f64(envelope.min_y);
    writer.write_f64(envelope.max_x);
    writer.write_f64(envelope.max_y);
    writer.write_u8(MARK_MBR);

    write_tagged_body(&mut writer, geom, ordinates, options.use_compressed)?;

    writer.write_u8(MARK_END);
    Ok(writer.into_inner())
}

/// Write one geometry body with its leading type+flag int32. Collections
/// recurse through here for every element.
fn write_tagged_body(
    writer: &mut BlobWriter,
    geom: &Geometry,
    ordinates: Ordinates,
    use_compressed: bool,
) -> GeoBlobResult<()> {
    let class = GaiaClass::new(geom.kind(), ordinates, use_compressed);
    writer.write_i32(class.code());

    match geom {
        Geometry::Point(g) => {
            write_point_body(writer, g.coords(), ordinates);
            Ok(())
        }
        Geometry::LineString(g) => write_line_string_body(writer, g.coords(), ordinates, class.compressed),
        Geometry::Polygon(g) => write_polygon_body(writer, g.rings(), ordinates, class.compressed),
        Geometry::MultiPoint(g) => {
            writer.write_count(g.points().len())?;
            let entity = GaiaClass::new(GeometryKind::Point, ordinates, false);
            for point in g.points() {
                writer.write_u8(MARK_ENTITY);
                writer.write_i32(entity.code());
                write_point_body(writer, point.coords(), ordinates);
            }
            Ok(())
        }
        Geometry::MultiLineString(g) => {
            writer.write_count(g.line_strings().len())?;
            let entity = GaiaClass::new(GeometryKind::LineString, ordinates, use_compressed);
            for line_string in g.line_strings() {
                writer.write_u8(MARK_ENTITY);
                writer.write_i32(entity.code());
                write_line_string_body(writer, line_string.coords(), ordinates, entity.compressed)?;
            }
            Ok(())
        }
        Geometry::MultiPolygon(g) => {
            writer.write_count(g.polygons().len())?;
            let entity = GaiaClass::new(GeometryKind::Polygon, ordinates, use_compressed);
            for polygon in g.polygons() {
                writer.write_u8(MARK_ENTITY);
                writer.write_i32(entity.code());
                write_polygon_body(writer, polygon.rings(), ordinates, entity.compressed)?;
            }
            Ok(())
        }
        Geometry::GeometryCollection(g) => {
            writer.write_count(g.geometries().len())?;
            for geometry in g.geometries() {
                writer.write_u8(MARK_ENTITY);
                write_tagged_body(writer, geometry, ordinates, use_compressed)?;
            }
            Ok(())
        }
    }
}

// A point body is the bare coordinate tuple, no count prefix. An empty point
// has no coordinate to write, so its tuple is NaN-filled.
fn write_point_body(writer: &mut BlobWriter, coords: &CoordSeq, ordinates: Ordinates) {
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

fn write_line_string_body(
    writer: &mut BlobWriter,
    coords: &CoordSeq,
    ordinates: Ordinates,
    compressed: bool,
) -> GeoBlobResult<()> {
    writer.write_count(coords.len())?;
    write_coord_run(writer, coords, ordinates, compressed);
    Ok(())
}

fn write_polygon_body(
    writer: &mut BlobWriter,
    rings: &[CoordSeq],
    ordinates: Ordinates,
    compressed: bool,
) -> GeoBlobResult<()> {
    writer.write_count(rings.len())?;
    for ring in rings {
        write_line_string_body(writer, ring, ordinates, compressed)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::linestring::{ls0, ls0_z};
    use crate::test::multi::mp0;
    use crate::test::point::{p0, p0_zm};

    #[test]
    fn xy_point_blob_layout() {
        let mut geom: Geometry = p0().into();
        geom.set_srid(4326);
        let blob = to_gaia(&geom, &GaiaWriteOptions::default()).unwrap();

        // 39-byte header, int32 class, two doubles, end marker
        assert_eq!(blob.len(), 60);
        assert_eq!(blob[0], MARK_START);
        assert_eq!(blob[1], 0x01);
        assert_eq!(&blob[2..6], &4326i32.to_le_bytes());
        assert_eq!(blob[38], MARK_MBR);
        assert_eq!(&blob[39..43], &1i32.to_le_bytes());
        assert_eq!(&blob[43..51], &10f64.to_le_bytes());
        assert_eq!(blob[59], MARK_END);
    }

    #[test]
    fn ordinate_request_clips_the_class_code() {
        let geom: Geometry = p0_zm().into();
        let options = GaiaWriteOptions {
            handle_ordinates: Ordinates::Xym,
            use_compressed: false,
        };
        let blob = to_gaia(&geom, &options).unwrap();
        // XYM point class, and a 3-ordinate tuple
        assert_eq!(&blob[39..43], &2001i32.to_le_bytes());
        assert_eq!(blob.len(), 39 + 4 + 24 + 1);
    }

    #[test]
    fn compression_bit_set_only_for_line_like_kinds() {
        let line: Geometry = ls0().into();
        let options = GaiaWriteOptions {
            handle_ordinates: Ordinates::Xyzm,
            use_compressed: true,
        };
        let blob = to_gaia(&line, &options).unwrap();
        assert_eq!(&blob[39..43], &1_000_002i32.to_le_bytes());

        let point: Geometry = p0().into();
        let blob = to_gaia(&point, &options).unwrap();
        assert_eq!(&blob[39..43], &1i32.to_le_bytes());
    }

    #[test]
    fn multi_point_entities_are_tagged_uncompressed() {
        let geom: Geometry = mp0().into();
        let options = GaiaWriteOptions {
            handle_ordinates: Ordinates::Xyzm,
            use_compressed: true,
        };
        let blob = to_gaia(&geom, &options).unwrap();
        // XYZM multipoint header, entities tagged as plain XYZM points
        assert_eq!(&blob[39..43], &3004i32.to_le_bytes());
        assert_eq!(&blob[43..47], &2i32.to_le_bytes());
        assert_eq!(blob[47], MARK_ENTITY);
        assert_eq!(&blob[48..52], &3001i32.to_le_bytes());
    }

    #[test]
    fn envelope_spans_the_geometry() {
        let geom: Geometry = ls0_z().into();
        let blob = to_gaia(&geom, &GaiaWriteOptions::default()).unwrap();
        let min_x = f64::from_le_bytes(blob[6..14].try_into().unwrap());
        let min_y = f64::from_le_bytes(blob[14..22].try_into().unwrap());
        let max_x = f64::from_le_bytes(blob[22..30].try_into().unwrap());
        let max_y = f64::from_le_bytes(blob[30..38].try_into().unwrap());
        assert_eq!((min_x, min_y, max_x, max_y), (10., 10., 10., 20.));
    }
}
