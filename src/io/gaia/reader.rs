//! Decoder for the Gaia blob layout.

use crate::error::{GeoBlobError, GeoBlobResult};
use crate::geom::{Coord, CoordSeq, Geometry, GeometryFactory, GeometryKind, Ordinates, Point};
use crate::io::codec::BlobReader;
use crate::io::gaia::compress::read_coord_run;
use crate::io::gaia::{GaiaClass, MARK_END, MARK_ENTITY, MARK_MBR, MARK_START};

/// Options for [`from_gaia`].
#[derive(Debug, Clone, Copy)]
pub struct GaiaReadOptions {
    /// The widest ordinate set materialized into decoded coordinate
    /// sequences. The blob's type tag alone governs how many ordinates are
    /// parsed; this only bounds what is kept.
    pub handle_ordinates: Ordinates,
}

impl Default for GaiaReadOptions {
    fn default() -> Self {
        Self {
            handle_ordinates: Ordinates::Xyzm,
        }
    }
}

/// Decode a Gaia blob into a geometry built through `factory`.
pub fn from_gaia(
    buf: &[u8],
    options: &GaiaReadOptions,
    factory: &GeometryFactory,
) -> GeoBlobResult<Geometry> {
    let mut reader = BlobReader::new(buf);
    reader.expect_marker("start", MARK_START)?;
    let byte_order = reader.read_byte_order()?;
    reader.set_byte_order(byte_order);

    let srid = reader.read_i32()?;
    // the declared MBR is derivable from the body; skip it
    for _ in 0..4 {
        reader.read_f64()?;
    }
    reader.expect_marker("mbr", MARK_MBR)?;

    let mut geom = read_tagged_body(&mut reader, options.handle_ordinates, factory)?;
    reader.expect_marker("end", MARK_END)?;

    geom.set_srid(srid);
    Ok(geom)
}

fn read_tagged_body(
    reader: &mut BlobReader<'_>,
    handle: Ordinates,
    factory: &GeometryFactory,
) -> GeoBlobResult<Geometry> {
    let class = GaiaClass::from_code(reader.read_i32()?)?;
    read_body(reader, class, handle, factory)
}

fn read_body(
    reader: &mut BlobReader<'_>,
    class: GaiaClass,
    handle: Ordinates,
    factory: &GeometryFactory,
) -> GeoBlobResult<Geometry> {
    match class.kind {
        GeometryKind::Point => Ok(read_point_body(reader, class, handle, factory)?.into()),
        GeometryKind::LineString => {
            let count = reader.read_count()?;
            let coords = read_coord_run(reader, count, class.ordinates, class.compressed, handle)?;
            Ok(factory.create_line_string(coords).into())
        }
        GeometryKind::Polygon => {
            let rings = read_polygon_rings(reader, class, handle)?;
            Ok(factory.create_polygon(rings).into())
        }
        GeometryKind::MultiPoint => {
            let count = reader.read_count()?;
            let mut points = Vec::with_capacity(count);
            for _ in 0..count {
                let entity = read_entity_class(reader, GeometryKind::Point, "MULTIPOINT")?;
                points.push(read_point_body(reader, entity, handle, factory)?);
            }
            Ok(factory.create_multi_point(points).into())
        }
        GeometryKind::MultiLineString => {
            let count = reader.read_count()?;
            let mut line_strings = Vec::with_capacity(count);
            for _ in 0..count {
                let entity =
                    read_entity_class(reader, GeometryKind::LineString, "MULTILINESTRING")?;
                let point_count = reader.read_count()?;
                let coords = read_coord_run(
                    reader,
                    point_count,
                    entity.ordinates,
                    entity.compressed,
                    handle,
                )?;
                line_strings.push(factory.create_line_string(coords));
            }
            Ok(factory.create_multi_line_string(line_strings).into())
        }
        GeometryKind::MultiPolygon => {
            let count = reader.read_count()?;
            let mut polygons = Vec::with_capacity(count);
            for _ in 0..count {
                let entity = read_entity_class(reader, GeometryKind::Polygon, "MULTIPOLYGON")?;
                let rings = read_polygon_rings(reader, entity, handle)?;
                polygons.push(factory.create_polygon(rings));
            }
            Ok(factory.create_multi_polygon(polygons).into())
        }
        GeometryKind::GeometryCollection => {
            let count = reader.read_count()?;
            let mut geometries = Vec::with_capacity(count);
            for _ in 0..count {
                reader.expect_marker("entity", MARK_ENTITY)?;
                geometries.push(read_tagged_body(reader, handle, factory)?);
            }
            Ok(factory.create_geometry_collection(geometries).into())
        }
    }
}

/// Read an element's entity marker and type tag, requiring `expected` kind.
fn read_entity_class(
    reader: &mut BlobReader<'_>,
    expected: GeometryKind,
    container: &str,
) -> GeoBlobResult<GaiaClass> {
    reader.expect_marker("entity", MARK_ENTITY)?;
    let entity = GaiaClass::from_code(reader.read_i32()?)?;
    if entity.kind != expected {
        return Err(GeoBlobError::Malformed(format!(
            "expected {expected:?} entity in {container}, found {:?}",
            entity.kind
        )));
    }
    Ok(entity)
}

fn read_point_body(
    reader: &mut BlobReader<'_>,
    class: GaiaClass,
    handle: Ordinates,
    factory: &GeometryFactory,
) -> GeoBlobResult<Point> {
    let x = reader.read_f64()?;
    let y = reader.read_f64()?;
    let z = if class.ordinates.has_z() {
        reader.read_f64()?
    } else {
        f64::NAN
    };
    let m = if class.ordinates.has_m() {
        reader.read_f64()?
    } else {
        f64::NAN
    };

    let target = class.ordinates.intersection(handle);
    let mut coords = factory.create_coord_seq(1, target);
    // a NaN,NaN tuple is the wire form of an empty point
    if !(x.is_nan() && y.is_nan()) {
        coords.push(Coord { x, y, z, m }.retain(target));
    }
    Ok(factory.create_point(coords))
}

fn read_polygon_rings(
    reader: &mut BlobReader<'_>,
    class: GaiaClass,
    handle: Ordinates,
) -> GeoBlobResult<Vec<CoordSeq>> {
    let ring_count = reader.read_count()?;
    let mut rings = Vec::with_capacity(ring_count);
    for _ in 0..ring_count {
        let point_count = reader.read_count()?;
        rings.push(read_coord_run(
            reader,
            point_count,
            class.ordinates,
            class.compressed,
            handle,
        )?);
    }
    Ok(rings)
}
