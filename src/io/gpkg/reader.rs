//! Decoder for the GeoPackage binary geometry format.

use crate::error::{GeoBlobError, GeoBlobResult};
use crate::geom::{Coord, CoordSeq, Geometry, GeometryFactory, GeometryKind, Ordinates};
use crate::io::codec::{BlobReader, Endianness};
use crate::io::gpkg::{
    parse_wkb_type, EnvelopeIndicator, ENVELOPE_MASK, ENVELOPE_SHIFT, FLAG_BYTE_ORDER,
    FLAG_EXTENDED, MAGIC,
};

/// Options for [`from_gpkg`].
#[derive(Debug, Clone, Copy)]
pub struct GpkgReadOptions {
    /// The widest ordinate set materialized into decoded coordinate
    /// sequences; the body's type codes govern what is parsed.
    pub handle_ordinates: Ordinates,
    /// Whether the blob's SRID is copied onto the decoded geometry. When
    /// disabled the geometry keeps the factory's SRID even though the blob
    /// always carries the original value.
    pub handle_srid: bool,
}

impl Default for GpkgReadOptions {
    fn default() -> Self {
        Self {
            handle_ordinates: Ordinates::Xyzm,
            handle_srid: true,
        }
    }
}

/// Decode a GeoPackage blob into a geometry built through `factory`.
pub fn from_gpkg(
    buf: &[u8],
    options: &GpkgReadOptions,
    factory: &GeometryFactory,
) -> GeoBlobResult<Geometry> {
    let mut reader = BlobReader::new(buf);
    reader.expect_marker("magic", MAGIC[0])?;
    reader.expect_marker("magic", MAGIC[1])?;
    let _version = reader.read_u8()?;

    let flags = reader.read_u8()?;
    if flags & FLAG_EXTENDED != 0 {
        return Err(GeoBlobError::Malformed(
            "extended geometry types are not supported".to_string(),
        ));
    }
    let byte_order = if flags & FLAG_BYTE_ORDER != 0 {
        Endianness::LittleEndian
    } else {
        Endianness::BigEndian
    };
    reader.set_byte_order(byte_order);

    let indicator_code = (flags >> ENVELOPE_SHIFT) & ENVELOPE_MASK;
    let indicator = EnvelopeIndicator::try_from(indicator_code).map_err(|_| {
        GeoBlobError::Malformed(format!("invalid envelope indicator {indicator_code}"))
    })?;

    let srid = reader.read_i32()?;
    // the envelope is derivable from the body; skip it
    for _ in 0..indicator.num_doubles() {
        reader.read_f64()?;
    }

    let mut geom = read_wkb_geometry(&mut reader, options.handle_ordinates, factory)?;
    if options.handle_srid {
        geom.set_srid(srid);
    }
    Ok(geom)
}

fn read_wkb_geometry(
    reader: &mut BlobReader<'_>,
    handle: Ordinates,
    factory: &GeometryFactory,
) -> GeoBlobResult<Geometry> {
    let byte_order = reader.read_byte_order()?;
    reader.set_byte_order(byte_order);
    let (kind, ordinates) = parse_wkb_type(reader.read_u32()?)?;

    match kind {
        GeometryKind::Point => {
            let coords = read_point_coords(reader, ordinates, handle, factory)?;
            Ok(factory.create_point(coords).into())
        }
        GeometryKind::LineString => {
            let coords = read_coord_seq(reader, ordinates, handle)?;
            Ok(factory.create_line_string(coords).into())
        }
        GeometryKind::Polygon => {
            let rings = read_polygon_rings(reader, ordinates, handle)?;
            Ok(factory.create_polygon(rings).into())
        }
        GeometryKind::MultiPoint => {
            let count = reader.read_count()?;
            let mut points = Vec::with_capacity(count);
            for _ in 0..count {
                let point = read_wkb_geometry(reader, handle, factory)?
                    .into_point()
                    .map_err(|other| wrong_element(&other, "MULTIPOINT"))?;
                points.push(point);
            }
            Ok(factory.create_multi_point(points).into())
        }
        GeometryKind::MultiLineString => {
            let count = reader.read_count()?;
            let mut line_strings = Vec::with_capacity(count);
            for _ in 0..count {
                let line_string = read_wkb_geometry(reader, handle, factory)?
                    .into_line_string()
                    .map_err(|other| wrong_element(&other, "MULTILINESTRING"))?;
                line_strings.push(line_string);
            }
            Ok(factory.create_multi_line_string(line_strings).into())
        }
        GeometryKind::MultiPolygon => {
            let count = reader.read_count()?;
            let mut polygons = Vec::with_capacity(count);
            for _ in 0..count {
                let polygon = read_wkb_geometry(reader, handle, factory)?
                    .into_polygon()
                    .map_err(|other| wrong_element(&other, "MULTIPOLYGON"))?;
                polygons.push(polygon);
            }
            Ok(factory.create_multi_polygon(polygons).into())
        }
        GeometryKind::GeometryCollection => {
            let count = reader.read_count()?;
            let mut geometries = Vec::with_capacity(count);
            for _ in 0..count {
                geometries.push(read_wkb_geometry(reader, handle, factory)?);
            }
            Ok(factory.create_geometry_collection(geometries).into())
        }
    }
}

fn wrong_element(found: &Geometry, container: &str) -> GeoBlobError {
    GeoBlobError::Malformed(format!(
        "unexpected {:?} element in {container}",
        found.kind()
    ))
}

fn read_point_coords(
    reader: &mut BlobReader<'_>,
    ordinates: Ordinates,
    handle: Ordinates,
    factory: &GeometryFactory,
) -> GeoBlobResult<CoordSeq> {
    let x = reader.read_f64()?;
    let y = reader.read_f64()?;
    let z = if ordinates.has_z() {
        reader.read_f64()?
    } else {
        f64::NAN
    };
    let m = if ordinates.has_m() {
        reader.read_f64()?
    } else {
        f64::NAN
    };

    let target = ordinates.intersection(handle);
    let mut coords = factory.create_coord_seq(1, target);
    // NaN,NaN is the wire form of an empty point
    if !(x.is_nan() && y.is_nan()) {
        coords.push(Coord { x, y, z, m }.retain(target));
    }
    Ok(coords)
}

fn read_coord_seq(
    reader: &mut BlobReader<'_>,
    ordinates: Ordinates,
    handle: Ordinates,
) -> GeoBlobResult<CoordSeq> {
    let count = reader.read_count()?;
    let target = ordinates.intersection(handle);
    let mut seq = CoordSeq::with_capacity(count, target);
    for _ in 0..count {
        let x = reader.read_f64()?;
        let y = reader.read_f64()?;
        let z = if ordinates.has_z() {
            reader.read_f64()?
        } else {
            f64::NAN
        };
        let m = if ordinates.has_m() {
            reader.read_f64()?
        } else {
            f64::NAN
        };
        seq.push(Coord { x, y, z, m }.retain(target));
    }
    Ok(seq)
}

fn read_polygon_rings(
    reader: &mut BlobReader<'_>,
    ordinates: Ordinates,
    handle: Ordinates,
) -> GeoBlobResult<Vec<CoordSeq>> {
    let ring_count = reader.read_count()?;
    let mut rings = Vec::with_capacity(ring_count);
    for _ in 0..ring_count {
        rings.push(read_coord_seq(reader, ordinates, handle)?);
    }
    Ok(rings)
}
