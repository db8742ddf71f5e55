//! Shared geometry fixtures for the codec tests.

pub(crate) mod linestring;
pub(crate) mod multi;
pub(crate) mod point;

use crate::geom::{
    Coord, CoordSeq, Geometry, GeometryFactory, GeometryKind, Ordinates,
};

pub(crate) const ALL_KINDS: [GeometryKind; 7] = [
    GeometryKind::Point,
    GeometryKind::LineString,
    GeometryKind::Polygon,
    GeometryKind::MultiPoint,
    GeometryKind::MultiLineString,
    GeometryKind::MultiPolygon,
    GeometryKind::GeometryCollection,
];

pub(crate) const ALL_ORDINATES: [Ordinates; 4] = [
    Ordinates::Xy,
    Ordinates::Xyz,
    Ordinates::Xym,
    Ordinates::Xyzm,
];

/// A deterministic coordinate; only the requested ordinates are non-NaN.
/// All values are binary fractions, so uncompressed round trips are exact.
pub(crate) fn coord_at(i: usize, ordinates: Ordinates) -> Coord {
    let i = i as f64;
    Coord {
        x: 10.0 + 1.5 * i,
        y: 20.0 + 0.25 * i * i,
        z: if ordinates.has_z() { 100.0 + 0.5 * i } else { f64::NAN },
        m: if ordinates.has_m() { 1.0 + 2.0 * i } else { f64::NAN },
    }
}

pub(crate) fn seq_of(count: usize, offset: usize, ordinates: Ordinates) -> CoordSeq {
    let mut seq = CoordSeq::with_capacity(count, ordinates);
    for i in 0..count {
        seq.push(coord_at(offset + i, ordinates));
    }
    seq
}

/// A closed ring (first coordinate repeated last).
pub(crate) fn ring_of(offset: usize, ordinates: Ordinates) -> CoordSeq {
    let mut seq = seq_of(4, offset, ordinates);
    seq.push(coord_at(offset, ordinates));
    seq
}

/// One representative, non-empty geometry per kind and ordinate combination.
pub(crate) fn geometry_of(kind: GeometryKind, ordinates: Ordinates) -> Geometry {
    let factory = GeometryFactory::default();
    match kind {
        GeometryKind::Point => factory.create_point(seq_of(1, 0, ordinates)).into(),
        GeometryKind::LineString => factory.create_line_string(seq_of(4, 0, ordinates)).into(),
        GeometryKind::Polygon => factory
            .create_polygon(vec![ring_of(0, ordinates), ring_of(10, ordinates)])
            .into(),
        GeometryKind::MultiPoint => factory
            .create_multi_point(vec![
                factory.create_point(seq_of(1, 0, ordinates)),
                factory.create_point(seq_of(1, 3, ordinates)),
            ])
            .into(),
        GeometryKind::MultiLineString => factory
            .create_multi_line_string(vec![
                factory.create_line_string(seq_of(3, 0, ordinates)),
                factory.create_line_string(seq_of(4, 5, ordinates)),
            ])
            .into(),
        GeometryKind::MultiPolygon => factory
            .create_multi_polygon(vec![
                factory.create_polygon(vec![ring_of(0, ordinates)]),
                factory.create_polygon(vec![ring_of(10, ordinates), ring_of(20, ordinates)]),
            ])
            .into(),
        GeometryKind::GeometryCollection => factory
            .create_geometry_collection(vec![
                factory.create_point(seq_of(1, 0, ordinates)).into(),
                factory.create_line_string(seq_of(3, 2, ordinates)).into(),
            ])
            .into(),
    }
}
