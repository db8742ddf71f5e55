use crate::geom::{GeometryCollection, GeometryFactory, MultiLineString, MultiPoint};

use super::linestring::{ls0, ls0_z};
use super::point::{p0, p0_zm};

pub(crate) fn mp0() -> MultiPoint {
    let factory = GeometryFactory::default();
    factory.create_multi_point(vec![p0(), p0_zm()])
}

pub(crate) fn mls0() -> MultiLineString {
    let factory = GeometryFactory::default();
    factory.create_multi_line_string(vec![ls0(), ls0_z()])
}

pub(crate) fn gc0() -> GeometryCollection {
    let factory = GeometryFactory::default();
    factory.create_geometry_collection(vec![p0().into(), ls0().into()])
}
