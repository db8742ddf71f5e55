use crate::geom::{Coord, CoordSeq, GeometryFactory, Ordinates, Point};

pub(crate) fn p0() -> Point {
    let factory = GeometryFactory::default();
    let mut seq = factory.create_coord_seq(1, Ordinates::Xy);
    seq.push(Coord::xy(10., 10.));
    factory.create_point(seq)
}

pub(crate) fn p0_zm() -> Point {
    let factory = GeometryFactory::default();
    let mut seq = factory.create_coord_seq(1, Ordinates::Xyzm);
    seq.push(Coord::xyzm(10., 10., 30., 40.));
    factory.create_point(seq)
}

pub(crate) fn p_empty() -> Point {
    let factory = GeometryFactory::default();
    factory.create_point(CoordSeq::new(Ordinates::Xy))
}
