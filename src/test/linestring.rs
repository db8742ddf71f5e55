use crate::geom::{Coord, CoordSeq, GeometryFactory, LineString, Ordinates};

pub(crate) fn ls0() -> LineString {
    let factory = GeometryFactory::default();
    let seq = CoordSeq::from_coords(
        Ordinates::Xy,
        vec![Coord::xy(10., 10.), Coord::xy(10., 20.)],
    );
    factory.create_line_string(seq)
}

pub(crate) fn ls0_z() -> LineString {
    let factory = GeometryFactory::default();
    let seq = CoordSeq::from_coords(
        Ordinates::Xyz,
        vec![Coord::xyz(10., 10., 5.), Coord::xyz(10., 20., 6.)],
    );
    factory.create_line_string(seq)
}

/// Enough vertices for the compressed path to emit interior deltas, with
/// values that do not reduce to exact float32 differences.
pub(crate) fn ls_decimal() -> LineString {
    let factory = GeometryFactory::default();
    let seq = CoordSeq::from_coords(
        Ordinates::Xy,
        vec![
            Coord::xy(11.1234567890, 46.1234567890),
            Coord::xy(11.1244567891, 46.1244567891),
            Coord::xy(11.1254567892, 46.1254567892),
            Coord::xy(11.1264567893, 46.1264567893),
            Coord::xy(11.1274567894, 46.1274567894),
        ],
    );
    factory.create_line_string(seq)
}
