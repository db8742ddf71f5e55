//! Blob codecs: the Gaia (SpatiaLite) format and the GeoPackage format.
//!
//! The two formats are independent implementations over the shared geometry
//! model and primitive codec; neither calls into the other.

pub mod codec;
pub mod gaia;
pub mod gpkg;

use crate::geom::{Geometry, Ordinates};

/// Resolve the ordinate set a writer will actually emit.
///
/// The result is the intersection of `requested` and the ordinates present
/// with at least one non-NaN value somewhere in the geometry. An XY request
/// skips the scan entirely; otherwise each requested extra ordinate stops
/// scanning as soon as one value is found.
pub(crate) fn resolve_ordinates(geom: &Geometry, requested: Ordinates) -> Ordinates {
    if requested == Ordinates::Xy {
        return Ordinates::Xy;
    }

    let need_z = requested.has_z();
    let need_m = requested.has_m();
    let mut found_z = false;
    let mut found_m = false;

    'seqs: for seq in geom.coord_seqs() {
        let scan_z = need_z && seq.has_z();
        let scan_m = need_m && seq.has_m();
        if !scan_z && !scan_m {
            continue;
        }
        for i in 0..seq.len() {
            if scan_z && !found_z && !seq.z(i).is_nan() {
                found_z = true;
            }
            if scan_m && !found_m && !seq.m(i).is_nan() {
                found_m = true;
            }
            if found_z == need_z && found_m == need_m {
                break 'seqs;
            }
        }
    }

    Ordinates::from_zm(found_z, found_m)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geom::{Coord, CoordSeq, GeometryFactory};

    #[test]
    fn xy_request_short_circuits() {
        let factory = GeometryFactory::default();
        let mut seq = factory.create_coord_seq(1, Ordinates::Xyzm);
        seq.push(Coord::xyzm(1., 2., 3., 4.));
        let geom: Geometry = factory.create_point(seq).into();
        assert_eq!(resolve_ordinates(&geom, Ordinates::Xy), Ordinates::Xy);
    }

    #[test]
    fn z_found_late_in_sequence() {
        let factory = GeometryFactory::default();
        let seq = CoordSeq::from_coords(
            Ordinates::Xyz,
            vec![
                Coord::xy(0., 0.),
                Coord::xy(1., 1.),
                Coord::xyz(2., 2., 9.),
            ],
        );
        let geom: Geometry = factory.create_line_string(seq).into();
        assert_eq!(resolve_ordinates(&geom, Ordinates::Xyzm), Ordinates::Xyz);
    }

    #[test]
    fn all_nan_extra_ordinates_resolve_to_xy() {
        let factory = GeometryFactory::default();
        let seq = CoordSeq::from_coords(
            Ordinates::Xyzm,
            vec![Coord::xy(0., 0.), Coord::xy(1., 1.)],
        );
        let geom: Geometry = factory.create_line_string(seq).into();
        assert_eq!(resolve_ordinates(&geom, Ordinates::Xyzm), Ordinates::Xy);
    }

    #[test]
    fn request_bounds_the_result() {
        let factory = GeometryFactory::default();
        let mut seq = factory.create_coord_seq(1, Ordinates::Xyzm);
        seq.push(Coord::xyzm(1., 2., 3., 4.));
        let geom: Geometry = factory.create_point(seq).into();
        assert_eq!(resolve_ordinates(&geom, Ordinates::Xym), Ordinates::Xym);
    }
}
