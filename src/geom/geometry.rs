use enum_as_inner::EnumAsInner;
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::geom::{CoordSeq, Envelope};

/// The seven OGC geometry kinds, tagged with their shared base type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(i32)]
pub enum GeometryKind {
    Point = 1,
    LineString = 2,
    Polygon = 3,
    MultiPoint = 4,
    MultiLineString = 5,
    MultiPolygon = 6,
    GeometryCollection = 7,
}

/// A point: zero or one coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub(crate) coords: CoordSeq,
    pub(crate) srid: i32,
}

impl Point {
    /// The underlying coordinate sequence (empty for an empty point).
    pub fn coords(&self) -> &CoordSeq {
        &self.coords
    }
}

/// A polyline of two or more coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    pub(crate) coords: CoordSeq,
    pub(crate) srid: i32,
}

impl LineString {
    /// The vertices of this line.
    pub fn coords(&self) -> &CoordSeq {
        &self.coords
    }
}

/// A polygon as a list of rings, shell first.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub(crate) rings: Vec<CoordSeq>,
    pub(crate) srid: i32,
}

impl Polygon {
    /// All rings, shell first.
    pub fn rings(&self) -> &[CoordSeq] {
        &self.rings
    }

    /// The exterior ring, if any.
    pub fn exterior(&self) -> Option<&CoordSeq> {
        self.rings.first()
    }

    /// The interior rings.
    pub fn interiors(&self) -> &[CoordSeq] {
        self.rings.get(1..).unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint {
    pub(crate) points: Vec<Point>,
    pub(crate) srid: i32,
}

impl MultiPoint {
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineString {
    pub(crate) line_strings: Vec<LineString>,
    pub(crate) srid: i32,
}

impl MultiLineString {
    pub fn line_strings(&self) -> &[LineString] {
        &self.line_strings
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon {
    pub(crate) polygons: Vec<Polygon>,
    pub(crate) srid: i32,
}

impl MultiPolygon {
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }
}

/// A heterogeneous collection of geometries.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryCollection {
    pub(crate) geometries: Vec<Geometry>,
    pub(crate) srid: i32,
}

impl GeometryCollection {
    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }
}

/// A geometry of any of the seven OGC kinds.
///
/// A closed sum type: every codec has one encode/decode arm per variant, so
/// the compiler checks exhaustiveness across both blob formats.
#[derive(Debug, Clone, PartialEq, EnumAsInner)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    /// Which of the seven kinds this geometry is.
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::LineString(_) => GeometryKind::LineString,
            Geometry::Polygon(_) => GeometryKind::Polygon,
            Geometry::MultiPoint(_) => GeometryKind::MultiPoint,
            Geometry::MultiLineString(_) => GeometryKind::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryKind::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryKind::GeometryCollection,
        }
    }

    /// The spatial reference identifier, 0 when unset.
    pub fn srid(&self) -> i32 {
        match self {
            Geometry::Point(g) => g.srid,
            Geometry::LineString(g) => g.srid,
            Geometry::Polygon(g) => g.srid,
            Geometry::MultiPoint(g) => g.srid,
            Geometry::MultiLineString(g) => g.srid,
            Geometry::MultiPolygon(g) => g.srid,
            Geometry::GeometryCollection(g) => g.srid,
        }
    }

    /// Set the SRID on this geometry and every element it contains.
    pub fn set_srid(&mut self, srid: i32) {
        match self {
            Geometry::Point(g) => g.srid = srid,
            Geometry::LineString(g) => g.srid = srid,
            Geometry::Polygon(g) => g.srid = srid,
            Geometry::MultiPoint(g) => {
                g.srid = srid;
                for point in &mut g.points {
                    point.srid = srid;
                }
            }
            Geometry::MultiLineString(g) => {
                g.srid = srid;
                for line_string in &mut g.line_strings {
                    line_string.srid = srid;
                }
            }
            Geometry::MultiPolygon(g) => {
                g.srid = srid;
                for polygon in &mut g.polygons {
                    polygon.srid = srid;
                }
            }
            Geometry::GeometryCollection(g) => {
                g.srid = srid;
                for geometry in &mut g.geometries {
                    geometry.set_srid(srid);
                }
            }
        }
    }

    /// Whether every coordinate sequence in this geometry is empty.
    pub fn is_empty(&self) -> bool {
        self.coord_seqs().iter().all(|seq| seq.is_empty())
    }

    /// The axis-aligned bounding box of this geometry.
    pub fn envelope(&self) -> Envelope {
        Envelope::of(self)
    }

    /// Every coordinate sequence in the geometry, recursing through collections.
    pub(crate) fn coord_seqs(&self) -> Vec<&CoordSeq> {
        let mut seqs = Vec::new();
        self.collect_coord_seqs(&mut seqs);
        seqs
    }

    fn collect_coord_seqs<'a>(&'a self, out: &mut Vec<&'a CoordSeq>) {
        match self {
            Geometry::Point(g) => out.push(&g.coords),
            Geometry::LineString(g) => out.push(&g.coords),
            Geometry::Polygon(g) => out.extend(g.rings.iter()),
            Geometry::MultiPoint(g) => out.extend(g.points.iter().map(|p| &p.coords)),
            Geometry::MultiLineString(g) => {
                out.extend(g.line_strings.iter().map(|ls| &ls.coords))
            }
            Geometry::MultiPolygon(g) => {
                out.extend(g.polygons.iter().flat_map(|p| p.rings.iter()))
            }
            Geometry::GeometryCollection(g) => {
                for geometry in &g.geometries {
                    geometry.collect_coord_seqs(out);
                }
            }
        }
    }
}

impl From<Point> for Geometry {
    fn from(value: Point) -> Self {
        Geometry::Point(value)
    }
}

impl From<LineString> for Geometry {
    fn from(value: LineString) -> Self {
        Geometry::LineString(value)
    }
}

impl From<Polygon> for Geometry {
    fn from(value: Polygon) -> Self {
        Geometry::Polygon(value)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(value: MultiPoint) -> Self {
        Geometry::MultiPoint(value)
    }
}

impl From<MultiLineString> for Geometry {
    fn from(value: MultiLineString) -> Self {
        Geometry::MultiLineString(value)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(value: MultiPolygon) -> Self {
        Geometry::MultiPolygon(value)
    }
}

impl From<GeometryCollection> for Geometry {
    fn from(value: GeometryCollection) -> Self {
        Geometry::GeometryCollection(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::multi::gc0;
    use crate::test::polygon::poly0;

    #[test]
    fn kind_codes_match_ogc() {
        assert_eq!(i32::from(GeometryKind::Point), 1);
        assert_eq!(i32::from(GeometryKind::GeometryCollection), 7);
        assert_eq!(GeometryKind::try_from(5).unwrap(), GeometryKind::MultiLineString);
        assert!(GeometryKind::try_from(8).is_err());
    }

    #[test]
    fn set_srid_reaches_nested_elements() {
        let mut geom: Geometry = gc0().into();
        geom.set_srid(4326);
        assert_eq!(geom.srid(), 4326);
        let collection = geom.as_geometry_collection().unwrap();
        for child in collection.geometries() {
            assert_eq!(child.srid(), 4326);
        }
    }

    #[test]
    fn coord_seqs_covers_all_rings() {
        let geom: Geometry = poly0().into();
        assert_eq!(geom.coord_seqs().len(), 2);
    }
}
