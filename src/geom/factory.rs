use crate::geom::{
    CoordSeq, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Ordinates, Point, Polygon,
};

/// Constructs geometries and coordinate sequences.
///
/// The blob readers build decoded geometries only through this factory; the
/// factory's SRID is what a decoded geometry keeps when the blob's SRID is
/// not applied.
#[derive(Debug, Clone)]
pub struct GeometryFactory {
    srid: i32,
}

impl Default for GeometryFactory {
    fn default() -> Self {
        Self { srid: 0 }
    }
}

impl GeometryFactory {
    /// A factory stamping the given SRID onto everything it creates.
    pub fn new(srid: i32) -> Self {
        Self { srid }
    }

    /// The default SRID of this factory.
    pub fn srid(&self) -> i32 {
        self.srid
    }

    /// An empty coordinate sequence of the chosen ordinate combination.
    pub fn create_coord_seq(&self, capacity: usize, ordinates: Ordinates) -> CoordSeq {
        CoordSeq::with_capacity(capacity, ordinates)
    }

    pub fn create_point(&self, coords: CoordSeq) -> Point {
        Point {
            coords,
            srid: self.srid,
        }
    }

    pub fn create_line_string(&self, coords: CoordSeq) -> LineString {
        LineString {
            coords,
            srid: self.srid,
        }
    }

    /// Build a polygon from its rings, shell first.
    pub fn create_polygon(&self, rings: Vec<CoordSeq>) -> Polygon {
        Polygon {
            rings,
            srid: self.srid,
        }
    }

    pub fn create_multi_point(&self, points: Vec<Point>) -> MultiPoint {
        MultiPoint {
            points,
            srid: self.srid,
        }
    }

    pub fn create_multi_line_string(&self, line_strings: Vec<LineString>) -> MultiLineString {
        MultiLineString {
            line_strings,
            srid: self.srid,
        }
    }

    pub fn create_multi_polygon(&self, polygons: Vec<Polygon>) -> MultiPolygon {
        MultiPolygon {
            polygons,
            srid: self.srid,
        }
    }

    pub fn create_geometry_collection(&self, geometries: Vec<Geometry>) -> GeometryCollection {
        GeometryCollection {
            geometries,
            srid: self.srid,
        }
    }
}
