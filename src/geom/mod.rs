//! The vector-geometry model the blob codecs read and construct.
//!
//! Owned value types only: construction goes through [`GeometryFactory`],
//! access through the coordinate-sequence and per-kind accessors. Nothing
//! here does I/O.

mod coords;
mod envelope;
mod factory;
mod geometry;
mod ordinates;

pub use coords::{Coord, CoordSeq};
pub use envelope::Envelope;
pub use factory::GeometryFactory;
pub use geometry::{
    Geometry, GeometryCollection, GeometryKind, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};
pub use ordinates::Ordinates;
