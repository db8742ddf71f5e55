//! Binary codecs for two spatial-database geometry blob formats: the Gaia
//! layout used by SpatiaLite-compatible stores, and the standardized
//! GeoPackage encoding.
//!
//! Every encode/decode call is a pure function of a geometry (or byte
//! buffer) and an immutable options value; the codecs hold no state.
//!
//! ```
//! use geoblob::geom::{Coord, GeometryFactory, Ordinates};
//! use geoblob::{from_gpkg, to_gpkg, GpkgReadOptions, GpkgWriteOptions};
//!
//! # fn main() -> geoblob::GeoBlobResult<()> {
//! let factory = GeometryFactory::new(4326);
//! let mut seq = factory.create_coord_seq(1, Ordinates::Xy);
//! seq.push(Coord::xy(11.25, 43.5));
//! let point = factory.create_point(seq);
//!
//! let blob = to_gpkg(&point.into(), &GpkgWriteOptions::default())?;
//! let decoded = from_gpkg(&blob, &GpkgReadOptions::default(), &factory)?;
//! assert_eq!(decoded.srid(), 4326);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub mod error;
pub mod geom;
pub mod io;

pub use error::{GeoBlobError, GeoBlobResult};
pub use io::gaia::{from_gaia, to_gaia, GaiaReadOptions, GaiaWriteOptions};
pub use io::gpkg::{from_gpkg, to_gpkg, GpkgReadOptions, GpkgWriteOptions};

#[cfg(test)]
pub(crate) mod test;
