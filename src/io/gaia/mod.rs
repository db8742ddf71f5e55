//! The Gaia blob format used by SpatiaLite-compatible stores.

pub(crate) mod compress;
mod reader;
mod writer;

pub use reader::{from_gaia, GaiaReadOptions};
pub use writer::{to_gaia, GaiaWriteOptions};

use crate::error::{GeoBlobError, GeoBlobResult};
use crate::geom::{GeometryKind, Ordinates};

pub(crate) const MARK_START: u8 = 0x00;
pub(crate) const MARK_MBR: u8 = 0x7C;
pub(crate) const MARK_ENTITY: u8 = 0x69;
pub(crate) const MARK_END: u8 = 0xFE;

const Z_OFFSET: i32 = 1000;
const M_OFFSET: i32 = 2000;
const ZM_OFFSET: i32 = 3000;
const COMPRESSED_OFFSET: i32 = 1_000_000;

/// One entry of the closed (kind x ordinates x compression) code table.
///
/// The wire code is the OGC kind constant OR'd with a dimensionality offset
/// (+1000 Z, +2000 M, +3000 ZM) and, for compressed line-like geometries,
/// the +1,000,000 compression offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GaiaClass {
    pub kind: GeometryKind,
    pub ordinates: Ordinates,
    pub compressed: bool,
}

impl GaiaClass {
    /// Build the class a writer will tag a geometry with. Compression is
    /// silently dropped for the kinds whose headers never carry it.
    pub fn new(kind: GeometryKind, ordinates: Ordinates, compressed: bool) -> Self {
        Self {
            kind,
            ordinates,
            compressed: compressed && kind_allows_compression(kind),
        }
    }

    pub fn code(&self) -> i32 {
        let dimension = match self.ordinates {
            Ordinates::Xy => 0,
            Ordinates::Xyz => Z_OFFSET,
            Ordinates::Xym => M_OFFSET,
            Ordinates::Xyzm => ZM_OFFSET,
        };
        let compression = if self.compressed { COMPRESSED_OFFSET } else { 0 };
        i32::from(self.kind) | dimension | compression
    }

    pub fn from_code(code: i32) -> GeoBlobResult<Self> {
        let compressed = code >= COMPRESSED_OFFSET;
        let rest = if compressed { code - COMPRESSED_OFFSET } else { code };
        let (ordinates, base) = match rest {
            1..=7 => (Ordinates::Xy, rest),
            1001..=1007 => (Ordinates::Xyz, rest - Z_OFFSET),
            2001..=2007 => (Ordinates::Xym, rest - M_OFFSET),
            3001..=3007 => (Ordinates::Xyzm, rest - ZM_OFFSET),
            _ => return Err(GeoBlobError::UnsupportedType(code.into())),
        };
        let kind = GeometryKind::try_from(base)
            .map_err(|_| GeoBlobError::UnsupportedType(code.into()))?;
        if compressed && !kind_allows_compression(kind) {
            return Err(GeoBlobError::UnsupportedType(code.into()));
        }
        Ok(Self {
            kind,
            ordinates,
            compressed,
        })
    }
}

fn kind_allows_compression(kind: GeometryKind) -> bool {
    matches!(
        kind,
        GeometryKind::LineString
            | GeometryKind::Polygon
            | GeometryKind::MultiLineString
            | GeometryKind::MultiPolygon
    )
}
