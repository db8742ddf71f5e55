//! The GeoPackage binary geometry format: a fixed header followed by an
//! ISO extended-WKB body.

mod reader;
mod writer;

pub use reader::{from_gpkg, GpkgReadOptions};
pub use writer::{to_gpkg, GpkgWriteOptions};

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::{GeoBlobError, GeoBlobResult};
use crate::geom::{GeometryKind, Ordinates};

pub(crate) const MAGIC: [u8; 2] = *b"GP";
pub(crate) const VERSION: u8 = 0;

// header flags byte
pub(crate) const FLAG_BYTE_ORDER: u8 = 0b0000_0001;
pub(crate) const FLAG_EMPTY: u8 = 0b0001_0000;
pub(crate) const FLAG_EXTENDED: u8 = 0b0010_0000;
pub(crate) const ENVELOPE_SHIFT: u8 = 1;
pub(crate) const ENVELOPE_MASK: u8 = 0b0000_0111;

// ISO WKB signals Z/M by offsetting the base 2D type code
const WKB_Z_OFFSET: u32 = 1000;
const WKB_M_OFFSET: u32 = 2000;
const WKB_ZM_OFFSET: u32 = 3000;

/// The envelope-content code stored in header flag bits 1-3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub(crate) enum EnvelopeIndicator {
    None = 0,
    Xy = 1,
    Xyz = 2,
    Xym = 3,
    Xyzm = 4,
}

impl EnvelopeIndicator {
    pub fn for_ordinates(ordinates: Ordinates) -> Self {
        match ordinates {
            Ordinates::Xy => EnvelopeIndicator::Xy,
            Ordinates::Xyz => EnvelopeIndicator::Xyz,
            Ordinates::Xym => EnvelopeIndicator::Xym,
            Ordinates::Xyzm => EnvelopeIndicator::Xyzm,
        }
    }

    /// How many doubles the envelope occupies for this code.
    pub fn num_doubles(&self) -> usize {
        match self {
            EnvelopeIndicator::None => 0,
            EnvelopeIndicator::Xy => 4,
            EnvelopeIndicator::Xyz => 6,
            EnvelopeIndicator::Xym => 6,
            EnvelopeIndicator::Xyzm => 8,
        }
    }
}

pub(crate) fn wkb_type_code(kind: GeometryKind, ordinates: Ordinates) -> u32 {
    let base = i32::from(kind) as u32;
    let offset = match ordinates {
        Ordinates::Xy => 0,
        Ordinates::Xyz => WKB_Z_OFFSET,
        Ordinates::Xym => WKB_M_OFFSET,
        Ordinates::Xyzm => WKB_ZM_OFFSET,
    };
    base + offset
}

pub(crate) fn parse_wkb_type(code: u32) -> GeoBlobResult<(GeometryKind, Ordinates)> {
    let (ordinates, base) = match code {
        1..=7 => (Ordinates::Xy, code),
        1001..=1007 => (Ordinates::Xyz, code - WKB_Z_OFFSET),
        2001..=2007 => (Ordinates::Xym, code - WKB_M_OFFSET),
        3001..=3007 => (Ordinates::Xyzm, code - WKB_ZM_OFFSET),
        _ => return Err(GeoBlobError::UnsupportedType(code.into())),
    };
    let kind = GeometryKind::try_from(base as i32)
        .map_err(|_| GeoBlobError::UnsupportedType(code.into()))?;
    Ok((kind, ordinates))
}
