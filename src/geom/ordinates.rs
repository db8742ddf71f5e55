/// The ordinate combination carried by a coordinate sequence.
///
/// X and Y are always present; Z (elevation) and M (measure) are optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ordinates {
    /// Two-dimensional.
    Xy,

    /// Three-dimensional.
    Xyz,

    /// XYM (2D with measure).
    Xym,

    /// XYZM (3D with measure).
    Xyzm,
}

impl Ordinates {
    /// Construct from the optional-ordinate pair.
    pub fn from_zm(has_z: bool, has_m: bool) -> Self {
        match (has_z, has_m) {
            (false, false) => Ordinates::Xy,
            (true, false) => Ordinates::Xyz,
            (false, true) => Ordinates::Xym,
            (true, true) => Ordinates::Xyzm,
        }
    }

    /// Whether the Z ordinate is present.
    pub fn has_z(&self) -> bool {
        matches!(self, Ordinates::Xyz | Ordinates::Xyzm)
    }

    /// Whether the M ordinate is present.
    pub fn has_m(&self) -> bool {
        matches!(self, Ordinates::Xym | Ordinates::Xyzm)
    }

    /// Returns the number of ordinates per coordinate.
    pub fn size(&self) -> usize {
        match self {
            Ordinates::Xy => 2,
            Ordinates::Xyz => 3,
            Ordinates::Xym => 3,
            Ordinates::Xyzm => 4,
        }
    }

    /// The ordinates present in both `self` and `other`. Always contains X and Y.
    pub fn intersection(&self, other: Ordinates) -> Ordinates {
        Ordinates::from_zm(self.has_z() && other.has_z(), self.has_m() && other.has_m())
    }
}
