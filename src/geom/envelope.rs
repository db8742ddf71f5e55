use crate::geom::Geometry;

/// Axis-aligned bounding rectangle of a geometry.
///
/// Degenerates to a single point for point geometries and to all zeros for
/// empty geometries, which is how the blob formats expect it on the wire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Envelope {
    /// The all-zero envelope written for empty geometries.
    pub const ZERO: Envelope = Envelope {
        min_x: 0.,
        min_y: 0.,
        max_x: 0.,
        max_y: 0.,
    };

    /// Compute the envelope of a geometry.
    pub fn of(geom: &Geometry) -> Envelope {
        let mut env: Option<Envelope> = None;
        for seq in geom.coord_seqs() {
            for coord in seq.coords() {
                match env.as_mut() {
                    Some(env) => env.expand(coord.x, coord.y),
                    None => {
                        env = Some(Envelope {
                            min_x: coord.x,
                            min_y: coord.y,
                            max_x: coord.x,
                            max_y: coord.y,
                        })
                    }
                }
            }
        }
        env.unwrap_or(Envelope::ZERO)
    }

    fn expand(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }
}
