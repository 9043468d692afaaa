use rand::Rng;

use safemap_core::domain::GeoPoint;

use crate::config::{FALLBACK_BASE, FALLBACK_RANDOM_OFFSET};

/// Location for a report submitted without a map click: the base point plus a
/// uniform offset in `[0, FALLBACK_RANDOM_OFFSET)` on each axis.
pub fn fallback_location<R: Rng + ?Sized>(rng: &mut R) -> GeoPoint {
    GeoPoint::new(
        FALLBACK_BASE.lat + rng.gen::<f64>() * FALLBACK_RANDOM_OFFSET,
        FALLBACK_BASE.lng + rng.gen::<f64>() * FALLBACK_RANDOM_OFFSET,
    )
}
