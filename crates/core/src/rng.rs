//! RNG module - random piece selection and session RNG construction
//!
//! Pieces are drawn uniformly from the session's prototype set. Any
//! [`rand::Rng`] can drive a session; the default is [`Pcg32`], seeded either
//! explicitly (reproducible games and tests) or from the thread RNG.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::shape::{Piece, PieceProto, Shape};

/// Default RNG for a game session
pub type SessionRng = Pcg32;

/// Deterministic session RNG for the given seed
pub fn seeded_rng(seed: u64) -> SessionRng {
    Pcg32::seed_from_u64(seed)
}

/// Session RNG seeded from the thread-local entropy source
pub fn entropy_rng() -> SessionRng {
    Pcg32::from_rng(&mut rand::rng())
}

/// Prototype used when a session somehow has none: a single 1×1 cell.
pub fn fallback_proto() -> PieceProto {
    let mut shape = Shape::empty(1);
    shape.set(0, 0, true);
    PieceProto::new(1, shape)
}

/// Pick a prototype uniformly at random.
///
/// Returns `None` only for an empty slice.
pub fn pick_proto<'a, R: Rng + ?Sized>(
    protos: &'a [PieceProto],
    rng: &mut R,
) -> Option<&'a PieceProto> {
    if protos.is_empty() {
        return None;
    }
    protos.get(rng.random_range(0..protos.len()))
}

/// Random piece at the spawn position for `cols`.
pub fn random_piece<R: Rng + ?Sized>(protos: &[PieceProto], cols: usize, rng: &mut R) -> Piece {
    match pick_proto(protos, rng) {
        Some(proto) => Piece::spawn(proto, cols),
        None => {
            log::warn!("no prototypes available, spawning the 1x1 fallback");
            Piece::spawn(&fallback_proto(), cols)
        }
    }
}
