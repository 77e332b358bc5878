//! Shape generator - procedural prototypes for one game session
//!
//! Each prototype gets a random bounding box size in
//! `[min_shape_size, max_shape_size]` and a random filled-cell count in
//! `[min_blocks, min(max_blocks, N²)]`, then random cells are switched on until
//! the count is reached. Cells need not be connected.

use rand::Rng;

use crate::config::GameConfig;
use crate::shape::{PieceProto, Shape};
use crate::types::ShapeId;

/// Redraws allowed per prototype while looking for a shape not already in the set.
pub const DISTINCT_ATTEMPTS: usize = 10;

/// Generate `shape_type_count` prototypes with ids `1..=count`.
pub fn generate_prototypes<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Vec<PieceProto> {
    let count = config.shape_type_count.min(ShapeId::MAX as usize);
    let mut protos: Vec<PieceProto> = Vec::with_capacity(count);

    for kind in (1..=count).map(|k| k as ShapeId) {
        let mut shape = random_shape(config, rng);
        let mut attempts = 1;
        while attempts < DISTINCT_ATTEMPTS && protos.iter().any(|p| p.shape == shape) {
            shape = random_shape(config, rng);
            attempts += 1;
        }
        if protos.iter().any(|p| p.shape == shape) {
            log::warn!("prototype {} duplicates an earlier shape", kind);
        }
        protos.push(PieceProto::new(kind, shape));
    }

    log::debug!("generated {} prototype(s)", protos.len());
    protos
}

/// One random shape within the config's size and cell-count bounds.
pub fn random_shape<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Shape {
    let min_size = config.min_shape_size.max(1);
    let size = rng.random_range(min_size..=config.max_shape_size.max(min_size));
    let area = size * size;
    let max_blocks = config.max_blocks_per_shape.min(area).max(1);
    let min_blocks = config.min_blocks_per_shape.clamp(1, max_blocks);
    let target = rng.random_range(min_blocks..=max_blocks);

    let mut shape = Shape::empty(size);
    let mut filled = 0;
    while filled < target {
        let cell = rng.random_range(0..area);
        let (row, col) = (cell / size, cell % size);
        if !shape.get(row, col) {
            shape.set(row, col, true);
            filled += 1;
        }
    }
    shape
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded_rng;

    #[test]
    fn test_generates_requested_count_with_sequential_ids() {
        let config = GameConfig::default();
        let protos = generate_prototypes(&config, &mut seeded_rng(1));
        assert_eq!(protos.len(), 10);
        for (i, proto) in protos.iter().enumerate() {
            assert_eq!(proto.kind as usize, i + 1);
        }
    }

    #[test]
    fn test_shapes_respect_bounds() {
        let config = GameConfig {
            shape_type_count: 50,
            min_shape_size: 2,
            max_shape_size: 5,
            min_blocks_per_shape: 3,
            max_blocks_per_shape: 20,
            ..GameConfig::default()
        };
        let mut rng = seeded_rng(42);
        for proto in generate_prototypes(&config, &mut rng) {
            let n = proto.shape.size();
            assert!((2..=5).contains(&n));
            let count = proto.shape.count();
            assert!(count >= 3.min(n * n), "count {} for size {}", count, n);
            assert!(count <= 20.min(n * n));
            assert!(count >= 1);
        }
    }

    #[test]
    fn test_block_cap_by_area() {
        // 2x2 boxes can hold at most 4 cells even if more are allowed
        let config = GameConfig {
            min_shape_size: 2,
            max_shape_size: 2,
            min_blocks_per_shape: 4,
            max_blocks_per_shape: 4,
            shape_type_count: 3,
            ..GameConfig::default()
        };
        let protos = generate_prototypes(&config, &mut seeded_rng(3));
        assert!(protos.iter().all(|p| p.shape.count() == 4));
    }

    #[test]
    fn test_prototypes_are_distinct_when_space_allows() {
        let config = GameConfig::default();
        let protos = generate_prototypes(&config, &mut seeded_rng(2024));
        for (i, a) in protos.iter().enumerate() {
            for b in &protos[i + 1..] {
                assert_ne!(a.shape, b.shape);
            }
        }
    }

    #[test]
    fn test_same_seed_same_prototypes() {
        let config = GameConfig::default();
        let a = generate_prototypes(&config, &mut seeded_rng(5));
        let b = generate_prototypes(&config, &mut seeded_rng(5));
        assert_eq!(a, b);
    }
}
