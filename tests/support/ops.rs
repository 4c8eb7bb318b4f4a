use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use alternates::domain::id::ProductId;

/// One grouping mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Connect(ProductId, ProductId),
    Disconnect(ProductId),
}

/// Deterministic pseudo-random mutation sequence over products `1..=universe`.
///
/// Connects never pair a product with itself.
pub fn random_ops(seed: u64, len: usize, universe: i64) -> Vec<Op> {
    assert!(universe >= 2);
    let mut rng = StdRng::seed_from_u64(seed);

    (0..len)
        .map(|_| {
            let a = rng.gen_range(1..=universe);
            if rng.gen_bool(0.7) {
                let mut b = rng.gen_range(1..=universe);
                if b == a {
                    b = a % universe + 1;
                }
                Op::Connect(ProductId::new(a), ProductId::new(b))
            } else {
                Op::Disconnect(ProductId::new(a))
            }
        })
        .collect()
}

/// Deterministic pseudo-random undirected edges over products `1..=universe`.
///
/// May contain duplicates, reversed duplicates, and self links.
pub fn random_edges(seed: u64, len: usize, universe: i64) -> Vec<(ProductId, ProductId)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            (
                ProductId::new(rng.gen_range(1..=universe)),
                ProductId::new(rng.gen_range(1..=universe)),
            )
        })
        .collect()
}

/// Deterministic pseudo-random product list, possibly with repeats.
pub fn random_products(seed: u64, len: usize, universe: i64) -> Vec<ProductId> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| ProductId::new(rng.gen_range(1..=universe)))
        .collect()
}
