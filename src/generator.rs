//! Synthetic product documents.

use rand::Rng;

use crate::catalog::ValuePools;
use crate::clock::Clock;
use crate::models::product::{format_product_id, ProductDocument};

/// Builds `count` documents with ids `P001..`.
///
/// Every field except the id is sampled uniformly, with replacement, from
/// `pools`. `insert_time` is read from `clock` once per document.
pub fn generate<C, R>(
    count: usize,
    pools: &ValuePools,
    clock: &C,
    rng: &mut R,
) -> Vec<ProductDocument>
where
    C: Clock + ?Sized,
    R: Rng + ?Sized,
{
    let mut documents = Vec::with_capacity(count);
    for sequence in 1..=count {
        documents.push(ProductDocument {
            product_id: format_product_id(sequence),
            category: pick(pools.categories(), rng).to_string(),
            color: pick(pools.colors(), rng).to_string(),
            size: pick(pools.sizes(), rng).to_string(),
            price: pick(pools.prices(), rng),
            stock: rng.random_bool(0.5),
            description: pick(pools.descriptions(), rng).to_string(),
            insert_time: clock.now(),
        });
    }
    documents
}

// Pools are non-empty by construction of `ValuePools`.
fn pick<T: Copy, R: Rng + ?Sized>(pool: &[T], rng: &mut R) -> T {
    pool[rng.random_range(0..pool.len())]
}
