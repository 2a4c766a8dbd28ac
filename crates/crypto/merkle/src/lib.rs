//! https://ethereum.github.io/consensus-specs/ssz/simple-serialize/#merkleization
//! https://ethereum.github.io/consensus-specs/ssz/merkle-proofs

use alloy_primitives::B256;
use anyhow::ensure;

fn get_generalized_index_length(index: usize) -> usize {
    index.checked_ilog2().unwrap_or(0) as usize
}

fn get_generalized_index_bit(index: usize, position: usize) -> bool {
    (index & (1 << position)) > 0
}

fn get_generalized_index_child(index: usize, right_side: bool) -> usize {
    index * 2 + right_side as usize
}

/// Depth of the smallest perfect binary tree holding `num_of_leaves` leaves.
pub fn tree_depth(num_of_leaves: usize) -> usize {
    num_of_leaves.max(1).next_power_of_two().trailing_zeros() as usize
}

/// Flat tree layout: `tree[1]` is the root, node `i` has children `2i` and `2i + 1`, leaves start
/// at `1 << depth`. Missing leaves are zero chunks.
pub fn merkle_tree(leaves: &[B256], depth: usize) -> anyhow::Result<Vec<B256>> {
    let num_of_leaves = leaves.len();
    let bottom_length = 1 << depth;
    ensure!(
        num_of_leaves <= bottom_length,
        "{num_of_leaves} leaves do not fit in a tree of depth {depth}"
    );

    let mut tree = vec![B256::ZERO; bottom_length];
    tree.extend(leaves);
    tree.extend(vec![B256::ZERO; bottom_length - num_of_leaves]);

    for i in (1..bottom_length).rev() {
        let left = tree[i * 2].as_slice();
        let right = tree[i * 2 + 1].as_slice();
        tree[i] = ethereum_hashing::hash32_concat(left, right).into();
    }

    Ok(tree)
}

/// Root of the perfect binary tree over `chunks`, padded with zero chunks to the next power of
/// two. A single chunk is its own root.
pub fn merkleize(chunks: &[B256]) -> B256 {
    match chunks {
        [] => B256::ZERO,
        [chunk] => *chunk,
        _ => {
            let depth = tree_depth(chunks.len());
            let mut layer = chunks.to_vec();
            layer.resize(1 << depth, B256::ZERO);

            while layer.len() > 1 {
                layer = layer
                    .chunks_exact(2)
                    .map(|pair| {
                        ethereum_hashing::hash32_concat(pair[0].as_slice(), pair[1].as_slice())
                            .into()
                    })
                    .collect();
            }

            layer[0]
        }
    }
}

/// Packs `bytes` into 32-byte chunks, zero padding the last one on the right.
pub fn pack_bytes(bytes: &[u8]) -> Vec<B256> {
    if bytes.is_empty() {
        return vec![B256::ZERO];
    }

    bytes
        .chunks(32)
        .map(|chunk| {
            let mut padded = [0u8; 32];
            padded[..chunk.len()].copy_from_slice(chunk);
            B256::from(padded)
        })
        .collect()
}

pub fn generate_proof(
    tree: &[B256],
    index: usize,
    depth: usize,
) -> anyhow::Result<(B256, Vec<B256>)> {
    ensure!(
        tree.len() == 2 << depth,
        "Tree of {} nodes does not have depth {depth}",
        tree.len()
    );
    ensure!(index < 1 << depth, "Leaf index {index} out of range");

    let mut proof = vec![];
    let mut current_index = 1;
    let mut current_depth = depth;

    while current_depth > 0 {
        let (left_child_index, right_child_index) = (
            get_generalized_index_child(current_index, false),
            get_generalized_index_child(current_index, true),
        );

        if get_generalized_index_bit(index, current_depth - 1) {
            proof.push(tree[left_child_index]);
            current_index = right_child_index;
        } else {
            proof.push(tree[right_child_index]);
            current_index = left_child_index;
        }

        current_depth -= 1;
    }

    proof.reverse();

    Ok((tree[current_index], proof))
}

pub fn calculate_merkle_root(
    leaf: B256,
    proof: &[B256],
    generalized_index: usize,
) -> anyhow::Result<B256> {
    ensure!(
        proof.len() == get_generalized_index_length(generalized_index),
        "Proof length does not match index length"
    );
    let mut current = leaf;
    for (i, proof) in proof.iter().enumerate() {
        if get_generalized_index_bit(generalized_index, i) {
            current = ethereum_hashing::hash32_concat(proof.as_slice(), current.as_slice()).into();
        } else {
            current = ethereum_hashing::hash32_concat(current.as_slice(), proof.as_slice()).into();
        }
    }
    Ok(current)
}

pub fn verify_merkle_proof(
    leaf: B256,
    proof: &[B256],
    index: usize,
    depth: usize,
    root: B256,
) -> anyhow::Result<bool> {
    Ok(calculate_merkle_root(leaf, proof, (1usize << depth) + index)? == root)
}
