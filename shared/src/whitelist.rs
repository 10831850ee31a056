//! # Whitelist Merkle Tree
//!
//! The contract stores only a Merkle root; whitelisted users submit a proof
//! with `whitelistMint`. Leaves are `keccak256(address)` over the 20 raw
//! address bytes, in list order. Pairs are sorted before hashing so a proof
//! needs no left/right flags, and an odd node at the end of a layer is carried
//! up unchanged.

use std::str::FromStr;

use alloy_primitives::{keccak256, Address, B256};

use crate::error::DappError;

#[derive(Clone, Debug)]
pub struct Whitelist {
    leaves: Vec<B256>,
    /// `layers[0]` are the leaves, the last layer holds the root
    layers: Vec<Vec<B256>>,
}

fn hash_pair(a: &B256, b: &B256) -> B256 {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(first.as_slice());
    buf[32..].copy_from_slice(second.as_slice());
    keccak256(buf)
}

/// Leaf hash for an address.
pub fn leaf_for(address: &Address) -> B256 {
    keccak256(address.as_slice())
}

fn parse_address(address: &str) -> Option<Address> {
    Address::from_str(address.trim()).ok()
}

impl Whitelist {
    pub fn new(addresses: &[Address]) -> Self {
        let leaves: Vec<B256> = addresses.iter().map(leaf_for).collect();
        let mut layers = vec![leaves.clone()];

        while layers.last().is_some_and(|layer| layer.len() > 1) {
            let current = &layers[layers.len() - 1];
            let next: Vec<B256> = current
                .chunks(2)
                .map(|pair| match pair {
                    [left, right] => hash_pair(left, right),
                    [single] => *single,
                    _ => unreachable!("chunks(2) yields one or two nodes"),
                })
                .collect();
            layers.push(next);
        }

        Self { leaves, layers }
    }

    /// Build from configured address strings.
    pub fn from_strings<S: AsRef<str>>(addresses: &[S]) -> Result<Self, DappError> {
        let parsed = addresses
            .iter()
            .map(|a| {
                parse_address(a.as_ref())
                    .ok_or_else(|| DappError::InvalidAddress(a.as_ref().to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(&parsed))
    }

    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    pub fn root(&self) -> B256 {
        self.layers
            .last()
            .and_then(|layer| layer.first().copied())
            .unwrap_or(B256::ZERO)
    }

    fn leaf_index(&self, address: &str) -> Option<usize> {
        let leaf = leaf_for(&parse_address(address)?);
        self.leaves.iter().position(|l| *l == leaf)
    }

    /// Case-insensitive membership check; unparsable input is never a member.
    pub fn contains(&self, address: &str) -> bool {
        self.leaf_index(address).is_some()
    }

    /// Sibling hashes from leaf to root, empty when the address is not listed.
    pub fn proof(&self, address: &str) -> Vec<B256> {
        let Some(mut index) = self.leaf_index(address) else {
            return Vec::new();
        };

        let mut proof = Vec::new();
        for layer in &self.layers[..self.layers.len() - 1] {
            let sibling = if index % 2 == 1 { index - 1 } else { index + 1 };
            if let Some(node) = layer.get(sibling) {
                proof.push(*node);
            }
            index /= 2;
        }
        proof
    }

    /// Proof formatted for pasting into a block explorer's `bytes32[]` field,
    /// e.g. `[0xab..,0xcd..]`. Empty string when the address is not listed.
    pub fn raw_proof(&self, address: &str) -> String {
        if !self.contains(address) {
            return String::new();
        }
        let items: Vec<String> = self.proof(address).iter().map(|h| h.to_string()).collect();
        format!("[{}]", items.join(","))
    }

    /// Recompute the root from a leaf and its proof.
    pub fn verify(proof: &[B256], leaf: B256, root: B256) -> bool {
        let computed = proof.iter().fold(leaf, |acc, sibling| hash_pair(&acc, sibling));
        computed == root
    }
}
