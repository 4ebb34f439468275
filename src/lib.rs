//! A generic prefix trie keyed by chains of segments.
//!
//! A [`Trie`] maps key chains (any finite sequence of segments: chars, path
//! components, tokens) to values and answers both exact lookups and
//! longest-prefix lookups. How children are stored is left to the node type,
//! see [`TrieNode`]. [`HashNode`] is the default; [`BTreeNode`] and
//! [`FnvHashNode`] are provided as alternatives.
//!
//! The container is single threaded. Share it across threads only behind
//! external locking.
//!
//! ```
//! use chain_trie::Trie;
//!
//! let mut routes: Trie<&str, u32> = Trie::new();
//! routes.insert(vec!["api"], 1);
//! routes.insert(vec!["api", "users"], 2);
//!
//! assert_eq!(routes.get_value(&["api"]), Some(&1));
//! assert_eq!(routes.get_best_value(&["api", "users", "42"]), Some(&2));
//! assert_eq!(routes.get_best_value(&["api", "orders"]), Some(&1));
//! assert_eq!(routes.count(), 2);
//! ```

use hashbrown::hash_map::DefaultHashBuilder;
use std::collections::BTreeMap;
use std::marker::PhantomData;

mod btree_node;
mod hash_node;
mod node;
mod trie;

pub use crate::node::TrieNode;

/// Prefix trie over key chains of `K` holding values of `V`, with children
/// stored by the node type `N`.
#[derive(Debug, Clone)]
pub struct Trie<K, V, N = HashNode<K, V>> {
    root: N,
    marker: PhantomData<fn() -> (K, V)>,
}

/// Default node: children in a hash map keyed by segment.
#[derive(Debug, Clone)]
pub struct HashNode<K, V, S = DefaultHashBuilder> {
    value: Option<V>,
    children: hashbrown::HashMap<K, HashNode<K, V, S>, S>,
}

/// [`HashNode`] using the FNV hasher, cheaper for short segments such as
/// chars or bytes.
pub type FnvHashNode<K, V> = HashNode<K, V, fnv::FnvBuildHasher>;

/// Node with children kept in key order.
#[derive(Debug, Clone)]
pub struct BTreeNode<K, V> {
    value: Option<V>,
    children: BTreeMap<K, BTreeNode<K, V>>,
}
