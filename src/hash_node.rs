use crate::{HashNode, TrieNode};
use std::hash::{BuildHasher, Hash};

impl<K, V, S> HashNode<K, V, S>
where
    S: Default,
{
    pub(crate) fn new() -> Self {
        HashNode {
            value: None,
            children: hashbrown::HashMap::with_hasher(S::default()),
        }
    }
}

impl<K, V, S> Default for HashNode<K, V, S>
where
    S: Default,
{
    fn default() -> Self {
        HashNode::new()
    }
}

impl<K, V, S> TrieNode for HashNode<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    type Key = K;
    type Value = V;

    fn count(&self) -> usize {
        self.children
            .values()
            .fold(self.value.is_some() as usize, |acc, child| {
                acc + child.count()
            })
    }

    fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    fn value_mut(&mut self) -> Option<&mut V> {
        self.value.as_mut()
    }

    fn set_value(&mut self, value: Option<V>) -> Option<V> {
        std::mem::replace(&mut self.value, value)
    }

    fn child(&self, key: &K) -> Option<&Self> {
        self.children.get(key)
    }

    fn child_mut(&mut self, key: &K) -> Option<&mut Self> {
        self.children.get_mut(key)
    }

    fn set_child(&mut self, key: K, child: Self) -> Option<Self> {
        self.children.insert(key, child)
    }

    fn child_or_default(&mut self, key: K) -> &mut Self {
        self.children.entry(key).or_default()
    }
}
