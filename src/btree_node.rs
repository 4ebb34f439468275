use crate::{BTreeNode, TrieNode};
use std::collections::BTreeMap;

impl<K, V> BTreeNode<K, V> {
    pub(crate) fn new() -> Self {
        BTreeNode {
            value: None,
            children: BTreeMap::new(),
        }
    }
}

impl<K, V> Default for BTreeNode<K, V> {
    fn default() -> Self {
        BTreeNode::new()
    }
}

impl<K: Ord, V> TrieNode for BTreeNode<K, V> {
    type Key = K;
    type Value = V;

    fn count(&self) -> usize {
        let own = if self.value.is_some() { 1 } else { 0 };
        own + self.children.values().map(|c| c.count()).sum::<usize>()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_are_kept_in_key_order() {
        let mut node: BTreeNode<u8, ()> = BTreeNode::default();
        for key in [b'm', b'a', b'z', b'c'].iter() {
            node.child_or_default(*key).set_value(Some(()));
        }

        let keys: Vec<u8> = node.children.keys().copied().collect();
        assert_eq!(keys, b"acmz".to_vec());
        assert_eq!(node.count(), 4);
    }

    #[test]
    fn test_child_or_default_keeps_existing_child() {
        let mut node: BTreeNode<u8, u32> = BTreeNode::default();
        node.child_or_default(1).set_value(Some(10));
        assert_eq!(node.child_or_default(1).value(), Some(&10));
        assert_eq!(node.children.len(), 1);
    }
}
