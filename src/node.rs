/// Storage strategy for one trie node and, recursively, its subtree.
///
/// The trie engine only ever talks to nodes through this trait, so an
/// alternative layout (sorted children, a fixed alphabet array, ...) can be
/// plugged into [`Trie`](crate::Trie) without touching the engine.
///
/// `Default` must produce an empty node: no value and no children.
pub trait TrieNode: Default {
    type Key;
    type Value;

    /// Number of nodes in this subtree, including `self`, that hold a value.
    fn count(&self) -> usize;

    fn value(&self) -> Option<&Self::Value>;

    fn value_mut(&mut self) -> Option<&mut Self::Value>;

    /// Replaces the value and returns the previous one. Setting `None` clears
    /// the value but keeps the node and its children.
    fn set_value(&mut self, value: Option<Self::Value>) -> Option<Self::Value>;

    fn child(&self, key: &Self::Key) -> Option<&Self>;

    fn child_mut(&mut self, key: &Self::Key) -> Option<&mut Self>;

    /// Places `child` under `key`, returning the child it replaced.
    fn set_child(&mut self, key: Self::Key, child: Self) -> Option<Self>;

    /// Child under `key`, inserting an empty node first if there is none.
    fn child_or_default(&mut self, key: Self::Key) -> &mut Self;
}
