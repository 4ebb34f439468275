use crate::{Trie, TrieNode};
use std::borrow::Borrow;
use std::iter::FromIterator;
use std::marker::PhantomData;
use tracing::trace;

impl<K, V, N> Trie<K, V, N>
where
    N: TrieNode<Key = K, Value = V>,
{
    pub fn new() -> Self {
        Trie {
            root: N::default(),
            marker: PhantomData,
        }
    }

    /// Number of key chains currently holding a value.
    ///
    /// Walks the whole tree on every call, nothing is cached.
    pub fn count(&self) -> usize {
        self.root.count()
    }

    pub fn len(&self) -> usize {
        self.count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Exact lookup. An empty chain never matches.
    pub fn get_value<I>(&self, chain: I) -> Option<&V>
    where
        I: IntoIterator,
        I::Item: Borrow<K>,
    {
        let mut chain = chain.into_iter().peekable();
        chain.peek()?;

        let mut current = &self.root;
        for key in chain {
            current = current.child(key.borrow())?;
        }
        current.value()
    }

    pub fn get_value_mut<I>(&mut self, chain: I) -> Option<&mut V>
    where
        I: IntoIterator,
        I::Item: Borrow<K>,
    {
        let mut chain = chain.into_iter().peekable();
        chain.peek()?;

        let mut current = &mut self.root;
        for key in chain {
            current = current.child_mut(key.borrow())?;
        }
        current.value_mut()
    }

    /// Longest-prefix lookup: the value of the deepest node along `chain`
    /// (inclusive) that holds one, even when the full chain is not in the
    /// trie. An empty chain never matches.
    pub fn get_best_value<I>(&self, chain: I) -> Option<&V>
    where
        I: IntoIterator,
        I::Item: Borrow<K>,
    {
        let mut chain = chain.into_iter().peekable();
        chain.peek()?;

        let mut current = &self.root;
        let mut best = current.value();
        for key in chain {
            current = match current.child(key.borrow()) {
                Some(child) => child,
                None => break,
            };
            if let Some(value) = current.value() {
                best = Some(value);
            }
        }
        best
    }

    /// Sets (or with `None`, clears) the value at `chain`, creating any
    /// missing nodes on the way. Returns the value it replaced.
    ///
    /// Clearing never removes nodes. An empty chain is a no-op.
    pub fn update_value<I>(&mut self, value: Option<V>, chain: I) -> Option<V>
    where
        I: IntoIterator<Item = K>,
    {
        let mut chain = chain.into_iter().peekable();
        chain.peek()?;

        let mut current = &mut self.root;
        let mut depth = 0;
        for key in chain {
            current = current.child_or_default(key);
            depth += 1;
        }
        trace!(depth, cleared = value.is_none(), "update trie value");
        current.set_value(value)
    }

    pub fn insert<I>(&mut self, chain: I, value: V) -> Option<V>
    where
        I: IntoIterator<Item = K>,
    {
        self.update_value(Some(value), chain)
    }

    pub fn clear_value<I>(&mut self, chain: I) -> Option<V>
    where
        I: IntoIterator<Item = K>,
    {
        self.update_value(None, chain)
    }

    pub fn contains_chain<I>(&self, chain: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<K>,
    {
        self.get_value(chain).is_some()
    }
}

impl<K, V, N> Default for Trie<K, V, N>
where
    N: TrieNode<Key = K, Value = V>,
{
    fn default() -> Self {
        Trie::new()
    }
}

impl<K, V, N, C> Extend<(C, V)> for Trie<K, V, N>
where
    N: TrieNode<Key = K, Value = V>,
    C: IntoIterator<Item = K>,
{
    fn extend<T: IntoIterator<Item = (C, V)>>(&mut self, iter: T) {
        for (chain, value) in iter {
            self.insert(chain, value);
        }
    }
}

impl<K, V, N, C> FromIterator<(C, V)> for Trie<K, V, N>
where
    N: TrieNode<Key = K, Value = V>,
    C: IntoIterator<Item = K>,
{
    fn from_iter<T: IntoIterator<Item = (C, V)>>(iter: T) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}
