//! Unbalanced binary search tree keyed by `K`.
use std::cmp::Ordering;

struct Node<K, V> {
    key: K,
    value: V,
    left: Option<Box<Node<K, V>>>,
    right: Option<Box<Node<K, V>>>,
}

/// Left subtree keys are strictly less than a node's key, right subtree keys
/// strictly greater. Duplicate keys are rejected.
pub struct OrderedTree<K, V> {
    root: Option<Box<Node<K, V>>>,
    len: usize,
}

impl<K: Ord, V> Default for OrderedTree<K, V> {
    fn default() -> Self { Self::new() }
}

impl<K: Ord, V> OrderedTree<K, V> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize { self.len }
    pub fn is_empty(&self) -> bool { self.root.is_none() }

    /// Returns `false` and leaves the tree untouched if `key` is already present.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }
        *slot = Some(Box::new(Node { key, value, left: None, right: None }));
        self.len += 1;
        true
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            cur = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            };
        }
        None
    }

    pub fn contains(&self, key: &K) -> bool { self.get(key).is_some() }

    /// Longest root-to-leaf path, in nodes.
    pub fn height(&self) -> usize {
        fn depth<K, V>(node: Option<&Node<K, V>>) -> usize {
            match node {
                None => 0,
                Some(n) => 1 + depth(n.left.as_deref()).max(depth(n.right.as_deref())),
            }
        }
        depth(self.root.as_deref())
    }

    pub fn clear(&mut self) {
        // iterativo: un árbol degenerado es una lista
        let mut stack: Vec<Box<Node<K, V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
    }

    /// Ascending key order.
    pub fn iter(&self) -> InOrder<'_, K, V> {
        let mut it = InOrder { stack: Vec::new() };
        it.push_left(self.root.as_deref());
        it
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }
}

impl<K, V> Drop for OrderedTree<K, V> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<K, V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

pub struct InOrder<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
}

impl<'a, K, V> InOrder<'a, K, V> {
    fn push_left(&mut self, mut node: Option<&'a Node<K, V>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for InOrder<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some((&node.key, &node.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_are_rejected() {
        let mut t = OrderedTree::new();
        assert!(t.insert(5, "a"));
        assert!(!t.insert(5, "b"));
        assert_eq!(t.get(&5), Some(&"a"));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn degenerate_insert_order_grows_height() {
        let mut t = OrderedTree::new();
        for k in 1..=6 {
            t.insert(k, ());
        }
        assert_eq!(t.height(), 6);
        t.clear();
        assert!(t.is_empty());
        assert_eq!(t.height(), 0);
    }
}
