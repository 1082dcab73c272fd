//! An ordered map based on an unbalanced binary search tree.

use compare::{Compare, Natural};
use std::fmt::{self, Debug, Display};
use std::io;
use std::iter;
use std::ops;
use tracing::{debug, trace};
use crate::error::{Error, Result};
use crate::node::{self, Depth, DepthFirst, Dir, Left, LinkExt, Node, Parts, Right, Walk};
use crate::visit::{Order, Visitor};

/// An ordered map based on an unbalanced binary search tree.
///
/// Keys are unique: inserting a key that is already present fails instead of overwriting the
/// stored value. The tree is never rebalanced, so its shape, and therefore its
/// [`height`](#method.height), depends on the order in which keys are inserted.
///
/// The behavior of this map is undefined if a key's ordering relative to any other key changes
/// while the key is in the map. This is normally only possible through `Cell`, `RefCell`, or
/// unsafe code.
pub struct OrderedMap<K, V, C = Natural<K>> where C: Compare<K> {
    root: node::Link<K, V>,
    len: usize,
    cmp: C,
}

impl<K, V> OrderedMap<K, V> where K: Ord {
    /// Creates an empty map ordered according to the natural order of its keys.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::OrderedMap::new();
    ///
    /// map.insert(2, "b").unwrap();
    /// map.insert(1, "a").unwrap();
    /// map.insert(3, "c").unwrap();
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { OrderedMap::with_cmp(compare::natural()) }
}

impl<K, V, C> OrderedMap<K, V, C> where C: Compare<K> {
    /// Creates an empty map ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let mut map = bstree::OrderedMap::with_cmp(natural().rev());
    ///
    /// map.insert(2, "b").unwrap();
    /// map.insert(1, "a").unwrap();
    /// map.insert(3, "c").unwrap();
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn with_cmp(cmp: C) -> Self {
        OrderedMap { root: None, len: 0, cmp: cmp }
    }

    /// Checks if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::OrderedMap::new();
    /// assert!(map.is_empty());
    ///
    /// map.insert(2, "b").unwrap();
    /// assert!(!map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Returns the number of entries in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::OrderedMap::new();
    /// assert_eq!(map.len(), 0);
    ///
    /// map.insert(2, "b").unwrap();
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize { self.len }

    /// Returns a reference to the map's comparator.
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Returns the number of levels in the tree: zero when empty, one for a single entry.
    ///
    /// Computed by walking the whole tree on every call.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::OrderedMap::new();
    /// assert_eq!(map.height(), 0);
    ///
    /// for key in &[2, 1, 3] { map.insert(*key, ()).unwrap(); }
    /// assert_eq!(map.height(), 2);
    ///
    /// // Sorted insertion degenerates into a chain.
    /// let mut chain = bstree::OrderedMap::new();
    /// for key in 0..10 { chain.insert(key, ()).unwrap(); }
    /// assert_eq!(chain.height(), 10);
    /// ```
    pub fn height(&self) -> usize { node::height(&self.root) }

    /// Removes all entries from the map.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::OrderedMap::new();
    ///
    /// map.insert(2, "b").unwrap();
    /// map.insert(1, "a").unwrap();
    ///
    /// map.clear();
    ///
    /// assert_eq!(map.len(), 0);
    /// assert_eq!(map.iter().next(), None);
    /// ```
    pub fn clear(&mut self) {
        let released = node::teardown(&mut self.root);
        self.len = 0;
        debug!(released, "cleared map");
    }

    /// Inserts an entry into the map.
    ///
    /// Fails with [`Error::DuplicateKey`](enum.Error.html#variant.DuplicateKey), leaving the map
    /// untouched, if the map already contains an equal key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Error;
    ///
    /// let mut map = bstree::OrderedMap::new();
    /// assert_eq!(map.insert(1, "a"), Ok(()));
    /// assert_eq!(map.insert(1, "b"), Err(Error::DuplicateKey));
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Result<()> {
        match node::insert(&mut self.root, &self.cmp, key, value) {
            Ok(()) => {
                self.len += 1;
                Ok(())
            }
            Err(_) => {
                trace!(len = self.len, "rejected duplicate key");
                Err(Error::DuplicateKey)
            }
        }
    }

    /// Removes and returns the entry whose key is equal to the given key.
    ///
    /// Fails with [`Error::KeyNotFound`](enum.Error.html#variant.KeyNotFound) if the map does
    /// not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Error;
    ///
    /// let mut map = bstree::OrderedMap::new();
    ///
    /// map.insert(2, "b").unwrap();
    /// map.insert(1, "a").unwrap();
    /// map.insert(3, "c").unwrap();
    ///
    /// assert_eq!(map.remove(&2), Ok((2, "b")));
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.get(&2), None);
    /// assert_eq!(map.remove(&2), Err(Error::KeyNotFound));
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Result<(K, V)> where C: Compare<Q, K> {
        match node::remove(&mut self.root, &self.cmp, key) {
            Some(key_value) => {
                self.len -= 1;
                Ok(key_value)
            }
            None => {
                trace!(len = self.len, "key to remove not found");
                Err(Error::KeyNotFound)
            }
        }
    }

    /// Returns references to the entry whose key is equal to the given key, or `None` if the
    /// map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::OrderedMap::new();
    /// assert_eq!(map.find(&1), None);
    /// map.insert(1, "a").unwrap();
    /// assert_eq!(map.find(&1), Some((&1, &"a")));
    /// ```
    pub fn find<Q: ?Sized>(&self, key: &Q) -> Option<(&K, &V)> where C: Compare<Q, K> {
        node::get(&self.root, &self.cmp, key).key_value()
    }

    /// Checks if the map contains the given key.
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool where C: Compare<Q, K> {
        self.find(key).is_some()
    }

    /// Returns a reference to the value associated with the given key, or `None` if the
    /// map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::OrderedMap::new();
    /// assert_eq!(map.get(&1), None);
    /// map.insert(1, "a").unwrap();
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// ```
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V> where C: Compare<Q, K> {
        self.find(key).map(|e| e.1)
    }

    /// Returns a mutable reference to the value associated with the given key, or `None`
    /// if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::OrderedMap::new();
    /// map.insert(1, "a").unwrap();
    ///
    /// if let Some(value) = map.get_mut(&1) { *value = "b"; }
    ///
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V> where C: Compare<Q, K> {
        node::get_mut(&mut self.root, &self.cmp, key).key_value_mut().map(|e| e.1)
    }

    /// Returns the map's minimum key.
    ///
    /// Fails with [`Error::EmptyMap`](enum.Error.html#variant.EmptyMap) if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Error;
    ///
    /// let mut map = bstree::OrderedMap::new();
    /// assert_eq!(map.min(), Err(Error::EmptyMap));
    ///
    /// map.insert(2, "b").unwrap();
    /// map.insert(1, "a").unwrap();
    /// map.insert(3, "c").unwrap();
    ///
    /// assert_eq!(map.min(), Ok(&1));
    /// ```
    pub fn min(&self) -> Result<&K> {
        self.min_entry().map(|e| e.0).ok_or(Error::EmptyMap)
    }

    /// Returns the map's maximum key.
    ///
    /// Fails with [`Error::EmptyMap`](enum.Error.html#variant.EmptyMap) if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Error;
    ///
    /// let mut map = bstree::OrderedMap::new();
    /// assert_eq!(map.max(), Err(Error::EmptyMap));
    ///
    /// map.insert(2, "b").unwrap();
    /// map.insert(1, "a").unwrap();
    /// map.insert(3, "c").unwrap();
    ///
    /// assert_eq!(map.max(), Ok(&3));
    /// ```
    pub fn max(&self) -> Result<&K> {
        self.max_entry().map(|e| e.0).ok_or(Error::EmptyMap)
    }

    /// Returns references to the entry with the minimum key, or `None` if the map is empty.
    pub fn min_entry(&self) -> Option<(&K, &V)> { Left::extremum(&self.root).key_value() }

    /// Returns references to the entry with the maximum key, or `None` if the map is empty.
    pub fn max_entry(&self) -> Option<(&K, &V)> { Right::extremum(&self.root).key_value() }

    /// Returns an iterator over the map's entries in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Order;
    ///
    /// let mut map = bstree::OrderedMap::new();
    /// for key in &[5, 3, 8, 1, 4, 7, 9] { map.insert(*key, ()).unwrap(); }
    ///
    /// let keys = |order| map.traverse(order).map(|e| *e.0).collect::<Vec<_>>();
    ///
    /// assert_eq!(keys(Order::Pre), [5, 3, 1, 4, 8, 7, 9]);
    /// assert_eq!(keys(Order::In), [1, 3, 4, 5, 7, 8, 9]);
    /// assert_eq!(keys(Order::Post), [1, 4, 3, 7, 9, 8, 5]);
    /// assert_eq!(keys(Order::Level), [5, 3, 8, 1, 4, 7, 9]);
    /// ```
    pub fn traverse(&self, order: Order) -> Traversal<K, V> {
        Traversal(Walk::new(self.root.as_deref(), self.len, order))
    }

    /// Returns an iterator visiting each node before its left and then its right subtree.
    pub fn preorder(&self) -> Traversal<K, V> { self.traverse(Order::Pre) }

    /// Returns an iterator visiting the entries in ascending key order.
    pub fn inorder(&self) -> Traversal<K, V> { self.traverse(Order::In) }

    /// Returns an iterator visiting both subtrees of each node before the node itself.
    pub fn postorder(&self) -> Traversal<K, V> { self.traverse(Order::Post) }

    /// Returns an iterator visiting the tree breadth-first, level by level from the root.
    pub fn level_order(&self) -> Traversal<K, V> { self.traverse(Order::Level) }

    /// Pushes every entry into the given visitor, in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Order;
    ///
    /// let mut map = bstree::OrderedMap::new();
    /// for key in &[2, 1, 3] { map.insert(*key, *key * 10).unwrap(); }
    ///
    /// let mut seen = vec![];
    /// map.visit(Order::Post, &mut |k: &i32, v: &i32| seen.push((*k, *v)));
    /// assert_eq!(seen, [(1, 10), (3, 30), (2, 20)]);
    /// ```
    pub fn visit<T: ?Sized>(&self, order: Order, visitor: &mut T) where T: Visitor<K, V> {
        for (key, value) in self.traverse(order) { visitor.visit(key, value); }
    }

    /// Writes one `key: value` line per entry, in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Order;
    ///
    /// let mut map = bstree::OrderedMap::new();
    /// for key in &[2, 1, 3] { map.insert(*key, "x").unwrap(); }
    ///
    /// let mut out = Vec::new();
    /// map.write_lines(Order::Pre, &mut out).unwrap();
    /// assert_eq!(out, b"2: x\n1: x\n3: x\n");
    /// ```
    pub fn write_lines<W>(&self, order: Order, mut writer: W) -> io::Result<()>
        where W: io::Write, K: Display, V: Display {

        for (key, value) in self.traverse(order) { writeln!(writer, "{}: {}", key, value)?; }
        writer.flush()
    }

    /// Returns an iterator that consumes the map, yielding its entries in ascending order.
    pub fn into_iter(mut self) -> IntoIter<K, V> {
        let root = self.root.take();
        IntoIter(DepthFirst::new(root, self.len, Depth::In))
    }

    /// Returns an iterator over the map's entries in ascending order, with immutable
    /// references to the values.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::OrderedMap::new();
    ///
    /// map.insert(2, "b").unwrap();
    /// map.insert(1, "a").unwrap();
    ///
    /// assert_eq!(map.iter().collect::<Vec<_>>(), [(&1, &"a"), (&2, &"b")]);
    /// ```
    pub fn iter(&self) -> Iter<K, V> {
        Iter(DepthFirst::new(self.root.as_deref(), self.len, Depth::In))
    }

    /// Returns an iterator over the map's entries in ascending order, with mutable
    /// references to the values.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::OrderedMap::new();
    ///
    /// map.insert(2, 2).unwrap();
    /// map.insert(1, 1).unwrap();
    ///
    /// for (key, value) in map.iter_mut() { *value += *key * 10; }
    ///
    /// assert_eq!(map.iter().collect::<Vec<_>>(), [(&1, &11), (&2, &22)]);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<K, V> {
        IterMut(DepthFirst::new(self.root.as_deref_mut().map(Parts::from), self.len, Depth::In))
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> &node::Link<K, V> { &self.root }
}

impl<K, V, C> Drop for OrderedMap<K, V, C> where C: Compare<K> {
    fn drop(&mut self) { node::teardown(&mut self.root); }
}

impl<K, V, C> Clone for OrderedMap<K, V, C> where K: Clone, V: Clone, C: Compare<K> + Clone {
    fn clone(&self) -> Self {
        OrderedMap { root: self.root.clone(), len: self.len, cmp: self.cmp.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.root = source.root.clone();
        self.len = source.len;
        self.cmp.clone_from(&source.cmp);
    }
}

impl<K, V, C> Debug for OrderedMap<K, V, C> where K: Debug, V: Debug, C: Compare<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C> Default for OrderedMap<K, V, C> where C: Compare<K> + Default {
    fn default() -> Self { OrderedMap::with_cmp(Default::default()) }
}

/// Inserts every entry whose key is not yet present. Later duplicates are dropped.
impl<K, V, C> Extend<(K, V)> for OrderedMap<K, V, C> where C: Compare<K> {
    fn extend<I: IntoIterator<Item=(K, V)>>(&mut self, it: I) {
        for (k, v) in it { let _ = self.insert(k, v); }
    }
}

impl<K, V, C> iter::FromIterator<(K, V)> for OrderedMap<K, V, C>
    where C: Compare<K> + Default {

    fn from_iter<I: IntoIterator<Item=(K, V)>>(it: I) -> Self {
        let mut map: Self = Default::default();
        map.extend(it);
        map
    }
}

impl<'a, K, V, C, Q: ?Sized> ops::Index<&'a Q> for OrderedMap<K, V, C>
    where C: Compare<K> + Compare<Q, K> {

    type Output = V;
    fn index(&self, key: &Q) -> &V { self.get(key).expect("key not found") }
}

impl<'a, K, V, C> IntoIterator for &'a OrderedMap<K, V, C> where C: Compare<K> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Iter<'a, K, V> { self.iter() }
}

impl<'a, K, V, C> IntoIterator for &'a mut OrderedMap<K, V, C> where C: Compare<K> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;
    fn into_iter(self) -> IterMut<'a, K, V> { self.iter_mut() }
}

impl<K, V, C> IntoIterator for OrderedMap<K, V, C> where C: Compare<K> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;
    fn into_iter(self) -> IntoIter<K, V> { self.into_iter() }
}

impl<K, V, C> PartialEq for OrderedMap<K, V, C> where V: PartialEq, C: Compare<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(l, r)| {
            self.cmp.compares_eq(l.0, r.0) && l.1 == r.1
        })
    }
}

impl<K, V, C> Eq for OrderedMap<K, V, C> where V: Eq, C: Compare<K> {}

/// An iterator that consumes the map.
///
/// The iterator yields the entries in ascending order according to the map's comparator.
///
/// # Examples
///
/// Acquire through [`OrderedMap::into_iter`](struct.OrderedMap.html#method.into_iter) or the
/// `IntoIterator` trait:
///
/// ```
/// let mut map = bstree::OrderedMap::new();
///
/// map.insert(2, "b").unwrap();
/// map.insert(1, "a").unwrap();
///
/// assert_eq!(map.into_iter().collect::<Vec<_>>(), [(1, "a"), (2, "b")]);
/// ```
#[derive(Clone)]
pub struct IntoIter<K, V>(DepthFirst<Box<Node<K, V>>>);

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);
    fn next(&mut self) -> Option<(K, V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> Drop for IntoIter<K, V> {
    fn drop(&mut self) { for _ in self {} }
}

/// An iterator over the map's entries with immutable references to the values.
///
/// The iterator yields the entries in ascending order according to the map's comparator.
///
/// # Examples
///
/// Acquire through [`OrderedMap::iter`](struct.OrderedMap.html#method.iter) or the
/// `IntoIterator` trait:
///
/// ```
/// let mut map = bstree::OrderedMap::new();
///
/// map.insert(2, "b").unwrap();
/// map.insert(1, "a").unwrap();
///
/// for (key, value) in &map {
///     println!("{:?}: {:?}", key, value);
/// }
/// ```
pub struct Iter<'a, K: 'a, V: 'a>(DepthFirst<&'a Node<K, V>>);

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Iter<'a, K, V> { Iter(self.0.clone()) }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<(&'a K, &'a V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

/// An iterator over the map's entries with mutable references to the values.
///
/// The iterator yields the entries in ascending order according to the map's comparator.
///
/// Acquire through [`OrderedMap::iter_mut`](struct.OrderedMap.html#method.iter_mut) or the
/// `IntoIterator` trait.
pub struct IterMut<'a, K: 'a, V: 'a>(DepthFirst<Parts<'a, K, V>>);

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);
    fn next(&mut self) -> Option<(&'a K, &'a mut V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> ExactSizeIterator for IterMut<'a, K, V> {}

/// An iterator over the map's entries in preorder, inorder, postorder or level order.
///
/// Acquire through [`OrderedMap::traverse`](struct.OrderedMap.html#method.traverse) or one of
/// the per-order shorthands such as
/// [`OrderedMap::level_order`](struct.OrderedMap.html#method.level_order). Traversals are
/// restartable: asking the map for a new one starts over from the root.
pub struct Traversal<'a, K: 'a, V: 'a>(Walk<&'a Node<K, V>>);

impl<'a, K, V> Clone for Traversal<'a, K, V> {
    fn clone(&self) -> Traversal<'a, K, V> { Traversal(self.0.clone()) }
}

impl<'a, K, V> Iterator for Traversal<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<(&'a K, &'a V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> ExactSizeIterator for Traversal<'a, K, V> {}

#[cfg(test)]
mod test {
    use compare::{Compare, natural};
    use crate::Error;
    use super::OrderedMap;

    fn sample() -> OrderedMap<i32, &'static str> {
        let mut map = OrderedMap::new();
        for &(k, v) in &[(5, "e"), (3, "c"), (8, "h"), (1, "a"), (4, "d"), (7, "g"), (9, "i")] {
            map.insert(k, v).unwrap();
        }
        map
    }

    fn keys<C: Compare<i32>>(map: &OrderedMap<i32, &'static str, C>) -> Vec<i32> {
        map.inorder().map(|e| *e.0).collect()
    }

    #[test]
    fn sample_shape() {
        let map = sample();
        assert_eq!(keys(&map), [1, 3, 4, 5, 7, 8, 9]);
        assert_eq!(map.height(), 3);
        assert_eq!(map.len(), 7);
        assert_eq!(map.min(), Ok(&1));
        assert_eq!(map.max(), Ok(&9));
    }

    #[test]
    fn remove_root_with_two_children() {
        let mut map = sample();
        assert_eq!(map.remove(&5), Ok((5, "e")));
        assert_eq!(map.preorder().next(), Some((&4, &"d")));
        assert_eq!(keys(&map), [1, 3, 4, 7, 8, 9]);
        assert_eq!(map.len(), 6);

        assert_eq!(map.remove(&100), Err(Error::KeyNotFound));
        assert_eq!(map.len(), 6);
        assert_eq!(keys(&map), [1, 3, 4, 7, 8, 9]);
    }

    #[test]
    fn empty() {
        let mut map: OrderedMap<i32, &str> = OrderedMap::new();
        assert_eq!(map.len(), 0);
        assert!(map.is_empty());
        assert_eq!(map.height(), 0);
        assert_eq!(map.find(&1), None);
        assert_eq!(map.remove(&1), Err(Error::KeyNotFound));
        assert_eq!(map.min(), Err(Error::EmptyMap));
        assert_eq!(map.max(), Err(Error::EmptyMap));
        assert_eq!(map.min_entry(), None);
        assert_eq!(map.max_entry(), None);
    }

    #[test]
    fn duplicate_insert_changes_nothing() {
        let mut map = sample();
        let before: Vec<_> = map.level_order().map(|(k, v)| (*k, *v)).collect();

        assert_eq!(map.insert(4, "x"), Err(Error::DuplicateKey));

        assert_eq!(map.len(), 7);
        assert_eq!(map.find(&4), Some((&4, &"d")));
        assert_eq!(map.level_order().map(|(k, v)| (*k, *v)).collect::<Vec<_>>(), before);
    }

    #[test]
    fn clone_is_independent() {
        let map = sample();
        let mut copy = map.clone();
        assert_eq!(copy, map);

        copy.remove(&5).unwrap();
        copy.insert(6, "f").unwrap();

        assert_eq!(map.len(), 7);
        assert_eq!(map.find(&5), Some((&5, &"e")));
        assert_eq!(map.find(&6), None);
        assert_eq!(keys(&map), [1, 3, 4, 5, 7, 8, 9]);
        assert_eq!(keys(&copy), [1, 3, 4, 6, 7, 8, 9]);
    }

    #[test]
    fn clone_from_replaces_contents() {
        let source = sample();
        let mut dest = OrderedMap::new();
        dest.insert(42, "z").unwrap();
        dest.insert(10, "y").unwrap();

        dest.clone_from(&source);

        assert_eq!(dest.len(), 7);
        assert_eq!(dest.find(&42), None);
        assert_eq!(dest, source);
        assert_eq!(dest.preorder().collect::<Vec<_>>(), source.preorder().collect::<Vec<_>>());
    }

    #[test]
    fn clear_resets() {
        let mut map = sample();
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.height(), 0);
        assert_eq!(map.iter().next(), None);

        map.insert(1, "a").unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.height(), 1);
    }

    #[test]
    fn reverse_comparator() {
        let mut map: OrderedMap<i32, &str, _> = OrderedMap::with_cmp(natural().rev());
        for &k in &[5, 3, 8, 1, 4, 7, 9] { map.insert(k, "").unwrap(); }

        assert_eq!(keys(&map), [9, 8, 7, 5, 4, 3, 1]);
        assert_eq!(map.min(), Ok(&9));
        assert_eq!(map.max(), Ok(&1));
        assert_eq!(map.remove(&8), Ok((8, "")));
        assert_eq!(keys(&map), [9, 7, 5, 4, 3, 1]);
    }

    #[test]
    fn closure_comparator() {
        let by_abs = |l: &i32, r: &i32| l.abs().cmp(&r.abs());
        let mut map: OrderedMap<i32, &str, _> = OrderedMap::with_cmp(by_abs);
        map.insert(-2, "a").unwrap();
        map.insert(1, "b").unwrap();

        assert_eq!(map.insert(2, "c"), Err(Error::DuplicateKey));
        assert_eq!(map.iter().map(|e| *e.0).collect::<Vec<_>>(), [1, -2]);
    }

    #[test]
    fn deep_chain_does_not_overflow() {
        let mut map = OrderedMap::new();
        for key in 0..10_000 { map.insert(key, ()).unwrap(); }

        assert_eq!(map.iter().count(), 10_000);
        assert_eq!(map.postorder().next(), Some((&9_999, &())));
        assert_eq!(map.level_order().last(), Some((&9_999, &())));
        assert_eq!(map.max(), Ok(&9_999));

        map.clear();
        assert!(map.is_empty());
    }

    #[test]
    fn exact_size() {
        let map = sample();
        let mut it = map.level_order();
        assert_eq!(it.len(), 7);
        it.next();
        assert_eq!(it.len(), 6);
        assert_eq!(map.iter().len(), 7);
    }

    #[test]
    fn debug_lists_entries_in_order() {
        let mut map = OrderedMap::new();
        map.insert(2, 'b').unwrap();
        map.insert(1, 'a').unwrap();
        assert_eq!(format!("{:?}", map), "{1: 'a', 2: 'b'}");
    }

    #[test]
    fn index() {
        let map = sample();
        assert_eq!(map[&7], "g");
    }

    #[test]
    #[should_panic(expected = "key not found")]
    fn index_missing() {
        let map = sample();
        let _ = map[&6];
    }

    #[test]
    fn collect_keeps_first_duplicate() {
        let map: OrderedMap<_, _> = vec![(1, "a"), (2, "b"), (1, "c")].into_iter().collect();
        assert_eq!(map.len(), 2);
        assert_eq!(map[&1], "a");
    }

    #[test]
    fn partially_consumed_into_iter() {
        let mut it = sample().into_iter();
        assert_eq!(it.next(), Some((1, "a")));
        assert_eq!(it.len(), 6);
    }
}
