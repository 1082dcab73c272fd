//! Traversal orders and the sink that traversals can be pushed into.

/// The order in which a traversal visits the map's entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Each node before its left subtree, then its right subtree.
    Pre,
    /// The left subtree, then the node, then the right subtree. Keys come out sorted.
    In,
    /// Both subtrees, left first, before the node itself.
    Post,
    /// Breadth-first, one level at a time, each level from left to right.
    Level,
}

/// A sink receiving the entries of a traversal one at a time.
///
/// Any `FnMut(&K, &V)` closure is a visitor.
///
/// # Examples
///
/// ```
/// use bstree::{Order, OrderedMap, Visitor};
///
/// struct Sum(i32);
///
/// impl Visitor<i32, i32> for Sum {
///     fn visit(&mut self, _key: &i32, value: &i32) { self.0 += *value; }
/// }
///
/// let map: OrderedMap<_, _> = vec![(2, 20), (1, 10), (3, 30)].into_iter().collect();
///
/// let mut sum = Sum(0);
/// map.visit(Order::Level, &mut sum);
/// assert_eq!(sum.0, 60);
/// ```
pub trait Visitor<K, V> {
    /// Receives the next entry.
    fn visit(&mut self, key: &K, value: &V);
}

impl<K, V, F> Visitor<K, V> for F where F: FnMut(&K, &V) {
    fn visit(&mut self, key: &K, value: &V) { self(key, value) }
}
