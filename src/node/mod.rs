mod iter;


use compare::Compare;
use std::cmp::Ordering::*;

pub use self::iter::{Depth, DepthFirst, Parts, Walk};

pub type Link<K, V> = Option<Box<Node<K, V>>>;

pub trait LinkExt: Sized {
    type K;
    type V;
    fn key_value(&self) -> Option<(&Self::K, &Self::V)>;
    fn key_value_mut(&mut self) -> Option<(&Self::K, &mut Self::V)>;
}

impl<K, V> LinkExt for Link<K, V> {
    type K = K;
    type V = V;

    fn key_value(&self) -> Option<(&K, &V)> {
        self.as_ref().map(|node| (&node.key, &node.value))
    }

    fn key_value_mut(&mut self) -> Option<(&K, &mut V)> {
        self.as_mut().map(|node| { let node = &mut **node; (&node.key, &mut node.value) })
    }
}

/// A tree node. Each node exclusively owns its two subtrees, so cloning a node deep-copies the
/// whole subtree below it.
#[derive(Clone)]
pub struct Node<K, V> {
    left: Link<K, V>,
    right: Link<K, V>,
    key: K,
    value: V,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V) -> Self {
        Node { left: None, right: None, key: key, value: value }
    }
}

/// Inserts a new leaf for `key`, or hands the entry back if an equal key is already present.
pub fn insert<K, V, C>(link: &mut Link<K, V>, cmp: &C, key: K, value: V) -> Result<(), (K, V)>
    where C: Compare<K> {

    let link = get_mut(link, cmp, &key);
    if link.is_some() { return Err((key, value)); }
    *link = Some(Box::new(Node::new(key, value)));
    Ok(())
}

/// Unlinks the node whose key is equal to `key` and returns its entry.
///
/// A node with two children is replaced by its inorder predecessor, the maximum of its left
/// subtree. The predecessor's own left subtree takes the predecessor's old place.
pub fn remove<K, V, C, Q: ?Sized>(link: &mut Link<K, V>, cmp: &C, key: &Q) -> Option<(K, V)>
    where C: Compare<Q, K> {

    let link = get_mut(link, cmp, key);
    let mut node = link.take()?;

    *link = match (node.left.take(), node.right.take()) {
        (None, right) => right,
        (left, None) => left,
        (Some(mut left), right) => {
            let mut replacement = match Right::take_extremum(&mut left.right) {
                None => left,
                Some(mut pred) => { pred.left = Some(left); pred }
            };
            replacement.right = right;
            Some(replacement)
        }
    };

    let node = *node;
    Some((node.key, node.value))
}

/// Returns the link holding `key`, or the empty link where it would be inserted.
pub fn get<'a, K, V, C, Q: ?Sized>(mut link: &'a Link<K, V>, cmp: &C, key: &Q) -> &'a Link<K, V>
    where C: Compare<Q, K> {

    while let Some(ref node) = *link {
        match cmp.compare(key, &node.key) {
            Equal => break,
            Less => link = &node.left,
            Greater => link = &node.right,
        }
    }

    link
}

pub fn get_mut<'a, K, V, C, Q: ?Sized>(mut link: &'a mut Link<K, V>, cmp: &C, key: &Q)
    -> &'a mut Link<K, V> where C: Compare<Q, K> {

    loop {
        let order = link.as_ref().map(|node| cmp.compare(key, &node.key));
        link = match (order, link) {
            (Some(Less), Some(node)) => &mut node.left,
            (Some(Greater), Some(node)) => &mut node.right,
            (_, link) => return link,
        };
    }
}

/// Counts the levels below `link`: zero for an empty link, one for a leaf.
pub fn height<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |node| 1 + height(&node.left).max(height(&node.right)))
}

/// Releases every node below `link` without recursing, returning how many were released.
pub fn teardown<K, V>(link: &mut Link<K, V>) -> usize {
    let mut released = 0;
    let mut nodes: Vec<Box<Node<K, V>>> = link.take().into_iter().collect();

    while let Some(mut node) = nodes.pop() {
        nodes.extend(node.left.take());
        nodes.extend(node.right.take());
        released += 1;
    }

    released
}

pub trait Dir: Sized {
    type Opposite: Dir<Opposite=Self>;

    fn forward<K, V>(node: &Node<K, V>) -> &Link<K, V>;
    fn forward_mut<K, V>(node: &mut Node<K, V>) -> &mut Link<K, V>;

    /// Follows the chain of forward children from `link` to its last non-empty link.
    fn extremum<K, V>(mut link: &Link<K, V>) -> &Link<K, V> {
        while let Some(ref node) = *link {
            let child = Self::forward(node);
            if child.is_none() { break; }
            link = child;
        }

        link
    }

    /// Detaches the extremal node below `link`, splicing its opposite child into its place.
    fn take_extremum<K, V>(mut link: &mut Link<K, V>) -> Link<K, V> {
        loop {
            let more = link.as_ref().map_or(false, |node| Self::forward(node).is_some());
            link = match (more, link) {
                (true, Some(node)) => Self::forward_mut(node),
                (_, link) => {
                    let mut node = link.take()?;
                    *link = Self::Opposite::forward_mut(&mut node).take();
                    return Some(node);
                }
            };
        }
    }
}

pub enum Left {}

impl Dir for Left {
    type Opposite = Right;

    fn forward<K, V>(node: &Node<K, V>) -> &Link<K, V> { &node.left }
    fn forward_mut<K, V>(node: &mut Node<K, V>) -> &mut Link<K, V> { &mut node.left }
}

pub enum Right {}

impl Dir for Right {
    type Opposite = Left;

    fn forward<K, V>(node: &Node<K, V>) -> &Link<K, V> { &node.right }
    fn forward_mut<K, V>(node: &mut Node<K, V>) -> &mut Link<K, V> { &mut node.right }
}
