use std::collections::VecDeque;
use crate::visit::Order;
use self::visit::{Seen, Visit};
use super::{Link, Node};

pub trait NodeRef: Sized {
    type Item;
    fn item(self) -> Self::Item;
    fn left(&mut self) -> Option<Self>;
    fn right(&mut self) -> Option<Self>;
}

impl<'a, K, V> NodeRef for &'a Node<K, V> {
    type Item = (&'a K, &'a V);
    fn item(self) -> (&'a K, &'a V) { (&self.key, &self.value) }
    fn left(&mut self) -> Option<&'a Node<K, V>> { self.left.as_deref() }
    fn right(&mut self) -> Option<&'a Node<K, V>> { self.right.as_deref() }
}

impl<K, V> NodeRef for Box<Node<K, V>> {
    type Item = (K, V);
    fn item(self) -> (K, V) { let node = *self; (node.key, node.value) }
    fn left(&mut self) -> Link<K, V> { self.left.take() }
    fn right(&mut self) -> Link<K, V> { self.right.take() }
}

/// A node split into disjoint borrows, so that both subtrees and the value can be handed out
/// mutably for the same lifetime.
pub struct Parts<'a, K, V> {
    key: &'a K,
    value: &'a mut V,
    left: Option<&'a mut Node<K, V>>,
    right: Option<&'a mut Node<K, V>>,
}

impl<'a, K, V> From<&'a mut Node<K, V>> for Parts<'a, K, V> {
    fn from(node: &'a mut Node<K, V>) -> Self {
        let Node { left, right, key, value } = node;
        Parts { key: key, value: value, left: left.as_deref_mut(), right: right.as_deref_mut() }
    }
}

impl<'a, K, V> NodeRef for Parts<'a, K, V> {
    type Item = (&'a K, &'a mut V);
    fn item(self) -> (&'a K, &'a mut V) { (self.key, self.value) }
    fn left(&mut self) -> Option<Self> { self.left.take().map(Parts::from) }
    fn right(&mut self) -> Option<Self> { self.right.take().map(Parts::from) }
}

/// The depth-first visit orders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Depth {
    Pre,
    In,
    Post,
}

enum Op<N> {
    /// Push a child and keep descending.
    Descend(Option<N>),
    /// Pop the current node, push the given children (the second ends up on top) and yield.
    Yield(Option<N>, Option<N>),
}

/// A depth-first traversal driven by an explicit stack, so its depth is not limited by the
/// call stack.
#[derive(Clone)]
pub struct DepthFirst<N> where N: NodeRef {
    visits: Vec<Visit<N>>,
    order: Depth,
    size: usize,
}

impl<N> DepthFirst<N> where N: NodeRef {
    pub fn new(root: Option<N>, size: usize, order: Depth) -> Self {
        DepthFirst { visits: root.into_iter().map(Visit::new).collect(), order: order, size: size }
    }
}

impl<N> Iterator for DepthFirst<N> where N: NodeRef {
    type Item = N::Item;

    fn next(&mut self) -> Option<N::Item> {
        loop {
            let visit = self.visits.last_mut()?;

            let op = match self.order {
                Depth::Pre => Op::Yield(visit.node.right(), visit.node.left()),
                Depth::In => match visit.seen {
                    Seen::N => { visit.seen = Seen::L; Op::Descend(visit.node.left()) }
                    Seen::L | Seen::B => Op::Yield(visit.node.right(), None),
                },
                Depth::Post => match visit.seen {
                    Seen::N => { visit.seen = Seen::L; Op::Descend(visit.node.left()) }
                    Seen::L => { visit.seen = Seen::B; Op::Descend(visit.node.right()) }
                    Seen::B => Op::Yield(None, None),
                },
            };

            match op {
                Op::Descend(child) => self.visits.extend(child.map(Visit::new)),
                Op::Yield(first, second) => {
                    let visit = self.visits.pop()?;
                    self.visits.extend(first.map(Visit::new));
                    self.visits.extend(second.map(Visit::new));
                    self.size -= 1;
                    return Some(visit.node.item());
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

/// A level-order traversal driven by a FIFO queue seeded with the root.
#[derive(Clone)]
pub struct BreadthFirst<N> where N: NodeRef {
    queue: VecDeque<N>,
    size: usize,
}

impl<N> BreadthFirst<N> where N: NodeRef {
    pub fn new(root: Option<N>, size: usize) -> Self {
        BreadthFirst { queue: root.into_iter().collect(), size: size }
    }
}

impl<N> Iterator for BreadthFirst<N> where N: NodeRef {
    type Item = N::Item;

    fn next(&mut self) -> Option<N::Item> {
        let mut node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        self.size -= 1;
        Some(node.item())
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

/// A traversal in any of the four orders.
#[derive(Clone)]
pub enum Walk<N> where N: NodeRef {
    Depth(DepthFirst<N>),
    Breadth(BreadthFirst<N>),
}

impl<N> Walk<N> where N: NodeRef {
    pub fn new(root: Option<N>, size: usize, order: Order) -> Self {
        match order {
            Order::Pre => Walk::Depth(DepthFirst::new(root, size, Depth::Pre)),
            Order::In => Walk::Depth(DepthFirst::new(root, size, Depth::In)),
            Order::Post => Walk::Depth(DepthFirst::new(root, size, Depth::Post)),
            Order::Level => Walk::Breadth(BreadthFirst::new(root, size)),
        }
    }
}

impl<N> Iterator for Walk<N> where N: NodeRef {
    type Item = N::Item;

    fn next(&mut self) -> Option<N::Item> {
        match *self {
            Walk::Depth(ref mut it) => it.next(),
            Walk::Breadth(ref mut it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match *self {
            Walk::Depth(ref it) => it.size_hint(),
            Walk::Breadth(ref it) => it.size_hint(),
        }
    }
}

mod visit {
    #[derive(Clone)]
    pub struct Visit<N> where N: super::NodeRef {
        pub node: N,
        pub seen: Seen,
    }

    impl<N> Visit<N> where N: super::NodeRef {
        pub fn new(node: N) -> Visit<N> { Visit { node: node, seen: Seen::N } }
    }

    /// Which of a node's subtrees have already been pushed.
    #[derive(Clone, Copy)]
    pub enum Seen {
        /// Neither.
        N,
        /// The left one.
        L,
        /// Both.
        B,
    }
}
