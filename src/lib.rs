//! An ordered map based on an unbalanced binary search tree.
//!
//! [`OrderedMap`](struct.OrderedMap.html) keeps unique keys in a plain binary search tree
//! ordered by a [`Compare`](https://docs.rs/compare) comparator, which defaults to the keys'
//! natural order. Entries can be walked in preorder, inorder, postorder or level order, either
//! as iterators or by pushing them into a [`Visitor`](trait.Visitor.html).
//!
//! ```
//! use bstree::{Error, Order, OrderedMap};
//!
//! let mut map = OrderedMap::new();
//! for key in &[5, 3, 8, 1, 4, 7, 9] { map.insert(*key, key * 10).unwrap(); }
//!
//! assert_eq!(map.len(), 7);
//! assert_eq!(map.height(), 3);
//! assert_eq!(map.insert(4, 0), Err(Error::DuplicateKey));
//!
//! // The root has two children, so its inorder predecessor takes its place.
//! assert_eq!(map.remove(&5), Ok((5, 50)));
//! assert_eq!(map.traverse(Order::Level).next(), Some((&4, &40)));
//! assert_eq!(map.inorder().map(|e| *e.0).collect::<Vec<_>>(), [1, 3, 4, 7, 8, 9]);
//! ```

pub use crate::error::{Error, Result};
pub use crate::map::OrderedMap;
pub use crate::visit::{Order, Visitor};

mod error;
pub mod map;
mod node;
#[cfg(feature = "ordered_iter")]
mod ordered_iter;
#[cfg(feature = "quickcheck")]
mod quickcheck;
mod visit;
