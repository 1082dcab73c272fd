use ::quickcheck::{Arbitrary, Gen};
use compare::Compare;
use std::default::Default;
use crate::OrderedMap;

/// Generates maps from arbitrary entry lists; later duplicates of a key are dropped.
impl<K, V, C> Arbitrary for OrderedMap<K, V, C>
    where K: Arbitrary, V: Arbitrary, C: 'static + Clone + Compare<K> + Default {

    fn arbitrary(gen: &mut Gen) -> Self {
        Vec::<(K, V)>::arbitrary(gen).into_iter().collect()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item=Self>> {
        let vec: Vec<(K, V)> = self.clone().into_iter().collect();
        Box::new(vec.shrink().map(|vec| vec.into_iter().collect()))
    }
}
