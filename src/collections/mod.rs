mod bucket;
mod chained_map;
mod heap;
mod iterators;
mod set;
mod topk;

pub use bucket::ArrayMap;
pub use chained_map::ChainedMap;
pub use heap::QuaternaryHeap;
pub use iterators::ChainedIter;
pub use set::{ChainedSet, SetIter};
pub use topk::top_k;
