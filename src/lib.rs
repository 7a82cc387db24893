pub mod collections;
pub mod document;
pub mod error;
pub mod loader;
pub mod relevance;
pub mod tokenizer;

pub use collections::{top_k, ArrayMap, ChainedMap, ChainedSet, QuaternaryHeap};
pub use document::Document;
pub use error::{Error, Result};
pub use relevance::{build_graph, LinkGraphRanker, TfIdfEngine};
