use crate::collections::{ChainedMap, ChainedSet};
use crate::document::Document;
use crate::error::{Error, Result};

/// Directed link graph over corpus document identifiers.
///
/// Self-loops are discarded, as are links pointing at identifiers outside
/// the corpus; dangling links are data, not errors.
pub fn build_graph(corpus: &[Document]) -> ChainedMap<String, ChainedSet<String>> {
    let mut members = ChainedSet::new();
    for document in corpus {
        members.insert(document.uri.as_str());
    }

    let mut graph = ChainedMap::new();
    for document in corpus {
        let mut edges = ChainedSet::new();
        for link in &document.links {
            if link != &document.uri && members.contains(link.as_str()) {
                edges.insert(link.clone());
            }
        }
        graph.insert(document.uri.clone(), edges);
    }

    graph
}

/// Authority scores for corpus documents, computed by iterative propagation
/// over the link graph.
///
/// Scores start uniform at `1/N`. Each round a node splits its score evenly
/// across its outbound edges; a node with no outbound edges splits it across
/// every node. The next score is `(1 - decay) / N + decay * incoming`, and
/// propagation stops once the largest per-node change drops below `epsilon`
/// or after `limit` rounds. Scores are non-negative and sum to 1.
pub struct LinkGraphRanker {
    authority_scores: ChainedMap<String, f64>,
}

impl LinkGraphRanker {
    pub fn new(corpus: &[Document], decay: f64, epsilon: f64, limit: usize) -> Result<Self> {
        let graph = build_graph(corpus);
        let authority_scores = propagate(&graph, decay, epsilon, limit)?;

        Ok(Self { authority_scores })
    }

    pub fn authority(&self, uri: &str) -> Result<f64> {
        self.authority_scores
            .get(uri)
            .copied()
            .map_err(|_| Error::PreconditionViolation(format!("uri not in corpus: {uri}")))
    }
}

fn propagate(
    graph: &ChainedMap<String, ChainedSet<String>>,
    decay: f64,
    epsilon: f64,
    limit: usize,
) -> Result<ChainedMap<String, f64>> {
    let node_count = graph.len();
    if node_count == 0 {
        return Ok(ChainedMap::new());
    }

    #[allow(clippy::cast_precision_loss)]
    let n = node_count as f64;
    let mut scores: ChainedMap<String, f64> = ChainedMap::new();
    for (uri, _) in graph {
        scores.insert(uri.clone(), 1.0 / n);
    }

    for round in 0..limit {
        let mut incoming: ChainedMap<String, f64> = ChainedMap::new();
        for (uri, _) in graph {
            incoming.insert(uri.clone(), 0.0);
        }

        let mut dangling_share = 0.0;
        for (uri, edges) in graph {
            let score = *scores.get(uri.as_str())?;
            if edges.is_empty() {
                // Dangling node: its score spreads evenly over all nodes.
                dangling_share += score / n;
            } else {
                #[allow(clippy::cast_precision_loss)]
                let share = score / edges.len() as f64;
                for successor in edges {
                    *incoming.get_mut(successor.as_str())? += share;
                }
            }
        }

        let mut max_change = 0.0_f64;
        let mut next_scores = ChainedMap::new();
        for (uri, contribution) in &incoming {
            let new_score = (1.0 - decay) / n + decay * (contribution + dangling_share);
            let change = (new_score - *scores.get(uri.as_str())?).abs();
            max_change = max_change.max(change);
            next_scores.insert(uri.clone(), new_score);
        }

        scores = next_scores;
        if max_change < epsilon {
            tracing::debug!(rounds = round + 1, "authority propagation converged");
            break;
        }
    }

    Ok(scores)
}
