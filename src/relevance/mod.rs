mod link_graph;

pub use link_graph::{build_graph, LinkGraphRanker};

use crate::collections::{ChainedMap, ChainedSet};
use crate::document::Document;
use crate::error::{Error, Result};

/// Scores how relevant each corpus document is to a query via TF-IDF cosine
/// similarity.
///
/// Construction precomputes the per-term IDF scores, every document's TF-IDF
/// vector, and the Euclidean norm of each vector. Queries only ever allocate
/// their own transient vector, so `compute_relevance` is O(query length).
pub struct TfIdfEngine {
    idf_scores: ChainedMap<String, f64>,
    document_vectors: ChainedMap<String, ChainedMap<String, f64>>,
    document_norms: ChainedMap<String, f64>,
}

impl TfIdfEngine {
    pub fn new(corpus: &[Document]) -> Result<Self> {
        if corpus.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        let idf_scores = compute_idf(corpus);
        let mut document_vectors = ChainedMap::new();
        let mut document_norms = ChainedMap::new();

        for document in corpus {
            let tf_scores = compute_tf(&document.terms);
            let mut vector = ChainedMap::new();
            let mut norm_squared = 0.0;

            for (term, tf) in &tf_scores {
                // Every term of this document has an IDF score by construction.
                let weight = tf * idf_scores.get(term.as_str())?;
                norm_squared += weight * weight;
                vector.insert(term.clone(), weight);
            }

            document_norms.insert(document.uri.clone(), norm_squared.sqrt());
            document_vectors.insert(document.uri.clone(), vector);
        }

        tracing::debug!(
            documents = corpus.len(),
            terms = idf_scores.len(),
            "tf-idf vectors built"
        );

        Ok(Self {
            idf_scores,
            document_vectors,
            document_norms,
        })
    }

    /// Cosine similarity between the query's TF-IDF vector and the document's.
    ///
    /// Query terms unknown to the corpus stay in the query vector with a zero
    /// weight. A zero norm on either side yields `0.0` rather than dividing.
    pub fn compute_relevance(&self, query: &[String], uri: &str) -> Result<f64> {
        let document_vector = self
            .document_vectors
            .get(uri)
            .map_err(|_| Error::PreconditionViolation(format!("uri not in corpus: {uri}")))?;
        let document_norm = *self.document_norms.get(uri)?;

        let query_tf = compute_tf(query);
        let mut query_vector = ChainedMap::new();
        let mut query_norm_squared = 0.0;

        for (term, tf) in &query_tf {
            let weight = match self.idf_scores.get(term.as_str()) {
                Ok(idf) => idf * tf,
                Err(_) => 0.0,
            };
            query_norm_squared += weight * weight;
            query_vector.insert(term.clone(), weight);
        }

        let mut dot_product = 0.0;
        for (term, query_weight) in &query_vector {
            if let Ok(document_weight) = document_vector.get(term.as_str()) {
                dot_product += document_weight * query_weight;
            }
        }

        let denominator = document_norm * query_norm_squared.sqrt();
        if denominator == 0.0 {
            return Ok(0.0);
        }
        Ok(dot_product / denominator)
    }
}

/// IDF score per term: `ln(total documents / documents containing the term)`.
/// A term counts once per document no matter how often it repeats.
fn compute_idf(corpus: &[Document]) -> ChainedMap<String, f64> {
    #[allow(clippy::cast_precision_loss)]
    let total_documents = corpus.len() as f64;
    let mut document_frequency: ChainedMap<String, f64> = ChainedMap::new();

    for document in corpus {
        let mut distinct = ChainedSet::new();
        for term in &document.terms {
            distinct.insert(term.as_str());
        }

        for term in &distinct {
            match document_frequency.get_mut(*term) {
                Ok(count) => *count += 1.0,
                Err(_) => {
                    document_frequency.insert((*term).to_string(), 1.0);
                }
            }
        }
    }

    let mut idf_scores = ChainedMap::new();
    for (term, frequency) in &document_frequency {
        idf_scores.insert(term.clone(), (total_documents / frequency).ln());
    }

    idf_scores
}

/// TF score per term: raw count over total terms. An empty sequence maps to
/// an empty vector so no division by zero can arise.
fn compute_tf(terms: &[String]) -> ChainedMap<String, f64> {
    let mut tf_scores = ChainedMap::new();
    if terms.is_empty() {
        return tf_scores;
    }

    #[allow(clippy::cast_precision_loss)]
    let total_terms = terms.len() as f64;

    let mut counts: ChainedMap<String, f64> = ChainedMap::new();
    for term in terms {
        match counts.get_mut(term.as_str()) {
            Ok(count) => *count += 1.0,
            Err(_) => {
                counts.insert(term.clone(), 1.0);
            }
        }
    }

    for (term, count) in &counts {
        tf_scores.insert(term.clone(), count / total_terms);
    }

    tf_scores
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(uri: &str, terms: &[&str]) -> Document {
        Document::new(
            uri,
            terms.iter().map(|t| (*t).to_string()).collect(),
            Vec::new(),
        )
    }

    fn query(terms: &[&str]) -> Vec<String> {
        terms.iter().map(|t| (*t).to_string()).collect()
    }

    #[test]
    fn empty_corpus_is_rejected() {
        assert!(matches!(TfIdfEngine::new(&[]), Err(Error::EmptyCorpus)));
    }

    #[test]
    fn idf_counts_terms_once_per_document() {
        let corpus = vec![
            doc("doc://1", &["cat", "dog"]),
            doc("doc://2", &["cat", "cat", "bird"]),
        ];

        let idf = compute_idf(&corpus);

        assert!((idf.get("cat").expect("Failed to get idf")).abs() < 1e-12);
        assert!((idf.get("dog").expect("Failed to get idf") - 2.0_f64.ln()).abs() < 1e-12);
        assert!((idf.get("bird").expect("Failed to get idf") - 2.0_f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn tf_of_empty_sequence_is_empty() {
        assert!(compute_tf(&[]).is_empty());
    }

    #[test]
    fn tf_is_count_over_total() {
        let tf = compute_tf(&query(&["a", "b", "a", "a"]));

        assert!((tf.get("a").expect("Failed to get tf") - 0.75).abs() < 1e-12);
        assert!((tf.get("b").expect("Failed to get tf") - 0.25).abs() < 1e-12);
    }

    #[test]
    fn zero_norm_document_scores_zero() {
        // One document repeating one word: idf("a") = ln(1/1) = 0, so the
        // document vector is all zero and the similarity is defined as 0.0.
        let corpus = vec![doc("doc://a", &["a", "a", "a"])];
        let engine = TfIdfEngine::new(&corpus).expect("Failed to build engine");

        let score = engine
            .compute_relevance(&query(&["a"]), "doc://a")
            .expect("Failed to compute relevance");
        assert!((score - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rarer_term_ranks_its_document_higher() {
        let corpus = vec![
            doc("doc://1", &["cat", "dog"]),
            doc("doc://2", &["cat", "cat", "bird"]),
        ];
        let engine = TfIdfEngine::new(&corpus).expect("Failed to build engine");

        let q = query(&["dog"]);
        let doc1 = engine
            .compute_relevance(&q, "doc://1")
            .expect("Failed to compute relevance");
        let doc2 = engine
            .compute_relevance(&q, "doc://2")
            .expect("Failed to compute relevance");

        assert!(doc1 > doc2);
        assert!((doc2 - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_uri_is_a_precondition_violation() {
        let corpus = vec![doc("doc://a", &["x"])];
        let engine = TfIdfEngine::new(&corpus).expect("Failed to build engine");

        assert!(matches!(
            engine.compute_relevance(&query(&["x"]), "doc://missing"),
            Err(Error::PreconditionViolation(_))
        ));
    }

    #[test]
    fn empty_query_scores_zero() {
        let corpus = vec![
            doc("doc://1", &["cat", "dog"]),
            doc("doc://2", &["bird"]),
        ];
        let engine = TfIdfEngine::new(&corpus).expect("Failed to build engine");

        let score = engine
            .compute_relevance(&[], "doc://1")
            .expect("Failed to compute relevance");
        assert!((score - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_query_terms_contribute_zero_weight() {
        let corpus = vec![
            doc("doc://1", &["cat", "dog"]),
            doc("doc://2", &["bird"]),
        ];
        let engine = TfIdfEngine::new(&corpus).expect("Failed to build engine");

        let with_noise = engine
            .compute_relevance(&query(&["dog", "zebra"]), "doc://1")
            .expect("Failed to compute relevance");
        assert!(with_noise > 0.0);
        assert!(with_noise <= 1.0 + 1e-12);
    }

    #[test]
    fn identical_document_and_query_score_near_one() {
        let corpus = vec![
            doc("doc://1", &["alpha", "beta"]),
            doc("doc://2", &["gamma"]),
        ];
        let engine = TfIdfEngine::new(&corpus).expect("Failed to build engine");

        let score = engine
            .compute_relevance(&query(&["alpha", "beta"]), "doc://1")
            .expect("Failed to compute relevance");
        assert!((score - 1.0).abs() < 1e-9);
    }
}
