use std::{cmp::Ordering, io, path::PathBuf};

use clap::Parser;
use docrank::{
    loader::load_corpus, tokenizer::Tokenizer, top_k, LinkGraphRanker, Result, TfIdfEngine,
};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory of JSON documents to load as the corpus
    #[arg(long, default_value = "data")]
    corpus_path: PathBuf,

    /// Number of results to print per query
    #[arg(short = 'k', long, default_value_t = 10)]
    results: i64,

    /// Damping factor for authority propagation
    #[arg(long, default_value_t = 0.85)]
    decay: f64,

    /// Convergence threshold for authority propagation
    #[arg(long, default_value_t = 1e-6)]
    epsilon: f64,

    /// Maximum authority propagation rounds
    #[arg(long, default_value_t = 100)]
    limit: usize,

    /// Blend between relevance and authority: 0 = pure TF-IDF, 1 = pure authority
    #[arg(long, default_value_t = 0.3)]
    authority_weight: f64,
}

/// A document paired with its combined score; ordered by score so `top_k`
/// can select the best results.
#[derive(Debug)]
struct ScoredDoc {
    score: f64,
    uri: String,
}

impl PartialEq for ScoredDoc {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScoredDoc {}

impl PartialOrd for ScoredDoc {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScoredDoc {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| self.uri.cmp(&other.uri))
    }
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let corpus = load_corpus(&args.corpus_path)?;
    let engine = TfIdfEngine::new(&corpus)?;
    let ranker = LinkGraphRanker::new(&corpus, args.decay, args.epsilon, args.limit)?;
    let tokenizer = Tokenizer::new()?;

    let mut buffer = String::new();
    println!("Enter Search Query:");

    loop {
        buffer.clear();
        if io::stdin().read_line(&mut buffer)? == 0 || buffer.trim() == "exit" {
            break;
        }

        let query = tokenizer.tokenize(buffer.trim());
        let start = std::time::Instant::now();

        let mut scored = Vec::with_capacity(corpus.len());
        for document in &corpus {
            let relevance = engine.compute_relevance(&query, &document.uri)?;
            let authority = ranker.authority(&document.uri)?;
            scored.push(ScoredDoc {
                score: (1.0 - args.authority_weight).mul_add(
                    relevance,
                    args.authority_weight * authority,
                ),
                uri: document.uri.clone(),
            });
        }

        let results = top_k(args.results, scored)?;

        println!("Results for '{}':", buffer.trim());
        for result in results.iter().rev() {
            println!("  {:.6}  {}", result.score, result.uri);
        }
        println!("Time taken: {:?}", start.elapsed());
    }

    Ok(())
}
