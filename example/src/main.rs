extern crate log;

use anyhow::{Context, Result};
use clap::Parser;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::*;
use gibbslda::text::{default_stopwords, parse_stopwords, tokenize};
use gibbslda::{Lda, LdaConfig};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

//
// Fallback corpus when no data directory is given.
//
const DOCUMENTS: &[&str] = &[
    "The central bank raised interest rates again, and bond yields climbed as traders priced in tighter credit",
    "Apple orchards in the valley reported a record harvest; growers expect lower fruit prices at autumn markets",
    "Mortgage lenders tightened credit after the rate decision, and bank shares slipped on weaker loan demand",
    "Electric car makers cut prices to win buyers, while battery suppliers struggle with rising lithium costs",
    "Farmers markets are full of apples, pears and plums, and orchard owners hire extra pickers for the harvest",
    "Car dealers see buyers delay purchases as loan rates rise, and used car prices fall for a third month",
];

/// Topic modelling with LDA over a directory of text files.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory of `.txt` documents, read in file-name order
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Stopword file, one word per line
    #[arg(short, long)]
    stopwords: Option<PathBuf>,

    /// Number of topics (K)
    #[arg(short = 'k', long, default_value_t = 3)]
    topics: usize,

    /// Document-topic prior; defaults to 50 / K
    #[arg(long)]
    alpha: Option<f64>,

    /// Topic-term prior
    #[arg(long, default_value_t = 0.01)]
    beta: f64,

    /// Gibbs sweeps over the corpus
    #[arg(long, default_value_t = 50)]
    sweeps: usize,

    /// Terms shown per topic
    #[arg(short = 'n', long, default_value_t = 3)]
    top: usize,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
}

fn read_documents(dir: &Path) -> Result<Vec<String>> {
    let mut paths = fs::read_dir(dir)
        .with_context(|| format!("reading directory {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    paths.retain(|p| p.extension().is_some_and(|ext| ext == "txt"));
    paths.sort();
    log::info!("Loading {} documents from {}", paths.len(), dir.display());
    paths
        .iter()
        .map(|p| fs::read_to_string(p).with_context(|| format!("reading {}", p.display())))
        .collect()
}

fn load_stopwords(path: Option<&Path>) -> Result<HashSet<String>> {
    match path {
        Some(p) => {
            let text = fs::read_to_string(p)
                .with_context(|| format!("reading stopwords {}", p.display()))?;
            Ok(parse_stopwords(&text))
        }
        None => Ok(default_stopwords()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let raw = match &args.data {
        Some(dir) => read_documents(dir)?,
        None => DOCUMENTS.iter().map(|d| d.to_string()).collect(),
    };
    let docs: Vec<Vec<String>> = raw.iter().map(|d| tokenize(d)).collect();
    let stopwords = load_stopwords(args.stopwords.as_deref())?;

    let mut config = LdaConfig::new(args.topics)
        .beta(args.beta)
        .sweeps(args.sweeps)
        .top_n(args.top);
    if let Some(alpha) = args.alpha {
        config = config.alpha(alpha);
    }
    if let Some(seed) = args.seed {
        config = config.seed(seed);
    }

    let mut lda = Lda::from_documents(config, &docs, &stopwords)?;
    println!(
        "Training LDA ({} documents, {} terms, K={}, sweeps={})...",
        docs.len(),
        lda.vocabulary().len(),
        lda.config().topics,
        lda.config().sweeps
    );
    lda.train();
    let report = lda.report();

    let mut topics_table = Table::new();
    topics_table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Topic ID").fg(Color::Red), Cell::new("Words").fg(Color::White),
        ]);
    for topic in &report.topics {
        let words = topic
            .terms
            .iter()
            .map(|(w, p)| format!("{w}[{p:.4}]"))
            .collect::<Vec<_>>()
            .join(" ");
        topics_table.add_row(vec![Cell::new(topic.topic), Cell::new(words)]);
    }
    println!("{topics_table}");

    let mut docs_table = Table::new();
    docs_table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Document").fg(Color::Red),
            Cell::new("Topic").fg(Color::White),
            Cell::new("Probability").fg(Color::White),
            Cell::new("Topic words").fg(Color::White),
        ]);
    for doc in &report.documents {
        let words = report.topics[doc.topic]
            .terms
            .iter()
            .map(|(w, _)| w.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        docs_table.add_row(vec![
            Cell::new(doc.document),
            Cell::new(doc.topic),
            Cell::new(format!("{:.4}", doc.probability)),
            Cell::new(words),
        ]);
    }
    println!("{docs_table}");
    Ok(())
}
