use anyhow::{Context, Result};
use chain_trie::Trie;
use clap::Parser;
use std::fs::File;
use std::io::{self, stdin, BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// Load a table of key chains and answer exact and longest-prefix queries.
#[derive(Parser, Debug)]
#[clap(name = "chain-trie", version, about)]
struct Args {
    /// Table file, one `<key> [value]` entry per line
    #[clap(short, long, value_parser)]
    file: PathBuf,

    /// Segment separator used to split keys and queries
    #[clap(short, long, default_value = "/")]
    separator: String,

    /// Split keys into characters instead of using a separator
    #[clap(long, conflicts_with = "separator")]
    chars: bool,

    /// Queries to run; read from stdin when none are given
    queries: Vec<String>,
}

#[derive(Debug, Clone)]
enum Splitter {
    Chars,
    Separator(String),
}

impl Splitter {
    fn split(&self, key: &str) -> Vec<String> {
        match self {
            Splitter::Chars => key.chars().map(String::from).collect(),
            Splitter::Separator(sep) => key.split(sep.as_str()).map(String::from).collect(),
        }
    }
}

type Table = Trie<String, String>;

fn load_table<R: BufRead>(reader: R, splitter: &Splitter) -> Result<Table> {
    let mut table = Table::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("could not read line {}", index + 1))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut parts = line.splitn(2, char::is_whitespace);
        let key = parts.next().unwrap_or_default();
        let value = parts.next().map(str::trim).unwrap_or(key);
        if table.insert(splitter.split(key), value.to_string()).is_some() {
            debug!(key, line = index + 1, "overwriting existing entry");
        }
    }
    Ok(table)
}

fn answer<W: Write>(out: &mut W, table: &Table, splitter: &Splitter, query: &str) -> Result<()> {
    let chain = splitter.split(query);
    let exact = table.get_value(&chain).map(String::as_str).unwrap_or("-");
    let best = table
        .get_best_value(&chain)
        .map(String::as_str)
        .unwrap_or("-");
    writeln!(out, "{}\t{}\t{}", query, exact, best)?;
    Ok(())
}

fn init_logging() -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set global tracing subscriber")
}

pub fn main() -> Result<()> {
    init_logging()?;
    let args = Args::parse();

    let splitter = if args.chars {
        Splitter::Chars
    } else {
        Splitter::Separator(args.separator.clone())
    };

    let input = File::open(&args.file)
        .with_context(|| format!("could not open {}", args.file.display()))?;
    let table = load_table(BufReader::new(input), &splitter)?;
    info!(chains = table.count(), "finished reading table");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.queries.is_empty() {
        for line in stdin().lock().lines() {
            let line = line.context("could not read query")?;
            answer(&mut out, &table, &splitter, line.trim())?;
        }
    } else {
        for query in &args.queries {
            answer(&mut out, &table, &splitter, query)?;
        }
    }

    info!(chains = table.count(), "finished searching");
    Ok(())
}
