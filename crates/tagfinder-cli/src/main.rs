use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tagfinder_core::{DisplaySink, MatchResult, Rendered};
use tagfinder_local::{render, Resolver, Settings};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tagfinder")]
#[command(about = "Find the HTML element an informal Portuguese query is asking about", long_about = None)]
struct Cli {
    /// Settings file (JSON). Defaults to <config_dir>/tagfinder/config.json when present.
    #[arg(long, global = true, env = "TAGFINDER_CONFIG")]
    config: Option<PathBuf>,
    /// Debug logging on stderr (TAGFINDER_LOG takes precedence).
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a free-text query to at most one element.
    Resolve(ResolveCmd),
    /// Load one element by key, like a menu entry.
    Show(ShowCmd),
    /// List the catalog in menu order.
    List(OutputArgs),
    /// Validate the catalog and alias table (exit 1 on dangling aliases).
    Check(OutputArgs),
    /// Read queries from stdin, one per line, and print the rendered answer for each.
    Repl,
    /// Print version info.
    Version(OutputArgs),
}

#[derive(clap::Args, Debug)]
struct OutputArgs {
    /// Output format: json|text
    #[arg(long = "output", alias = "format", default_value = "json")]
    output: String,
}

impl OutputArgs {
    fn is_text(&self) -> bool {
        self.output.eq_ignore_ascii_case("text")
    }
}

#[derive(clap::Args, Debug)]
struct ResolveCmd {
    /// Query words; joined with single spaces.
    #[arg(required = true, num_args = 1..)]
    query: Vec<String>,
    /// Include tokens and scoring totals in the json output.
    #[arg(long)]
    explain: bool,
    #[command(flatten)]
    out: OutputArgs,
}

#[derive(clap::Args, Debug)]
struct ShowCmd {
    /// Element key, e.g. `img` or `<img>`.
    key: String,
    #[command(flatten)]
    out: OutputArgs,
}

/// Writes each rendered result as title, description and code, then a blank line.
struct TextSink<W: Write> {
    out: W,
    err: Option<std::io::Error>,
}

impl<W: Write> TextSink<W> {
    fn new(out: W) -> Self {
        Self { out, err: None }
    }

    fn finish(self) -> Result<()> {
        match self.err {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }
}

impl<W: Write> DisplaySink for TextSink<W> {
    fn show(&mut self, rendered: &Rendered) {
        if self.err.is_some() {
            return;
        }
        if let Err(e) = writeln!(
            self.out,
            "{}\n{}\n{}\n",
            rendered.title, rendered.description, rendered.code
        ) {
            self.err = Some(e);
        }
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("TAGFINDER_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));
    // Logs go to stderr; stdout carries command output only.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn build_resolver(cli_config: Option<&std::path::Path>) -> Result<Resolver> {
    let settings = Settings::load(cli_config)?;
    Ok(settings.build_resolver()?)
}

fn resolve_json(query: &str, result: &MatchResult) -> serde_json::Value {
    serde_json::json!({
        "schema_version": 1,
        "kind": "resolve",
        "ok": result.record.is_some(),
        "query": query,
        "reason": result.reason,
        "record": result.record,
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Resolve(args) => {
            let resolver = build_resolver(config)?;
            let query = args.query.join(" ");
            if args.out.is_text() {
                let mut sink = TextSink::new(std::io::stdout().lock());
                render::present(&resolver, &query, &mut sink);
                sink.finish()?;
            } else if args.explain {
                let e = resolver.explain(&query);
                let mut v = resolve_json(&query, &e.result);
                v["tokens"] = serde_json::json!(e.tokens);
                v["scores"] = serde_json::json!(e
                    .scores
                    .iter()
                    .map(|(key, score)| serde_json::json!({"key": key, "score": score}))
                    .collect::<Vec<_>>());
                println!("{}", v);
            } else {
                let result = resolver.resolve(&query);
                println!("{}", resolve_json(&query, &result));
            }
        }
        Commands::Show(args) => {
            let resolver = build_resolver(config)?;
            let Some(record) = resolver.get(&args.key) else {
                anyhow::bail!("unknown element key: {}", args.key);
            };
            if args.out.is_text() {
                let mut sink = TextSink::new(std::io::stdout().lock());
                sink.show(&render::render_record(record));
                sink.finish()?;
            } else {
                let v = serde_json::json!({
                    "schema_version": 1,
                    "kind": "show",
                    "ok": true,
                    "record": record,
                });
                println!("{}", v);
            }
        }
        Commands::List(args) => {
            let resolver = build_resolver(config)?;
            if args.is_text() {
                let mut out = std::io::stdout().lock();
                for r in resolver.records() {
                    writeln!(out, "{}\t{}", r.key, r.title)?;
                }
            } else {
                let records: Vec<_> = resolver
                    .records()
                    .iter()
                    .map(|r| serde_json::json!({"key": r.key, "title": r.title}))
                    .collect();
                let v = serde_json::json!({
                    "schema_version": 1,
                    "kind": "list",
                    "records": records,
                });
                println!("{}", v);
            }
        }
        Commands::Check(args) => {
            let resolver = build_resolver(config)?;
            let dangling = resolver.aliases().dangling(resolver.catalog());
            let ok = dangling.is_empty();
            if args.is_text() {
                println!(
                    "tagfinder check: {}",
                    if ok { "ok" } else { "dangling aliases" }
                );
                println!("records: {}", resolver.catalog().len());
                println!("aliases: {}", resolver.aliases().len());
                println!("stopwords: {}", resolver.stopwords().len());
                for d in &dangling {
                    println!("dangling: {:?} -> {}", d.phrase, d.key);
                }
            } else {
                let v = serde_json::json!({
                    "schema_version": 1,
                    "kind": "check",
                    "ok": ok,
                    "records": resolver.catalog().len(),
                    "aliases": resolver.aliases().len(),
                    "stopwords": resolver.stopwords().len(),
                    "dangling": dangling,
                    "matching": resolver.config(),
                });
                println!("{}", v);
            }
            if !ok {
                std::process::exit(1);
            }
        }
        Commands::Repl => {
            let resolver = build_resolver(config)?;
            let mut sink = TextSink::new(std::io::stdout().lock());
            for line in std::io::stdin().lock().lines() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                let result = render::present(&resolver, &line, &mut sink);
                tracing::info!(query = %line, reason = %result.reason, "repl query");
            }
            sink.finish()?;
        }
        Commands::Version(args) => {
            let v = serde_json::json!({
                "schema_version": 1,
                "kind": "version",
                "ok": true,
                "name": "tagfinder",
                "version": env!("CARGO_PKG_VERSION"),
            });
            if args.is_text() {
                println!("tagfinder {}", env!("CARGO_PKG_VERSION"));
            } else {
                println!("{}", v);
            }
        }
    }
    Ok(())
}
