use serde::Serialize;
use std::io::Read;
use strata::{BalanceOptions, LayoutOptions};
use tracing_subscriber::EnvFilter;

mod document;

use document::{ChainDocument, DocumentError, LayoutOut};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
    Document(DocumentError),
    Layout(strata::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Document(err) => write!(f, "invalid chain document: {err}"),
            CliError::Layout(err) => write!(f, "layout failed: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<DocumentError> for CliError {
    fn from(value: DocumentError) -> Self {
        Self::Document(value)
    }
}

impl From<strata::Error> for CliError {
    fn from(value: strata::Error) -> Self {
        Self::Layout(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Layout,
    Check,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    config: Option<String>,
    max_iterations: Option<usize>,
    balance_threshold: Option<f64>,
    no_balance: bool,
}

fn usage() -> &'static str {
    "strata-cli\n\
\n\
USAGE:\n\
  strata-cli [layout] [--pretty] [--config <path>] [--max-iterations <n>] [--balance-threshold <f>] [--no-balance] [<path>|-]\n\
  strata-cli check [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - Input is a JSON chain document: {\"nodes\": [{\"id\": ...}], \"edges\": [{\"id\"?: ..., \"from\": ..., \"to\": ...}]}.\n\
  - The graph must be acyclic.\n\
  - --config reads layout options as JSON ({\"maxIterations\": 4, \"balance\": {\"enabled\": true, \"threshold\": 0.5, \"minWidth\": 3}}); flags override it.\n\
  - Set STRATA_LOG (e.g. STRATA_LOG=debug) to log pipeline stages to stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "layout" => args.command = Command::Layout,
            "check" => args.command = Command::Check,
            "--pretty" => args.pretty = true,
            "--no-balance" => args.no_balance = true,
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(path.clone());
            }
            "--max-iterations" => {
                let Some(n) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.max_iterations =
                    Some(n.parse::<usize>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--balance-threshold" => {
                let Some(t) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.balance_threshold =
                    Some(t.parse::<f64>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn layout_options(args: &Args) -> Result<LayoutOptions, CliError> {
    let mut opts = match args.config.as_deref() {
        Some(path) => LayoutOptions::from_json(&std::fs::read_to_string(path)?)?,
        None => LayoutOptions::default(),
    };
    if let Some(n) = args.max_iterations {
        opts.max_iterations = n;
    }
    if let Some(t) = args.balance_threshold {
        opts.balance.threshold = t;
    }
    if args.no_balance {
        opts.balance = BalanceOptions {
            enabled: false,
            ..opts.balance
        };
    }
    opts.validate()?;
    Ok(opts)
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let doc: ChainDocument = serde_json::from_str(&text)?;

    match args.command {
        Command::Check => {
            let g = doc.to_graph()?;
            println!(
                "ok: {} nodes, {} edges",
                g.real_node_count(),
                g.semantic_edge_count()
            );
            Ok(())
        }
        Command::Layout => {
            let opts = layout_options(&args)?;
            let mut g = doc.to_graph()?;
            tracing::debug!(
                nodes = g.real_node_count(),
                edges = g.semantic_edge_count(),
                "laying out chain document"
            );
            let (layering, stats) = strata::layout_with_stats(&mut g, &opts)?;
            let out = LayoutOut::new(&doc, &g, &layering, &stats);
            write_json(&out, args.pretty)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("STRATA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    init_tracing();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
