use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use zsvg::{AsElement, Config, Input, Node, Parsed};

#[derive(Debug, Parser)]
#[command(
    name = "zsvg",
    version,
    about = "Print the shape tree of an SVG document"
)]
struct Args {
    /// Input file (defaults to stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
    /// Print the tree as JSON instead of an outline
    #[arg(long)]
    json: bool,
    /// Maximum element nesting depth (0 means unlimited)
    #[arg(long, default_value_t = Config::default().max_depth)]
    max_depth: u16,
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(args: &Args) -> Result<()> {
    let data = read_input(&args.input)?;
    let name = args
        .input
        .as_ref()
        .map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string());

    let config = Config {
        max_depth: args.max_depth,
        ..Config::default()
    };
    let parsed = zsvg::from_input(Input::from_bytes(&data).with_filename(&name), config)
        .with_context(|| format!("failed to parse {name}"))?;

    if !parsed.is_complete() {
        info!(
            skipped = parsed.diagnostics.len(),
            "some elements were left out of the tree"
        );
    }

    let output = if args.json {
        let mut json = serde_json::to_string_pretty(&parsed.root)
            .context("failed to serialize tree")?;
        json.push('\n');
        json
    } else {
        outline(&parsed)
    };

    io::stdout()
        .write_all(output.as_bytes())
        .context("failed to write stdout")?;
    Ok(())
}

fn read_input(path: &Option<PathBuf>) -> Result<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .context("failed to read stdin")?;
            if buffer.iter().all(u8::is_ascii_whitespace) {
                bail!("no input provided on stdin");
            }
            Ok(buffer)
        }
    }
}

/// One line per node, children indented under their parent
fn outline(parsed: &Parsed) -> String {
    let mut out = String::new();
    write_node(&mut out, &parsed.root, 0);
    out
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    out.push_str(&"  ".repeat(depth));
    out.push_str(&node.to_string());
    if let Some(id) = &node.element().id {
        out.push_str(" #");
        out.push_str(id);
    }
    out.push('\n');
    for child in node.children() {
        write_node(out, child, depth + 1);
    }
}
