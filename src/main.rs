//! treeweave CLI
//!
//! Usage:
//!   treeweave [OPTIONS] [FILE]
//!
//! Options:
//!   -p, --profile <FILE>  Host profile file with event and style names (TOML format)
//!   -d, --debug           Print the back-reference table to stderr
//!   -v, --verbose         Log every created element
//!   -h, --help            Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use treeweave::{source, template, to_html, Document, HostProfile, MaterializeConfig, RenderError};

#[derive(Parser)]
#[command(name = "treeweave")]
#[command(about = "Materialize declarative UI descriptors into HTML")]
struct Cli {
    /// Input descriptor file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Host profile file with recognized event and style names (TOML format)
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Debug mode: print each produced node with its sibling index
    #[arg(short, long)]
    debug: bool,

    /// Log every created element and skipped child
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let profile = match &cli.profile {
        Some(path) => match HostProfile::from_file(path) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Error loading profile '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => HostProfile::default(),
    };

    let input = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let root = match source::parse_toml(&input)
        .map_err(RenderError::from)
        .and_then(|data| template(data).map_err(RenderError::from))
    {
        Ok(root) => root,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let config = MaterializeConfig::new().with_profile(profile);
    let mut doc = Document::new();
    let out = match root.materialize(&mut doc, &config) {
        Ok(out) => out,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if cli.debug {
        eprintln!("=== Back-references ===");
        for backref in out.backrefs.iter() {
            let tag = doc.tag(backref.target).unwrap_or("?");
            match backref.index {
                Some(index) => eprintln!("<{}> node={} index={}", tag, backref.target.0, index),
                None => eprintln!("<{}> node={} root", tag, backref.target.0),
            }
        }
        eprintln!("=======================");
    }

    if let Some(node) = out.node {
        println!("{}", to_html(&doc, node));
    }
}

fn print_intro() {
    println!(
        r#"treeweave - materialize declarative UI descriptors into HTML

USAGE:
    treeweave [OPTIONS] [FILE]
    echo '<descriptor>' | treeweave

OPTIONS:
    -p, --profile    Custom event and style names (TOML file)
    -d, --debug      Print produced nodes with their sibling indices
    -v, --verbose    Log every created element
    -h, --help       Print help

DESCRIPTOR FORMAT (TOML):
    tag = "ul"

    [attrs]
    id = "list"

    [[children]]
    tag = "li"
    text = "first"

    [[children]]
    tag = "li"
    text = "hidden"
    renderIf = false

Keys: tag, text, attrs, events, styles, children, renderIf.
Warnings are logged to stderr; set RUST_LOG to change the level."#
    );
}
