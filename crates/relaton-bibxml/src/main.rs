//! relaton-bibxml binary
//!
//! Reads one bibliographic item as JSON and prints its xml2rfc reference.

use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use relaton_bibxml::{BibliographicItem, MissingTitle, RenderOptions, Serializer, SerializerConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "relaton-bibxml")]
#[command(about = "Render a Relaton bibliographic item as xml2rfc reference XML")]
struct Args {
    /// JSON file containing the item; reads stdin when omitted
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Anchor to use instead of the one derived from identifiers
    #[arg(long)]
    anchor: Option<String>,

    /// Serializer configuration (TOML)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Single-line output without XML declaration
    #[arg(long)]
    compact: bool,

    /// Fail on items without a title instead of using a placeholder
    #[arg(long)]
    strict_titles: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SerializerConfig::from_path(path)?,
        None => SerializerConfig::default(),
    };
    if args.compact {
        config.render = RenderOptions::compact();
    }
    if args.strict_titles {
        config.missing_title = MissingTitle::Fail;
    }

    let json = match &args.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let item: BibliographicItem = serde_json::from_str(&json)?;

    let xml = Serializer::new(config).serialize_to_string(&item, args.anchor.as_deref())?;
    println!("{}", xml);

    Ok(())
}
