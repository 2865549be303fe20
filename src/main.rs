mod document;
mod output;
mod query;
mod utils;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hymnq")]
#[command(about = "Keyword-augmented search over XML hymnals")]
struct Cli {
    /// Path to the hymnal XML file
    #[arg(short, long)]
    file: PathBuf,

    /// Search query (free text plus keyword:value tokens)
    #[arg(trailing_var_arg = true)]
    query: Vec<String>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Print only the number of matches
    #[arg(long)]
    count: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let doc = document::xml::load_hymnal(&cli.file)?;
    let raw = cli.query.join(" ");
    let ids = query::search(&raw, &doc);

    if cli.count {
        println!("{}", ids.len());
    } else if cli.json {
        output::print_json(&doc, &ids)?;
    } else {
        output::print_matches(&doc, &ids, !cli.no_color)?;
    }

    Ok(())
}
