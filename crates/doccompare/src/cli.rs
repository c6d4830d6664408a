use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use doc_diff::{render_page, CompareOptions, Mode, TextDiff};
use log::info;

#[derive(Debug, Parser)]
#[command(
    name = "doccompare",
    version,
    about = "Compare two documents and render the differences as HTML"
)]
pub struct Cli {
    /// The original document
    pub original: PathBuf,

    /// The modified document
    pub modified: PathBuf,

    /// Which lines to show: `all` or `changed-only`
    #[arg(long, default_value = "all")]
    pub mode: Mode,

    /// Highlight every occurrence of this text
    #[arg(long)]
    pub search: Option<String>,

    /// Only compare lines that contain the search text
    #[arg(long, requires = "search")]
    pub filter: bool,

    /// Skip word-level highlighting inside replaced lines
    #[arg(long)]
    pub no_word_diff: bool,

    /// Write the bare HTML fragment instead of a full page
    #[arg(long)]
    pub fragment: bool,

    /// Write the output here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Exit with status 1 when the documents differ
    #[arg(long)]
    pub exit_code: bool,
}

impl Cli {
    fn options(&self) -> CompareOptions {
        let options = CompareOptions::default()
            .mode(self.mode)
            .filter_to_matches(self.filter)
            .word_diff(!self.no_word_diff);

        match &self.search {
            Some(query) => options.search(query.as_str()),
            None => options,
        }
    }
}

/// Compare the two documents named on the command line and write the HTML
///
/// Returns whether the compared lines differ.
pub fn run(cli: &Cli) -> Result<bool> {
    let original = read_lines(&cli.original)?;
    let modified = read_lines(&cli.modified)?;

    let result = cli.options().compare(&original, &modified)?;
    info!(
        "{} unchanged, {} replaced, {} inserted, {} deleted lines",
        result.stats.unchanged, result.stats.replaced, result.stats.inserted, result.stats.deleted
    );
    if let Some(query) = &cli.search {
        info!("found {} matches for {:?}", result.match_count, query);
    }
    let differs = result.stats.has_changes();
    if !differs {
        info!("no differences found");
    }

    let output = if cli.fragment {
        result.html
    } else {
        let title = format!("{} vs {}", file_label(&cli.original), file_label(&cli.modified));
        render_page(&title, &result.html)
    };

    match &cli.output {
        Some(path) => fs::write(path, output)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => io::stdout()
            .write_all(output.as_bytes())
            .context("failed to write to stdout")?,
    }

    Ok(differs)
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(TextDiff::split_lines(&text))
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
