// Interlink CLI
//
// Reads rendered article HTML and a JSON list of related articles, injects
// internal links and writes the result. Logging is controlled via RUST_LOG.

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use kodegen_tools_interlink::{InterlinkConfig, InternalLinkInjector, load_article_references};

#[derive(Debug, Parser)]
#[command(name = "kodegen-interlink", version, about = "Inject internal links into article HTML")]
struct Cli {
    /// HTML file to rewrite (reads stdin when omitted)
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// JSON file with an array of related articles
    #[arg(short, long)]
    articles: PathBuf,

    /// JSON config file; explicit flags override its values
    #[arg(long, env = "INTERLINK_CONFIG")]
    config: Option<PathBuf>,

    /// Locale used for URLs and slug selection
    #[arg(short, long)]
    locale: Option<String>,

    /// Maximum links per related article
    #[arg(short = 'm', long)]
    max_links: Option<usize>,

    /// Output file (writes stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn load_config(cli: &Cli) -> Result<InterlinkConfig> {
    let base = match &cli.config {
        Some(path) => InterlinkConfig::from_json_file(path)?,
        None => InterlinkConfig::default(),
    };

    let mut builder = InterlinkConfig::builder()
        .locale(base.locale())
        .max_links_per_article(base.max_links_per_article())
        .link_class(base.link_class())
        .article_path_segment(base.article_path_segment())
        .excluded_elements(base.excluded_elements().iter().cloned());
    if let Some(locale) = &cli.locale {
        builder = builder.locale(locale.as_str());
    }
    if let Some(max) = cli.max_links {
        builder = builder.max_links_per_article(max);
    }

    Ok(builder.build()?)
}

fn read_content(cli: &Cli) -> Result<String> {
    match &cli.content {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read content file {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read content from stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let related = load_article_references(&cli.articles)?;
    let content = read_content(&cli)?;

    let injector = InternalLinkInjector::new(config);
    let report = injector.inject_with_report(&content, &related);

    log::info!(
        "Created {} internal link(s) across {} article(s) for locale {}",
        report.links_created,
        report.links_per_article.len(),
        injector.config().locale()
    );

    match &cli.output {
        Some(path) => std::fs::write(path, &report.content)
            .with_context(|| format!("Failed to write output file {}", path.display()))?,
        None => std::io::stdout()
            .write_all(report.content.as_bytes())
            .context("Failed to write output to stdout")?,
    }

    Ok(())
}
