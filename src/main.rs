// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use folio::api::{create_router, AppState, ServerConfig};
use folio::{complete_works_titles, load_titles, QuerySyntax, SearchConfig, Searcher};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::*;
use cli::{Cli, Commands, CorpusArgs};

/// `RUST_LOG` when set and valid, `info` otherwise.
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so `work` output can be piped
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            corpus,
            search,
            port,
            static_dir,
            layout,
            compression,
        } => {
            let server = ServerConfig {
                port,
                layout,
                compression,
                static_dir: Some(static_dir),
            };
            serve(&corpus, search.to_config(), server).await
        }
        Commands::Search {
            corpus,
            search,
            query,
            regex,
            page,
        } => {
            let config = search.to_config().with_regex(search.allow_regex || regex);
            let syntax = if regex {
                QuerySyntax::Regex
            } else {
                QuerySyntax::Literal
            };
            run_search(&corpus, config, &query, syntax, page)
        }
        Commands::Work { corpus, title } => {
            let searcher = load(&corpus, SearchConfig::default())?;
            let work = searcher.get_work(&title)?;
            println!("{}", work.contents);
            Ok(())
        }
        Commands::Inspect { corpus } => inspect(&corpus),
    }
}

fn load(args: &CorpusArgs, config: SearchConfig) -> Result<Searcher> {
    let titles = match &args.titles {
        Some(path) => load_titles(path)
            .with_context(|| format!("failed to load titles from {}", path.display()))?,
        None => complete_works_titles(),
    };
    Searcher::load(&args.corpus, &titles, config)
        .with_context(|| format!("failed to load corpus {}", args.corpus.display()))
}

async fn serve(args: &CorpusArgs, config: SearchConfig, server: ServerConfig) -> Result<()> {
    info!("Starting folio v{}", env!("CARGO_PKG_VERSION"));
    info!(config = ?config, server = ?server, "configuration");

    let searcher = Arc::new(load(args, config)?);
    let addr = format!("0.0.0.0:{}", server.port);
    let app = create_router(AppState::new(searcher, server));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("failed to listen for shutdown signal: {}", e);
                return;
            }
            info!("Received shutdown signal, gracefully shutting down");
        })
        .await?;

    Ok(())
}

fn run_search(
    args: &CorpusArgs,
    config: SearchConfig,
    raw: &str,
    syntax: QuerySyntax,
    page: Option<usize>,
) -> Result<()> {
    let searcher = load(args, config)?;
    let query = searcher.query(raw, syntax)?;
    let colors = use_colors();
    let highlight = searcher.config().highlight.clone();
    let width = BOX_WIDTH - 2;

    let started = Instant::now();
    let deadline = searcher.deadline();

    banner(&format!("folio search: {:?}", raw));

    let print_snippet = |text: &str| {
        for wrapped in wrap(&render_snippet(text, &highlight, colors), width) {
            line(&format!(" {}", wrapped));
        }
    };

    match page {
        None => {
            let result = searcher.search_query(&query, deadline)?;
            let elapsed = started.elapsed();
            for work in &result.works {
                section(&format!("{} ({})", work.title, work.snippets.len()));
                for (i, snippet) in work.snippets.iter().enumerate() {
                    if i > 0 {
                        line("");
                    }
                    print_snippet(&snippet.text);
                }
                close();
            }
            footnote(&format!(
                "{} matches in {} works ({:.1} ms)",
                result.len(),
                result.works.len(),
                elapsed.as_secs_f64() * 1000.0
            ));
        }
        Some(page) => {
            let hits = searcher.search_page(&query, page, deadline)?;
            let elapsed = started.elapsed();
            let mut current: Option<&str> = None;
            for hit in &hits.results {
                if current != Some(hit.title.as_str()) {
                    if current.is_some() {
                        close();
                    }
                    section(&hit.title);
                    current = Some(hit.title.as_str());
                } else {
                    line("");
                }
                print_snippet(&hit.snippet);
            }
            if current.is_some() {
                close();
            }
            footnote(&format!(
                "page {} of {}, {} results total ({:.1} ms)",
                hits.page,
                hits.total_pages,
                hits.result_count,
                elapsed.as_secs_f64() * 1000.0
            ));
        }
    }

    Ok(())
}

fn inspect(args: &CorpusArgs) -> Result<()> {
    let searcher = load(args, SearchConfig::default())?;
    let corpus = searcher.corpus();

    banner(&format!("folio inspect: {}", args.corpus.display()));

    section("CORPUS");
    field("Size", &format_size(corpus.len()), 12);
    field("CRC32", &format!("{:08x}", corpus.checksum()), 12);
    field("Works", &searcher.boundaries().len().to_string(), 12);
    close();

    section("WORKS");
    line(&format!(
        " {} {} {}",
        pad_right(&paint(Role::Label, "Offset"), 10),
        pad_right(&paint(Role::Label, "Length"), 10),
        paint(Role::Label, "Title")
    ));
    for (title, offset, len) in searcher.work_extents() {
        line(&format!(
            " {} {} {}",
            pad_right(&offset.to_string(), 10),
            pad_right(&format_size(len), 10),
            title
        ));
    }
    close();

    Ok(())
}
