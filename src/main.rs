use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use screener_ui::api;
use screener_ui::models::Config;
use screener_ui::ui::events::EventManager;
use screener_ui::ui::{HtmlPage, MemoryView, Renderer, ScreenerApp, Tab};

/// Render CANSLIM + Turtle screening results as a tabbed HTML page
#[derive(Parser, Debug)]
#[command(name = "screener-ui", version, about)]
struct Cli {
    /// Result document: local path or http(s) URL
    #[arg(short, long)]
    source: Option<String>,

    /// Write the page here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Tab shown when the page opens (cansl, buy, exit)
    #[arg(short, long, default_value = "cansl")]
    tab: Tab,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(source) = cli.source {
        config.source = source;
    }

    let source = api::open_source(&config.source, config.base_url.as_deref())
        .with_context(|| format!("Cannot open result source '{}'", config.source))?;

    let mut app = ScreenerApp::new(
        MemoryView::default(),
        source,
        Renderer::new(&config.currency_symbol),
    );
    app.init().await;

    let mut events = EventManager::new();
    events.send_tab_click(cli.tab).await?;
    events.send_shutdown().await?;
    app.run_event_loop(&mut events).await;

    let failed = app.state().is_failed();
    info!("{}", app.state().status_text());

    let page = HtmlPage::new(&config.page_title).render(app.view())?;
    match &cli.output {
        Some(path) => {
            tokio::fs::write(path, &page)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(page.as_bytes())?;
            stdout.flush()?;
        }
    }

    if failed {
        error!("Screening results could not be loaded; wrote error page");
        std::process::exit(1);
    }

    Ok(())
}

/// Logs go to stderr so stdout can carry the page
fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("screener_ui=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("screener_ui=info"))
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
