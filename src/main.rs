//! cinema-deck command line
//!
//! Drives the app's screens headlessly: navigates from `Home` to the
//! `MovieDetail` screen of the requested movie, waits for its fetch to
//! settle, and prints the rendered view.

mod text;

use anyhow::{bail, Context};
use app_state::{DetailLoader, LoadPhase};
use app_ui::navigation::{NavigationState, Navigator, Router};
use app_ui::screens::{self, Screen, ScreenContext};
use app_ui::{DetailScreenOptions, DetailView, FailurePresentation, HomeScreen};
use clap::Parser;
use std::str::FromStr;
use std::time::Duration;
use tmdb_client::{CatalogClient, ClientConfig};

/// Browse TMDB movie details from the terminal
#[derive(Debug, Parser)]
#[command(name = "cinema-deck", version, about)]
struct Cli {
    /// Movie ID, or a deep link such as "/movie/27205"
    target: String,

    /// Show an error notice instead of the loading placeholder when a load fails
    #[arg(long)]
    show_errors: bool,

    /// Print the rendered view as JSON
    #[arg(long)]
    json: bool,

    /// Skip fetching the related lists
    #[arg(long)]
    no_related: bool,

    /// Abort the request after this many seconds (unbounded by default)
    #[arg(long, env = "CINEMA_DECK_TIMEOUT")]
    timeout_secs: Option<u64>,
}

fn init_tracing() {
    let env = std::env::var("CINEMA_DECK_LOG").unwrap_or_else(|_| "info".to_string());
    let filter = tracing_subscriber::EnvFilter::from_str(&env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = ClientConfig::from_env().context("loading API configuration")?;
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    tracing::debug!(?config, "configuration loaded");

    let client = CatalogClient::new(config).context("building HTTP client")?;
    let failure = if cli.show_errors {
        FailurePresentation::ErrorNotice
    } else {
        FailurePresentation::Placeholder
    };
    let ctx = ScreenContext::new(DetailLoader::from_client(client.clone()))
        .with_detail_options(DetailScreenOptions { failure });

    let mut nav = NavigationState::new();
    if cli.target.starts_with('/') {
        nav.navigate(Router::new().match_path(&cli.target));
    } else {
        HomeScreen::new().open_movie(&mut nav, cli.target.clone());
    }

    let route = nav.current_route().clone();
    tracing::info!(screen = route.screen_name(), path = %route.to_path(), "mounting screen");

    let screen = match screens::mount(&route, &ctx)? {
        Screen::MovieDetail(screen) => screen,
        Screen::Home(_) => bail!("{} does not name a movie", cli.target),
    };

    if !cli.json {
        print!("{}", text::detail(&screen.render()));
    }
    let view = screen.render_settled().await;
    if !cli.json && !view.is_loading() {
        print!("{}", text::detail(&view));
    }

    let mut related = Vec::new();
    if let (DetailView::Detail(layout), false) = (&view, cli.no_related) {
        for descriptor in &layout.related {
            let page = match client.movie_list(&descriptor.path).await {
                Ok(page) => Some(page),
                Err(e) => {
                    tracing::warn!(path = %descriptor.path, "Failed to fetch related list: {}", e);
                    None
                }
            };
            if let (Some(page), false) = (&page, cli.json) {
                print!("{}", text::related(descriptor, page));
            }
            related.push((descriptor.clone(), page));
        }
    }

    if cli.json {
        let output = text::json_report(&view, &related);
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    let phase = screen.phase();
    screen.go_back(&mut nav);
    tracing::debug!(screen = nav.current_route().screen_name(), "navigated back");

    if phase == LoadPhase::Failed {
        bail!("movie {} could not be loaded", route.to_path());
    }
    Ok(())
}
