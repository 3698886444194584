use std::path::PathBuf;

use anyhow::{Context, Result};
use float_fields::app::App;
use float_fields::FormConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let form = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => FormConfig::load(&path)
            .with_context(|| format!("loading form from {}", path.display()))?,
        None => FormConfig::load_default().context("loading default form")?,
    };

    tracing::info!(title = %form.title, "starting float-fields demo");
    App::run(form)
}
