mod bootstrap;

use anyhow::Result;
use bloglist_core::list_helper;
use bloglist_core::settings::Settings;
use bloglist_data::store::BlogStore;
use bloglist_server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load_with_last_used();

    bootstrap::ensure_directories()?;
    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("Bloglist v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("View: {}, Port: {}", settings.view, settings.port);

    let data_file = settings
        .data_file
        .clone()
        .unwrap_or_else(bootstrap::discover_data_file);

    match settings.view.as_str() {
        "serve" => {
            let store = BlogStore::open(&data_file)?;
            tracing::info!(
                "Serving {} blogs from {}",
                store.len(),
                data_file.display()
            );

            let state = AppState::new(store);
            bloglist_server::serve(state, settings.port).await?;
        }

        "stats" => {
            tracing::info!("Running stats report over {}", data_file.display());

            let store = BlogStore::open(&data_file)?;
            let stats = list_helper::summarize(store.blogs());

            println!("{}", serde_json::to_string_pretty(&stats)?);
        }

        // clap's value_parser restricts --view to the two arms above.
        other => anyhow::bail!("Unknown view mode: {other}"),
    }

    Ok(())
}
