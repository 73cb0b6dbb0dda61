use anyhow::Context;

use stockfile_infra::{JsonFileStore, StockService, StoreConfig};

fn main() -> anyhow::Result<()> {
    stockfile_observability::init();

    let config = StoreConfig::from_env();
    let store = JsonFileStore::from_config(&config);
    let path = store.path().to_path_buf();
    tracing::info!(path = %path.display(), "using inventory file");

    let service = StockService::with_config(store, &config);

    let stdout = std::io::stdout();
    stockfile_app::demo::run(&service, &mut stdout.lock())
        .with_context(|| format!("inventory demo failed for {}", path.display()))
}
