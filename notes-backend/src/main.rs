use dotenv::dotenv;

mod channels;
mod commands;
mod config;
mod models;
mod store;

use config::Config;
use store::RecordStore;

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    log::info!("Student Notes Bot v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env();
    let store = RecordStore::new(&config.data_dir).expect("Failed to initialize data directory");
    log::info!("Data directory: {:?}", config.data_dir);

    channels::telegram::run(config, store).await;

    log::info!("Bot stopped");
}
