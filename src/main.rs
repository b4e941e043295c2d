use std::io::{self, BufRead, Write};

use vk_photo_backup::config::Config;
use vk_photo_backup::errors::{AppError, AppResult};
use vk_photo_backup::pipeline;
use vk_photo_backup::uploader::DiskClient;
use vk_photo_backup::vk::VkClient;

fn read_user_identifier() -> AppResult<String> {
    print!("Enter VK user ID: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

async fn run() -> AppResult<()> {
    let config = Config::from_env()?;

    let vk_client = VkClient::new(&config)?;
    let disk_client = DiskClient::new(&config)?;

    let identifier = read_user_identifier()?;

    let progress = pipeline::run(&config, &identifier, &vk_client, &disk_client).await?;
    if !progress.failed_uploads.is_empty() {
        log::warn!(
            "{} photos were not accepted by Yandex.Disk",
            progress.failed_uploads.len()
        );
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    log::info!("Starting VK photo backup");

    if let Err(e) = run().await {
        match &e {
            AppError::Config(_) | AppError::Validation { .. } => {
                log::error!("Cannot start: {}", e)
            }
            _ if e.is_fatal_upstream() => log::error!("Could not collect photos from VK: {}", e),
            _ => log::error!("Backup failed: {}", e),
        }
        std::process::exit(1);
    }
}
