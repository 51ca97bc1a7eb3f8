use anyhow::Result;

fn main() -> Result<()> {
    // Load .env before the logger so RUST_LOG can live there
    let dotenv = dotenvy::dotenv();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match dotenv {
        Ok(path) => log::debug!("Loaded .env file from: {:?}", path),
        Err(_) => log::debug!(".env file not found, using environment variables"),
    }

    log::info!("Opening {}", mw_launcher::PROJECT_URL);
    mw_launcher::init();

    Ok(())
}
