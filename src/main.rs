use anyhow::Result;
use clap::Parser;

mod app;
mod features;
mod qr;
mod shared;
mod ui;
mod widgets;

#[cfg(test)]
mod app_tests;

/// Turn your links into stylish QR codes from the terminal.
#[derive(Parser, Debug, Default)]
#[command(name = "fun-qrcode", version)]
pub struct Cli {
    /// URL to prefill the input field with
    pub url: Option<String>,

    /// Interface language override (e.g. "en", "es"); unknown codes fall
    /// back to the saved or detected language
    #[arg(long)]
    pub lang: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize the application
    let mut app = app::App::new(&cli)?;

    // Run the TUI
    app.run().await?;

    Ok(())
}
