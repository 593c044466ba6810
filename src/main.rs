//! Facebook Page Archiver - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use facebook_page_archiver::{
    api::{Endpoints, GraphClient},
    cli::Args,
    config::{load_dotenv, validate_config, Config, RunMode},
    dataset::{write_media_csv, write_posts_csv},
    download::download_from_csv,
    error::{exit_codes, Error, Result},
    extract::{MediaExtractor, PostsExtractor},
    output::{
        print_banner, print_config_summary, print_download_summary, print_error,
        print_extraction_summary, print_info,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::MissingConfig(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Transport { .. }
                | Error::Api(_)
                | Error::InvalidTimestamp { .. }
                | Error::Http(_)
                | Error::Json(_) => ExitCode::from(exit_codes::API_ERROR as u8),
                Error::Download(_) => ExitCode::from(exit_codes::DOWNLOAD_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // A .env file may hold the access token; load it before clap reads the
    // environment for --token.
    load_dotenv();

    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    let mut config = Config::default();
    args.merge_into_config(&mut config);
    validate_config(&config)?;

    match config.mode {
        RunMode::Media => run_media(&config).await,
        RunMode::Posts => run_posts(&config).await,
        RunMode::Download => run_download(&config).await,
    }
}

/// Extract the media-attachment dataset to CSV.
async fn run_media(config: &Config) -> Result<()> {
    let output = config.output_path();
    print_config_summary(
        "media",
        config.page.page_id.as_deref(),
        &output.display().to_string(),
    );

    let client = GraphClient::new()?;
    let endpoints = Endpoints::new(&config.graph)?;
    let page_id = config.page_id()?;

    print_info("Extracting media attachments...");
    let extractor = MediaExtractor::new(
        &client,
        &endpoints,
        &config.account.access_token,
        &config.extract.accepted_types,
    );
    let records = extractor.run(page_id).await?;

    write_media_csv(&output, &records)?;
    print_extraction_summary("media posts", records.len(), &output);

    Ok(())
}

/// Extract the posts dataset to CSV.
async fn run_posts(config: &Config) -> Result<()> {
    let output = config.output_path();
    print_config_summary(
        "posts",
        config.page.page_id.as_deref(),
        &output.display().to_string(),
    );

    let client = GraphClient::new()?;
    let endpoints = Endpoints::new(&config.graph)?;
    let page_id = config.page_id()?;

    print_info("Extracting posts...");
    let extractor = PostsExtractor::new(&client, &endpoints, &config.account.access_token);
    let records = extractor.run(page_id).await?;

    write_posts_csv(&output, &records)?;
    print_extraction_summary("posts", records.len(), &output);

    Ok(())
}

/// Download the media files referenced by an extracted CSV.
async fn run_download(config: &Config) -> Result<()> {
    print_config_summary(
        "download",
        None,
        &config.download.media_directory.display().to_string(),
    );

    let client = GraphClient::new()?;

    print_info(&format!(
        "Downloading media from {}...",
        config.download.input_path.display()
    ));
    let downloaded = download_from_csv(
        &client,
        &config.download,
        &config.download.input_path,
        &config.download.media_directory,
    )
    .await?;

    print_download_summary(downloaded, &config.download.media_directory);

    Ok(())
}
