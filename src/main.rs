mod cli;

use mediaext::{
    config,
    resolve::{FsVault, MediaReference, MediaResolver, VideoInfo},
    timestamp::timestamp_link,
};
use mediaext_fragment::{format_clock, parse_fragment};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use url::Url;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "mediaext=trace,mediaext_common=debug,mediaext_fragment=debug".to_string()
        } else {
            "mediaext=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Resolve {
            reference,
            vault,
            json,
        } => {
            let settings = config::load_settings_or_default(cli.config.as_deref())?;
            let vault = vault.or(settings.vault);
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(resolve(&reference, vault.as_deref(), json))
        }
        Commands::Fragment { hash, json } => fragment(&hash, json),
        Commands::Timestamp {
            reference,
            seconds,
            vault,
        } => {
            let settings = config::load_settings_or_default(cli.config.as_deref())?;
            let vault = vault.or(settings.vault);
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(timestamp(&reference, seconds, vault.as_deref()))
        }
        Commands::Set { name, value } => set_flag(cli.config.as_deref(), &name, value),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("mediaext {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// URLs with a real scheme are URLs; everything else is a vault link.
fn parse_reference(input: &str) -> MediaReference {
    match Url::parse(input) {
        Ok(url) if url.scheme().len() > 1 => MediaReference::Url(url),
        _ => MediaReference::file_link(input),
    }
}

fn resolver_for(vault: Option<&Path>) -> MediaResolver {
    match vault {
        Some(root) => MediaResolver::with_vault(Arc::new(FsVault::new(root))),
        None => MediaResolver::new(),
    }
}

async fn resolve_reference(input: &str, vault: Option<&Path>) -> Result<VideoInfo> {
    let reference = parse_reference(input);
    tracing::info!("Resolving {:?}", reference);

    resolver_for(vault)
        .resolve(&reference)
        .await
        .with_context(|| format!("Failed to resolve {}", input))?
        .with_context(|| format!("Not a playable media reference: {}", input))
}

async fn resolve(input: &str, vault: Option<&Path>, json: bool) -> Result<()> {
    let info = resolve_reference(input, vault).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    match &info {
        VideoInfo::Internal(media) => {
            println!("Type: internal");
            println!("File: {}", media.file.path());
            println!("Kind: {}", media.kind);
            println!("Source: {}", media.src);
            let tracks = media.tracks.as_ref().map_or(0, |t| t.tracks.len());
            println!("Subtitle Tracks: {}", tracks);
        }
        VideoInfo::Direct(media) => {
            println!("Type: direct");
            println!("File: {}", media.filename);
            println!("Kind: {}", media.kind);
            println!("Link: {}", media.link);
            println!("Source: {}", media.src);
        }
        VideoInfo::Host(media) => {
            println!("Type: host");
            println!("Host: {}", media.video.host);
            println!("Id: {}", media.video.id);
            println!("Embed: {}", media.video.iframe);
        }
    }

    let directives = info.directives();
    if let Some(span) = &directives.time_span {
        match span.end() {
            Some(end) => println!(
                "Range: {} - {}",
                format_clock(span.start()),
                format_clock(end)
            ),
            None => println!("Range: {} -", format_clock(span.start())),
        }
    }
    if directives.looping {
        println!("Loop: yes");
    }

    Ok(())
}

fn fragment(hash: &str, json: bool) -> Result<()> {
    let directives = parse_fragment(hash);

    if json {
        println!("{}", serde_json::to_string_pretty(&directives)?);
        return Ok(());
    }

    match &directives.time_span {
        Some(span) => {
            println!("Start: {}", span.start());
            match span.end() {
                Some(end) => println!("End: {}", end),
                None => println!("End: (unspecified)"),
            }
        }
        None => println!("Time span: none"),
    }
    println!("Loop: {}", directives.looping);
    println!("Autoplay: {}", directives.autoplay);
    println!("Muted: {}", directives.muted);
    println!("Normalized: #{}", directives.to_fragment());

    Ok(())
}

async fn timestamp(input: &str, seconds: f64, vault: Option<&Path>) -> Result<()> {
    if !seconds.is_finite() || seconds < 0.0 {
        anyhow::bail!("Position must be a non-negative number of seconds: {}", seconds);
    }

    let info = resolve_reference(input, vault).await?;
    let linktext = match &info {
        VideoInfo::Internal(media) => media.file.path().to_string(),
        VideoInfo::Direct(_) | VideoInfo::Host(_) => String::new(),
    };
    println!("{}", timestamp_link(&info, seconds, &linktext));

    Ok(())
}

fn set_flag(config_path: Option<&Path>, name: &str, value: bool) -> Result<()> {
    let path = config_path
        .map(Path::to_path_buf)
        .or_else(config::find_settings_file)
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_PATHS[0]));

    config::update_flag(&path, name, value)?;
    tracing::info!("Updated {} in {:?}", name, path);
    println!("{} = {} ({})", name, value, path.display());

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    let settings = match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let settings = config::load_settings(p)?;
            println!("✓ Configuration is valid");
            settings
        }
        None => {
            println!("No config file specified, using defaults");
            config::Settings::default()
        }
    };

    for (name, enabled) in settings.flags() {
        println!("  {}: {}", name, enabled);
    }
    if let Some(vault) = &settings.vault {
        println!("  vault: {}", vault.display());
    }

    let entries = config::EntryPoints::from_settings(&settings);
    println!("  Entry points: {:?}", entries.enabled);
    println!("  Bilibili playback: {:?}", entries.bili_playback);

    Ok(())
}
