// src/main.rs

//! `slicebar` command line: reads a sample listing, renders it, and writes the
//! strip as a PNG file and/or prints it as a data URI.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use log::info;

use slicebar::{
    encoder,
    night::seconds_since_noon,
    samples::parse_stage_graph,
    Config, Mode, Renderer,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    BooleanPartial,
    Integer,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::BooleanPartial => Mode::BooleanPartial,
            ModeArg::Integer => Mode::Integer,
        }
    }
}

/// Render labeled samples as an indexed-color strip.
#[derive(Debug, Parser)]
#[command(name = "slicebar", version, about)]
struct Cli {
    /// JSON configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Whitespace-separated sample codes; `-` reads standard input.
    #[arg(short, long, default_value = "-")]
    samples: String,

    /// Write the strip to this PNG file.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the strip as a `data:image/png;base64,...` URI.
    #[arg(long)]
    data_uri: bool,

    /// Clock time (HH:MM or HH:MM:SS) the samples start at; pads them into the
    /// configured night window.
    #[arg(long, value_parser = parse_clock)]
    night_start: Option<(u32, u32, u32)>,

    #[arg(long)]
    theme: Option<String>,

    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,
}

fn parse_clock(text: &str) -> Result<(u32, u32, u32), String> {
    let parts: Vec<&str> = text.split(':').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return Err(format!("expected HH:MM[:SS], got '{}'", text));
    }
    let mut fields = [0u32; 3];
    for (field, part) in fields.iter_mut().zip(&parts) {
        *field = part
            .parse()
            .map_err(|_| format!("'{}' is not a number in '{}'", part, text))?;
    }
    let [hour, minute, second] = fields;
    if hour > 23 || minute > 59 || second > 59 {
        return Err(format!("'{}' is not a valid clock time", text));
    }
    Ok((hour, minute, second))
}

fn read_samples(source: &str) -> anyhow::Result<String> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read samples from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(source).with_context(|| format!("Failed to read samples from {}", source))
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize the logger. Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let cli = Cli::parse();

    if cli.output.is_none() && !cli.data_uri {
        bail!("Nothing to do: pass --output and/or --data-uri");
    }

    // --- Configuration ---
    let config = match &cli.config {
        Some(path) => Config::load(path).context("Failed to load configuration")?,
        None => Config::default(),
    };
    info!("Configuration loaded: {:?}", config.render);

    let mut request = config.render_request();
    if let Some(theme) = &cli.theme {
        request.theme = theme.clone();
    }
    if let Some(mode) = cli.mode {
        request.mode = mode.into();
    }
    if let Some(width) = cli.width {
        request.width = width;
    }
    if let Some(height) = cli.height {
        request.height = height;
    }

    // --- Samples ---
    let text = read_samples(&cli.samples)?;
    let mut samples = parse_stage_graph(&text).context("Failed to parse samples")?;
    info!("Read {} samples", samples.len());

    if let Some((hour, minute, second)) = cli.night_start {
        samples = config.window.pad(&samples, seconds_since_noon(hour, minute, second));
    }

    // --- Render ---
    let themes = config.theme_registry();
    let canvas = Renderer::new(&themes)
        .render(&samples, &request)
        .context("Failed to render strip")?;
    info!(
        "Rendered {}x{} strip using {} colors",
        canvas.width(),
        canvas.height(),
        canvas.palette().len()
    );

    // --- Export ---
    if let Some(path) = &cli.output {
        encoder::write_png(&canvas, path).context("Failed to write PNG")?;
    }
    if cli.data_uri {
        println!("{}", encoder::data_uri(&canvas).context("Failed to encode PNG")?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn test_parse_clock_accepts_minutes_and_seconds() {
        assert_eq!(parse_clock("22:30"), Ok((22, 30, 0)));
        assert_eq!(parse_clock("06:05:09"), Ok((6, 5, 9)));
    }

    #[test_log::test]
    fn test_parse_clock_rejects_malformed_times() {
        assert!(parse_clock("22").is_err());
        assert!(parse_clock("24:00").is_err());
        assert!(parse_clock("12:xx").is_err());
        assert!(parse_clock("1:2:3:4").is_err());
    }

    #[test_log::test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
