//! `rune`: reorder text from logical to visual order on the command line.

use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rune_config::RuneConfig;
use rune_text::bidi::{DisplayOptions, Direction, get_display, get_display_bytes, get_visual_map};

#[derive(Parser, Debug)]
#[command(name = "rune", version, about = "Reorder bidirectional text for display")]
struct Cli {
    /// Treat uppercase letters as strong right-to-left
    #[arg(long)]
    upper_is_rtl: bool,

    /// Force the paragraph direction (L or R)
    #[arg(long, value_name = "DIR")]
    base_dir: Option<Direction>,

    /// Log per-stage state (enable with RUST_LOG=debug)
    #[arg(long)]
    debug: bool,

    /// Read all of stdin as bytes in this encoding and write the same encoding back.
    /// A configured encoding is ignored with --map or TEXT
    #[arg(long, value_name = "LABEL", conflicts_with_all = ["map", "text"])]
    encoding: Option<String>,

    /// Configuration file (defaults to ./rune.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the visual-to-logical index map instead of the text
    #[arg(long)]
    map: bool,

    /// Text to reorder; stdin is read line by line when omitted
    text: Vec<String>,
}

fn load_config(path: Option<&PathBuf>) -> Result<RuneConfig> {
    let mut config = match path {
        Some(path) => RuneConfig::load_from_file(path).map_err(anyhow::Error::msg)?,
        None => RuneConfig::load_or_default(),
    };
    config.merge_with_env();
    Ok(config)
}

fn options(cli: &Cli, config: &RuneConfig) -> Result<DisplayOptions> {
    let base_dir = match cli.base_dir {
        Some(dir) => Some(dir),
        None => config
            .bidi
            .base_dir
            .as_deref()
            .map(str::parse::<Direction>)
            .transpose()
            .context("invalid base_dir in configuration")?,
    };

    Ok(DisplayOptions::new()
        .upper_is_rtl(cli.upper_is_rtl || config.bidi.upper_is_rtl)
        .base_dir(base_dir)
        .debug(cli.debug || config.bidi.debug))
}

fn write_line(out: &mut impl Write, line: &str, options: &DisplayOptions, map: bool) -> Result<()> {
    if map {
        let indices: Vec<String> = get_visual_map(line, options)
            .iter()
            .map(usize::to_string)
            .collect();
        writeln!(out, "{}", indices.join(" "))?;
    } else {
        writeln!(out, "{}", get_display(line, options))?;
    }
    Ok(())
}


fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    let options = options(&cli, &config)?;
    log::debug!("rune: options {:?}", options);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !cli.text.is_empty() {
        let text = cli.text.join(" ");
        return write_line(&mut out, &text, &options, cli.map);
    }

    let encoding = cli.encoding.as_ref().or(config.bidi.encoding.as_ref());
    if let Some(label) = encoding.filter(|_| !cli.map) {
        let mut input = Vec::new();
        io::stdin()
            .read_to_end(&mut input)
            .context("failed to read stdin")?;
        let display = get_display_bytes(&input, label, &options)?;
        out.write_all(&display)?;
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        write_line(&mut out, &line, &options, cli.map)?;
    }
    Ok(())
}
