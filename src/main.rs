//! Command line front end: wrap a text file and print the resulting rows
//!
//! # Usage
//!
//! ```bash
//! # Wrap a file to 320px with the system font
//! tiny-wrap notes.txt --width 320
//!
//! # Different width for the first line, fixed cells instead of a font
//! tiny-wrap notes.txt --width 200 --width 320 --monospace
//!
//! # Read stdin, settings from a config file
//! cat notes.txt | tiny-wrap --config wrap.toml
//! ```

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tiny_sdk::toml_utils;
use tiny_wrap::{
    build_column, logging, GlyphSource, MonospaceMetrics, WrapAlgorithm, WrapConfig, WrapError,
    WrapLine,
};

/// Read from the working directory when `--config` is not given
const DEFAULT_CONFIG: &str = "wrap.toml";

/// Wrap text into rows of a given width and report their layout.
#[derive(Parser)]
#[command(name = "tiny-wrap", about = "Wrap text and print row layout")]
struct Args {
    /// Input file; stdin when omitted
    input: Option<PathBuf>,

    /// TOML file with layout settings (default `wrap.toml`); flags override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Font file to measure with
    #[arg(short, long)]
    font: Option<PathBuf>,

    /// Font size in pixels
    #[arg(short, long)]
    size: Option<f32>,

    /// Available width; repeat for per-line widths, the last one repeats
    #[arg(short, long)]
    width: Vec<f32>,

    /// Row height multiplier
    #[arg(long)]
    line_space: Option<f32>,

    /// Height of lines with no characters
    #[arg(long)]
    empty_line_height: Option<f32>,

    /// Lay out each line on its own, starting at this x
    #[arg(long)]
    x_offset: Option<f32>,

    /// Use fixed-size cells instead of a font
    #[arg(long)]
    monospace: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Debug logging unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn into_config(self) -> Result<(WrapConfig, Option<PathBuf>, bool)> {
        let mut config = match &self.config {
            Some(path) => WrapConfig::load(path)?,
            None => toml_utils::load_or_default(DEFAULT_CONFIG),
        };

        if !self.width.is_empty() {
            config.widths = self.width;
        }
        if let Some(size) = self.size {
            config.font_size = size;
        }
        if let Some(line_space) = self.line_space {
            config.line_space = line_space;
        }
        if let Some(height) = self.empty_line_height {
            config.default_empty_line_height = height;
        }
        if let Some(x_offset) = self.x_offset {
            config.x_offset = x_offset;
        }
        if let Some(font) = self.font {
            config.font = Some(font.display().to_string());
        }

        Ok((config, self.input, self.x_offset.is_some()))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let monospace = args.monospace;
    let print_config = args.print_config;
    let (config, input, per_line) = args.into_config()?;

    if print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let text = read_input(input.as_ref())?;

    if monospace {
        let mut metrics = MonospaceMetrics::for_font_size(config.font_size);
        return run(&text, &config, &mut metrics, per_line);
    }

    match config.font_metrics() {
        Ok(mut metrics) => run(&text, &config, &mut metrics, per_line),
        Err(WrapError::Font(err)) if config.font.is_none() => {
            tracing::warn!(error = %err, "no system font, falling back to monospace cells");
            let mut metrics = MonospaceMetrics::for_font_size(config.font_size);
            run(&text, &config, &mut metrics, per_line)
        }
        Err(err) => Err(err.into()),
    }
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn run<S: GlyphSource>(
    text: &str,
    config: &WrapConfig,
    source: &mut S,
    per_line: bool,
) -> Result<()> {
    let column = build_column(text, source);
    let chars: Vec<char> = text.chars().collect();

    let mut wrap = WrapAlgorithm::default();
    config.apply(&mut wrap);

    if per_line {
        let mut total = 0.0;
        for (idx, line) in column.iter() {
            let mut line = line.clone();
            wrap.recalculate_line(&mut line, &*source, config.x_offset);
            print_line(idx, &line, &chars);
            total += wrap.height();
        }
        println!("height: {total}");
        return Ok(());
    }

    wrap.set_text_column(column, Some(&*source));
    if let Some(column) = wrap.column() {
        for (idx, line) in column.iter() {
            print_line(idx, line, &chars);
        }
    }
    println!("height: {}", wrap.height());
    println!("width: {}", wrap.total_width());
    Ok(())
}

fn print_line(idx: usize, line: &WrapLine, chars: &[char]) {
    if line.sublines.is_empty() {
        println!("{idx:>4}.-  y={:<8} h={:<8} |", line.relative_y_pos, line.height);
        return;
    }

    for (row_idx, row) in line.sublines.iter().enumerate() {
        let content: String = line.chars[line.subline_range(row_idx)]
            .iter()
            .filter_map(|c| chars.get(c.text_index))
            .collect();
        println!(
            "{idx:>4}.{row_idx:<2} y={:<8} h={:<8} w={:<8} |{}",
            row.rel_y_pos,
            row.height,
            row.width,
            content.trim_end_matches('\n')
        );
    }
}
