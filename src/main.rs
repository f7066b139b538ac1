#![doc = include_str!("../README.md")]

use clap::Parser;
use core::{error::Error, pin::pin};
use env_logger::Env;
use futures::StreamExt;
use layout_dimen::{
    DEFAULT_CONFIG_FILE, LayoutRewriter, Metrics, RenderFormat, RenderOptions, SerializableConfig,
    compile_config, read_config, render_file,
};
use log::warn;
use std::{path::PathBuf, process::exit};
use tabled::{
    Table,
    settings::{Color, Style, themes::Colorization},
};
use tokio::{
    fs::try_exists,
    io::{AsyncWriteExt, stdout},
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Arguments {
    /// Layout directories or layout files.
    paths: Vec<PathBuf>,
    /// Sets a configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Prints rewritten layouts instead of writing them back.
    #[arg(long)]
    dry_run: bool,
    /// Sets a maximum number of files processed concurrently.
    #[arg(long)]
    concurrency: Option<usize>,
    /// Sets an output format.
    #[arg(long, default_value = "text")]
    format: RenderFormat,
    /// Becomes verbose.
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("{error}");
        exit(1)
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let Arguments {
        paths,
        config,
        dry_run,
        concurrency,
        format,
        verbose,
    } = Arguments::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(if verbose {
        "debug"
    } else {
        "warn"
    }))
    .init();

    let config_file = if let Some(path) = config {
        Some(path)
    } else {
        let path = PathBuf::from(DEFAULT_CONFIG_FILE);
        try_exists(&path).await?.then_some(path)
    };
    let mut config = if let Some(path) = &config_file {
        read_config(path).await?
    } else {
        SerializableConfig::default()
    };

    config.merge(SerializableConfig::new(
        (!paths.is_empty()).then_some(paths),
        None,
        concurrency,
        dry_run.then_some(true),
    ));

    let config = compile_config(config)?;

    if config.roots().next().is_none() {
        warn!("no layout paths given");
    }

    let rewriter = LayoutRewriter::new(config);
    let mut outputs = pin!(rewriter.rewrite().await);
    let options = RenderOptions::new()
        .set_format(format)
        .set_show_unchanged(verbose);
    let mut output = stdout();
    let mut metrics = Metrics::default();

    while let Some(file) = outputs.next().await {
        metrics.add(&file);
        render_file(&file, &options, &mut output).await?;
    }

    output.flush().await?;

    eprintln!();
    eprintln!(
        "{}",
        Table::from_iter(
            [vec!["item".into(), "count".into()]].into_iter().chain(
                [
                    ("file", metrics.total()),
                    ("rewritten file", metrics.success()),
                    ("failed file", metrics.error()),
                    ("rewritten attribute", metrics.rewritten()),
                ]
                .into_iter()
                .map(|(item, count)| vec![item.to_string(), count.to_string()])
            )
        )
        .with(Style::markdown())
        .with(Colorization::columns([Color::FG_WHITE, Color::FG_GREEN])),
    );

    if metrics.has_error() {
        Err(layout_dimen::Error::Rewrite.into())
    } else {
        Ok(())
    }
}
