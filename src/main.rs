use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use bkrs2yomi::services::download::{BkrsDownloader, DumpFetcher, DumpKind};
use bkrs2yomi::{
    export_dict, ConversionMode, ExportOptions, IdentityConverter, Layout, OpenCcTable,
    ScriptConverter, ZhconvConverter,
};

#[derive(Parser, Debug)]
#[command(name = "bkrs2yomi", version)]
#[command(about = "Convert BKRS dictionary dumps into Yomichan dictionaries", long_about = None)]
struct Args {
    /// Export the extended version of BKRS (includes entries without pinyin)
    #[arg(long)]
    extended: bool,

    /// Download the latest daily dump and convert it
    #[arg(long)]
    daily: bool,

    /// Conversion type: 0 - simplified, 1 - traditional, 2 - traditional addon for type 0, excluding duplicates
    #[arg(long = "type", default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=2))]
    conversion: u8,

    /// Work with the ru-zh dump (two lines per entry instead of three)
    #[arg(long)]
    ru: bool,

    /// Directory holding OpenCC STPhrases.txt / STCharacters.txt to use instead of the bundled tables
    #[arg(long, env = "BKRS2YOMI_OPENCC_DIR")]
    opencc_dir: Option<PathBuf>,

    /// Scratch directory for term banks, removed after the run
    #[arg(long, default_value = "yomi_tmp")]
    staging_dir: PathBuf,

    /// Dump to convert (.gz is decompressed)
    input: Option<PathBuf>,

    /// Archive to write, defaults to <name>_yomichan.zip
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if missing_input(&args) {
        eprintln!("{}", Args::command().render_help());
        return ExitCode::from(2);
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

// Without a dump to read, the daily download has to be requested
fn missing_input(args: &Args) -> bool {
    args.input.is_none() && !args.daily
}

fn converter_for(
    mode: ConversionMode,
    opencc_dir: Option<&Path>,
) -> anyhow::Result<Box<dyn ScriptConverter>> {
    if !mode.needs_converter() {
        return Ok(Box::new(IdentityConverter));
    }

    match opencc_dir {
        Some(dir) => {
            let table = OpenCcTable::from_dir(dir)
                .with_context(|| format!("failed to load OpenCC tables from {}", dir.display()))?;
            Ok(Box::new(table))
        }
        None => Ok(Box::new(ZhconvConverter)),
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mode = ConversionMode::try_from(args.conversion)?;

    let options = ExportOptions {
        extended: args.extended,
        layout: if args.ru { Layout::TwoLine } else { Layout::ThreeLine },
        mode,
        staging_dir: args.staging_dir,
        output: args.output,
    };

    let converter = converter_for(mode, args.opencc_dir.as_deref())?;

    let input = match args.input {
        Some(path) => path,
        None => {
            let kind = if args.ru { DumpKind::DailyRu } else { DumpKind::Daily };
            BkrsDownloader::new(".")?
                .fetch_latest(kind)
                .context("failed to download the latest dump")?
        }
    };

    let (report, archive) = export_dict(&input, &options, converter.as_ref())
        .with_context(|| format!("failed to convert {}", input.display()))?;

    println!("Parsing complete — {} entries.", report.total);
    println!("Dictionary written to {}", archive.display());
    Ok(())
}
