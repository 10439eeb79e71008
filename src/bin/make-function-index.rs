use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use vigra_docs::{generate_function_index, FactoryTable};

#[derive(Parser)]
#[command(name = "make-function-index")]
#[command(version, about = "Generate functionindex.html from Doxygen 1.5.4 output")]
struct Args {
    /// Directory holding the generated namespaces.html
    directory: PathBuf,

    /// JSON table replacing the built-in argument object factories
    #[arg(long, value_name = "FILE")]
    factories: Option<PathBuf>,

    /// More log output (repeat for trace)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn log_level(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "warn",
            (false, 0) => "info",
            (false, 1) => "debug",
            (false, _) => "trace",
        }
    }
}

fn parse_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(err)
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) =>
        {
            err.exit()
        }
        Err(err) => {
            // usage goes to stdout, and nothing is touched on disk
            println!("{}", err.render());
            std::process::exit(1);
        }
    }
}

fn main() -> Result<()> {
    let args = parse_args();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
        .target(env_logger::Target::Stderr)
        .init();

    let factories = match &args.factories {
        Some(path) => FactoryTable::from_json_file(path)
            .with_context(|| format!("loading factory table {}", path.display()))?,
        None => FactoryTable::default(),
    };

    let report = generate_function_index(&args.directory, &factories)
        .with_context(|| format!("building function index in {}", args.directory.display()))?;

    println!(
        "✅ {} functions from {} namespaces indexed under {} initials: {}",
        report.functions,
        report.namespaces,
        report.initials.len(),
        report.output.display()
    );

    Ok(())
}
