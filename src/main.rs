use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::info;
use navindex::{AnchorIndex, Format, IndexError, IndexLoader, NavIndex, SerializeOptions};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Inspect and convert documentation navigation indexes.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Input format; detected from the file when omitted
    #[arg(long, global = true, value_enum)]
    format: Option<FormatArg>,

    /// Maximum nesting depth accepted in script input
    #[arg(
        long,
        global = true,
        default_value_t = navindex::parser::DEFAULT_MAX_DEPTH as u16,
        value_parser = clap::value_parser!(u16).range(..=navindex::parser::MAX_DEPTH_LIMIT as i64)
    )]
    max_depth: u16,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate an index and report its size
    Check { file: PathBuf },
    /// Find a symbol by name and print its path and anchor
    Lookup { file: PathBuf, name: String },
    /// Re-serialize an index as a navigation script or JSON
    Convert {
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = FormatArg::Script)]
        to: FormatArg,
        /// Variable name to declare in the output
        #[arg(long = "var")]
        var_name: Option<String>,
        #[arg(long, default_value_t = 4)]
        indent: usize,
    },
    /// Print the anchor-to-entry reverse index script
    Anchors {
        file: PathBuf,
        #[arg(long = "var", default_value = "NAVTREEINDEX0")]
        var_name: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum FormatArg {
    Script,
    Json,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Script => Format::Script,
            FormatArg::Json => Format::Json,
        }
    }
}

fn load(args: &Args, file: &Path) -> Result<NavIndex, IndexError> {
    let mut loader = IndexLoader::new().with_max_depth(usize::from(args.max_depth));
    if let Some(format) = args.format {
        loader = loader.with_format(format.into());
    }
    loader.load_file(file)
}

fn run(args: &Args) -> Result<ExitCode, IndexError> {
    match &args.command {
        Command::Check { file } => {
            let index = load(args, file)?;
            info!("Validated '{}'", file.display());
            println!(
                "{}: {} entries ({} top-level)",
                file.display(),
                index.len(),
                index.entries().len()
            );
        }
        Command::Lookup { file, name } => {
            let index = load(args, file)?;
            match index.lookup_path(name) {
                Some((path, entry)) => {
                    let anchor = entry.anchor().map(|a| a.as_str()).unwrap_or("-");
                    println!("{}\t{}\t{}", path, entry.name(), anchor);
                }
                None => {
                    eprintln!("'{}' not found in {}", name, file.display());
                    return Ok(ExitCode::from(1));
                }
            }
        }
        Command::Convert {
            file,
            to,
            var_name,
            indent,
        } => {
            let index = load(args, file)?;
            let mut options = SerializeOptions::new()
                .with_format((*to).into())
                .with_indent(*indent)
                .with_trailing_newline(true);
            if let Some(var_name) = var_name {
                options = options.with_var_name(var_name.clone());
            }
            print!("{}", index.to_string_with(&options)?);
        }
        Command::Anchors { file, var_name } => {
            let index = load(args, file)?;
            println!("{}", AnchorIndex::build(&index).to_script(var_name)?);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("navindex=info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(2)
        }
    }
}
