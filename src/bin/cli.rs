use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use repoprime::config::Config;
use repoprime::emit::{self, EmitOptions};
use repoprime::error::PrimeError;
use repoprime::ir::Language;
use repoprime::output::{self, OutputFormat};
use repoprime::parser::{self, json_schema};
use repoprime::repository::{self, FileQuery};
use repoprime::GenerateOptions;

const CONFIG_FILE: &str = ".repoprime.toml";

#[derive(Parser)]
#[command(
    name = "repoprime",
    about = "Turn a repository's functions and classes into function-calling tool schemas",
    version,
    author
)]
struct Cli {
    /// Config file path (defaults to .repoprime.toml in the current directory)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List repository files, one page at a time
    List {
        /// Repository root
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Only list files with this extension (e.g. py, js, ts)
        #[arg(long, short = 'e')]
        extension: Option<String>,

        /// Page number (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Items per page (max 100; defaults to the configured page size)
        #[arg(long)]
        per_page: Option<usize>,
    },

    /// Print a file's content, refusing paths outside the root
    Read {
        /// Repository-relative path, e.g. src/utils.py
        path: PathBuf,

        /// Repository root
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },

    /// Extract function and class signatures from a source file
    Extract {
        /// Source file, or - for stdin
        file: PathBuf,

        /// Language (python, javascript, typescript); inferred from the extension if omitted
        #[arg(long, short = 'l')]
        language: Option<String>,

        /// Output format (json, console)
        #[arg(long, short = 'f', default_value = "json")]
        format: String,

        /// Ignore indented declarations
        #[arg(long)]
        top_level_only: bool,
    },

    /// Convert function descriptors (JSON) into tool definitions
    Emit {
        /// Descriptor JSON file, or - for stdin
        #[arg(default_value = "-")]
        file: PathBuf,

        /// Copy each descriptor's required list into its parameters object
        #[arg(long)]
        embed_required: bool,
    },

    /// Extract a whole repository and emit one tool array
    Generate {
        /// Repository root
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format (json, console)
        #[arg(long, short = 'f', default_value = "json")]
        format: String,

        /// Write output to file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Generate a starter .repoprime.toml config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));

    let result = match cli.command {
        Commands::Init { force } => cmd_init(force),
        command => Config::load(&config_path).and_then(|config| run(command, &config)),
    };

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("REPOPRIME_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands, config: &Config) -> Result<i32, PrimeError> {
    match command {
        Commands::List {
            path,
            extension,
            page,
            per_page,
        } => cmd_list(path, extension, page, per_page, config),
        Commands::Read { path, root } => cmd_read(root, path),
        Commands::Extract {
            file,
            language,
            format,
            top_level_only,
        } => cmd_extract(file, language, format, top_level_only, config),
        Commands::Emit {
            file,
            embed_required,
        } => cmd_emit(file, embed_required, config),
        Commands::Generate {
            path,
            format,
            output,
        } => cmd_generate(path, format, output, config),
        Commands::Init { force } => cmd_init(force),
    }
}

fn cmd_list(
    path: PathBuf,
    extension: Option<String>,
    page: usize,
    per_page: Option<usize>,
    config: &Config,
) -> Result<i32, PrimeError> {
    let query = FileQuery {
        extension,
        page,
        per_page: per_page.unwrap_or(config.listing.per_page),
        exclude_dirs: config.listing.exclude_dirs.clone(),
    };
    let files = repository::list_files(&path, &query)?;
    print!("{}", output::json::render(&files)?);
    Ok(0)
}

fn cmd_read(root: PathBuf, path: PathBuf) -> Result<i32, PrimeError> {
    let content = repository::read_file(&root, &path)?;
    print!("{}", content);
    Ok(0)
}

fn cmd_extract(
    file: PathBuf,
    language: Option<String>,
    format_str: String,
    top_level_only: bool,
    config: &Config,
) -> Result<i32, PrimeError> {
    let format = parse_format(&format_str, OutputFormat::Json);

    let language = match language {
        Some(tag) => Language::from_tag(&tag)?,
        None => infer_language(&file)?,
    };

    let bytes = read_input(&file)?;
    let code = std::str::from_utf8(&bytes)?;

    let mut options = config.scan.clone();
    options.top_level_only |= top_level_only;

    let records = parser::extract_with(code, language, &options);
    print!("{}", output::render_signatures(&records, format)?);
    Ok(0)
}

fn cmd_emit(file: PathBuf, embed_required: bool, config: &Config) -> Result<i32, PrimeError> {
    let bytes = read_input(&file)?;
    let value: serde_json::Value = serde_json::from_slice(&bytes)?;
    let descriptors = json_schema::parse_descriptors_from_json(&value)?;

    let options = EmitOptions {
        embed_required: embed_required || config.emit.embed_required,
    };
    let tools = emit::synthesize_tool_schemas_with(&descriptors, &options)?;
    print!("{}", output::json::render(&tools)?);
    Ok(0)
}

fn cmd_generate(
    path: PathBuf,
    format_str: String,
    output_path: Option<PathBuf>,
    config: &Config,
) -> Result<i32, PrimeError> {
    let format = parse_format(&format_str, OutputFormat::Json);
    let options = GenerateOptions::from_config(config);

    let report = repoprime::generate(&path, &options)?;
    let rendered = output::render_report(&report, format)?;

    match output_path {
        Some(out) => std::fs::write(&out, &rendered)?,
        None => print!("{}", rendered),
    }

    Ok(0)
}

fn cmd_init(force: bool) -> Result<i32, PrimeError> {
    let path = PathBuf::from(CONFIG_FILE);

    if path.exists() && !force {
        eprintln!("{CONFIG_FILE} already exists. Use --force to overwrite.");
        return Ok(1);
    }

    std::fs::write(&path, Config::starter_toml())?;
    println!("Created {CONFIG_FILE}");

    Ok(0)
}

fn parse_format(s: &str, fallback: OutputFormat) -> OutputFormat {
    OutputFormat::from_str_lenient(s).unwrap_or_else(|| {
        eprintln!("Warning: unknown format '{}', using {:?}", s, fallback);
        fallback
    })
}

fn infer_language(file: &Path) -> Result<Language, PrimeError> {
    let ext = file
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    Language::from_extension(ext).ok_or_else(|| {
        PrimeError::UnsupportedLanguage(if ext.is_empty() {
            file.display().to_string()
        } else {
            ext.to_string()
        })
    })
}

fn read_input(file: &Path) -> Result<Vec<u8>, PrimeError> {
    if file == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf)?;
        return Ok(buf);
    }
    Ok(std::fs::read(file)?)
}
