use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use spellcore::cli::output::{self, Finding, OutputFormat};
use spellcore::{dict, Config, SpellChecker};
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spellcore")]
#[command(version, about = "An embeddable spellchecking engine with a fast CLI", long_about = None)]
struct Cli {
    /// Files to check
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if misspellings are found
    #[arg(long)]
    no_fail: bool,

    /// Language/dictionary to use (e.g., en_US, en_GB)
    #[arg(short, long, default_value = "en_US")]
    language: String,

    /// Main dictionary file (overrides the per-language wordlist)
    #[arg(long)]
    dict: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Disable suggestion generation
    #[arg(long)]
    no_suggestions: bool,

    /// Add words to the personal dictionary
    #[arg(long)]
    add_to_dict: Vec<String>,

    /// Treat a word as correct for this run only
    #[arg(long)]
    ignore: Vec<String>,

    /// Personal dictionary file
    #[arg(long)]
    personal_dict: Option<PathBuf>,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Dictionary management
    Dict {
        #[command(subcommand)]
        action: DictCommands,
    },
}

#[derive(Parser, Debug)]
enum DictCommands {
    /// List installed dictionaries
    List,
    /// Show dictionary info
    Info {
        /// Language code (e.g., en_US, en_GB)
        language: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "spellcore", &mut io::stdout());
        return Ok(());
    }

    // Handle subcommands
    if let Some(command) = cli.command {
        return handle_command(command);
    }

    // Load configuration
    let mut config = Config::load(
        cli.language.clone(),
        cli.dict.clone(),
        cli.personal_dict.clone(),
    )?;
    if cli.no_suggestions {
        config.suggestions = false;
    }

    // Initialize the engine
    let mut checker = SpellChecker::with_options(config.checker_options());

    let dict_path = config
        .main_dictionary_path()
        .context("Failed to resolve the main dictionary path")?;
    checker
        .load_main_dict_file(&dict_path)
        .with_context(|| format!("Failed to load main dictionary: {}", dict_path.display()))?;

    if let Some(personal) = &config.personal_dictionary {
        checker
            .load_user_dict_file(personal)
            .with_context(|| format!("Failed to load personal dictionary: {}", personal.display()))?;
    }

    // Persist any words added from the command line
    if !cli.add_to_dict.is_empty() {
        for word in &cli.add_to_dict {
            checker.add_to_user_dict(word)?;
        }
        if let Some(personal) = &config.personal_dictionary {
            checker
                .save_user_dict_file(personal)
                .with_context(|| {
                    format!("Failed to save personal dictionary: {}", personal.display())
                })?;
        }
        if cli.files.is_empty() {
            return Ok(());
        }
    }

    // Session-only ignores
    for word in &cli.ignore {
        checker.add_to_ignored(word)?;
    }

    if cli.files.is_empty() {
        anyhow::bail!("No files specified. Use --help for usage information.");
    }

    // Process files
    let mut total_errors = 0;

    for file_path in &cli.files {
        if !file_path.exists() {
            eprintln!("Error: File not found: {}", file_path.display());
            continue;
        }

        let text = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))?;

        checker.check(&text)?;

        let mut findings = Vec::with_capacity(checker.misspellings().len());
        for m in checker.misspellings() {
            let suggestions = checker.suggest(&m.word)?;
            findings.push(Finding::from_misspelling(&text, m, suggestions));
        }

        total_errors += findings.len();
        output::print_findings(file_path, &findings, !cli.no_color, &cli.format);
    }

    if matches!(cli.format, OutputFormat::Text) {
        output::print_check_summary(total_errors, &cli.files, !cli.no_color);
    }

    // Exit with appropriate code
    if total_errors > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Dict { action } => match action {
            DictCommands::List => {
                dict::manager::list_dictionaries()?;
            }
            DictCommands::Info { language } => {
                dict::manager::show_info(&language)?;
            }
        },
    }
    Ok(())
}
