//! jsdrill CLI — check learner snippets against the exercise catalog.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use jsdrill::{check, example_answer, Exercise, Severity, ValidationResult};

#[derive(Parser)]
#[command(
    name = "jsdrill",
    version,
    about = "Structural feedback for beginner JavaScript exercises",
    long_about = "Parses a single-statement JavaScript snippet and reports every way it \
deviates from the shape an exercise expects, without executing it."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a snippet against an exercise
    Check {
        /// Exercise section (objects, forLoops, forEachLoops)
        #[arg(short, long)]
        section: String,

        /// Question identifier within the section
        #[arg(short, long)]
        question: String,

        /// Snippet text; when omitted, reads --file or stdin
        #[arg(short, long)]
        code: Option<String>,

        /// Read the snippet from a file
        #[arg(short, long, conflicts_with = "code")]
        file: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: Format,
    },

    /// Print a canonical answer for an exercise
    Example {
        /// Exercise section (objects, forLoops, forEachLoops)
        #[arg(short, long)]
        section: String,

        /// Question identifier within the section
        #[arg(short, long)]
        question: String,
    },

    /// List the supported exercises
    List,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{} {error:#}", "error:".red().bold());
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            section,
            question,
            code,
            file,
            format,
        } => {
            let exercise = lookup(&section, &question)?;
            let snippet = read_snippet(code, file)?;
            let result = check(&snippet, exercise);

            match format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&result)?),
                Format::Text => print_text(&result),
            }

            Ok(if result.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }

        Commands::Example { section, question } => {
            let exercise = lookup(&section, &question)?;
            println!("{}", example_answer(exercise));
            Ok(ExitCode::SUCCESS)
        }

        Commands::List => {
            for exercise in Exercise::ALL {
                println!("{}/{}", exercise.section().as_str(), exercise.question());
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn lookup(section: &str, question: &str) -> Result<Exercise> {
    Exercise::find(section, question)
        .with_context(|| format!("exercise not found: {section}/{question}"))
}

fn read_snippet(code: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(code) = code {
        return Ok(code);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()));
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("cannot read stdin")?;
    if buffer.trim().is_empty() {
        bail!("no snippet given: pass --code, --file, or pipe code on stdin");
    }
    Ok(buffer)
}

fn print_text(result: &ValidationResult) {
    for kind in &result.missing_elements {
        println!("{} missing {}", "error:".red().bold(), kind);
    }

    for message in &result.messages {
        let label = match message.severity {
            Severity::Warning => "warning:".yellow().bold(),
            Severity::Error | Severity::AbjectFailure => "error:".red().bold(),
        };
        println!("{label} {}", message.message);
    }

    if result.is_success() {
        println!("{}", "All checks passed".green().bold());
    }
}
