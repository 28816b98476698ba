//! speaktex CLI - LaTeX to speech-ready script transcompiler

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use std::path::Path;
#[cfg(feature = "cli")]
use speaktex::{
    cheatsheet::{cheat_sheet_for, complete_cheat_sheet},
    diagnostics::{check_latex, format_diagnostics},
    script::{plan_segments, PauseSettings, Segment},
    CommandMapping, PrefixCategories, SpeechError, SpeechResult, SymbolCategory, Transcompiler,
    VerbalizationOptions,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "speaktex")]
#[command(version)]
#[command(about = "speaktex - turn LaTeX into a script a speech engine can read aloud", long_about = None)]
struct Cli {
    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Prefix categorized symbols ("symbol-of-alpha")
    #[arg(long)]
    prefix: bool,

    /// Prefix text used with --prefix
    #[arg(long, value_name = "TEXT")]
    prefix_text: Option<String>,

    /// Join prefix and symbol with spaces instead of hyphens
    #[arg(long)]
    no_group: bool,

    /// Categories that receive the prefix (comma-separated:
    /// greek,operators,comparison,sets,statistics,other)
    #[arg(long, value_delimiter = ',', value_name = "LIST")]
    categories: Option<Vec<SymbolCategory>>,

    /// Do not announce math spans
    #[arg(long)]
    no_announce: bool,

    /// JSON or TOML file of extra mappings, merged over the defaults
    #[arg(long, value_name = "FILE")]
    mappings: Option<String>,

    /// Also print the extracted equations
    #[arg(long)]
    equations: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Check mode - report where the spoken output will degrade
    #[arg(long)]
    check: bool,

    /// Print the playback plan instead of the script
    #[arg(long)]
    segments: bool,

    /// Print a cheat sheet of the commands used (all mappings without input)
    #[arg(long)]
    cheat_sheet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log pipeline details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn run(cli: Cli) -> SpeechResult<()> {
    let mappings = load_mappings(cli.mappings.as_deref())?;

    if cli.cheat_sheet && cli.input_file.is_none() {
        let pairs = complete_cheat_sheet(&mappings);
        return write_output(cli.output.as_deref(), &format_pairs(&pairs));
    }

    let input = match cli.input_file {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    if cli.check {
        let result = check_latex(&input, &mappings);
        println!("{}", format_diagnostics(&result, !cli.no_color));
        if result.has_errors() {
            std::process::exit(1);
        }
        return Ok(());
    }

    if cli.cheat_sheet {
        let pairs = cheat_sheet_for(&input, &mappings);
        return write_output(cli.output.as_deref(), &format_pairs(&pairs));
    }

    let options = build_options(&cli);
    options.validate()?;

    let transcompiler = Transcompiler::new()
        .with_mappings(mappings)
        .with_options(options);
    let output = transcompiler.transcompile_with_diagnostics(&input);

    if !cli.json {
        for warning in &output.warnings {
            eprintln!("⚠ {}", warning);
        }
    }

    let text = if cli.json {
        let warnings: Vec<String> = output.warnings.iter().map(|w| w.to_string()).collect();
        let value = serde_json::json!({
            "parsedText": output.result.parsed_text,
            "equations": output.result.equations,
            "warnings": warnings,
        });
        serde_json::to_string_pretty(&value)?
    } else if cli.segments {
        format_segments(&plan_segments(
            &output.result.parsed_text,
            &PauseSettings::default(),
        ))
    } else if cli.equations {
        let mut text = output.result.parsed_text.clone();
        text.push_str("\n\nEquations:");
        for (i, eq) in output.result.equations.iter().enumerate() {
            text.push_str(&format!("\n  {}. {}", i + 1, eq));
        }
        text
    } else {
        output.result.parsed_text
    };

    write_output(cli.output.as_deref(), &text)
}

#[cfg(feature = "cli")]
fn build_options(cli: &Cli) -> VerbalizationOptions {
    let mut options = VerbalizationOptions {
        use_symbol_prefix: cli.prefix,
        group_symbols: !cli.no_group,
        announce_math: !cli.no_announce,
        ..Default::default()
    };
    if let Some(ref text) = cli.prefix_text {
        options.symbol_prefix = text.clone();
    }
    if let Some(ref categories) = cli.categories {
        options.prefix_categories = PrefixCategories::only(categories);
    }
    options
}

/// Default mappings, with the entries from `path` merged over them
#[cfg(feature = "cli")]
fn load_mappings(path: Option<&str>) -> SpeechResult<CommandMapping> {
    let mut mappings = CommandMapping::default();
    let Some(path) = path else {
        return Ok(mappings);
    };

    let content = fs::read_to_string(path)?;
    let extension = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");
    let extra = match extension {
        "json" => CommandMapping::from_json_str(&content)?,
        "toml" => CommandMapping::from_toml_str(&content)?,
        other => {
            return Err(SpeechError::config(format!(
                "unsupported mapping file extension '{}' (expected .json or .toml)",
                other
            )))
        }
    };
    log::debug!("loaded {} mapping(s) from {}", extra.len(), path);
    mappings.extend(&extra);
    Ok(mappings)
}

#[cfg(feature = "cli")]
fn format_pairs(pairs: &[speaktex::cheatsheet::SymbolPair]) -> String {
    let width = pairs.iter().map(|p| p.command.len()).max().unwrap_or(0);
    pairs
        .iter()
        .map(|p| format!("{:<width$}  {}", p.command, p.spoken, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(feature = "cli")]
fn format_segments(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| match s {
            Segment::Speak(word) => format!("say   {}", word),
            Segment::Pause(ms) => format!("pause {}ms", ms),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(feature = "cli")]
fn write_output(path: Option<&str>, text: &str) -> SpeechResult<()> {
    match path {
        Some(path) => {
            let mut file = fs::File::create(path)?;
            writeln!(file, "{}", text)?;
            eprintln!("✓ Output written to: {}", path);
        }
        None => {
            println!("{}", text);
        }
    }
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install speaktex --features cli");
    eprintln!("  speaktex [OPTIONS] [INPUT_FILE]");
}
