use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use kwrules::{RuleGenerator, RuleTemplate, DEFAULT_INPUT, DEFAULT_OUTPUT};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Generate lexer rules from a list of keywords, one per line.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Keyword list to read
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// File to write the generated rules to (overwritten)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// TOML file overriding the rule template
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Print the rules instead of writing the output file
    #[arg(long)]
    stdout: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let default_filter = if verbose { "kwrules=debug,info" } else { "kwrules=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn load_template(path: &Path) -> anyhow::Result<RuleTemplate> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("unable to read template `{}`", path.display()))?;
    let template = toml::from_str(&text)
        .with_context(|| format!("invalid template `{}`", path.display()))?;
    Ok(template)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);
    tracing::debug!("{:?}", args);

    let template = match &args.template {
        Some(path) => load_template(path)?,
        None => RuleTemplate::default(),
    };

    let generator = RuleGenerator::new(&args.input, &args.output).with_template(template);

    if args.stdout {
        let rendered = generator.generate()?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(rendered.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    let summary = generator.run()?;
    println!(
        "Wrote {}, {} rules, {} bytes",
        summary.output.display(),
        summary.fragments,
        summary.bytes
    );

    Ok(())
}
