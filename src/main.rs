mod cli;

use inspforge::{
    batch, config,
    container::Template,
    convert::{display_name, Converter, FileOutcome},
    validator::StereoscopicValidator,
};

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "inspforge=debug,inspforge_container=debug".to_string()
        } else {
            "inspforge=info,inspforge_container=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = config::load_config_or_default(cli.config.as_deref())?;

    // Without a usable template no output is possible for any file
    let template = Template::load(&cli.template_insp).with_context(|| {
        format!(
            "Failed to analyze template INSP file: {}",
            cli.template_insp.display()
        )
    })?;

    let boundaries = template.boundaries();
    tracing::debug!("Template INSP analysis:");
    tracing::debug!("  Header size: {} bytes", boundaries.header_size);
    tracing::debug!("  Footer size: {} bytes", boundaries.footer_size);
    tracing::debug!("  Total size: {} bytes", boundaries.total_size);
    if let Some(version) = template.version() {
        tracing::debug!("  Version detected: {}", version);
    }

    let validator = StereoscopicValidator::new(config.validator.clone());
    let converter = Converter::new(&template, &validator, &config.output);

    let report = batch::run(&cli.input, &cli.output_dir, &converter, &config.output)?;

    for file in &report.files {
        let name = display_name(&file.path);
        match &file.outcome {
            FileOutcome::Converted { container, copy } => {
                println!("Created: {}", container.display());
                if let Some(copy) = copy {
                    tracing::debug!("Copied {} to {}", name, copy.display());
                }
            }
            FileOutcome::Skipped { reason } => println!("Skipping {}: {}", name, reason),
            FileOutcome::Failed { error } => println!("Error processing {}: {:#}", name, error),
        }
    }

    println!("{}", report.summary());

    if report.has_failures() {
        anyhow::bail!("{} file(s) failed to convert", report.failed());
    }

    Ok(())
}
