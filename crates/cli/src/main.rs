use crate::cli::Cli;
use anyhow::Context;
use clap::Parser;
use std::fs;
use strk_calldata_common::sh_println;
use strk_calldata_common::shell::{set_output_mode, OutputMode};
use strk_calldata_core::{build_constructor_calldata, render_calldata_file, sncast_deploy_command};
use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> anyhow::Result<()> {
    let opt = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(opt.log_directive())),
        )
        .with_writer(std::io::stderr)
        .init();

    if opt.silent {
        set_output_mode(OutputMode::Quiet);
    }

    run(opt)
}

fn run(opt: Cli) -> anyhow::Result<()> {
    let output = opt.output.clone();
    let show_config = opt.show_config;
    let config = opt.into_deploy_config()?;

    if show_config {
        config.print();
    }

    let calldata = build_constructor_calldata(&config);

    sh_println!("\nSerialized calldata:");
    for (index, value) in calldata.iter().enumerate() {
        sh_println!("{index}: {value}");
    }

    fs::write(&output, render_calldata_file(&calldata))
        .with_context(|| format!("failed to write calldata to {}", output.display()))?;
    tracing::info!(path = %output.display(), values = calldata.len(), "calldata written");
    sh_println!("\nCalldata written to {}", output.display());

    let command = sncast_deploy_command(&config, &calldata);
    sh_println!("\nSncast command:");
    sh_println!("{}", command.join(" "));

    Ok(())
}
