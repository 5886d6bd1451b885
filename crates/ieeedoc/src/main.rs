/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use cli::{Cli, Command};
use commands::Session;
use config::Config;
use ieeedoc_processor::store::DirStore;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::resolve(cli.config.as_deref())?;
    let store_dir = cli.store.clone().unwrap_or_else(|| config.store.dir.clone());
    let mut session = Session::new(config, DirStore::new(store_dir));

    match cli.command {
        Command::New { output } => session.new_paper(output.as_deref())?,
        Command::Render {
            paper,
            format,
            output,
        } => session.render(paper.as_deref(), format, output.as_deref())?,
        Command::Check { paper, json } => session.check(paper.as_deref(), json)?,
        Command::Apply { edits, paper } => session.apply(&edits, paper.as_deref())?,
        Command::Add { item } => session.add(item)?,
        Command::Cite { kind, id, caret } => session.cite(kind.into(), &id, caret)?,
        Command::Select { id } => session.select(id.as_deref())?,
        Command::Export { output } => session.export(&output)?,
        Command::Import { file } => session.import(&file)?,
        Command::Reset => session.reset()?,
        #[cfg(feature = "schema")]
        Command::Schema => {
            let schema = schemars::schema_for!(ieeedoc_core::PaperData);
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
        }
    }

    Ok(())
}
