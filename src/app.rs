use std::io;

use anyhow::Result;

use crate::{
    cli::{Cli, Command},
    domain, infra,
    usecases::{self, bootstrap, demo},
};

pub fn run(cli: Cli) -> Result<()> {
    let mut context = bootstrap::bootstrap(cli.config.as_deref())?;

    tracing::debug!(
        domain = domain::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );

    let command = cli.command_or_default();
    tracing::info!(?command, "running chatbook");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match command {
        Command::Demo => demo::run_demo(&mut context, &mut out)?,
        Command::Summary => demo::run_summary(&mut context, &mut out)?,
    }

    tracing::info!(
        chats = context.chats.borrow().len(),
        messages = context.messages.list().len(),
        "chatbook finished"
    );
    Ok(())
}
