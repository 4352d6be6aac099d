//! Command dispatch: wires CLI arguments to services.

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::services::GenealogyService;
use crate::application::{Command, LoadReport};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::cli::repl::run_session;
use crate::config::{global_config_path, local_config_path, Settings};
use crate::infrastructure::di::ServiceContainer;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(Some(config_dir(cli)))?;
    debug!("settings: {:?}", settings);

    match &cli.command {
        None => run(settings, None, None),
        Some(Commands::Run { input, csv }) => run(settings, input.as_deref(), csv.as_deref()),
        Some(Commands::Exec { csv, words }) => exec(settings, csv.as_deref(), words),
        Some(Commands::Config { command }) => config(&settings, cli, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}

fn config_dir(cli: &Cli) -> &Path {
    cli.config_dir.as_deref().unwrap_or(Path::new("."))
}

fn load_service(
    settings: Settings,
    csv: Option<&Path>,
) -> CliResult<(ServiceContainer, GenealogyService)> {
    let container = ServiceContainer::new(settings);
    let (service, report) = container.genealogy_service(csv)?;
    report_skipped(&report);
    Ok((container, service))
}

fn report_skipped(report: &LoadReport) {
    for skipped in &report.unknown_advisors {
        output::warning(&format!(
            "Not found professor {} (line {}, advisee {})",
            skipped.advisor, skipped.line, skipped.advisee
        ));
    }
}

#[instrument(skip(settings))]
fn run(settings: Settings, script: Option<&Path>, csv: Option<&Path>) -> CliResult<()> {
    let (container, service) = load_service(settings, csv)?;
    let stdout = io::stdout();

    match script {
        Some(path) => {
            let content = container.read_script(path)?;
            run_session(&service, content.as_bytes(), stdout.lock(), None)?;
        }
        None => {
            let stdin = io::stdin();
            let prompt = container.settings.prompt.as_str();
            run_session(&service, stdin.lock(), stdout.lock(), Some(prompt))?;
        }
    }
    Ok(())
}

#[instrument(skip(settings))]
fn exec(settings: Settings, csv: Option<&Path>, words: &[String]) -> CliResult<()> {
    let line = words.join(" ");
    let command = Command::parse(&line)
        .map_err(|e| CliError::InvalidArgs(e.to_string()))?
        .ok_or_else(|| CliError::Usage("no command given".to_string()))?;

    if command == Command::Exit {
        return Ok(());
    }
    let (_, service) = load_service(settings, csv)?;
    output::info(&service.execute(&command));
    Ok(())
}

fn config(settings: &Settings, cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(settings.to_toml()?.trim_end()),
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => {
            output::header("Config files (lowest to highest precedence)");
            match global_config_path() {
                Some(path) => output::detail(&format!("global: {}", path.display())),
                None => output::detail("global: <no config directory>"),
            }
            output::detail(&format!(
                "local:  {}",
                local_config_path(config_dir(cli)).display()
            ));
        }
    }
    Ok(())
}
