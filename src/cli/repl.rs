//! Read-eval-print loop over the command language.

use std::io::{BufRead, Write};

use tracing::{debug, instrument};

use crate::application::services::GenealogyService;
use crate::application::Command;
use crate::infrastructure::{InfraError, InfraResult};

/// Run commands from `reader` until `exit` or end of input.
///
/// Responses and command errors are written to `writer`, one per line. A
/// `prompt` is printed before each read (interactive mode); scripts pass
/// `None`.
#[instrument(level = "debug", skip_all)]
pub fn run_session<R: BufRead, W: Write>(
    service: &GenealogyService,
    reader: R,
    mut writer: W,
    prompt: Option<&str>,
) -> InfraResult<()> {
    let mut lines = reader.lines();
    loop {
        if let Some(prompt) = prompt {
            write!(writer, "{prompt}")
                .and_then(|_| writer.flush())
                .map_err(|e| InfraError::io("write prompt", e))?;
        }
        let Some(line) = lines.next() else {
            debug!("end of input");
            break;
        };
        let line = line.map_err(|e| InfraError::io("read command", e))?;

        let written = match Command::parse(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Exit)) => break,
            Ok(Some(command)) => writeln!(writer, "{}", service.execute(&command)),
            Err(e) => writeln!(writer, "{e}"),
        };
        written.map_err(|e| InfraError::io("write response", e))?;
    }
    Ok(())
}
