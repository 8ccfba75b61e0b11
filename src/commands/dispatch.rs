use std::io::Write;

use super::FlashCommand;
use crate::error::FlashError;

/// Prints the command, then runs it unless this is a dry run.
pub fn dispatch<W: Write>(
    command: &FlashCommand,
    dry_run: bool,
    out: &mut W,
) -> Result<(), FlashError> {
    writeln!(out, "{command}")?;
    out.flush()?;

    if dry_run {
        log::info!("dry run, not executing");
        return Ok(());
    }

    execute(command)
}

/// Spawns the command with inherited stdio and waits for it.
pub fn execute(command: &FlashCommand) -> Result<(), FlashError> {
    let program = command.program().display().to_string();
    let status = command
        .to_process()
        .status()
        .map_err(|source| FlashError::Spawn {
            program: program.clone(),
            source,
        })?;
    log::debug!("{} finished with {}", program, status);

    if status.success() {
        Ok(())
    } else {
        Err(FlashError::ChildProcessFailure {
            program,
            code: status.code(),
        })
    }
}
