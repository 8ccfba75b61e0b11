pub mod args;
pub mod dispatch;
pub mod esptool;
pub mod openocd;

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::args::Args;
use crate::error::FlashError;
use crate::family::Platform;
use crate::request::InvocationRequest;
use crate::settings::Settings;
use crate::toolchain::Toolchain;

/// A fully resolved external tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashCommand {
    program: PathBuf,
    args: Vec<OsString>,
}

impl FlashCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn arguments(&self) -> &[OsString] {
        &self.args
    }

    pub fn to_process(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

// Same safe set as POSIX `shlex.join`: such words are printed bare.
fn is_shell_safe(word: &str) -> bool {
    !word.is_empty()
        && word.bytes().all(|b| {
            b.is_ascii_alphanumeric()
                || matches!(b, b'_' | b'@' | b'%' | b'+' | b'=' | b':' | b',' | b'.' | b'/' | b'-')
        })
}

fn quote(word: &OsStr) -> String {
    let word = word.to_string_lossy();
    if is_shell_safe(&word) {
        return word.into_owned();
    }
    match shlex::try_quote(&word) {
        Ok(quoted) => quoted.into_owned(),
        // shlex refuses NUL bytes.
        Err(_) => format!("{word:?}"),
    }
}

// Shell-quoted, pasteable form of the command line.
impl fmt::Display for FlashCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote(self.program.as_os_str()))?;
        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }
        Ok(())
    }
}

/// Runs the whole CLI pipeline for parsed arguments, printing the command to `out`.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<(), FlashError> {
    let settings = Settings::load(args.settings.config.as_deref())?;
    let request = InvocationRequest::new(args, &settings.defaults);
    let toolchain = Toolchain::from_settings(&settings);

    flash(&request, &toolchain, out)
}

pub fn flash<W: Write>(
    request: &InvocationRequest,
    toolchain: &Toolchain,
    out: &mut W,
) -> Result<(), FlashError> {
    request.ensure_firmware_exists()?;

    let command = build_command(request, toolchain)?;
    dispatch::dispatch(&command, request.dry_run(), out)
}

pub fn build_command(
    request: &InvocationRequest,
    toolchain: &Toolchain,
) -> Result<FlashCommand, FlashError> {
    match Platform::route(request.mcu())? {
        Platform::Stm32 => openocd::build(request, toolchain),
        Platform::Esp32 => esptool::build(request, toolchain),
    }
}
