use crate::commands::args::{EsptoolArgs, OpenOcdArgs};
use crate::settings::args::SettingsArgs;
use clap::Parser;

// Top-level CLI parser. Tool-specific options are flattened from sub-Args structs.
#[derive(Parser, Debug)]
#[command(
    name = "flash-mcu",
    author,
    version,
    about = "openocd/esptool wrapper for PlatformIO users"
)]
pub struct Args {
    #[arg(value_name = "MCU", help = "MCU name, e.g. stm32f103c8t6 or esp32 (case-insensitive)")]
    pub mcu: String,

    #[arg(value_name = "FIRMWARE", help = "Firmware path (.bin/.elf/.hex)")]
    pub firmware: String,

    #[command(flatten)]
    pub openocd: OpenOcdArgs,

    #[command(flatten)]
    pub esptool: EsptoolArgs,

    #[arg(short = 'd', long, help = "Print the flash command without running it")]
    pub dryrun: bool,

    #[command(flatten)]
    pub settings: SettingsArgs,

    #[arg(
        short = 'v',
        long,
        action = clap::ArgAction::Count,
        help = "Increase log verbosity (-v info, -vv debug, -vvv trace)"
    )]
    pub verbose: u8,
}

impl Args {
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
