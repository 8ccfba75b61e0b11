use clap::Args;

/// Accepts `0x`-prefixed hex or decimal addresses that fit in 32 bits.
/// The original spelling is kept for openocd.
pub fn parse_start_address(addr: &str) -> Result<String, String> {
    let trimmed = addr.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => trimmed.parse::<u32>(),
    };

    parsed
        .map(|_| trimmed.to_string())
        .map_err(|_| format!("'{}' is not a 32-bit address (use 0x-prefixed hex or decimal)", addr))
}

#[derive(Args, Debug, Clone, Default)]
pub struct OpenOcdArgs {
    #[arg(
        short = 's',
        long,
        value_name = "ADDR",
        value_parser = parse_start_address,
        help = "Flash start address for .bin images [default: 0x8000000]"
    )]
    pub start: Option<String>,

    #[arg(
        short = 't',
        long,
        value_name = "NAME",
        help = "Debug adapter interface, an openocd scripts/interface config [default: cmsis-dap]"
    )]
    pub tool: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct EsptoolArgs {
    #[arg(
        short = 'p',
        long,
        value_name = "DEV",
        help = "Serial port, required for ESP32 (e.g. /dev/ttyACM0)"
    )]
    pub port: Option<String>,
}
