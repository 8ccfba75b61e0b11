use clap::Args;

#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    #[arg(
        short = 'c',
        long,
        value_name = "FILE",
        help = "Settings file overriding defaults and toolchain locations (toml/yaml/json)"
    )]
    pub config: Option<String>,
}
