use clap::CommandFactory;
use crate::commands;

/// Inputs larger than this are rejected before parsing unless
/// `--max-input-bytes` says otherwise.
pub(crate) const DEFAULT_MAX_INPUT_BYTES: u64 = 1024 * 1024;

#[derive(clap::Parser, Debug)]
#[command(
    name = "coke",
    version,
    about = "Parse and syntax-check GraphQL executable documents.",
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        default_value_t=DEFAULT_MAX_INPUT_BYTES,
        global=true,
        help="Reject any input larger than this many bytes.",
        long,
    )]
    pub max_input_bytes: u64,

    #[arg(
        global=true,
        help="Enable verbose output.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
