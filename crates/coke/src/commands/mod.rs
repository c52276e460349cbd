mod check;
mod parse;

use crate::Cli;
use crate::CommandResult;
use check::CheckCmd;
use parse::ParseCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "coke")]
pub(crate) enum CommandEnum {
    /// Syntax-check GraphQL files and directories.
    Check(Box<CheckCmd>),

    /// Parse one input and print the result.
    Parse(Box<ParseCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Check(cmd) => cmd.run(cli).await,
            Self::Parse(cmd) => cmd.run(cli).await,
        }
    }
}
