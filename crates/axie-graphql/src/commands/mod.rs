mod list;
mod payload;
mod validate;

use crate::Cli;
use crate::CommandResult;
use list::ListCmd;
use payload::PayloadCmd;
use validate::ValidateCmd;

#[derive(Debug, clap::Subcommand)]
pub(crate) enum CommandEnum {
    /// List every operation in the catalog.
    List(ListCmd),

    /// Print the request payload for one operation.
    Payload(PayloadCmd),

    /// Validate the shipped catalog, optionally with fragment and operation
    /// sources overridden from files.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::List(cmd) => cmd.run(cli).await,
            Self::Payload(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}
