mod list;
mod render;
mod schema_args;

use crate::CommandResult;
use crate::RunnableCommand;
use list::ListCmd;
use render::RenderCmd;

#[derive(Debug, clap::Subcommand)]
pub(crate) enum CommandEnum {
    /// Print the documents that would be generated, and where they belong.
    List(Box<ListCmd>),
    /// Render the schema and print the documents.
    Render(Box<RenderCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self) -> CommandResult {
        match self {
            Self::List(cmd) => cmd.run().await,
            Self::Render(cmd) => cmd.run().await,
        }
    }
}
