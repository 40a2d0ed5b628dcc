mod generate;
mod introspect;
mod schema_source_args;

use crate::Cli;
use crate::CommandResult;
pub(crate) use generate::GenerateCmd;
pub(crate) use introspect::IntrospectCmd;
pub(crate) use schema_source_args::SchemaSourceArgs;

#[derive(Debug, clap::Subcommand)]
pub(crate) enum CommandEnum {
    /// Generate a TypeScript declaration file from a GraphQL schema.
    Generate(Box<GenerateCmd>),

    /// Print (or write) the introspection result of a GraphQL schema as JSON.
    Introspect(Box<IntrospectCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Generate(cmd) => cmd.run(cli).await,
            Self::Introspect(cmd) => cmd.run(cli).await,
        }
    }
}
