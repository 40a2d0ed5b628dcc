use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::SchemaSourceArgs;
use crate::output_utils;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct IntrospectCmd {
    #[command(flatten)]
    pub source: SchemaSourceArgs,

    #[arg(
        help="File to write the introspection JSON to. Printed to stdout when \
             omitted.",
        long,
        short='o',
    )]
    pub output: Option<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for IntrospectCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let Some(source) = self.source.into_schema_source() else {
            return CommandResult::stderr(format_args!(
                "{} Either a SCHEMA_PATH or `--sdl` is required.",
                output_utils::RED_X,
            ));
        };

        let introspection = match source.into_introspection_result() {
            Ok(introspection) => introspection,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Failed to introspect schema: {err}",
                output_utils::RED_X,
            )),
        };
        log::debug!(
            "Introspected {} types.",
            introspection.schema.types.len(),
        );

        let json = match introspection.to_json_pretty() {
            Ok(json) => json,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Failed to serialize the introspection result: {err}",
                output_utils::RED_X,
            )),
        };

        let Some(output_path) = self.output else {
            return CommandResult::stdout(format_args!("{json}"));
        };
        match std::fs::write(&output_path, json) {
            Ok(()) => CommandResult::stdout(format_args!(
                "{} Wrote the introspection result to {}.",
                output_utils::GREEN_CHECK,
                output_path.display(),
            )),
            Err(err) => CommandResult::stderr(format_args!(
                "{} Failed to write {}: {err}",
                output_utils::RED_X,
                output_path.display(),
            )),
        }
    }
}
