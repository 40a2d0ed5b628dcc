use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::SchemaSourceArgs;
use crate::output_utils;
use graphql_schema_typescript::AsyncResult;
use graphql_schema_typescript::GenerateOptionsOverrides;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct GenerateCmd {
    #[command(flatten)]
    pub source: SchemaSourceArgs,

    #[arg(
        help="Resolver return types: `never` (TResult), `allowed` (TResult \
             or a Promise of it), or `always` (a Promise of TResult).",
        long,
    )]
    pub async_result: Option<AsyncResult>,

    #[arg(
        help="A JSON file of generate options (camelCase keys). Flags passed \
             on the command line take precedence over it.",
        long,
    )]
    pub config: Option<PathBuf>,

    #[arg(help="Type of the `context` resolver parameter.", long)]
    pub context_type: Option<String>,

    #[arg(
        help="Map a custom scalar to a TypeScript type (e.g. \
             `--custom-scalar Date=string`). May be repeated.",
        long="custom-scalar",
        value_name="NAME=TYPE",
        value_parser=parse_custom_scalar,
    )]
    pub custom_scalars: Vec<(String, String)>,

    #[arg(
        default_missing_value="true",
        help="Wrap the output in `declare global { }`.",
        long,
        num_args=0..=1,
        require_equals=true,
        value_name="BOOL",
    )]
    pub global: Option<bool>,

    #[arg(
        help="An import statement to hoist to the top of the output. May be \
             repeated.",
        long="import",
        value_name="STATEMENT",
    )]
    pub import_statements: Vec<String>,

    #[arg(help="Wrap the output in a namespace with this name.", long)]
    pub namespace: Option<String>,

    #[arg(
        default_missing_value="true",
        help="Render enums as string-literal unions.",
        long,
        num_args=0..=1,
        require_equals=true,
        value_name="BOOL",
    )]
    pub no_string_enum: Option<bool>,

    #[arg(
        help="File to write the declarations to.",
        long,
        required_unless_present="stdout",
        short='o',
    )]
    pub output: Option<PathBuf>,

    #[arg(
        default_missing_value="true",
        help="Make every member of the root resolver map required.",
        long,
        num_args=0..=1,
        require_equals=true,
        value_name="BOOL",
    )]
    pub require_resolver_types: Option<bool>,

    #[arg(
        default_missing_value="true",
        help="Generate a resolver signature for every object-type field.",
        long,
        num_args=0..=1,
        require_equals=true,
        value_name="BOOL",
    )]
    pub resolve_all_fields: Option<bool>,

    #[arg(
        default_missing_value="true",
        help="Generate a resolver signature for every field of the root \
             operation types.",
        long,
        num_args=0..=1,
        require_equals=true,
        value_name="BOOL",
    )]
    pub resolve_root_fields: Option<bool>,

    #[arg(
        help="A `Type.field` coordinate that needs a resolver signature. May \
             be repeated.",
        long="resolver-field",
        value_name="TYPE.FIELD",
    )]
    pub resolver_fields: Vec<String>,

    #[arg(
        default_missing_value="true",
        help="Default `TParent` to the parent's generated type.",
        long,
        num_args=0..=1,
        require_equals=true,
        value_name="BOOL",
    )]
    pub smart_t_parent: Option<bool>,

    #[arg(
        default_missing_value="true",
        help="Default `TResult` to the field's generated type.",
        long,
        num_args=0..=1,
        require_equals=true,
        value_name="BOOL",
    )]
    pub smart_t_result: Option<bool>,

    #[arg(
        conflicts_with="output",
        help="Print the declarations instead of writing a file.",
        long,
    )]
    pub stdout: bool,

    #[arg(
        default_missing_value="true",
        help="Render nullable fields as `name: T | null`.",
        long,
        num_args=0..=1,
        require_equals=true,
        value_name="BOOL",
    )]
    pub strict_nulls: Option<bool>,

    #[arg(help="Spaces per indentation level.", long)]
    pub tab_spaces: Option<usize>,

    #[arg(help="Prefix for every generated type name.", long)]
    pub type_prefix: Option<String>,
}
impl GenerateCmd {
    /// Options set by flags, layered over the `--config` file (if any).
    pub(crate) fn overrides(&self) -> Result<GenerateOptionsOverrides, String> {
        let from_flags = GenerateOptionsOverrides {
            async_result: self.async_result,
            context_type: self.context_type.to_owned(),
            custom_resolver_fields: non_empty(&self.resolver_fields),
            custom_scalar_types: (!self.custom_scalars.is_empty())
                .then(|| self.custom_scalars.iter().cloned().collect()),
            global: self.global,
            import_statements: non_empty(&self.import_statements),
            namespace: self.namespace.to_owned(),
            no_string_enum: self.no_string_enum,
            require_resolver_types: self.require_resolver_types,
            resolve_all_fields: self.resolve_all_fields,
            resolve_root_fields: self.resolve_root_fields,
            smart_t_parent: self.smart_t_parent,
            smart_t_result: self.smart_t_result,
            strict_nulls: self.strict_nulls,
            tab_spaces: self.tab_spaces,
            type_prefix: self.type_prefix.to_owned(),
        };

        let Some(config_path) = &self.config else {
            return Ok(from_flags);
        };
        log::debug!("Loading generate options from {config_path:#?}.");
        let json = std::fs::read_to_string(config_path).map_err(|err| {
            format!("Failed to read config file `{}`: {err}", config_path.display())
        })?;
        let from_config = GenerateOptionsOverrides::from_json(&json).map_err(|err| {
            format!("Invalid config file `{}`: {err}", config_path.display())
        })?;
        Ok(from_flags.layered_over(from_config))
    }
}

#[inherent::inherent]
impl RunnableCommand for GenerateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let overrides = match self.overrides() {
            Ok(overrides) => overrides,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} {err}",
                output_utils::RED_X,
            )),
        };
        let Some(source) = self.source.into_schema_source() else {
            return CommandResult::stderr(format_args!(
                "{} Either a SCHEMA_PATH or `--sdl` is required.",
                output_utils::RED_X,
            ));
        };

        let Some(output_path) = self.output else {
            return match graphql_schema_typescript::generate_ts_types_as_string(
                source,
                "<stdout>",
                overrides,
            ) {
                Ok(ts) => CommandResult::stdout(format_args!("{ts}")),
                Err(err) => CommandResult::stderr(format_args!(
                    "{} Failed to generate TypeScript declarations: {err}",
                    output_utils::RED_X,
                )),
            };
        };

        match graphql_schema_typescript::generate_typescript_types(
            source,
            &output_path,
            overrides,
        ) {
            Ok(()) => CommandResult::stdout(format_args!(
                "{} Wrote TypeScript declarations to {}.",
                output_utils::GREEN_CHECK,
                output_path.display(),
            )),
            Err(err) => CommandResult::stderr(format_args!(
                "{} Failed to generate TypeScript declarations: {err}",
                output_utils::RED_X,
            )),
        }
    }
}

fn non_empty(values: &[String]) -> Option<Vec<String>> {
    (!values.is_empty()).then(|| values.to_vec())
}

fn parse_custom_scalar(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, ts_type)) if !name.trim().is_empty() && !ts_type.trim().is_empty() =>
            Ok((name.trim().to_string(), ts_type.trim().to_string())),
        _ => Err(format!("expected `NAME=TYPE`, got `{arg}`")),
    }
}
