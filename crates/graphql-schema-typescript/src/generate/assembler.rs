use crate::codegen::ResolverGenerator;
use crate::codegen::TypeScriptGenerator;
use crate::codegen::format_tab_space;
use crate::file_reader;
use crate::generate::GenerateError;
use crate::introspection::SchemaSource;
use crate::options::GenerateOptions;
use crate::options::GenerateOptionsOverrides;
use std::path::Path;

type Result<T> = std::result::Result<T, GenerateError>;

const TYPE_DEFS_BANNER: [&str; 5] = [
    "/*******************************",
    " *                             *",
    " *          TYPE DEFS          *",
    " *                             *",
    " *******************************/",
];

const TYPE_RESOLVERS_BANNER: [&str; 5] = [
    "/*********************************",
    " *                               *",
    " *         TYPE RESOLVERS        *",
    " *                               *",
    " *********************************/",
];

fn generated_file_banner() -> [String; 5] {
    [
        "/**".to_string(),
        format!(" * This file is auto-generated by {}", env!("CARGO_PKG_NAME")),
        " * Please note that any changes in this file may be overwritten".to_string(),
        " */".to_string(),
        String::new(),
    ]
}

/// Generates the complete TypeScript declaration file for `source` and
/// returns it as a string.
///
/// `overrides` are merged over a fresh [`GenerateOptions::default()`].
/// `output_path` names the file the result is destined for; it is only used
/// for logging here.
pub fn generate_ts_types_as_string(
    source: SchemaSource,
    output_path: impl AsRef<Path>,
    overrides: GenerateOptionsOverrides,
) -> Result<String> {
    let options = overrides.merge_over(GenerateOptions::default());
    log::debug!(
        "Generating TypeScript declarations for {:#?}.",
        output_path.as_ref(),
    );

    let introspection = source.into_introspection_result()?;
    log::debug!(
        "Resolved a schema with {} types.",
        introspection.schema.types.len(),
    );

    let type_defs = TypeScriptGenerator::new(&options, &introspection).generate();
    let resolvers = ResolverGenerator::new(&options, &introspection).generate();
    log::debug!(
        "Generated {} type definition lines and {} resolver lines.",
        type_defs.len(),
        resolvers.body.len(),
    );

    let mut header = resolvers.import_header;
    header.extend(generated_file_banner());

    let mut body: Vec<String> = TYPE_DEFS_BANNER.iter().map(|s| s.to_string()).collect();
    body.extend(type_defs);
    body.extend(TYPE_RESOLVERS_BANNER.iter().map(|s| s.to_string()));
    body.extend(resolvers.body);

    if let Some(namespace) = &options.namespace {
        // Inside `declare global`, the namespace is already ambient.
        let declare = if options.global { "" } else { "declare " };
        body = wrap_block(format!("{declare}namespace {namespace} {{"), body);
    }

    if options.global {
        let mut wrapped = vec!["export { };".to_string(), String::new()];
        wrapped.extend(wrap_block("declare global {".to_string(), body));
        body = wrapped;
    }

    header.extend(body);
    Ok(format_tab_space(&header, options.tab_spaces).join("\n"))
}

/// Like [`generate_ts_types_as_string`], but writes the result to
/// `output_path` (UTF-8, replacing any existing file).
///
/// The parent directory must already exist. Nothing is written if any step
/// before the write fails.
pub fn generate_typescript_types(
    source: SchemaSource,
    output_path: impl AsRef<Path>,
    overrides: GenerateOptionsOverrides,
) -> Result<()> {
    let output_path = output_path.as_ref();
    let content = generate_ts_types_as_string(source, output_path, overrides)?;
    file_reader::write_content(output_path, &content)?;
    log::debug!("Wrote {} bytes to {output_path:#?}.", content.len());
    Ok(())
}

fn wrap_block(opening_line: String, body: Vec<String>) -> Vec<String> {
    let mut wrapped = Vec::with_capacity(body.len() + 2);
    wrapped.push(opening_line);
    wrapped.extend(body);
    wrapped.push("}".to_string());
    wrapped
}
