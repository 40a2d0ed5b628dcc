use crate::codegen::jsdoc::jsdoc_lines;
use crate::codegen::ts_type_printer::TsTypePrinter;
use crate::codegen::ts_type_printer::upper_first;
use crate::introspection::BUILTIN_SCALAR_NAMES;
use crate::introspection::IntrospectionField;
use crate::introspection::IntrospectionResult;
use crate::introspection::IntrospectionType;
use crate::introspection::TypeKind;
use crate::options::GenerateOptions;
use indexmap::IndexSet;

/// Output of [`ResolverGenerator::generate`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GenerateResolversResult {
    /// Declaration lines for the resolver signatures.
    pub body: Vec<String>,

    /// Import statements the body depends on. These are hoisted to the very
    /// top of the generated file.
    pub import_header: Vec<String>,
}

/// Emits resolver signature declarations for an [`IntrospectionResult`].
///
/// The root `Resolver` map has one member per object type that has at least
/// one resolvable field, one `__resolveType` member per interface and union,
/// and one `GraphQLScalarType` member per custom scalar.
pub struct ResolverGenerator<'a> {
    introspection: &'a IntrospectionResult,
    options: &'a GenerateOptions,
    printer: TsTypePrinter<'a>,
}
impl<'a> ResolverGenerator<'a> {
    pub fn new(
        options: &'a GenerateOptions,
        introspection: &'a IntrospectionResult,
    ) -> Self {
        Self {
            introspection,
            options,
            printer: TsTypePrinter::new(options),
        }
    }

    pub fn generate(&self) -> GenerateResolversResult {
        let mut root_members = vec![];
        let mut declarations = vec![];
        let mut uses_resolve_info = false;
        let mut uses_scalar_type = false;

        for type_def in self.introspection.schema.types.iter() {
            if type_def.is_introspection_type() {
                continue;
            }

            match type_def.kind {
                TypeKind::Object => {
                    let fields = self.resolvable_fields(type_def);
                    if fields.is_empty() {
                        continue;
                    }
                    log::trace!(
                        "Generating {} field resolver(s) for `{}`.",
                        fields.len(),
                        type_def.name,
                    );
                    uses_resolve_info = true;
                    root_members.push(self.root_member(
                        &type_def.name,
                        &self.type_resolver_name(&type_def.name),
                    ));
                    declarations.extend(self.generate_object_type_resolver(type_def, &fields));
                },

                TypeKind::Interface | TypeKind::Union => {
                    uses_resolve_info = true;
                    let optional = self.optional_marker();
                    root_members.extend([
                        format!("{}{optional}: {{", type_def.name),
                        format!("__resolveType: {}", self.type_resolver_name(&type_def.name)),
                        "};".to_string(),
                    ]);
                    declarations.extend(self.generate_abstract_type_resolver(type_def));
                },

                TypeKind::Scalar if !BUILTIN_SCALAR_NAMES.contains(&type_def.name.as_str()) => {
                    uses_scalar_type = true;
                    root_members.push(self.root_member(&type_def.name, "GraphQLScalarType"));
                },

                _ => (),
            }
        }

        let mut body = vec![format!("export interface {}Resolver {{", self.options.type_prefix)];
        body.extend(root_members);
        body.push("}".to_string());
        body.push(String::new());
        body.extend(declarations);

        let mut import_header = vec![];
        let graphql_imports: Vec<&str> = [
            ("GraphQLResolveInfo", uses_resolve_info),
            ("GraphQLScalarType", uses_scalar_type),
        ].into_iter()
            .filter_map(|(name, used)| used.then_some(name))
            .collect();
        if !graphql_imports.is_empty() {
            import_header.push(format!(
                "import {{ {} }} from 'graphql';",
                graphql_imports.join(", "),
            ));
        }
        import_header.extend(self.options.import_statements.iter().cloned());

        GenerateResolversResult {
            body,
            import_header,
        }
    }

    /// Fields of `type_def` that get a resolver signature.
    ///
    /// Per-field declaration names uppercase the first character of the field
    /// name, so `user` and `User` would both declare `...ToUserResolver`. Only
    /// the first of such fields is kept.
    fn resolvable_fields(&self, type_def: &'a IntrospectionType) -> Vec<&'a IntrospectionField> {
        let is_root_type = self.introspection.schema.is_root_type(&type_def.name);
        let mut declared_names = IndexSet::new();
        type_def.fields.iter()
            .flatten()
            .filter(|field| {
                !field.args.is_empty()
                    || self.options.resolve_all_fields
                    || (is_root_type && self.options.resolve_root_fields)
                    || self.options.is_custom_resolver_field(&type_def.name, &field.name)
            })
            .filter(|field| {
                let is_new = declared_names.insert(upper_first(&field.name));
                if !is_new {
                    log::warn!(
                        "Skipping the resolver for `{}.{}`: its declaration name \
                         collides with another field of the same type.",
                        type_def.name,
                        field.name,
                    );
                }
                is_new
            })
            .collect()
    }

    fn generate_object_type_resolver(
        &self,
        type_def: &IntrospectionType,
        fields: &[&IntrospectionField],
    ) -> Vec<String> {
        let type_name = &type_def.name;
        let is_subscription = self.introspection.schema.is_subscription_type(type_name);
        let parent_default = self.parent_default(type_def);

        let mut lines = vec![format!(
            "export interface {}<TParent = {parent_default}> {{",
            self.type_resolver_name(type_name),
        )];
        for field in fields {
            lines.push(format!(
                "{}?: {}<TParent>;",
                field.name,
                self.field_resolver_name(type_name, &field.name),
            ));
        }
        lines.push("}".to_string());
        lines.push(String::new());

        for field in fields {
            lines.extend(self.generate_field_resolver(
                type_name,
                field,
                is_subscription,
                &parent_default,
            ));
        }
        lines
    }

    fn generate_field_resolver(
        &self,
        type_name: &str,
        field: &IntrospectionField,
        is_subscription: bool,
        parent_default: &str,
    ) -> Vec<String> {
        let mut lines = vec![];

        let args_type = if field.args.is_empty() {
            "{}".to_string()
        } else {
            let args_name = format!(
                "{}{type_name}To{}Args",
                self.options.type_prefix,
                upper_first(&field.name),
            );
            lines.push(format!("export interface {args_name} {{"));
            for arg in field.args.iter() {
                lines.extend(jsdoc_lines(
                    arg.description.as_deref(),
                    arg.deprecation_reason.as_deref().filter(|_| arg.is_deprecated),
                ));
                lines.push(self.printer.member_line(&arg.name, &arg.type_ref, true));
            }
            lines.push("}".to_string());
            args_name
        };

        let result_default = if self.options.smart_t_result {
            self.printer.print(&field.type_ref)
        } else {
            "any".to_string()
        };
        let params = format!(
            "parent: TParent, args: {args_type}, context: {}, info: GraphQLResolveInfo",
            self.options.context_type,
        );
        let result = self.options.async_result.wrap("TResult");

        lines.push(format!(
            "export interface {}<TParent = {parent_default}, TResult = {result_default}> {{",
            self.field_resolver_name(type_name, &field.name),
        ));
        if is_subscription {
            lines.push(format!("resolve?: ({params}) => {result};"));
            lines.push(format!("subscribe: ({params}) => AsyncIterator<TResult>;"));
        } else {
            lines.push(format!("({params}): {result};"));
        }
        lines.push("}".to_string());
        lines.push(String::new());
        lines
    }

    fn generate_abstract_type_resolver(&self, type_def: &IntrospectionType) -> Vec<String> {
        let prefix = &self.options.type_prefix;
        let possible_names = format!("{prefix}Possible{}TypeNames", type_def.name);
        vec![
            format!(
                "export interface {}<TParent = {}> {{",
                self.type_resolver_name(&type_def.name),
                self.parent_default(type_def),
            ),
            format!(
                "(parent: TParent, context: {}, info: GraphQLResolveInfo): {};",
                self.options.context_type,
                self.options.async_result.wrap(&possible_names),
            ),
            "}".to_string(),
            String::new(),
        ]
    }

    fn field_resolver_name(&self, type_name: &str, field_name: &str) -> String {
        format!("{}{type_name}To{}Resolver", self.options.type_prefix, upper_first(field_name))
    }

    fn optional_marker(&self) -> &'static str {
        if self.options.require_resolver_types { "" } else { "?" }
    }

    /// Root operation types have no meaningful parent value, so they always
    /// default to `any`.
    fn parent_default(&self, type_def: &IntrospectionType) -> String {
        if self.options.smart_t_parent
            && !self.introspection.schema.is_root_type(&type_def.name) {
            self.printer.declared_name(&type_def.name)
        } else {
            "any".to_string()
        }
    }

    fn root_member(&self, name: &str, resolver_type: &str) -> String {
        format!("{name}{}: {resolver_type};", self.optional_marker())
    }

    fn type_resolver_name(&self, type_name: &str) -> String {
        format!("{}{type_name}TypeResolver", self.options.type_prefix)
    }
}
