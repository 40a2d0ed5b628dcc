use crate::codegen::jsdoc::jsdoc_lines;
use crate::codegen::ts_type_printer::TsTypePrinter;
use crate::codegen::ts_type_printer::string_literal_union;
use crate::introspection::BUILTIN_SCALAR_NAMES;
use crate::introspection::IntrospectionResult;
use crate::introspection::IntrospectionType;
use crate::introspection::TypeKind;
use crate::options::GenerateOptions;

/// Emits a TypeScript declaration for every named, non-builtin type in an
/// [`IntrospectionResult`].
///
/// Lines are unindented; run them through
/// [`format_tab_space`](crate::codegen::format_tab_space) for display.
pub struct TypeScriptGenerator<'a> {
    introspection: &'a IntrospectionResult,
    options: &'a GenerateOptions,
    printer: TsTypePrinter<'a>,
}
impl<'a> TypeScriptGenerator<'a> {
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

    pub fn generate(&self) -> Vec<String> {
        let mut lines = vec![];
        for type_def in self.emitted_types() {
            log::trace!("Generating TypeScript declaration for `{}`.", type_def.name);
            lines.extend(jsdoc_lines(type_def.description.as_deref(), None));
            match type_def.kind {
                TypeKind::Enum =>
                    lines.extend(self.generate_enum(type_def)),
                TypeKind::InputObject
                    | TypeKind::Interface
                    | TypeKind::Object =>
                    lines.extend(self.generate_interface(type_def)),
                TypeKind::Scalar =>
                    lines.push(self.generate_scalar(type_def)),
                TypeKind::Union =>
                    lines.push(self.generate_union(type_def)),

                // Wrapper kinds never name a type of their own.
                TypeKind::List | TypeKind::NonNull => continue,
            }

            if matches!(type_def.kind, TypeKind::Interface | TypeKind::Union) {
                lines.extend(self.generate_possible_type_helpers(type_def));
            }
            lines.push(String::new());
        }
        lines
    }

    fn emitted_types(&self) -> impl Iterator<Item = &'a IntrospectionType> {
        self.introspection.schema.types.iter().filter(|type_def| {
            !type_def.is_introspection_type()
                && !(type_def.kind == TypeKind::Scalar
                    && BUILTIN_SCALAR_NAMES.contains(&type_def.name.as_str()))
        })
    }

    fn generate_enum(&self, type_def: &IntrospectionType) -> Vec<String> {
        let declared_name = self.printer.declared_name(&type_def.name);
        let values = type_def.enum_values.as_deref().unwrap_or_default();

        if self.options.global || self.options.no_string_enum {
            let union = string_literal_union(values.iter().map(|v| v.name.as_str()));
            return vec![format!("export type {declared_name} = {union};")];
        }

        let mut lines = vec![format!("export enum {declared_name} {{")];
        for value in values {
            lines.extend(jsdoc_lines(
                value.description.as_deref(),
                value.deprecation_reason.as_deref().filter(|_| value.is_deprecated),
            ));
            lines.push(format!("{0} = '{0}',", value.name));
        }
        lines.push("}".to_string());
        lines
    }

    fn generate_interface(&self, type_def: &IntrospectionType) -> Vec<String> {
        let declared_name = self.printer.declared_name(&type_def.name);
        let extends: Vec<String> = type_def.interfaces.iter()
            .flatten()
            .filter_map(|iface| iface.name.as_deref())
            .map(|name| self.printer.declared_name(name))
            .collect();

        let mut lines = vec![if extends.is_empty() {
            format!("export interface {declared_name} {{")
        } else {
            format!("export interface {declared_name} extends {} {{", extends.join(", "))
        }];

        if type_def.kind == TypeKind::InputObject {
            for input_field in type_def.input_fields.iter().flatten() {
                lines.extend(jsdoc_lines(
                    input_field.description.as_deref(),
                    input_field.deprecation_reason.as_deref()
                        .filter(|_| input_field.is_deprecated),
                ));
                lines.push(self.printer.member_line(
                    &input_field.name,
                    &input_field.type_ref,
                    true,
                ));
            }
        } else {
            for field in type_def.fields.iter().flatten() {
                lines.extend(jsdoc_lines(
                    field.description.as_deref(),
                    field.deprecation_reason.as_deref().filter(|_| field.is_deprecated),
                ));
                lines.push(self.printer.member_line(&field.name, &field.type_ref, false));
            }
        }

        lines.push("}".to_string());
        lines
    }

    fn generate_scalar(&self, type_def: &IntrospectionType) -> String {
        let mapped = self.options.custom_scalar_types
            .get(&type_def.name)
            .map(String::as_str)
            .unwrap_or("any");
        format!("export type {} = {mapped};", self.printer.declared_name(&type_def.name))
    }

    fn generate_union(&self, type_def: &IntrospectionType) -> String {
        let members: Vec<String> = type_def.possible_type_names()
            .into_iter()
            .map(|name| self.printer.declared_name(name))
            .collect();
        let members = if members.is_empty() {
            "never".to_string()
        } else {
            members.join(" | ")
        };
        format!("export type {} = {members};", self.printer.declared_name(&type_def.name))
    }

    /// `GQLPossible<Name>TypeNames` and `GQL<Name>NameMap`, which resolvers
    /// use to narrow an abstract type to one of its concrete object types.
    fn generate_possible_type_helpers(&self, type_def: &IntrospectionType) -> Vec<String> {
        let possible_names = type_def.possible_type_names();
        let prefix = &self.options.type_prefix;
        let abstract_name = &type_def.name;
        let kind = if type_def.kind == TypeKind::Union { "union" } else { "interface" };

        let mut lines = vec![
            String::new(),
            format!("/** Use this to resolve {kind} type {abstract_name} */"),
            format!(
                "export type {prefix}Possible{abstract_name}TypeNames = {};",
                string_literal_union(possible_names.iter().copied()),
            ),
            String::new(),
            format!("export interface {prefix}{abstract_name}NameMap {{"),
            format!("{abstract_name}: {};", self.printer.declared_name(abstract_name)),
        ];
        for name in possible_names {
            lines.push(format!("{name}: {};", self.printer.declared_name(name)));
        }
        lines.push("}".to_string());
        lines
    }
}
