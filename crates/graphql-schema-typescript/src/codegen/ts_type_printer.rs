use crate::introspection::TypeKind;
use crate::introspection::TypeRef;
use crate::options::GenerateOptions;

/// Maps GraphQL type references onto TypeScript type expressions.
pub(crate) struct TsTypePrinter<'a> {
    options: &'a GenerateOptions,
}
impl<'a> TsTypePrinter<'a> {
    pub fn new(options: &'a GenerateOptions) -> Self {
        Self { options }
    }

    /// The generated declaration name for a named GraphQL type.
    pub fn declared_name(&self, graphql_name: &str) -> String {
        format!("{}{graphql_name}", self.options.type_prefix)
    }

    /// A field-like member line: `name: T;` for non-null types and either
    /// `name?: T;` or `name: T | null;` (per `strict_nulls`) otherwise.
    ///
    /// Input positions can always be omitted by the caller, so nullable input
    /// members stay optional even with `strict_nulls`.
    pub fn member_line(&self, name: &str, type_ref: &TypeRef, is_input: bool) -> String {
        if type_ref.is_non_null() {
            return format!("{name}: {};", self.print_non_null(type_ref));
        }

        let ts_type = self.print_non_null(type_ref);
        match (self.options.strict_nulls, is_input) {
            (false, _) => format!("{name}?: {ts_type};"),
            (true, false) => format!("{name}: {ts_type} | null;"),
            (true, true) => format!("{name}?: {ts_type} | null;"),
        }
    }

    /// The full TypeScript type of a value, including `| null` when the
    /// GraphQL type is nullable.
    pub fn print(&self, type_ref: &TypeRef) -> String {
        if type_ref.is_non_null() {
            self.print_non_null(type_ref)
        } else {
            format!("{} | null", self.print_non_null(type_ref))
        }
    }

    /// The TypeScript type of a value, ignoring the nullability of the
    /// outermost type.
    fn print_non_null(&self, type_ref: &TypeRef) -> String {
        match (type_ref.kind, type_ref.of_type.as_deref()) {
            (TypeKind::NonNull, Some(inner)) => self.print_non_null(inner),
            (TypeKind::List, Some(inner)) => format!("Array<{}>", self.print(inner)),
            _ => match type_ref.name.as_deref() {
                Some(name) => self.named_type(name),
                None => "any".to_string(),
            },
        }
    }

    fn named_type(&self, graphql_name: &str) -> String {
        match graphql_name {
            "Boolean" => "boolean".to_string(),
            "Float" | "Int" => "number".to_string(),
            "ID" | "String" => "string".to_string(),
            _ => self.declared_name(graphql_name),
        }
    }
}

/// Uppercases the first character, as used when naming per-field
/// declarations (`user` -> `User`).
pub(crate) fn upper_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `'A' | 'B'`, or `never` for an empty list.
pub(crate) fn string_literal_union<'n>(names: impl IntoIterator<Item = &'n str>) -> String {
    let literals: Vec<String> = names.into_iter()
        .map(|name| format!("'{name}'"))
        .collect();
    if literals.is_empty() {
        "never".to_string()
    } else {
        literals.join(" | ")
    }
}
