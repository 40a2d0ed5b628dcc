use crate::introspection::TypeKind;
use crate::loc;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RootOperation {
    Mutation,
    Query,
    Subscription,
}
impl RootOperation {
    pub(crate) fn default_type_name(&self) -> &'static str {
        match self {
            Self::Mutation => "Mutation",
            Self::Query => "Query",
            Self::Subscription => "Subscription",
        }
    }
}
impl std::fmt::Display for RootOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        })
    }
}

/// A schema could not be introspected.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum IntrospectionError {
    #[error(
        "The `@{directive_name}` directive is defined more than once ({location1} \
        and {location2})"
    )]
    DuplicateDirectiveDefinition {
        directive_name: String,
        location1: loc::SchemaDefLocation,
        location2: loc::SchemaDefLocation,
    },

    #[error(
        "The {operation} root operation type is declared more than once \
        ({location1} and {location2})"
    )]
    DuplicateOperationDefinition {
        operation: RootOperation,
        location1: loc::SchemaDefLocation,
        location2: loc::SchemaDefLocation,
    },

    #[error(
        "Multiple GraphQL types named `{type_name}` were defined ({def1} and \
        {def2})"
    )]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SchemaDefLocation,
        def2: loc::SchemaDefLocation,
    },

    #[error("Attempted to extend `{type_name}`, which is not defined ({extension_loc})")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_loc: loc::SchemaDefLocation,
    },

    #[error("Type names must not start with `__`: `{type_name}` ({def_location})")]
    InvalidDunderPrefixedTypeName {
        def_location: loc::SchemaDefLocation,
        type_name: String,
    },

    #[error(
        "Attempted to extend the {type_kind} type `{type_name}` with a \
        different kind of extension ({extension_loc})"
    )]
    InvalidExtensionType {
        extension_loc: loc::SchemaDefLocation,
        type_kind: TypeKind,
        type_name: String,
    },

    #[error("Failed to parse introspection JSON{}: {err}", source_path.as_ref()
        .map(|p| format!(" from `{}`", p.display()))
        .unwrap_or_default())]
    InvalidIntrospectionJson {
        source_path: Option<PathBuf>,
        err: String,
    },

    #[error(
        "The {operation} root operation type `{type_name}` must be a defined \
        object type"
    )]
    InvalidRootOperationType {
        operation: RootOperation,
        type_name: String,
    },

    #[error(
        "Encountered the following errors while introspecting the \
        schema:\n\n{}",
        errors.iter()
            .map(|s| format!("  * {s}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    InvalidSchema {
        errors: Vec<SchemaValidationError>,
    },

    #[error("Attempted to introspect a schema that has no Query root operation type")]
    NoQueryOperationTypeDefined,

    #[error(
        "The {operation1} and {operation2} root operations both use the \
        `{type_name}` type, but every root operation must use a different type"
    )]
    NonUniqueOperationTypes {
        operation1: RootOperation,
        operation2: RootOperation,
        type_name: String,
    },

    #[error("Attempted to redefine the builtin `@{directive_name}` directive ({location})")]
    RedefinitionOfBuiltinDirective {
        directive_name: String,
        location: loc::SchemaDefLocation,
    },
}

/// A structural problem found while checking the fully merged set of types.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaValidationError {
    #[error("`{coordinate}` declares the `{arg_name}` argument more than once")]
    DuplicateArgument {
        arg_name: String,
        coordinate: String,
    },

    #[error("`{enum_name}` defines the `{value_name}` value more than once")]
    DuplicateEnumValue {
        enum_name: String,
        value_name: String,
    },

    #[error("`{type_name}` defines the `{field_name}` field more than once")]
    DuplicateField {
        field_name: String,
        type_name: String,
    },

    #[error("`{type_name}` declares that it implements `{interface_name}` more than once")]
    DuplicateImplementsDeclaration {
        interface_name: String,
        type_name: String,
    },

    #[error("The `{union_name}` union lists `{member_name}` as a member more than once")]
    DuplicateUnionMember {
        member_name: String,
        union_name: String,
    },

    #[error("The `{type_name}` {type_kind} type must define one or more fields")]
    EmptyFieldSet {
        type_kind: TypeKind,
        type_name: String,
    },

    #[error("The `{type_name}` enum must define one or more values")]
    EnumWithNoValues {
        type_name: String,
    },

    #[error(
        "`{type_name}` implements `{non_interface_name}`, which is not an \
        interface type"
    )]
    ImplementsNonInterfaceType {
        non_interface_name: String,
        type_name: String,
    },

    #[error(
        "Input position `{coordinate}` uses the `{invalid_type_name}` type, \
        which is not an input type"
    )]
    InputPositionWithOutputType {
        coordinate: String,
        invalid_type_name: String,
    },

    #[error(
        "`{type_name}` implements `{interface_name}` but does not provide its \
        `{field_name}` field"
    )]
    MissingInterfaceField {
        field_name: String,
        interface_name: String,
        type_name: String,
    },

    #[error(
        "Output field `{coordinate}` uses the `{invalid_type_name}` type, which \
        is an input object type"
    )]
    OutputFieldWithInputType {
        coordinate: String,
        invalid_type_name: String,
    },

    #[error(
        "The `{union_name}` union lists `{member_name}`, which is not an \
        object type"
    )]
    UnionMemberNotObjectType {
        member_name: String,
        union_name: String,
    },

    #[error("The `{type_name}` union must list one or more member types")]
    UnionWithNoMembers {
        type_name: String,
    },

    #[error("`{coordinate}` is annotated with the unknown directive `@{directive_name}`")]
    UnknownDirective {
        coordinate: String,
        directive_name: String,
    },

    #[error("`{coordinate}` references the undefined type `{type_name}`")]
    UnknownType {
        coordinate: String,
        type_name: String,
    },
}
