mod introspection_error;
mod introspection_result;
mod introspector;
mod schema_source;
mod type_ref;
mod value_printer;

pub use introspection_error::IntrospectionError;
pub use introspection_error::RootOperation;
pub use introspection_error::SchemaValidationError;
pub use introspection_result::IntrospectionDirective;
pub use introspection_result::IntrospectionEnumValue;
pub use introspection_result::IntrospectionField;
pub use introspection_result::IntrospectionInputValue;
pub use introspection_result::IntrospectionResult;
pub use introspection_result::IntrospectionSchema;
pub use introspection_result::IntrospectionType;
pub use introspection_result::RootTypeName;
pub use introspector::BUILTIN_SCALAR_NAMES;
pub use introspector::DEFAULT_DEPRECATION_REASON;
pub use introspector::introspect;
pub use schema_source::SchemaSource;
pub use type_ref::TypeKind;
pub use type_ref::TypeRef;

#[cfg(test)]
mod tests;
