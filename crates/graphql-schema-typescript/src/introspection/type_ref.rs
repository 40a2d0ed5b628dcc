use serde::Deserialize;
use serde::Serialize;

/// The `__TypeKind` enum from the introspection schema.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    Enum,
    InputObject,
    Interface,
    List,
    NonNull,
    Object,
    Scalar,
    Union,
}
impl TypeKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Enum => "ENUM",
            Self::InputObject => "INPUT_OBJECT",
            Self::Interface => "INTERFACE",
            Self::List => "LIST",
            Self::NonNull => "NON_NULL",
            Self::Object => "OBJECT",
            Self::Scalar => "SCALAR",
            Self::Union => "UNION",
        }
    }

    /// Input types are allowed as argument and input-field types.
    pub fn is_input_type(&self) -> bool {
        matches!(self, Self::Enum | Self::InputObject | Self::Scalar)
    }

    /// Output types are allowed as object and interface field types.
    pub fn is_output_type(&self) -> bool {
        matches!(
            self,
            Self::Enum | Self::Interface | Self::Object | Self::Scalar | Self::Union,
        )
    }
}
impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A (possibly wrapped) reference to a named type.
///
/// `[String!]` is represented as `LIST -> NON_NULL -> SCALAR(String)`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRef {
    pub kind: TypeKind,
    pub name: Option<String>,
    pub of_type: Option<Box<TypeRef>>,
}
impl TypeRef {
    pub fn list(inner: TypeRef) -> Self {
        Self {
            kind: TypeKind::List,
            name: None,
            of_type: Some(Box::new(inner)),
        }
    }

    pub fn named(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: Some(name.into()),
            of_type: None,
        }
    }

    pub fn non_null(inner: TypeRef) -> Self {
        Self {
            kind: TypeKind::NonNull,
            name: None,
            of_type: Some(Box::new(inner)),
        }
    }

    pub fn is_non_null(&self) -> bool {
        self.kind == TypeKind::NonNull
    }

    /// Follows `of_type` through any list/non-null wrappers and returns the
    /// innermost named type reference.
    pub fn innermost(&self) -> &TypeRef {
        match &self.of_type {
            Some(inner) => inner.innermost(),
            None => self,
        }
    }

    pub fn named_type_name(&self) -> Option<&str> {
        self.innermost().name.as_deref()
    }
}
