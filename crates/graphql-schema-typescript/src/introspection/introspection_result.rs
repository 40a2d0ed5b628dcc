use crate::introspection::IntrospectionError;
use crate::introspection::TypeKind;
use crate::introspection::TypeRef;
use serde::Deserialize;
use serde::Serialize;
use std::path::PathBuf;

/// The response to the standard GraphQL introspection query.
///
/// Serializes to (and deserializes from) the same JSON shape a GraphQL server
/// returns for `{ __schema { ... } }`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct IntrospectionResult {
    #[serde(rename = "__schema")]
    pub schema: IntrospectionSchema,
}
impl IntrospectionResult {
    /// Parses an introspection result from JSON.
    ///
    /// Accepts both the bare `{"__schema": ...}` object and the full
    /// `{"data": {"__schema": ...}}` response envelope.
    pub fn from_json(
        source_path: Option<PathBuf>,
        json: &str,
    ) -> Result<Self, IntrospectionError> {
        let to_err = |err: serde_json::Error| {
            IntrospectionError::InvalidIntrospectionJson {
                source_path: source_path.to_owned(),
                err: err.to_string(),
            }
        };

        let mut value: serde_json::Value =
            serde_json::from_str(json).map_err(to_err)?;
        if value.get("__schema").is_none()
            && let Some(data) = value.get_mut("data") {
            value = data.take();
        }

        serde_json::from_value(value).map_err(to_err)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub directives: Vec<IntrospectionDirective>,
    #[serde(default)]
    pub mutation_type: Option<RootTypeName>,
    pub query_type: RootTypeName,
    #[serde(default)]
    pub subscription_type: Option<RootTypeName>,
    pub types: Vec<IntrospectionType>,
}
impl IntrospectionSchema {
    /// Returns `true` if `type_name` names the Query, Mutation, or
    /// Subscription root operation type.
    pub fn is_root_type(&self, type_name: &str) -> bool {
        self.query_type.name == type_name
            || self.mutation_type.as_ref().is_some_and(|t| t.name == type_name)
            || self.subscription_type.as_ref().is_some_and(|t| t.name == type_name)
    }

    pub fn is_subscription_type(&self, type_name: &str) -> bool {
        self.subscription_type.as_ref().is_some_and(|t| t.name == type_name)
    }

    pub fn type_by_name(&self, type_name: &str) -> Option<&IntrospectionType> {
        self.types.iter().find(|t| t.name == type_name)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RootTypeName {
    pub name: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionType {
    pub description: Option<String>,
    pub enum_values: Option<Vec<IntrospectionEnumValue>>,
    pub fields: Option<Vec<IntrospectionField>>,
    pub input_fields: Option<Vec<IntrospectionInputValue>>,
    pub interfaces: Option<Vec<TypeRef>>,
    pub kind: TypeKind,
    pub name: String,
    pub possible_types: Option<Vec<TypeRef>>,
    #[serde(
        default,
        rename = "specifiedByURL",
        skip_serializing_if = "Option::is_none",
    )]
    pub specified_by_url: Option<String>,
}
impl IntrospectionType {
    /// Names of the object types that may appear where this type is expected.
    ///
    /// Empty for anything other than interfaces and unions.
    pub fn possible_type_names(&self) -> Vec<&str> {
        self.possible_types.iter()
            .flatten()
            .filter_map(|t| t.name.as_deref())
            .collect()
    }

    /// Returns `true` for the introspection meta-types (`__Schema`,
    /// `__Type`, ...).
    pub fn is_introspection_type(&self) -> bool {
        self.name.starts_with("__")
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionField {
    #[serde(default)]
    pub args: Vec<IntrospectionInputValue>,
    pub deprecation_reason: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub is_deprecated: bool,
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionInputValue {
    pub default_value: Option<String>,
    #[serde(default)]
    pub deprecation_reason: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub is_deprecated: bool,
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionEnumValue {
    pub deprecation_reason: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub is_deprecated: bool,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionDirective {
    #[serde(default)]
    pub args: Vec<IntrospectionInputValue>,
    pub description: Option<String>,
    #[serde(default)]
    pub is_repeatable: bool,
    pub locations: Vec<String>,
    pub name: String,
}
