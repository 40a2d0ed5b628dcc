use crate::codegen::MAX_TAB_SPACES;
use crate::options::AsyncResult;
use crate::options::GenerateOptions;
use indexmap::IndexMap;
use serde::Deserialize;

/// Caller-supplied values for a subset of [`GenerateOptions`].
///
/// Every `Some` field replaces the corresponding default when merged with
/// [`GenerateOptionsOverrides::merge_over`]. Deserializes from a camelCase
/// JSON object, so a config file like
///
/// ```json
/// { "namespace": "Api", "tabSpaces": 4, "customScalarTypes": { "Date": "string" } }
/// ```
///
/// maps directly onto this struct.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct GenerateOptionsOverrides {
    pub async_result: Option<AsyncResult>,
    pub context_type: Option<String>,
    pub custom_resolver_fields: Option<Vec<String>>,
    pub custom_scalar_types: Option<IndexMap<String, String>>,
    pub global: Option<bool>,
    pub import_statements: Option<Vec<String>>,
    pub namespace: Option<String>,
    pub no_string_enum: Option<bool>,
    pub require_resolver_types: Option<bool>,
    pub resolve_all_fields: Option<bool>,
    pub resolve_root_fields: Option<bool>,
    pub smart_t_parent: Option<bool>,
    pub smart_t_result: Option<bool>,
    pub strict_nulls: Option<bool>,
    pub tab_spaces: Option<usize>,
    pub type_prefix: Option<String>,
}
impl GenerateOptionsOverrides {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Layers `self` on top of `lower`: fields set in `self` win, fields left
    /// unset fall through to `lower`.
    pub fn layered_over(self, lower: Self) -> Self {
        Self {
            async_result: self.async_result.or(lower.async_result),
            context_type: self.context_type.or(lower.context_type),
            custom_resolver_fields: self.custom_resolver_fields.or(lower.custom_resolver_fields),
            custom_scalar_types: self.custom_scalar_types.or(lower.custom_scalar_types),
            global: self.global.or(lower.global),
            import_statements: self.import_statements.or(lower.import_statements),
            namespace: self.namespace.or(lower.namespace),
            no_string_enum: self.no_string_enum.or(lower.no_string_enum),
            require_resolver_types: self.require_resolver_types.or(lower.require_resolver_types),
            resolve_all_fields: self.resolve_all_fields.or(lower.resolve_all_fields),
            resolve_root_fields: self.resolve_root_fields.or(lower.resolve_root_fields),
            smart_t_parent: self.smart_t_parent.or(lower.smart_t_parent),
            smart_t_result: self.smart_t_result.or(lower.smart_t_result),
            strict_nulls: self.strict_nulls.or(lower.strict_nulls),
            tab_spaces: self.tab_spaces.or(lower.tab_spaces),
            type_prefix: self.type_prefix.or(lower.type_prefix),
        }
    }

    /// Merges these overrides over `base`. Caller values win on conflict.
    ///
    /// A `tab_spaces` above [`MAX_TAB_SPACES`] is clamped to it.
    pub fn merge_over(self, base: GenerateOptions) -> GenerateOptions {
        let tab_spaces = self.tab_spaces.unwrap_or(base.tab_spaces);
        if tab_spaces > MAX_TAB_SPACES {
            log::warn!(
                "`tabSpaces` of {tab_spaces} exceeds the maximum of {MAX_TAB_SPACES}; \
                 using {MAX_TAB_SPACES}.",
            );
        }

        GenerateOptions {
            async_result: self.async_result.unwrap_or(base.async_result),
            context_type: self.context_type.unwrap_or(base.context_type),
            custom_resolver_fields: self.custom_resolver_fields
                .unwrap_or(base.custom_resolver_fields),
            custom_scalar_types: self.custom_scalar_types
                .unwrap_or(base.custom_scalar_types),
            global: self.global.unwrap_or(base.global),
            import_statements: self.import_statements.unwrap_or(base.import_statements),
            namespace: self.namespace.or(base.namespace),
            no_string_enum: self.no_string_enum.unwrap_or(base.no_string_enum),
            require_resolver_types: self.require_resolver_types
                .unwrap_or(base.require_resolver_types),
            resolve_all_fields: self.resolve_all_fields.unwrap_or(base.resolve_all_fields),
            resolve_root_fields: self.resolve_root_fields
                .unwrap_or(base.resolve_root_fields),
            smart_t_parent: self.smart_t_parent.unwrap_or(base.smart_t_parent),
            smart_t_result: self.smart_t_result.unwrap_or(base.smart_t_result),
            strict_nulls: self.strict_nulls.unwrap_or(base.strict_nulls),
            tab_spaces: tab_spaces.min(MAX_TAB_SPACES),
            type_prefix: self.type_prefix.unwrap_or(base.type_prefix),
        }
    }
}
impl std::convert::From<GenerateOptions> for GenerateOptionsOverrides {
    fn from(value: GenerateOptions) -> Self {
        Self {
            async_result: Some(value.async_result),
            context_type: Some(value.context_type),
            custom_resolver_fields: Some(value.custom_resolver_fields),
            custom_scalar_types: Some(value.custom_scalar_types),
            global: Some(value.global),
            import_statements: Some(value.import_statements),
            namespace: value.namespace,
            no_string_enum: Some(value.no_string_enum),
            require_resolver_types: Some(value.require_resolver_types),
            resolve_all_fields: Some(value.resolve_all_fields),
            resolve_root_fields: Some(value.resolve_root_fields),
            smart_t_parent: Some(value.smart_t_parent),
            smart_t_result: Some(value.smart_t_result),
            strict_nulls: Some(value.strict_nulls),
            tab_spaces: Some(value.tab_spaces),
            type_prefix: Some(value.type_prefix),
        }
    }
}
