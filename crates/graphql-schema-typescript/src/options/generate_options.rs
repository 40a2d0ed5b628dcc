use crate::options::AsyncResult;
use indexmap::IndexMap;

/// Every option recognized while generating TypeScript declarations.
///
/// [`GenerateOptions::default()`] returns a fresh copy of the defaults on
/// every call. Callers typically override a few fields through
/// [`GenerateOptionsOverrides`](crate::GenerateOptionsOverrides).
#[derive(Clone, Debug, PartialEq)]
pub struct GenerateOptions {
    /// Resolver return types: `TResult`, `TResult | Promise<TResult>`, or
    /// `Promise<TResult>`.
    pub async_result: AsyncResult,

    /// Type of the `context` parameter on every resolver signature.
    pub context_type: String,

    /// `Type.field` coordinates that get a resolver signature regardless of
    /// whether they take arguments.
    pub custom_resolver_fields: Vec<String>,

    /// Custom scalar name to the TypeScript type it maps to. Unmapped custom
    /// scalars map to `any`.
    pub custom_scalar_types: IndexMap<String, String>,

    /// Wrap everything in `declare global { }`. Also renders enums as
    /// string-literal unions.
    pub global: bool,

    /// Extra import statements hoisted above the generated-file banner.
    pub import_statements: Vec<String>,

    /// Wrap everything in a `namespace` block with this name.
    pub namespace: Option<String>,

    /// Render enums as string-literal unions instead of `enum` declarations.
    pub no_string_enum: bool,

    /// Require every member of the root `Resolver` map.
    pub require_resolver_types: bool,

    /// Give every object-type field a resolver signature.
    pub resolve_all_fields: bool,

    /// Give every field of the root operation types a resolver signature.
    /// Off unless the caller asks for it.
    pub resolve_root_fields: bool,

    /// Default a resolver's `TParent` to the generated type of its parent.
    pub smart_t_parent: bool,

    /// Default a resolver's `TResult` to the generated type of its field.
    pub smart_t_result: bool,

    /// Render nullable fields as `name: T | null` instead of `name?: T`.
    pub strict_nulls: bool,

    /// Spaces per indentation level in the output.
    pub tab_spaces: usize,

    /// Prefix prepended to every generated type name.
    pub type_prefix: String,
}
impl GenerateOptions {
    /// Returns `true` if the `type_name.field_name` coordinate was listed in
    /// [`GenerateOptions::custom_resolver_fields`].
    pub fn is_custom_resolver_field(&self, type_name: &str, field_name: &str) -> bool {
        self.custom_resolver_fields.iter().any(|coordinate| {
            coordinate.split_once('.')
                .is_some_and(|(t, f)| t == type_name && f == field_name)
        })
    }
}
impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            async_result: AsyncResult::Never,
            context_type: "any".to_string(),
            custom_resolver_fields: vec![],
            custom_scalar_types: IndexMap::new(),
            global: false,
            import_statements: vec![],
            namespace: None,
            no_string_enum: false,
            require_resolver_types: false,
            resolve_all_fields: false,
            resolve_root_fields: false,
            smart_t_parent: false,
            smart_t_result: false,
            strict_nulls: false,
            tab_spaces: 2,
            type_prefix: "GQL".to_string(),
        }
    }
}
