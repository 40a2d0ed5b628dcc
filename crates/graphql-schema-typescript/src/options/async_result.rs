use serde::Deserialize;
use serde::Serialize;

/// How resolver return types account for asynchronous resolvers.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AsyncResult {
    /// Resolvers may return either `TResult` or `Promise<TResult>`.
    Allowed,

    /// Resolvers always return `Promise<TResult>`.
    Always,

    /// Resolvers return `TResult`.
    #[default]
    Never,
}
impl AsyncResult {
    pub(crate) fn wrap(&self, result_type: &str) -> String {
        match self {
            Self::Allowed => format!("{result_type} | Promise<{result_type}>"),
            Self::Always => format!("Promise<{result_type}>"),
            Self::Never => result_type.to_string(),
        }
    }
}
impl std::str::FromStr for AsyncResult {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "allowed" => Ok(Self::Allowed),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            other => Err(format!(
                "Unrecognized async result mode `{other}` (expected `never`, \
                `allowed`, or `always`)"
            )),
        }
    }
}
