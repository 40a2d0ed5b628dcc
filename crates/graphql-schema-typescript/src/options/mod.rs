mod async_result;
mod generate_options;
mod generate_options_overrides;

pub use async_result::AsyncResult;
pub use generate_options::GenerateOptions;
pub use generate_options_overrides::GenerateOptionsOverrides;

#[cfg(test)]
mod tests;
