mod formatter;
mod jsdoc;
mod resolver_generator;
mod ts_type_printer;
mod typescript_generator;

pub use formatter::MAX_TAB_SPACES;
pub use formatter::format_tab_space;
pub use resolver_generator::GenerateResolversResult;
pub use resolver_generator::ResolverGenerator;
pub use typescript_generator::TypeScriptGenerator;

#[cfg(test)]
mod tests;
