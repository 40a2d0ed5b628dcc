mod assembler;
mod generate_error;

pub use assembler::generate_ts_types_as_string;
pub use assembler::generate_typescript_types;
pub use generate_error::GenerateError;
