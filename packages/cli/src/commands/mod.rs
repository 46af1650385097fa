pub mod extract;
pub mod generate;
pub mod init;
pub mod validate;

pub use extract::{extract, ExtractArgs};
pub use generate::{generate, GenerateArgs};
pub use init::{init, InitArgs};
pub use validate::{validate, ValidateArgs};
