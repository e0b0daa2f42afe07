pub mod definition;
pub mod error;
pub mod expr;

pub use definition::{
    ConnectionRef, FieldMapping, Join, MigrationDefinition, MigrationItem, MigrationSettings,
};
pub use error::DefinitionError;
pub use expr::{ArithmeticOperator, Comparator, Expression, Literal};
