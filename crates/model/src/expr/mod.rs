pub mod de;
pub mod literal;
pub mod operator;

pub use literal::Literal;
pub use operator::{ArithmeticOperator, Comparator};

/// Expression tree embedded in stored migration definitions.
///
/// Nodes reference fields on source entities (`Lookup`), constants,
/// bare names, function applications, and binary arithmetic or
/// comparison operations. Trees are finite and acyclic; they are
/// decoded once from a stored document and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Lookup {
        entity: String,
        key: Option<String>,
    },
    Literal(Literal),
    Identifier(String),
    FunctionCall {
        name: String,
        args: Vec<Expression>,
    },
    Arithmetic {
        left: Box<Expression>,
        operator: ArithmeticOperator,
        right: Box<Expression>,
    },
    Condition {
        left: Box<Expression>,
        op: Comparator,
        right: Box<Expression>,
    },
    /// A node whose stored shape matched no known discriminant.
    /// Kept as an explicit variant so newer document schemas degrade
    /// to a placeholder instead of failing the whole decode.
    Unknown,
}
