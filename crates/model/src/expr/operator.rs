use std::fmt;

/// Arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl ArithmeticOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            ArithmeticOperator::Add => "+",
            ArithmeticOperator::Subtract => "-",
            ArithmeticOperator::Multiply => "*",
            ArithmeticOperator::Divide => "/",
        }
    }

    /// Resolves the stored operator name, e.g. `"Add"`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Add" => Some(ArithmeticOperator::Add),
            "Subtract" => Some(ArithmeticOperator::Subtract),
            "Multiply" => Some(ArithmeticOperator::Multiply),
            "Divide" => Some(ArithmeticOperator::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for ArithmeticOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
}

impl Comparator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Comparator::Equal => "=",
            Comparator::NotEqual => "!=",
            Comparator::GreaterThan => ">",
            Comparator::GreaterThanOrEqual => ">=",
            Comparator::LessThan => "<",
            Comparator::LessThanOrEqual => "<=",
        }
    }

    /// Resolves the stored comparator name, e.g. `"GreaterThan"`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Equal" => Some(Comparator::Equal),
            "NotEqual" => Some(Comparator::NotEqual),
            "GreaterThan" => Some(Comparator::GreaterThan),
            "GreaterThanOrEqual" => Some(Comparator::GreaterThanOrEqual),
            "LessThan" => Some(Comparator::LessThan),
            "LessThanOrEqual" => Some(Comparator::LessThanOrEqual),
            _ => None,
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
