//! Wire decoding for stored expression trees.
//!
//! Stored definition documents encode expression nodes as JSON objects
//! keyed by a discriminant (`Lookup`, `Literal`, `Identifier`,
//! `FunctionCall`, `Arithmetic`, `Condition`). Decoding is total:
//! anything that matches no known discriminant becomes
//! [`Expression::Unknown`] so that newer document schemas never fail
//! a rendering pass.

use crate::expr::{ArithmeticOperator, Comparator, Expression, Literal};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use tracing::debug;

impl Expression {
    /// Decodes a stored expression fragment.
    ///
    /// Discriminant keys are probed in a fixed order; a node carrying
    /// several discriminants decodes as the first match.
    pub fn from_value(value: &Value) -> Expression {
        let Some(map) = value.as_object() else {
            debug!("expression node is not an object, decoding as Unknown");
            return Expression::Unknown;
        };

        if let Some(inner) = map.get("Lookup") {
            return decode_lookup(inner);
        }
        if let Some(inner) = map.get("Literal") {
            return Expression::Literal(decode_literal(inner));
        }
        if let Some(inner) = map.get("Identifier") {
            return match inner.as_str() {
                Some(name) => Expression::Identifier(name.to_string()),
                None => Expression::Unknown,
            };
        }
        if let Some(inner) = map.get("FunctionCall") {
            return decode_function_call(inner);
        }
        if let Some(inner) = map.get("Arithmetic") {
            return decode_arithmetic(inner);
        }
        if let Some(inner) = map.get("Condition") {
            return decode_condition(inner);
        }

        debug!("expression node matched no known discriminant, decoding as Unknown");
        Expression::Unknown
    }
}

impl<'de> Deserialize<'de> for Expression {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Expression::from_value(&value))
    }
}

fn decode_lookup(inner: &Value) -> Expression {
    let Some(obj) = inner.as_object() else {
        return Expression::Unknown;
    };
    Expression::Lookup {
        entity: string_field(obj, "entity").unwrap_or_default(),
        key: string_field(obj, "key"),
    }
}

fn decode_literal(inner: &Value) -> Literal {
    let Some(obj) = inner.as_object() else {
        return Literal::Null;
    };
    if let Some(s) = obj.get("String").and_then(Value::as_str) {
        return Literal::String(s.to_string());
    }
    if let Some(n) = obj.get("Integer").and_then(Value::as_i64) {
        return Literal::Integer(n);
    }
    if let Some(f) = obj.get("Float").and_then(Value::as_f64) {
        return Literal::Float(f);
    }
    if let Some(b) = obj.get("Boolean").and_then(Value::as_bool) {
        return Literal::Boolean(b);
    }
    // No populated sub-field means an absent value.
    Literal::Null
}

fn decode_function_call(inner: &Value) -> Expression {
    let Some(obj) = inner.as_object() else {
        return Expression::Unknown;
    };
    let Some(name) = string_field(obj, "name") else {
        return Expression::Unknown;
    };
    let args = obj
        .get("args")
        .and_then(Value::as_array)
        .map(|values| values.iter().map(Expression::from_value).collect())
        .unwrap_or_default();

    Expression::FunctionCall { name, args }
}

fn decode_arithmetic(inner: &Value) -> Expression {
    let Some(obj) = inner.as_object() else {
        return Expression::Unknown;
    };
    let (Some(left), Some(right)) = (obj.get("left"), obj.get("right")) else {
        return Expression::Unknown;
    };
    let Some(operator) = obj
        .get("operator")
        .and_then(Value::as_str)
        .and_then(ArithmeticOperator::from_name)
    else {
        debug!("arithmetic node carries an unknown operator, decoding as Unknown");
        return Expression::Unknown;
    };

    Expression::Arithmetic {
        left: Box::new(Expression::from_value(left)),
        operator,
        right: Box::new(Expression::from_value(right)),
    }
}

fn decode_condition(inner: &Value) -> Expression {
    let Some(obj) = inner.as_object() else {
        return Expression::Unknown;
    };
    let (Some(left), Some(right)) = (obj.get("left"), obj.get("right")) else {
        return Expression::Unknown;
    };
    let Some(op) = obj
        .get("op")
        .and_then(Value::as_str)
        .and_then(Comparator::from_name)
    else {
        debug!("condition node carries an unknown comparator, decoding as Unknown");
        return Expression::Unknown;
    };

    Expression::Condition {
        left: Box::new(Expression::from_value(left)),
        op,
        right: Box::new(Expression::from_value(right)),
    }
}

fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_lookup() {
        let expr = Expression::from_value(&json!({
            "Lookup": { "entity": "orders", "key": "id" }
        }));
        assert_eq!(
            expr,
            Expression::Lookup {
                entity: "orders".to_string(),
                key: Some("id".to_string()),
            }
        );
    }

    #[test]
    fn test_decode_lookup_without_key() {
        let expr = Expression::from_value(&json!({ "Lookup": { "entity": "orders" } }));
        assert_eq!(
            expr,
            Expression::Lookup {
                entity: "orders".to_string(),
                key: None,
            }
        );
    }

    #[test]
    fn test_decode_literal_variants() {
        let cases = [
            (json!({ "Literal": { "String": "abc" } }), Literal::String("abc".to_string())),
            (json!({ "Literal": { "Integer": 42 } }), Literal::Integer(42)),
            (json!({ "Literal": { "Float": 2.5 } }), Literal::Float(2.5)),
            (json!({ "Literal": { "Boolean": true } }), Literal::Boolean(true)),
            (json!({ "Literal": {} }), Literal::Null),
        ];
        for (value, expected) in cases {
            assert_eq!(Expression::from_value(&value), Expression::Literal(expected));
        }
    }

    #[test]
    fn test_decode_identifier() {
        let expr = Expression::from_value(&json!({ "Identifier": "age" }));
        assert_eq!(expr, Expression::Identifier("age".to_string()));
    }

    #[test]
    fn test_decode_function_call_with_nested_args() {
        let expr = Expression::from_value(&json!({
            "FunctionCall": {
                "name": "concat",
                "args": [
                    { "Identifier": "first" },
                    { "Literal": { "String": " " } },
                    { "Identifier": "last" }
                ]
            }
        }));
        match expr {
            Expression::FunctionCall { name, args } => {
                assert_eq!(name, "concat");
                assert_eq!(args.len(), 3);
                assert_eq!(args[0], Expression::Identifier("first".to_string()));
            }
            other => panic!("expected FunctionCall, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_function_call_without_args() {
        let expr = Expression::from_value(&json!({ "FunctionCall": { "name": "now" } }));
        assert_eq!(
            expr,
            Expression::FunctionCall {
                name: "now".to_string(),
                args: Vec::new(),
            }
        );
    }

    #[test]
    fn test_decode_arithmetic() {
        let expr = Expression::from_value(&json!({
            "Arithmetic": {
                "left": { "Identifier": "a" },
                "operator": "Add",
                "right": { "Identifier": "b" }
            }
        }));
        assert_eq!(
            expr,
            Expression::Arithmetic {
                left: Box::new(Expression::Identifier("a".to_string())),
                operator: ArithmeticOperator::Add,
                right: Box::new(Expression::Identifier("b".to_string())),
            }
        );
    }

    #[test]
    fn test_decode_condition() {
        let expr = Expression::from_value(&json!({
            "Condition": {
                "left": { "Identifier": "age" },
                "op": "GreaterThan",
                "right": { "Literal": { "Integer": 18 } }
            }
        }));
        assert_eq!(
            expr,
            Expression::Condition {
                left: Box::new(Expression::Identifier("age".to_string())),
                op: Comparator::GreaterThan,
                right: Box::new(Expression::Literal(Literal::Integer(18))),
            }
        );
    }

    #[test]
    fn test_unknown_operator_degrades_whole_node() {
        let expr = Expression::from_value(&json!({
            "Arithmetic": {
                "left": { "Identifier": "a" },
                "operator": "Modulo",
                "right": { "Identifier": "b" }
            }
        }));
        assert_eq!(expr, Expression::Unknown);
    }

    #[test]
    fn test_unrecognized_shape_decodes_as_unknown() {
        assert_eq!(
            Expression::from_value(&json!({ "Window": { "name": "rank" } })),
            Expression::Unknown
        );
        assert_eq!(Expression::from_value(&json!(42)), Expression::Unknown);
        assert_eq!(Expression::from_value(&json!(null)), Expression::Unknown);
    }

    #[test]
    fn test_multiple_discriminants_first_match_wins() {
        let expr = Expression::from_value(&json!({
            "Identifier": "age",
            "Lookup": { "entity": "users", "key": "age" }
        }));
        assert_eq!(
            expr,
            Expression::Lookup {
                entity: "users".to_string(),
                key: Some("age".to_string()),
            }
        );
    }

    #[test]
    fn test_deserialize_through_serde() {
        let expr: Expression =
            serde_json::from_str(r#"{ "Identifier": "active" }"#).expect("valid json");
        assert_eq!(expr, Expression::Identifier("active".to_string()));
    }
}
