use crate::{error::DefinitionError, expr::Expression};
use serde::Deserialize;

/// A stored migration definition as produced by the backend:
/// source and destination connections, the per-table migration items,
/// and pass-through execution settings.
#[derive(Debug, Clone, Deserialize)]
pub struct MigrationDefinition {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub source: ConnectionRef,
    pub destination: ConnectionRef,
    #[serde(default)]
    pub items: Vec<MigrationItem>,
    #[serde(default)]
    pub settings: MigrationSettings,
}

/// Reference to a configured connection.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionRef {
    pub name: String,
    pub driver: String,
}

/// One table-to-table migration: field mappings, an optional row
/// filter, and the joined lookup tables.
#[derive(Debug, Clone, Deserialize)]
pub struct MigrationItem {
    pub source_table: String,
    pub dest_table: String,
    #[serde(default)]
    pub mappings: Vec<FieldMapping>,
    #[serde(default)]
    pub filter: Option<Expression>,
    #[serde(default)]
    pub joins: Vec<Join>,
}

/// A destination column and the expression that produces its value.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldMapping {
    pub target: String,
    pub expression: Expression,
}

/// A joined table used by lookup expressions.
#[derive(Debug, Clone, Deserialize)]
pub struct Join {
    pub alias: String,
    pub table: String,
    #[serde(default)]
    pub on: Option<Expression>,
}

/// Execution settings carried by the definition. These are opaque to
/// the console: they are displayed and passed through, never
/// interpreted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MigrationSettings {
    #[serde(default)]
    pub batch_size: Option<usize>,
    #[serde(default)]
    pub create_missing_tables: bool,
    #[serde(default)]
    pub infer_schema: bool,
    #[serde(default)]
    pub cascade_schema: bool,
}

impl MigrationDefinition {
    /// Decodes a definition from its stored JSON document.
    pub fn from_json(source: &str) -> Result<Self, DefinitionError> {
        let definition = serde_json::from_str(source)?;
        Ok(definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::Literal;

    const DOCUMENT: &str = r#"{
        "name": "orders_to_warehouse",
        "source": { "name": "crm_prod", "driver": "mysql" },
        "destination": { "name": "warehouse", "driver": "postgres" },
        "items": [
            {
                "source_table": "orders",
                "dest_table": "fact_orders",
                "mappings": [
                    { "target": "id", "expression": { "Identifier": "id" } },
                    {
                        "target": "total",
                        "expression": {
                            "Arithmetic": {
                                "left": { "Identifier": "amount" },
                                "operator": "Multiply",
                                "right": { "Literal": { "Float": 1.2 } }
                            }
                        }
                    }
                ],
                "filter": {
                    "Condition": {
                        "left": { "Identifier": "status" },
                        "op": "Equal",
                        "right": { "Literal": { "String": "active" } }
                    }
                },
                "joins": [
                    { "alias": "c", "table": "customers" }
                ]
            }
        ],
        "settings": { "batch_size": 500, "create_missing_tables": true }
    }"#;

    #[test]
    fn test_definition_from_json() {
        let definition = MigrationDefinition::from_json(DOCUMENT).expect("valid document");
        assert_eq!(definition.name, "orders_to_warehouse");
        assert_eq!(definition.source.driver, "mysql");
        assert_eq!(definition.items.len(), 1);

        let item = &definition.items[0];
        assert_eq!(item.mappings.len(), 2);
        assert!(item.filter.is_some());
        assert_eq!(item.joins[0].table, "customers");
        assert_eq!(definition.settings.batch_size, Some(500));
        assert!(definition.settings.create_missing_tables);
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let document = r#"{
            "name": "minimal",
            "source": { "name": "a", "driver": "mysql" },
            "destination": { "name": "b", "driver": "postgres" }
        }"#;
        let definition = MigrationDefinition::from_json(document).expect("valid document");
        assert!(definition.items.is_empty());
        assert_eq!(definition.settings.batch_size, None);
    }

    #[test]
    fn test_unrecognized_expression_decodes_as_unknown() {
        let document = r#"{
            "name": "drifted",
            "source": { "name": "a", "driver": "mysql" },
            "destination": { "name": "b", "driver": "postgres" },
            "items": [
                {
                    "source_table": "t",
                    "dest_table": "t2",
                    "mappings": [
                        { "target": "x", "expression": { "Window": {} } },
                        { "target": "y", "expression": { "Literal": { "Integer": 1 } } }
                    ]
                }
            ]
        }"#;
        let definition = MigrationDefinition::from_json(document).expect("valid document");
        let mappings = &definition.items[0].mappings;
        assert_eq!(mappings[0].expression, Expression::Unknown);
        assert_eq!(mappings[1].expression, Expression::Literal(Literal::Integer(1)));
    }

    #[test]
    fn test_invalid_document_is_an_error() {
        assert!(MigrationDefinition::from_json("{ not json").is_err());
        assert!(MigrationDefinition::from_json(r#"{ "name": "no connections" }"#).is_err());
    }
}
