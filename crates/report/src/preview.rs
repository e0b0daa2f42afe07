use expression_render::{RenderOptions, Token, boolean_tokens, classify_lookup, render, render_filter};
use model::definition::{FieldMapping, Join, MigrationItem};
use model::expr::Expression;
use serde::Serialize;

/// A preview of a single field mapping.
#[derive(Serialize, Debug, Default, Clone)]
pub struct MappingPreview {
    pub target: String,
    pub expression_preview: String,
}

impl MappingPreview {
    pub fn from_mapping(mapping: &FieldMapping, options: &RenderOptions) -> Self {
        Self {
            target: mapping.target.clone(),
            expression_preview: render(Some(&mapping.expression), options),
        }
    }
}

/// A preview of a lookup mapping, split into table/column parts for
/// the join visualization.
#[derive(Serialize, Debug, Default, Clone)]
pub struct LookupPreview {
    pub target: String,
    pub table: String,
    pub column: String,
    pub reference: String,
}

impl LookupPreview {
    /// Builds a preview when the mapping expression is a lookup.
    pub fn from_mapping(mapping: &FieldMapping) -> Option<Self> {
        let parts = classify_lookup(&mapping.expression);
        if !parts.is_lookup {
            return None;
        }
        Some(Self {
            target: mapping.target.clone(),
            table: parts.table,
            column: parts.column,
            reference: parts.raw,
        })
    }
}

/// The rendered filter text plus its boolean-operator tokens, so a
/// caller can emphasize the connectives without re-parsing.
#[derive(Serialize, Debug, Default, Clone)]
pub struct FilterPreview {
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tokens: Vec<Token>,
}

impl FilterPreview {
    pub fn from_filter(filter: Option<&Expression>, options: &RenderOptions) -> Self {
        let text = render_filter(filter, options);
        let tokens = boolean_tokens(&text);
        Self { text, tokens }
    }
}

/// A preview of a joined table and its join condition.
#[derive(Serialize, Debug, Default, Clone)]
pub struct JoinPreview {
    pub alias: String,
    pub table: String,
    pub on: String,
}

impl JoinPreview {
    pub fn from_join(join: &Join, options: &RenderOptions) -> Self {
        Self {
            alias: join.alias.clone(),
            table: join.table.clone(),
            on: render(join.on.as_ref(), options),
        }
    }
}

/// True when a mapping carries the value over directly (a lookup or a
/// bare column reference) rather than computing it.
pub(crate) fn is_direct_mapping(mapping: &FieldMapping) -> bool {
    matches!(
        mapping.expression,
        Expression::Lookup { .. } | Expression::Identifier(_)
    )
}

pub(crate) fn item_lookup_previews(item: &MigrationItem) -> Vec<LookupPreview> {
    item.mappings.iter().filter_map(LookupPreview::from_mapping).collect()
}
