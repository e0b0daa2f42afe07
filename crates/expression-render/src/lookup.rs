use crate::{options::RenderOptions, render::render};
use model::expr::Expression;
use serde::Serialize;

/// Table and column parts extracted from a mapping expression, for
/// join and mapping visualizations.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct LookupParts {
    pub table: String,
    pub column: String,
    pub raw: String,
    pub is_lookup: bool,
}

/// Classifies an expression for table/column display.
///
/// `raw` always carries the dotted rendering, independent of any
/// caller styling, so visualizations agree on the reference text.
pub fn classify_lookup(expr: &Expression) -> LookupParts {
    let options = RenderOptions::default();
    match expr {
        Expression::Lookup { entity, key } => LookupParts {
            table: entity.clone(),
            column: key.clone().unwrap_or_default(),
            raw: render(Some(expr), &options),
            is_lookup: true,
        },
        _ => LookupParts {
            raw: render(Some(expr), &options),
            ..LookupParts::default()
        },
    }
}
