use crate::preview::{
    FilterPreview, JoinPreview, LookupPreview, MappingPreview, is_direct_mapping,
    item_lookup_previews,
};
use chrono::{DateTime, Utc};
use expression_render::RenderOptions;
use model::definition::{ConnectionRef, MigrationDefinition, MigrationItem};
use serde::Serialize;

/// The full preview surface for a stored migration definition: what
/// the console shows before anything is executed.
#[derive(Serialize, Debug, Default, Clone)]
pub struct DefinitionReport {
    pub definition_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub source: EndpointSummary,
    pub destination: EndpointSummary,
    pub totals: MappingTotals,
    pub items: Vec<ItemReport>,
    pub generated_at: DateTime<Utc>,
}

/// A connection endpoint as displayed in report headers.
#[derive(Serialize, Debug, Default, Clone)]
pub struct EndpointSummary {
    pub name: String,
    pub driver: String,
}

impl EndpointSummary {
    fn from_connection(connection: &ConnectionRef) -> Self {
        Self {
            name: connection.name.clone(),
            driver: connection.driver.clone(),
        }
    }
}

/// A summary of counts across all migration items.
#[derive(Serialize, Debug, Default, Clone)]
pub struct MappingTotals {
    pub items: usize,
    pub mapped_fields: usize,
    pub computed_fields: usize,
    pub lookups: usize,
    pub filtered_items: usize,
}

/// The preview for a single table-to-table migration item.
#[derive(Serialize, Debug, Default, Clone)]
pub struct ItemReport {
    pub source_table: String,
    pub dest_table: String,
    pub mappings: Vec<MappingPreview>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lookups: Vec<LookupPreview>,
    pub filter: FilterPreview,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub joins: Vec<JoinPreview>,
}

impl ItemReport {
    pub fn from_item(item: &MigrationItem, options: &RenderOptions) -> Self {
        Self {
            source_table: item.source_table.clone(),
            dest_table: item.dest_table.clone(),
            mappings: item
                .mappings
                .iter()
                .map(|m| MappingPreview::from_mapping(m, options))
                .collect(),
            lookups: item_lookup_previews(item),
            filter: FilterPreview::from_filter(item.filter.as_ref(), options),
            joins: item
                .joins
                .iter()
                .map(|j| JoinPreview::from_join(j, options))
                .collect(),
        }
    }
}

impl DefinitionReport {
    /// Builds the report from a decoded definition. Pure: no I/O, no
    /// validation against live schemas.
    pub fn from_definition(definition: &MigrationDefinition, options: &RenderOptions) -> Self {
        let items: Vec<ItemReport> = definition
            .items
            .iter()
            .map(|item| ItemReport::from_item(item, options))
            .collect();
        let totals = compute_totals(definition, &items);

        Self {
            definition_name: definition.name.clone(),
            description: definition.description.clone(),
            source: EndpointSummary::from_connection(&definition.source),
            destination: EndpointSummary::from_connection(&definition.destination),
            totals,
            items,
            generated_at: Utc::now(),
        }
    }
}

fn compute_totals(definition: &MigrationDefinition, items: &[ItemReport]) -> MappingTotals {
    let mut totals = MappingTotals {
        items: items.len(),
        ..MappingTotals::default()
    };
    for item in &definition.items {
        for mapping in &item.mappings {
            if is_direct_mapping(mapping) {
                totals.mapped_fields += 1;
            } else {
                totals.computed_fields += 1;
            }
        }
        if item.filter.is_some() {
            totals.filtered_items += 1;
        }
    }
    totals.lookups = items.iter().map(|item| item.lookups.len()).sum();
    totals
}
