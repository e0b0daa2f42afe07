/// How `Lookup` nodes are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupStyle {
    /// `entity.key`
    #[default]
    Dotted,
    /// `@entity.key` — the short form used by the join editor.
    AtPrefixed,
}

/// How string literals are quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StringStyle {
    /// Double-quoted with JSON string escaping. Canonical: safe for
    /// embedded quotes and newlines.
    #[default]
    JsonEscaped,
    /// Single-quoted with the raw text passed through, for legacy
    /// consumers that expect `'value'`.
    SingleQuoted,
}

/// How boolean literals are cased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BooleanStyle {
    /// `TRUE` / `FALSE`, matching SQL-like display contexts.
    #[default]
    Uppercase,
    /// `true` / `false`, the compact legacy form.
    Lowercase,
}

/// Presentational knobs for one rendering pass.
///
/// The legacy console carried several divergent copies of the tree
/// walk; these options capture their deliberate differences so a
/// single implementation serves every call site.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Text rendered for an absent expression.
    pub fallback: String,
    pub lookup_style: LookupStyle,
    pub string_style: StringStyle,
    pub boolean_style: BooleanStyle,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            fallback: "N/A".to_string(),
            lookup_style: LookupStyle::default(),
            string_style: StringStyle::default(),
            boolean_style: BooleanStyle::default(),
        }
    }
}

impl RenderOptions {
    /// The compact legacy style: lowercase booleans and raw
    /// single-quoted strings.
    pub fn compact() -> Self {
        Self {
            string_style: StringStyle::SingleQuoted,
            boolean_style: BooleanStyle::Lowercase,
            ..Self::default()
        }
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    pub fn with_lookup_style(mut self, style: LookupStyle) -> Self {
        self.lookup_style = style;
        self
    }

    pub fn with_string_style(mut self, style: StringStyle) -> Self {
        self.string_style = style;
        self
    }

    pub fn with_boolean_style(mut self, style: BooleanStyle) -> Self {
        self.boolean_style = style;
        self
    }
}
