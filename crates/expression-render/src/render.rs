use crate::options::{BooleanStyle, LookupStyle, RenderOptions, StringStyle};
use model::expr::{Expression, Literal};

/// Sentinel for nodes whose shape is not recognized.
const UNKNOWN_EXPRESSION: &str = "Unknown Expression";
const NO_FILTER_APPLIED: &str = "No filter applied";
const NO_FILTER: &str = "No filter";

/// A node that can be rendered into the accumulating output buffer.
pub trait Render {
    fn render(&self, r: &mut Renderer);
}

/// A context that holds the state during a rendering pass.
///
/// It accumulates the output string and provides access to the
/// display options for style-specific details.
pub struct Renderer<'a> {
    pub out: String,
    pub options: &'a RenderOptions,
}

impl<'a> Renderer<'a> {
    pub fn new(options: &'a RenderOptions) -> Self {
        Self {
            out: String::new(),
            options,
        }
    }

    /// Consumes the renderer and returns the final string.
    pub fn finish(self) -> String {
        self.out
    }
}

/// Renders an expression as a single-line human-readable string.
///
/// `None` renders as the configured fallback text. Never fails:
/// unrecognized nodes render as `"Unknown Expression"`.
pub fn render(expr: Option<&Expression>, options: &RenderOptions) -> String {
    let Some(expr) = expr else {
        return options.fallback.clone();
    };
    let mut r = Renderer::new(options);
    expr.render(&mut r);
    r.finish()
}

/// Renders a filter expression as a flat boolean string.
///
/// When the root is a function call, its arguments are rendered
/// individually and joined with the uppercased function name — the
/// common `and(...)`/`or(...)` filter shape. This join is deliberately
/// shallow: nested boolean trees inside a clause render through the
/// generic path as one token. Consumers rely on that exact shape.
pub fn render_filter(expr: Option<&Expression>, options: &RenderOptions) -> String {
    let Some(expr) = expr else {
        return NO_FILTER_APPLIED.to_string();
    };
    match expr {
        Expression::FunctionCall { name, args } => {
            if args.is_empty() {
                return NO_FILTER.to_string();
            }
            let connective = format!(" {} ", name.to_uppercase());
            args.iter()
                .map(|arg| render(Some(arg), options))
                .collect::<Vec<_>>()
                .join(&connective)
        }
        _ => render(Some(expr), options),
    }
}

impl Render for Expression {
    fn render(&self, r: &mut Renderer) {
        match self {
            Expression::Lookup { entity, key } => render_lookup(entity, key.as_deref(), r),
            Expression::Literal(literal) => literal.render(r),
            Expression::Identifier(name) => r.out.push_str(name),
            Expression::FunctionCall { name, args } => render_function_call(name, args, r),
            Expression::Arithmetic {
                left,
                operator,
                right,
            } => render_binary(left, operator.symbol(), right, r),
            Expression::Condition { left, op, right } => {
                render_binary(left, op.symbol(), right, r)
            }
            Expression::Unknown => r.out.push_str(UNKNOWN_EXPRESSION),
        }
    }
}

impl Render for Literal {
    fn render(&self, r: &mut Renderer) {
        match self {
            Literal::String(s) => match r.options.string_style {
                StringStyle::JsonEscaped => {
                    // serde_json string serialization cannot fail; the
                    // raw text is a last-resort stand-in.
                    let quoted = serde_json::to_string(s).unwrap_or_else(|_| s.clone());
                    r.out.push_str(&quoted);
                }
                StringStyle::SingleQuoted => {
                    r.out.push('\'');
                    r.out.push_str(s);
                    r.out.push('\'');
                }
            },
            Literal::Integer(n) => r.out.push_str(&n.to_string()),
            Literal::Float(f) => r.out.push_str(&f.to_string()),
            Literal::Boolean(b) => {
                let text = match (r.options.boolean_style, b) {
                    (BooleanStyle::Uppercase, true) => "TRUE",
                    (BooleanStyle::Uppercase, false) => "FALSE",
                    (BooleanStyle::Lowercase, true) => "true",
                    (BooleanStyle::Lowercase, false) => "false",
                };
                r.out.push_str(text);
            }
            Literal::Null => r.out.push_str("NULL"),
        }
    }
}

fn render_lookup(entity: &str, key: Option<&str>, r: &mut Renderer) {
    if r.options.lookup_style == LookupStyle::AtPrefixed {
        r.out.push('@');
    }
    r.out.push_str(entity);
    r.out.push('.');
    r.out.push_str(key.unwrap_or("?"));
}

fn render_function_call(name: &str, args: &[Expression], r: &mut Renderer) {
    r.out.push_str(name);
    r.out.push('(');
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            r.out.push_str(", ");
        }
        arg.render(r);
    }
    r.out.push(')');
}

// Always parenthesized; precedence is never used to omit parentheses.
fn render_binary(left: &Expression, symbol: &str, right: &Expression, r: &mut Renderer) {
    r.out.push('(');
    left.render(r);
    r.out.push(' ');
    r.out.push_str(symbol);
    r.out.push(' ');
    right.render(r);
    r.out.push(')');
}
