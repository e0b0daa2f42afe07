use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Print a human-readable description of a stored migration definition
    Describe {
        #[arg(long, help = "Definition file path")]
        config: String,

        #[arg(
            long,
            help = "If specified, writes the description to this file instead of stdout"
        )]
        output: Option<String>,

        #[arg(long, help = "Print the full report as JSON instead of text")]
        json: bool,
    },
    /// Render a single expression fragment
    Expr {
        #[arg(long, help = "Expression fragment as inline JSON")]
        json: String,

        #[arg(long, help = "Render as a filter (AND/OR joined clauses)")]
        filter: bool,

        #[arg(long, help = "Render lookups in the @entity.key short form")]
        at_prefixed: bool,

        #[arg(
            long,
            help = "Use the compact legacy style (lowercase booleans, single-quoted strings)"
        )]
        compact: bool,
    },
}
