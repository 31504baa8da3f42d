use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open a connection and run a trivial query
    TestConn,

    /// List the schemas visible to the connecting user
    Schemas,

    /// List tables (or views) of a schema
    Tables {
        #[arg(long, help = "Schema to list; defaults to the connecting user's schema")]
        schema: Option<String>,

        #[arg(long, help = "List views instead of tables")]
        views: bool,
    },

    /// Reflect a table's columns, keys and indexes as JSON
    Describe {
        /// Table name in canonical (lower-case) form
        table: String,

        #[arg(long)]
        schema: Option<String>,

        #[arg(
            long,
            help = "If specified, writes the JSON metadata to this file instead of stdout"
        )]
        output: Option<String>,
    },

    /// Fire a sequence and print the value it returned
    Nextval {
        sequence: String,

        #[arg(long)]
        schema: Option<String>,
    },
}
