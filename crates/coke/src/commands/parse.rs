use crate::input_utils;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use coke_parser::token_source::StrGraphQLTokenSource;
use coke_parser::GrammarSymbol;
use coke_parser::GraphQLParser;
use coke_parser::ParsedNode;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// The AST's Rust `Debug` form.
    #[default]
    Debug,

    /// The AST serialized as JSON.
    Json,

    /// Canonical GraphQL text regenerated from the AST.
    Graphql,
}

#[derive(Debug, clap::Args)]
pub(crate) struct ParseCmd {
    #[arg(
        default_value_t=GrammarSymbol::Document,
        help="Grammar symbol to parse the input as (e.g. `document`, \
             `selection_set`, `value`).",
        long,
    )]
    entry_point: GrammarSymbol,

    #[arg(
        default_value_t,
        help="How to print the parsed result.",
        long,
        value_enum,
    )]
    format: OutputFormat,

    #[arg(
        help="Path to a GraphQL file, or `-` to read from stdin.",
        name="FILE",
    )]
    file_path: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for ParseCmd {
    pub async fn run(self, cli: Cli) -> CommandResult {
        let source = match input_utils::read_input(&self.file_path, cli.max_input_bytes) {
            Ok(source) => source,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        };

        log::debug!(
            "Parsing {} bytes from {:#?} as `{}`...",
            source.len(),
            self.file_path,
            self.entry_point,
        );

        let token_source =
            if input_utils::is_stdin(&self.file_path) {
                StrGraphQLTokenSource::new(&source)
            } else {
                StrGraphQLTokenSource::with_file_path(&source, &self.file_path)
            };

        match GraphQLParser::from_token_source(token_source).parse(self.entry_point) {
            Ok(node) => match render(&node, self.format) {
                Ok(rendered) => CommandResult::stdout(format_args!("{rendered}")),
                Err(e) => CommandResult::stderr(format_args!(
                    "{} Failed to serialize the parse result: {e:#}",
                    output_utils::RED_X,
                )),
            },

            Err(e) => CommandResult::stderr(format_args!(
                "{}",
                e.format_detailed(Some(&source)),
            )),
        }
    }
}

fn render(node: &ParsedNode<'_>, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Debug => format!("{node:#?}"),
        OutputFormat::Json => serde_json::to_string_pretty(node)?,
        OutputFormat::Graphql => node.to_source(None),
    })
}
