use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use axie_graphql_ops::operation::OperationCatalog;
use axie_graphql_ops::operation::OperationKind;
use axie_graphql_ops::variables::parse_variable_declarations;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum KindFilter {
    Query,
    Mutation,
    Subscription,
}
impl KindFilter {
    fn matches(&self, kind: OperationKind) -> bool {
        matches!(
            (self, kind),
            (Self::Query, OperationKind::Query)
                | (Self::Mutation, OperationKind::Mutation)
                | (Self::Subscription, OperationKind::Subscription),
        )
    }
}

#[derive(Debug, clap::Args)]
pub(crate) struct ListCmd {
    #[arg(
        help="Only list operations of this kind.",
        long,
        value_enum,
    )]
    kind: Option<KindFilter>,
}

#[inherent::inherent]
impl RunnableCommand for ListCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let catalog = match OperationCatalog::global() {
            Ok(catalog) => catalog,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e}",
                output_utils::RED_X,
            )),
        };

        let mut lines = vec![];
        for operation in catalog.operations() {
            if let Some(kind) = self.kind
                && !kind.matches(operation.kind()) {
                continue;
            }

            let variables = match parse_variable_declarations(operation.document()) {
                Ok(declaration) => declaration
                    .iter()
                    .map(|var| format!("${}: {}", var.name(), var.type_annotation()))
                    .collect::<Vec<_>>()
                    .join(", "),
                Err(e) => return CommandResult::stderr(format_args!(
                    "{} `{}`: {e}",
                    output_utils::RED_X,
                    operation.name(),
                )),
            };
            lines.push(format!(
                "{:<12} {}({variables})",
                operation.kind().keyword(),
                operation.name(),
            ));
        }

        log::debug!("Listed {} of {} operations.", lines.len(), catalog.len());
        CommandResult::stdout(format_args!("{}", lines.join("\n")))
    }
}
