use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use axie_graphql_ops::definition_scan::scan_definition;
use axie_graphql_ops::operation::CatalogSource;
use axie_graphql_ops::operation::OperationCatalog;
use axie_graphql_ops::operation::OperationName;
use axie_graphql_ops::variables::parse_variable_declarations;
use axie_graphql_ops::DefinitionKind;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to GraphQL files (or directories of them), each holding \
             one fragment or operation definition. Fragments replace the \
             shipped fragment of the same name or are added; operations \
             replace the shipped operation of the same name. With no paths, \
             the shipped catalog is validated as-is.",
        name="FILE_OR_DIR_PATHS",
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut errors: Vec<anyhow::Error> = vec![];

        // Normalize the set of file extensions to filter with
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_non_graphql_files = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                            continue;
                        }

                        let is_graphql = path.extension()
                            .map(|ext| ext.to_string_lossy())
                            .is_some_and(|ext| graphql_file_exts.contains(&*ext));
                        if is_graphql {
                            log::trace!("Found GraphQL file at {path:#?}.");
                            file_paths.push(path.to_path_buf());
                        } else {
                            num_non_graphql_files += 1;
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(e.into());
                    },
                }
            }
        }

        // A single file named explicitly is validated whatever its extension.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to validate {first_arg_path:#?} even though it \
                doesn't match any of the --graphql-file-exts ({}).",
                graphql_file_exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(first_arg_path.to_path_buf());
        }

        log::debug!("Found {} GraphQL files to be validated.", file_paths.len());

        let mut source = CatalogSource::builtin();
        let mut num_fragment_overrides = 0;
        let mut num_operation_overrides = 0;
        for file_path in &file_paths {
            match apply_override(&mut source, file_path) {
                Ok(DefinitionKind::Fragment) => num_fragment_overrides += 1,
                Ok(DefinitionKind::Operation(_)) => num_operation_overrides += 1,
                Err(e) => errors.push(e),
            }
        }

        if !errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} GraphQL validation errors:\n{}",
                output_utils::RED_X,
                format_errors(&errors),
            ));
        }

        let catalog = match OperationCatalog::from_source(&source) {
            Ok(catalog) => catalog,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e}",
                output_utils::RED_X,
            )),
        };

        let mut num_variables = 0;
        for operation in catalog.operations() {
            match parse_variable_declarations(operation.document()) {
                Ok(declaration) => num_variables += declaration.len(),
                Err(e) => errors.push(anyhow::anyhow!("`{}`: {e}", operation.name())),
            }
        }
        if !errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} GraphQL validation errors:\n{}",
                output_utils::RED_X,
                format_errors(&errors),
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} All GraphQL validated successfully:\n",
                "  * Analyzed {} files ({} fragment and {} operation overrides).\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Validated {} fragment definitions.\n",
                "  * Validated {} operations declaring {} variables.",
            ),
            output_utils::GREEN_CHECK,
            file_paths.len(),
            num_fragment_overrides,
            num_operation_overrides,
            num_non_graphql_files,
            catalog.fragment_library().len(),
            catalog.len(),
            num_variables,
        ))
    }
}

/// Loads the definition in `file_path` into `source`, replacing the shipped
/// definition of the same name.
fn apply_override(source: &mut CatalogSource, file_path: &Path) -> anyhow::Result<DefinitionKind> {
    let text = std::fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read {file_path:#?}"))?;
    let scanned = scan_definition(text.trim())
        .with_context(|| format!("Failed to scan {file_path:#?}"))?;
    let name = scanned.name
        .with_context(|| format!("{file_path:#?} holds an anonymous operation"))?
        .to_string();
    let kind = scanned.kind;

    match kind {
        DefinitionKind::Fragment => {
            log::debug!("Overriding fragment `{name}` from {file_path:#?}.");
            if !source.replace_fragment_source(&name, text.clone()) {
                source.add_fragment_source(text);
            }
        },
        DefinitionKind::Operation(_) => {
            let operation_name: OperationName = name.parse()
                .with_context(|| format!("Unknown operation in {file_path:#?}"))?;
            log::debug!("Overriding operation `{operation_name}` from {file_path:#?}.");
            source.set_operation_source(operation_name, text);
        },
    }
    Ok(kind)
}

fn format_errors(errors: &[anyhow::Error]) -> String {
    errors.iter()
        .map(|e| format!("  * {e:#}"))
        .collect::<Vec<_>>()
        .join("\n")
}
