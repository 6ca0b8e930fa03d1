use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libdatamodel::schema::GraphQLSchemaSyntax;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more data model schema files or directories \
             containing them. Each file is validated as its own data model.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl ValidateCmd {
    fn find_schema_files(&self) -> (Vec<PathBuf>, Vec<String>) {
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut errors = vec![];
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                            continue;
                        }
                        if let Some(ext) = path.extension().map(|s| s.to_string_lossy())
                            && graphql_file_exts.contains(&*ext) {
                            log::trace!("Found schema file at {path:#?}.");
                            file_paths.push(path.to_path_buf());
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(format!("{path:#?}: {e}"));
                    },
                }
            }
        }

        // A single explicit file path is validated regardless of extension.
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

        (file_paths, errors)
    }
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let (file_paths, mut errors) = self.find_schema_files();
        log::debug!("Found {} schema files to be validated.", file_paths.len());

        let syntax = GraphQLSchemaSyntax::new();
        let mut num_types = 0;
        for path in &file_paths {
            let schema_text = match std::fs::read_to_string(path) {
                Ok(text) => text,
                Err(e) => {
                    errors.push(format!("{path:#?}: {e}"));
                    continue;
                },
            };

            let schema_errors = syntax.validate_sdl(&schema_text);
            if !schema_errors.is_empty() {
                errors.extend(schema_errors.iter().map(|e| format!("{path:#?}: {e}")));
                continue;
            }
            match syntax.parse(&schema_text, &[]) {
                Ok(graph) => num_types += graph.len(),
                Err(e) => errors.push(format!("{path:#?}: {e}")),
            }
        }

        if !errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Data model validation errors:\n{}",
                output_utils::RED_X,
                output_utils::bulleted(&errors),
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} All data model schemas validated successfully:\n",
                "  * Analyzed {} files.\n",
                "  * Validated {} type definitions.",
            ),
            output_utils::GREEN_CHECK,
            file_paths.len(),
            num_types,
        ))
    }
}
