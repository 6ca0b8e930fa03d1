use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::load_schema;
use crate::output_utils;
use libdatamodel::SchemaMutator;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct TypesCmd {
    #[arg(
        help="Also print the built-in scalars and directives.",
        long,
    )]
    builtins: bool,

    #[arg(
        help="Path to a data model schema file.",
        name="SCHEMA_PATH",
    )]
    schema_path: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for TypesCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let graph = match load_schema(&self.schema_path) {
            Ok(graph) => graph,
            Err(e) => return CommandResult::failure(&e),
        };

        let mut out = format!(
            "Custom types:\n{}",
            output_utils::bulleted(SchemaMutator::get_custom_type_names(&graph)),
        );
        if self.builtins {
            out.push_str(&format!(
                "\nBuilt-in types:\n{}",
                output_utils::bulleted(
                    SchemaMutator::get_builtin_types().iter()
                        .map(|builtin| format!("{} ({:?})", builtin.name, builtin.kind)),
                ),
            ));
        }
        CommandResult::stdout(format_args!("{out}"))
    }
}
