mod classify_error;
mod query;
mod types;
mod validate;

use anyhow::Context;
use crate::Cli;
use crate::CommandResult;
use classify_error::ClassifyErrorCmd;
use libdatamodel::TypeGraph;
use libdatamodel::schema::GraphQLSchemaSyntax;
use query::QueryCmd;
use std::path::Path;
use types::TypesCmd;
use validate::ValidateCmd;

/// A subcommand that runs to completion and reports through a
/// [`CommandResult`]. Failures are reported, never propagated.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}

#[derive(Debug, clap::Parser)]
#[command(name = "datamodel")]
pub(crate) enum CommandEnum {
    /// Classify a backend error payload stored as JSON.
    ClassifyError(Box<ClassifyErrorCmd>),
    /// Print the query document synthesized for a type.
    Query(Box<QueryCmd>),
    /// List the custom and built-in types of a schema.
    Types(Box<TypesCmd>),
    /// Validate data model schema files.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::ClassifyError(cmd) => cmd.run(cli).await,
            Self::Query(cmd) => cmd.run(cli).await,
            Self::Types(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}

fn load_schema(path: &Path) -> anyhow::Result<TypeGraph> {
    let schema_text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema file {path:#?}"))?;
    let graph = GraphQLSchemaSyntax::new().parse(&schema_text, &[])
        .with_context(|| format!("Failed to load schema file {path:#?}"))?;
    log::debug!("Loaded {} type(s) from {path:#?}.", graph.len());
    Ok(graph)
}
