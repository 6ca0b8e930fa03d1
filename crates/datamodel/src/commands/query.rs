use anyhow::Context;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::load_schema;
use libdatamodel::QuerySynthesizer;
use libdatamodel::query::CompiledQuery;
use libdatamodel::query::DEFAULT_NESTED_LIMIT;
use libdatamodel::query::GetByIdQueryParams;
use libdatamodel::query::ListQueryParams;
use libdatamodel::query::SearchQueryParams;
use libdatamodel::query::SortDirection;
use libdatamodel::query::SortSpec;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum QueryKind {
    Aggregate,
    Get,
    List,
    Search,
}

#[derive(Debug, clap::Args)]
pub(crate) struct QueryCmd {
    #[arg(help="Cursor of the page to start from (list queries).", long)]
    cursor: Option<String>,

    #[arg(help="External id of the instance to fetch (get queries).", long)]
    external_id: Option<String>,

    #[arg(
        help="Only select these fields. System fields are always selected.",
        long,
        value_delimiter = ',',
    )]
    fields: Vec<String>,

    #[arg(help="JSON value bound to the `$filter` variable.", long)]
    filter: Option<String>,

    #[arg(default_value = "list", help="Kind of query to synthesize.", long, value_enum)]
    kind: QueryKind,

    #[arg(default_value_t = 100, help="Page size (list and search queries).", long)]
    limit: u32,

    #[arg(
        default_value_t = DEFAULT_NESTED_LIMIT,
        help="Page size of list-valued relations nested in the selection.",
        long,
    )]
    nested_limit: u32,

    #[arg(
        help="Path to a data model schema file.",
        name="SCHEMA_PATH",
    )]
    schema_path: PathBuf,

    #[arg(help="Search term (search queries).", long)]
    search_term: Option<String>,

    #[arg(help="Sort order as `field:ASC` or `field:DESC` (list queries).", long)]
    sort: Option<String>,

    #[arg(help="Space of the instance to fetch (get queries).", long)]
    space: Option<String>,

    #[arg(help="Name of the type to query.", long = "type")]
    type_name: String,
}
impl QueryCmd {
    fn limit_fields(&self) -> Option<Vec<String>> {
        if self.fields.is_empty() {
            None
        } else {
            Some(self.fields.clone())
        }
    }

    fn filter(&self) -> anyhow::Result<Option<serde_json::Value>> {
        self.filter.as_deref()
            .map(|filter| {
                serde_json::from_str(filter).context("`--filter` is not valid JSON")
            })
            .transpose()
    }

    fn sort(&self) -> anyhow::Result<Option<SortSpec>> {
        let Some(sort) = self.sort.as_deref() else {
            return Ok(None);
        };
        let (field_name, direction) = sort.split_once(':')
            .with_context(|| format!("`--sort {sort}` must look like `field:ASC`"))?;
        let direction = match direction.to_ascii_uppercase().as_str() {
            "ASC" => SortDirection::Asc,
            "DESC" => SortDirection::Desc,
            other => anyhow::bail!("Unknown sort direction `{other}`"),
        };
        Ok(Some(SortSpec::new(field_name, direction)))
    }

    fn compile(&self) -> anyhow::Result<CompiledQuery> {
        let graph = load_schema(&self.schema_path)?;
        let synthesizer = QuerySynthesizer::new(&graph);

        let query = match self.kind {
            QueryKind::Aggregate => synthesizer.build_aggregate_query(&self.type_name)?,

            QueryKind::Get => {
                let mut params = GetByIdQueryParams::new(
                    self.type_name.as_str(),
                    self.space.as_deref().context("`--space` is required for get queries")?,
                    self.external_id.as_deref()
                        .context("`--external-id` is required for get queries")?,
                );
                params.limit_fields = self.limit_fields();
                params.nested_limit = self.nested_limit;
                synthesizer.build_get_by_id_query(&params)?
            },

            QueryKind::List => {
                let mut params = ListQueryParams::new(self.type_name.as_str(), self.limit);
                params.cursor = self.cursor.clone();
                params.filter = self.filter()?;
                params.limit_fields = self.limit_fields();
                params.nested_limit = self.nested_limit;
                params.sort = self.sort()?;
                synthesizer.build_list_query(&params)?
            },

            QueryKind::Search => {
                let mut params = SearchQueryParams::new(
                    self.type_name.as_str(),
                    self.search_term.as_deref().unwrap_or_default(),
                );
                params.filter = self.filter()?;
                params.limit = Some(self.limit);
                params.limit_fields = self.limit_fields();
                params.nested_limit = self.nested_limit;
                synthesizer.build_search_query(&params)?
            },
        };
        Ok(query)
    }
}

#[inherent::inherent]
impl RunnableCommand for QueryCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let query = match self.compile() {
            Ok(query) => query,
            Err(e) => return CommandResult::failure(&e),
        };

        if query.variables().is_empty() {
            return CommandResult::stdout(format_args!("{}", query.query().trim_end()));
        }
        let variables = serde_json::Value::Object(query.variables().clone());
        CommandResult::stdout(format_args!(
            "{}\n\nVariables:\n{variables:#}",
            query.query().trim_end(),
        ))
    }
}
