use crate::builtin_types::BuiltInTypeRegistry;
use crate::query::CompiledQuery;
use crate::query::GetByIdQueryParams;
use crate::query::ListQueryParams;
use crate::query::OperationKind;
use crate::query::QueryBuildError;
use crate::query::SearchQueryParams;
use crate::query::selection::FieldSelection;
use crate::query::selection::QueryOperation;
use crate::schema::FieldDef;
use crate::schema::TypeDef;
use crate::schema::TypeGraph;
use crate::schema::schema_syntax::quote_string;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, QueryBuildError>;

/// Identity and system fields selected on every root item and every item
/// of a nested relation, independent of any field projection.
pub const SYSTEM_FIELD_NAMES: &[&str] = &[
    "externalId",
    "space",
    "lastUpdatedTime",
    "createdTime",
    "__typename",
];

pub const PAGE_INFO_FIELD_NAMES: &[&str] = &[
    "startCursor",
    "hasPreviousPage",
    "hasNextPage",
    "endCursor",
];

/// Per-call knobs steering how a type's fields are selected.
struct SelectionContext<'a> {
    limit_fields: Option<&'a [String]>,
    nested_cursors: Option<&'a IndexMap<String, String>>,
    nested_filters: Option<&'a IndexMap<String, serde_json::Value>>,
    nested_limit: u32,
    nested_page_info: bool,
}

/// Compiles a [`TypeGraph`] plus operation parameters into query documents.
///
/// Selections descend exactly one level below the root type: a nested
/// relation only ever selects its identity fields, never its own relations.
/// This bounds query size and keeps synthesis terminating on
/// self-referential graphs without any cycle tracking.
///
/// Output is a pure function of the graph and the parameters.
#[derive(Clone, Copy, Debug)]
pub struct QuerySynthesizer<'graph> {
    graph: &'graph TypeGraph,
}
impl<'graph> QuerySynthesizer<'graph> {
    pub fn new(graph: &'graph TypeGraph) -> Self {
        Self { graph }
    }

    pub fn operation_name(type_name: &str, kind: OperationKind) -> String {
        kind.operation_name(type_name)
    }

    pub fn build_list_query(&self, params: &ListQueryParams) -> Result<CompiledQuery> {
        let type_def = self.target_type(&params.type_name)?;
        let kind = OperationKind::List;
        let operation_name = kind.operation_name(type_def.name());

        let items = self.item_selections(type_def, &SelectionContext {
            limit_fields: params.limit_fields.as_deref(),
            nested_cursors: None,
            nested_filters: None,
            nested_limit: params.nested_limit,
            nested_page_info: false,
        })?;

        let mut root = FieldSelection::new(operation_name.as_str())
            .with_argument("filter", "$filter")
            .with_argument("first", params.limit.to_string());
        if let Some(cursor) = &params.cursor {
            root = root.with_argument("after", quote_string(cursor));
        }
        if let Some(sort) = &params.sort {
            root = root.with_argument(
                "sort",
                format!("{{{}: {}}}", sort.field_name, sort.direction.as_str()),
            );
        }
        let root = root
            .with_selection(FieldSelection::new("items").with_selections(items))
            .with_selection(page_info_selection());

        let query = QueryOperation {
            name: operation_name.to_string(),
            root,
            variables: vec![
                ("filter".to_string(), kind.filter_type_name(type_def.name())),
            ],
        }.to_query_string();

        let mut variables = serde_json::Map::new();
        if let Some(filter) = &params.filter {
            variables.insert("filter".to_string(), filter.clone());
        }

        log::trace!("Synthesized `{operation_name}` query.");
        Ok(CompiledQuery { operation_name, query, variables })
    }

    pub fn build_get_by_id_query(
        &self,
        params: &GetByIdQueryParams,
    ) -> Result<CompiledQuery> {
        let type_def = self.target_type(&params.type_name)?;
        let kind = OperationKind::Get;
        let operation_name = kind.operation_name(type_def.name());

        for field_name in params.nested_cursors.keys()
            .chain(params.nested_filters.keys()) {
            check_nested_argument_field(type_def, field_name)?;
        }

        let ctx = SelectionContext {
            limit_fields: params.limit_fields.as_deref(),
            nested_cursors: Some(&params.nested_cursors),
            nested_filters: Some(&params.nested_filters),
            nested_limit: params.nested_limit,
            nested_page_info: true,
        };
        let items = self.item_selections(type_def, &ctx)?;

        // Declare a variable for each nested filter on a selected field, in
        // field declaration order.
        let mut variable_decls = vec![];
        let mut variables = serde_json::Map::new();
        for field in selected_fields(type_def, &ctx) {
            if let Some(filter) = params.nested_filters.get(field.name()) {
                variable_decls.push((
                    field.name().to_string(),
                    OperationKind::List.filter_type_name(field.field_type().name()),
                ));
                variables.insert(field.name().to_string(), filter.clone());
            }
        }

        let root = FieldSelection::new(operation_name.as_str())
            .with_argument("instance", format!(
                "{{space: {}, externalId: {}}}",
                quote_string(&params.space),
                quote_string(&params.external_id),
            ))
            .with_selection(FieldSelection::new("items").with_selections(items));

        let query = QueryOperation {
            name: operation_name.to_string(),
            root,
            variables: variable_decls,
        }.to_query_string();

        log::trace!("Synthesized `{operation_name}` query.");
        Ok(CompiledQuery { operation_name, query, variables })
    }

    pub fn build_search_query(
        &self,
        params: &SearchQueryParams,
    ) -> Result<CompiledQuery> {
        let type_def = self.target_type(&params.type_name)?;
        let kind = OperationKind::Search;
        let operation_name = kind.operation_name(type_def.name());

        let items = self.item_selections(type_def, &SelectionContext {
            limit_fields: params.limit_fields.as_deref(),
            nested_cursors: None,
            nested_filters: None,
            nested_limit: params.nested_limit,
            nested_page_info: false,
        })?;

        let root = FieldSelection::new(operation_name.as_str())
            .with_argument("first", "$first")
            .with_argument("query", "$query")
            .with_argument("filter", "$filter")
            .with_selection(FieldSelection::new("items").with_selections(items));

        let query = QueryOperation {
            name: operation_name.to_string(),
            root,
            variables: vec![
                ("first".to_string(), "Int".to_string()),
                ("query".to_string(), "String!".to_string()),
                ("filter".to_string(), kind.filter_type_name(type_def.name())),
            ],
        }.to_query_string();

        let mut variables = serde_json::Map::new();
        if let Some(limit) = params.limit {
            variables.insert("first".to_string(), limit.into());
        }
        variables.insert(
            "query".to_string(),
            params.search_term.to_string().into(),
        );
        if let Some(filter) = &params.filter {
            variables.insert("filter".to_string(), filter.clone());
        }

        log::trace!("Synthesized `{operation_name}` query.");
        Ok(CompiledQuery { operation_name, query, variables })
    }

    /// Count the instances of a type matching the `$filter` variable.
    pub fn build_aggregate_query(&self, type_name: &str) -> Result<CompiledQuery> {
        let type_def = self.target_type(type_name)?;
        let operation_name = format!("aggregate{}", type_def.name());

        let root = aggregate_count_selection(type_def.name())
            .with_argument("filter", "$filter");
        let query = QueryOperation {
            name: operation_name.to_string(),
            root,
            variables: vec![(
                "filter".to_string(),
                OperationKind::Search.filter_type_name(type_def.name()),
            )],
        }.to_query_string();

        Ok(CompiledQuery {
            operation_name,
            query,
            variables: serde_json::Map::new(),
        })
    }

    /// Count every published instance of each named type in one document.
    pub fn build_published_rows_count_query(
        &self,
        type_names: &[&str],
    ) -> Result<CompiledQuery> {
        if type_names.is_empty() {
            return Err(QueryBuildError::NoTypesRequested);
        }

        let roots = type_names.iter()
            .map(|type_name| {
                self.target_type(type_name)
                    .map(|type_def| aggregate_count_selection(type_def.name()))
            })
            .collect::<Result<Vec<_>>>()?;

        let operation_name = "Aggregate".to_string();
        let query = QueryOperation::render(&operation_name, &[], &roots);
        Ok(CompiledQuery {
            operation_name,
            query,
            variables: serde_json::Map::new(),
        })
    }

    fn target_type(&self, type_name: &str) -> Result<&'graph TypeDef> {
        self.graph.get_type(type_name).ok_or_else(|| QueryBuildError::UnknownType {
            type_name: type_name.to_string(),
        })
    }

    fn item_selections(
        &self,
        type_def: &TypeDef,
        ctx: &SelectionContext<'_>,
    ) -> Result<Vec<FieldSelection>> {
        let mut selections = FieldSelection::leaves(SYSTEM_FIELD_NAMES.iter().copied());
        for field in selected_fields(type_def, ctx) {
            selections.push(self.field_selection(field, ctx)?);
        }
        Ok(selections)
    }

    fn field_selection(
        &self,
        field: &FieldDef,
        ctx: &SelectionContext<'_>,
    ) -> Result<FieldSelection> {
        let field_type = field.field_type();

        if BuiltInTypeRegistry::is_resource_reference(field_type.name()) {
            return Ok(
                FieldSelection::new(field.name())
                    .with_selection(FieldSelection::new("externalId"))
            );
        }

        if !field_type.is_custom() {
            return Ok(FieldSelection::new(field.name()));
        }

        if let Some(target) = self.graph.get_type(field_type.name())
            && target.is_inline() {
            return self.inline_selection(field, target, false);
        }

        let identity = FieldSelection::leaves(SYSTEM_FIELD_NAMES.iter().copied());
        if !field_type.is_list() {
            return Ok(FieldSelection::new(field.name()).with_selections(identity));
        }

        let mut selection = FieldSelection::new(field.name());
        if ctx.nested_filters.is_some_and(|filters| filters.contains_key(field.name())) {
            selection = selection.with_argument("filter", format!("${}", field.name()));
        }
        selection = selection.with_argument("first", ctx.nested_limit.to_string());
        if let Some(cursor) = ctx.nested_cursors.and_then(|c| c.get(field.name())) {
            selection = selection.with_argument("after", quote_string(cursor));
        }
        selection = selection
            .with_selection(FieldSelection::new("items").with_selections(identity));
        if ctx.nested_page_info {
            selection = selection.with_selection(page_info_selection());
        }
        Ok(selection)
    }

    /// Inline types are embedded values, so their fields are selected in
    /// place. Relations inside them only select identity fields, and an
    /// inline type nested in another inline type is expanded once more;
    /// anything deeper is left out.
    fn inline_selection(
        &self,
        field: &FieldDef,
        inline_type: &TypeDef,
        nested: bool,
    ) -> Result<FieldSelection> {
        if let Some(bad_field) = inline_type.fields()
            .find(|f| f.is_relation() && f.field_type().is_list()) {
            return Err(QueryBuildError::InlineTypeWithRelationList {
                field_name: bad_field.name().to_string(),
                type_name: inline_type.name().to_string(),
            });
        }

        let mut selection = FieldSelection::new(field.name());
        for inline_field in inline_type.fields() {
            let field_type = inline_field.field_type();
            if BuiltInTypeRegistry::is_resource_reference(field_type.name()) {
                selection = selection.with_selection(
                    FieldSelection::new(inline_field.name())
                        .with_selection(FieldSelection::new("externalId")),
                );
                continue;
            }
            if !field_type.is_custom() {
                selection = selection.with_selection(FieldSelection::new(inline_field.name()));
                continue;
            }

            match self.graph.get_type(field_type.name()) {
                Some(target) if target.is_inline() => {
                    if nested {
                        log::debug!(
                            "Leaving out `{}.{}`: inline types nest at most two deep.",
                            inline_type.name(),
                            inline_field.name(),
                        );
                        continue;
                    }
                    selection = selection
                        .with_selection(self.inline_selection(inline_field, target, true)?);
                },
                _ => {
                    selection = selection.with_selection(
                        FieldSelection::new(inline_field.name()).with_selections(
                            FieldSelection::leaves(SYSTEM_FIELD_NAMES.iter().copied()),
                        ),
                    );
                },
            }
        }
        Ok(selection)
    }
}

/// The declared fields of `type_def` to select, honoring `limit_fields` and
/// skipping names already covered by the system fields.
fn selected_fields<'t>(
    type_def: &'t TypeDef,
    ctx: &SelectionContext<'_>,
) -> impl Iterator<Item = &'t FieldDef> {
    let limit_fields = ctx.limit_fields.map(|fields| fields.to_vec());
    type_def.fields().filter(move |field| {
        !SYSTEM_FIELD_NAMES.contains(&field.name())
            && limit_fields.as_ref().is_none_or(|fields| {
                fields.iter().any(|name| name == field.name())
            })
    })
}

fn check_nested_argument_field(type_def: &TypeDef, field_name: &str) -> Result<()> {
    match type_def.field(field_name) {
        Some(field) if field.is_relation() && field.field_type().is_list() => Ok(()),
        _ => Err(QueryBuildError::InvalidNestedArgument {
            field_name: field_name.to_string(),
            type_name: type_def.name().to_string(),
        }),
    }
}

fn page_info_selection() -> FieldSelection {
    FieldSelection::new("pageInfo")
        .with_selections(FieldSelection::leaves(PAGE_INFO_FIELD_NAMES.iter().copied()))
}

fn aggregate_count_selection(type_name: &str) -> FieldSelection {
    FieldSelection::new(format!("aggregate{type_name}"))
        .with_selection(
            FieldSelection::new("items").with_selection(
                FieldSelection::new("count")
                    .with_selection(FieldSelection::new("externalId")),
            ),
        )
}
