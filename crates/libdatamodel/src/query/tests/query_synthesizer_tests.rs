use crate::query::GetByIdQueryParams;
use crate::query::ListQueryParams;
use crate::query::QueryBuildError;
use crate::query::QuerySynthesizer;
use crate::query::SearchQueryParams;
use crate::query::SortDirection;
use crate::query::SortSpec;
use crate::schema::GraphQLSchemaSyntax;
use crate::schema::SchemaMutator;
use crate::schema::TypeDef;
use crate::schema::TypeGraph;
use crate::schema::TypeKind;
use crate::schema::FieldDef;
use crate::schema::FieldType;
use crate::schema::DirectiveAnnotation;
use crate::test::fixtures::person_graph;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, QueryBuildError>;

fn normalize(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

const SYSTEM_FIELDS: &str = "externalId space lastUpdatedTime createdTime __typename";

const PAGE_INFO: &str =
    "pageInfo { startCursor hasPreviousPage hasNextPage endCursor }";

fn graph_from(sdl: &str) -> TypeGraph {
    GraphQLSchemaSyntax::new().parse(sdl, &[]).expect("test schema parses")
}

fn person_list_params() -> ListQueryParams {
    let mut params = ListQueryParams::new("Person", 100);
    params.cursor = Some("abcd=".to_string());
    params
}

mod list {
    use super::*;

    #[test]
    fn paginated_list_query() -> Result<()> {
        let graph = person_graph();
        let query = QuerySynthesizer::new(&graph)
            .build_list_query(&person_list_params())?;

        let expected = format!(
            "query listPerson($filter: _ListPersonFilter) {{
              listPerson(filter: $filter, first: 100, after: \"abcd=\") {{
                items {{
                  {SYSTEM_FIELDS}
                  name
                  posts(first: 2) {{ items {{ {SYSTEM_FIELDS} }} }}
                  user {{ name }}
                }}
                {PAGE_INFO}
              }}
            }}"
        );
        assert_eq!(query.operation_name(), "listPerson");
        assert_eq!(normalize(query.query()), normalize(&expected));
        assert!(query.variables().is_empty());

        Ok(())
    }

    #[test]
    fn exact_layout() -> Result<()> {
        let graph = graph_from("type Note { body: String }");
        let query = QuerySynthesizer::new(&graph)
            .build_list_query(&ListQueryParams::new("Note", 10))?;

        assert_eq!(query.query(), concat!(
            "query listNote($filter: _ListNoteFilter) {\n",
            "  listNote(filter: $filter, first: 10) {\n",
            "    items {\n",
            "      externalId\n",
            "      space\n",
            "      lastUpdatedTime\n",
            "      createdTime\n",
            "      __typename\n",
            "      body\n",
            "    }\n",
            "    pageInfo {\n",
            "      startCursor\n",
            "      hasPreviousPage\n",
            "      hasNextPage\n",
            "      endCursor\n",
            "    }\n",
            "  }\n",
            "}\n",
        ));

        Ok(())
    }

    #[test]
    fn filter_is_bound_as_variable_only() -> Result<()> {
        let graph = person_graph();
        let unfiltered = QuerySynthesizer::new(&graph)
            .build_list_query(&person_list_params())?;

        let mut params = person_list_params();
        let filter = serde_json::json!({"externalId": {"eq": "123"}});
        params.filter = Some(filter.clone());
        let filtered = QuerySynthesizer::new(&graph).build_list_query(&params)?;

        assert_eq!(filtered.query(), unfiltered.query());
        assert_eq!(filtered.variables().get("filter"), Some(&filter));

        Ok(())
    }

    #[test]
    fn sorted_list_query() -> Result<()> {
        let graph = person_graph();
        let mut params = person_list_params();
        params.sort = Some(SortSpec::new("title", SortDirection::Asc));
        let query = QuerySynthesizer::new(&graph).build_list_query(&params)?;

        assert!(normalize(query.query()).contains(&normalize(
            "listPerson(filter: $filter, first: 100, after: \"abcd=\", sort: {title: ASC})",
        )));

        Ok(())
    }

    #[test]
    fn cursor_is_escaped() -> Result<()> {
        let graph = person_graph();
        let mut params = ListQueryParams::new("Person", 5);
        params.cursor = Some("a\"b\\c".to_string());
        let query = QuerySynthesizer::new(&graph).build_list_query(&params)?;

        assert!(query.query().contains(r#"after: "a\"b\\c""#));

        Ok(())
    }

    #[test]
    fn resource_reference_fields_select_external_id() -> Result<()> {
        let graph = graph_from(concat!(
            "type Demo {\n",
            "  ts: TimeSeries!\n",
            "  tsList: [TimeSeries]!\n",
            "  doc: File\n",
            "  seq: Sequence\n",
            "}\n",
        ));
        let mut params = ListQueryParams::new("Demo", 100);
        params.cursor = Some("abcd=".to_string());
        let query = QuerySynthesizer::new(&graph).build_list_query(&params)?;

        let expected = format!(
            "query listDemo($filter: _ListDemoFilter) {{
              listDemo(filter: $filter, first: 100, after: \"abcd=\") {{
                items {{
                  {SYSTEM_FIELDS}
                  ts {{ externalId }}
                  tsList {{ externalId }}
                  doc {{ externalId }}
                  seq {{ externalId }}
                }}
                {PAGE_INFO}
              }}
            }}"
        );
        assert_eq!(normalize(query.query()), normalize(&expected));

        Ok(())
    }

    #[test]
    fn limit_fields_keeps_system_fields() -> Result<()> {
        let graph = graph_from("type Person { myTimeSeries: TimeSeries }");
        let mut params = ListQueryParams::new("Person", 100);
        params.limit_fields = Some(vec!["externalId".to_string()]);
        let query = QuerySynthesizer::new(&graph).build_list_query(&params)?;

        let expected = format!(
            "query listPerson($filter: _ListPersonFilter) {{
              listPerson(filter: $filter, first: 100) {{
                items {{ {SYSTEM_FIELDS} }}
                {PAGE_INFO}
              }}
            }}"
        );
        assert_eq!(normalize(query.query()), normalize(&expected));

        Ok(())
    }

    #[test]
    fn declared_system_fields_are_not_duplicated() -> Result<()> {
        let graph = graph_from("type Thing { externalId: String, label: String }");
        let query = QuerySynthesizer::new(&graph)
            .build_list_query(&ListQueryParams::new("Thing", 1))?;

        assert_eq!(query.query().matches("externalId").count(), 1);
        assert!(query.query().contains("label"));

        Ok(())
    }

    #[test]
    fn self_referencing_type_stops_after_one_level() -> Result<()> {
        let graph = person_graph();
        let query = QuerySynthesizer::new(&graph)
            .build_list_query(&ListQueryParams::new("ComplexType", 10))?;

        let expected = format!(
            "query listComplexType($filter: _ListComplexTypeFilter) {{
              listComplexType(filter: $filter, first: 10) {{
                items {{
                  {SYSTEM_FIELDS}
                  c1(first: 2) {{ items {{ {SYSTEM_FIELDS} }} }}
                  c2(first: 2) {{ items {{ {SYSTEM_FIELDS} }} }}
                  post(first: 2) {{ items {{ {SYSTEM_FIELDS} }} }}
                }}
                {PAGE_INFO}
              }}
            }}"
        );
        assert_eq!(normalize(query.query()), normalize(&expected));

        Ok(())
    }

    #[test]
    fn single_relation_selects_identity() -> Result<()> {
        let graph = graph_from(concat!(
            "type Post { author: Author }\n",
            "type Author { name: String posts: [Post] }\n",
        ));
        let query = QuerySynthesizer::new(&graph)
            .build_list_query(&ListQueryParams::new("Post", 10))?;

        assert!(normalize(query.query()).contains(&normalize(
            &format!("author {{ {SYSTEM_FIELDS} }}"),
        )));
        assert!(!query.query().contains("posts"));

        Ok(())
    }

    #[test]
    fn output_is_deterministic() -> Result<()> {
        let graph = person_graph();
        let mut params = person_list_params();
        params.sort = Some(SortSpec::new("name", SortDirection::Desc));
        params.limit_fields = Some(vec!["posts".to_string(), "name".to_string()]);

        let first = QuerySynthesizer::new(&graph).build_list_query(&params)?;
        let second = QuerySynthesizer::new(&graph.clone()).build_list_query(&params.clone())?;

        assert_eq!(first, second);

        Ok(())
    }

    #[test]
    fn unknown_type_fails() {
        let graph = person_graph();
        let result = QuerySynthesizer::new(&graph)
            .build_list_query(&ListQueryParams::new("Nope", 10));

        assert_eq!(result.unwrap_err(), QueryBuildError::UnknownType {
            type_name: "Nope".to_string(),
        });
    }

    #[test]
    fn inline_type_with_relation_list_fails() {
        // The mutator rejects this shape, so assemble it by hand.
        let mut graph = person_graph();
        let bad_inline = TypeDef::new("Badge", TypeKind::Object)
            .with_directive(DirectiveAnnotation::new("inline"))
            .with_field(FieldDef::new("posts", FieldType::new("Post", true, false)));
        graph.types.insert("Badge".to_string(), bad_inline);
        if let Some(post) = graph.types.get_mut("Post") {
            post.fields.insert(
                "badge".to_string(),
                FieldDef::new("badge", FieldType::named("Badge")),
            );
        }

        let result = QuerySynthesizer::new(&graph)
            .build_list_query(&ListQueryParams::new("Post", 10));

        assert_eq!(result.unwrap_err(), QueryBuildError::InlineTypeWithRelationList {
            field_name: "posts".to_string(),
            type_name: "Badge".to_string(),
        });
    }

    #[test]
    fn inline_fields_follow_selection_rules() -> Result<()> {
        let graph = graph_from(
            "type Post { title: String }\n\
            type Meta @inline { label: String, ts: TimeSeries, doc: File, author: Post }\n\
            type Doc { meta: Meta }\n",
        );

        let query = QuerySynthesizer::new(&graph)
            .build_list_query(&ListQueryParams::new("Doc", 10))?;

        let normalized = normalize(query.query());
        assert!(normalized.contains(&normalize(&format!(
            "meta {{ label ts {{ externalId }} doc {{ externalId }} author {{ {SYSTEM_FIELDS} }} }}",
        ))));
        Ok(())
    }

    #[test]
    fn inline_types_nest_two_deep() -> Result<()> {
        let graph = graph_from(
            "type Inner @inline { seq: Sequence, code: Int }\n\
            type Outer @inline { inner: Inner, note: String }\n\
            type Doc { outer: Outer }\n",
        );

        let query = QuerySynthesizer::new(&graph)
            .build_list_query(&ListQueryParams::new("Doc", 10))?;

        assert!(normalize(query.query()).contains(
            &normalize("outer { inner { seq { externalId } code } note }"),
        ));
        Ok(())
    }

    #[test]
    fn renamed_type_changes_operation_names() {
        let graph = SchemaMutator::rename_type(&person_graph(), "Person", "Human")
            .unwrap();
        let query = QuerySynthesizer::new(&graph)
            .build_list_query(&ListQueryParams::new("Human", 1))
            .unwrap();

        assert_eq!(query.operation_name(), "listHuman");
        assert!(query.query().contains("$filter: _ListHumanFilter"));
    }
}

mod get_by_id {
    use super::*;

    #[test]
    fn simple_get_by_id() -> Result<()> {
        let graph = person_graph();
        let query = QuerySynthesizer::new(&graph)
            .build_get_by_id_query(&GetByIdQueryParams::new("Person", "a", "b"))?;

        let expected = format!(
            "query getPersonById {{
              getPersonById(instance: {{space: \"a\", externalId: \"b\"}}) {{
                items {{
                  {SYSTEM_FIELDS}
                  name
                  posts(first: 2) {{
                    items {{ {SYSTEM_FIELDS} }}
                    {PAGE_INFO}
                  }}
                  user {{ name }}
                }}
              }}
            }}"
        );
        assert_eq!(query.operation_name(), "getPersonById");
        assert_eq!(normalize(query.query()), normalize(&expected));

        Ok(())
    }

    #[test]
    fn nested_cursor_and_filter() -> Result<()> {
        let graph = person_graph();
        let filter = serde_json::json!({"externalId": {"eq": "123"}});
        let mut params = GetByIdQueryParams::new("Person", "a", "b");
        params.nested_cursors.insert("posts".to_string(), "abcd=".to_string());
        params.nested_filters.insert("posts".to_string(), filter.clone());
        let query = QuerySynthesizer::new(&graph).build_get_by_id_query(&params)?;

        let expected = format!(
            "query getPersonById($posts: _ListPostFilter) {{
              getPersonById(instance: {{space: \"a\", externalId: \"b\"}}) {{
                items {{
                  {SYSTEM_FIELDS}
                  name
                  posts(filter: $posts, first: 2, after: \"abcd=\") {{
                    items {{ {SYSTEM_FIELDS} }}
                    {PAGE_INFO}
                  }}
                  user {{ name }}
                }}
              }}
            }}"
        );
        assert_eq!(normalize(query.query()), normalize(&expected));
        assert_eq!(query.variables().get("posts"), Some(&filter));

        Ok(())
    }

    #[test]
    fn nested_arguments_are_per_field() -> Result<()> {
        let graph = person_graph();
        let filter = serde_json::json!({"externalId": {"eq": "123"}});
        let mut params = GetByIdQueryParams::new("ComplexType", "a", "b");
        params.nested_cursors = IndexMap::from([
            ("post".to_string(), "abcd=".to_string()),
        ]);
        params.nested_filters = IndexMap::from([("c1".to_string(), filter)]);
        params.limit_fields = Some(vec!["c1".to_string(), "post".to_string()]);
        let query = QuerySynthesizer::new(&graph).build_get_by_id_query(&params)?;

        let expected = format!(
            "query getComplexTypeById($c1: _ListComplexTypeFilter) {{
              getComplexTypeById(instance: {{space: \"a\", externalId: \"b\"}}) {{
                items {{
                  {SYSTEM_FIELDS}
                  c1(filter: $c1, first: 2) {{
                    items {{ {SYSTEM_FIELDS} }}
                    {PAGE_INFO}
                  }}
                  post(first: 2, after: \"abcd=\") {{
                    items {{ {SYSTEM_FIELDS} }}
                    {PAGE_INFO}
                  }}
                }}
              }}
            }}"
        );
        assert_eq!(normalize(query.query()), normalize(&expected));

        Ok(())
    }

    #[test]
    fn filter_on_unselected_field_is_not_declared() -> Result<()> {
        let graph = person_graph();
        let mut params = GetByIdQueryParams::new("ComplexType", "a", "b");
        params.nested_filters.insert("c2".to_string(), serde_json::json!({}));
        params.limit_fields = Some(vec!["c1".to_string()]);
        let query = QuerySynthesizer::new(&graph).build_get_by_id_query(&params)?;

        assert!(query.query().starts_with("query getComplexTypeById {"));
        assert!(!query.query().contains("$c2"));
        assert!(query.variables().is_empty());

        Ok(())
    }

    #[test]
    fn nested_argument_on_scalar_fails() {
        let graph = person_graph();
        let mut params = GetByIdQueryParams::new("Person", "a", "b");
        params.nested_cursors.insert("name".to_string(), "abcd=".to_string());

        let result = QuerySynthesizer::new(&graph).build_get_by_id_query(&params);

        assert_eq!(result.unwrap_err(), QueryBuildError::InvalidNestedArgument {
            field_name: "name".to_string(),
            type_name: "Person".to_string(),
        });
    }
}

mod search {
    use super::*;

    #[test]
    fn search_query() -> Result<()> {
        let graph = person_graph();
        let mut params = SearchQueryParams::new("Person", "alice");
        params.limit = Some(25);
        let query = QuerySynthesizer::new(&graph).build_search_query(&params)?;

        let expected = format!(
            "query searchPerson($first: Int, $query: String!, $filter: _SearchPersonFilter) {{
              searchPerson(first: $first, query: $query, filter: $filter) {{
                items {{
                  {SYSTEM_FIELDS}
                  name
                  posts(first: 2) {{ items {{ {SYSTEM_FIELDS} }} }}
                  user {{ name }}
                }}
              }}
            }}"
        );
        assert_eq!(query.operation_name(), "searchPerson");
        assert_eq!(normalize(query.query()), normalize(&expected));
        assert_eq!(query.variables().get("first"), Some(&serde_json::json!(25)));
        assert_eq!(query.variables().get("query"), Some(&serde_json::json!("alice")));
        assert!(query.variables().get("filter").is_none());

        Ok(())
    }
}

mod aggregate {
    use super::*;

    #[test]
    fn aggregate_with_filter() -> Result<()> {
        let graph = person_graph();
        let query = QuerySynthesizer::new(&graph).build_aggregate_query("Person")?;

        let expected =
            "query aggregatePerson($filter: _SearchPersonFilter) {
              aggregatePerson(filter: $filter) {
                items { count { externalId } }
              }
            }";
        assert_eq!(normalize(query.query()), normalize(expected));

        Ok(())
    }

    #[test]
    fn published_rows_count() -> Result<()> {
        let graph = person_graph();
        let query = QuerySynthesizer::new(&graph)
            .build_published_rows_count_query(&["Person", "Post"])?;

        let expected =
            "query Aggregate {
              aggregatePerson { items { count { externalId } } }
              aggregatePost { items { count { externalId } } }
            }";
        assert_eq!(normalize(query.query()), normalize(expected));

        Ok(())
    }

    #[test]
    fn published_rows_count_needs_types() {
        let graph = person_graph();
        let result = QuerySynthesizer::new(&graph).build_published_rows_count_query(&[]);

        assert_eq!(result.unwrap_err(), QueryBuildError::NoTypesRequested);
    }
}
