use crate::schema::FieldProps;
use crate::schema::SchemaMutator;
use crate::schema::TypeGraph;
use crate::schema::TypeKind;
use proptest::prelude::*;

const SCALARS: &[&str] = &["String", "Int64", "Timestamp", "TimeSeries", "File"];

/// (field target, is_list) pairs per type. Targets below `SCALARS.len()`
/// name a scalar; the rest name one of the generated types.
type GraphShape = Vec<Vec<(usize, bool)>>;

fn graph_shape() -> impl Strategy<Value = GraphShape> {
    (1usize..6).prop_flat_map(|num_types| {
        prop::collection::vec(
            prop::collection::vec(
                (0..SCALARS.len() + num_types, any::<bool>()),
                0..5,
            ),
            num_types,
        )
    })
}

fn build_graph(shape: &GraphShape) -> TypeGraph {
    let mut graph = TypeGraph::new();
    for type_idx in 0..shape.len() {
        let (next, _) = SchemaMutator::add_type(
            &graph,
            &format!("T{type_idx}"),
            TypeKind::Object,
            None,
        ).expect("generated type names are unique");
        graph = next;
    }

    for (type_idx, fields) in shape.iter().enumerate() {
        for (field_idx, (target, is_list)) in fields.iter().enumerate() {
            let target_name =
                if *target < SCALARS.len() {
                    SCALARS[*target].to_string()
                } else {
                    format!("T{}", target - SCALARS.len())
                };
            let mut props = FieldProps::new(target_name);
            props.is_list = *is_list;
            graph = SchemaMutator::add_field(
                &graph,
                &format!("T{type_idx}"),
                &format!("f{field_idx}"),
                props,
            ).expect("generated field references resolve");
        }
    }
    graph
}

proptest! {
    #[test]
    fn remove_type_leaves_no_references(
        shape in graph_shape(),
        pick in any::<prop::sample::Index>(),
    ) {
        let graph = build_graph(&shape);
        let removed = format!("T{}", pick.index(shape.len()));

        let graph = SchemaMutator::remove_type(&graph, &removed).unwrap();

        prop_assert!(!graph.has_type(&removed));
        prop_assert!(
            graph.types()
                .flat_map(|type_| type_.fields())
                .all(|field| field.field_type().name() != removed)
        );
        prop_assert!(graph.validate().is_ok());
    }

    #[test]
    fn rename_type_round_trips(
        shape in graph_shape(),
        pick in any::<prop::sample::Index>(),
    ) {
        let graph = build_graph(&shape);
        let original = format!("T{}", pick.index(shape.len()));

        let renamed = SchemaMutator::rename_type(&graph, &original, "Renamed").unwrap();
        prop_assert!(
            renamed.types()
                .flat_map(|type_| type_.fields())
                .all(|field| field.field_type().name() != original)
        );

        let restored = SchemaMutator::rename_type(&renamed, "Renamed", &original).unwrap();
        prop_assert_eq!(restored, graph);
    }
}
