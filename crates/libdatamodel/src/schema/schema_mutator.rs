use crate::builtin_types::BuiltInType;
use crate::builtin_types::BuiltInTypeRegistry;
use crate::schema::DirectiveAnnotation;
use crate::schema::FieldArgument;
use crate::schema::FieldDef;
use crate::schema::FieldType;
use crate::schema::SchemaError;
use crate::schema::TypeDef;
use crate::schema::TypeGraph;
use crate::schema::TypeKind;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaError>;

/// Properties of a field passed to [`SchemaMutator::add_field`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldProps {
    pub arguments: Vec<FieldArgument>,
    pub description: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub is_list: bool,
    pub is_non_null: bool,
    pub type_name: String,
}
impl FieldProps {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            ..Default::default()
        }
    }

    pub fn list(mut self) -> Self {
        self.is_list = true;
        self
    }

    pub fn non_null(mut self) -> Self {
        self.is_non_null = true;
        self
    }

    pub fn with_directive(mut self, directive: DirectiveAnnotation) -> Self {
        self.directives.push(directive);
        self
    }
}
impl From<FieldProps> for FieldUpdates {
    fn from(props: FieldProps) -> Self {
        Self {
            arguments: Some(props.arguments),
            description: props.description,
            directives: Some(props.directives),
            is_list: Some(props.is_list),
            is_non_null: Some(props.is_non_null),
            name: None,
            type_name: Some(props.type_name),
        }
    }
}

/// Partial changes applied by [`SchemaMutator::update_field`]. `None`
/// leaves the corresponding property untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldUpdates {
    pub arguments: Option<Vec<FieldArgument>>,
    pub description: Option<String>,
    pub directives: Option<Vec<DirectiveAnnotation>>,
    pub is_list: Option<bool>,
    pub is_non_null: Option<bool>,
    pub name: Option<String>,
    pub type_name: Option<String>,
}

/// Partial changes applied by [`SchemaMutator::update_type`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypeUpdates {
    pub description: Option<String>,
    /// `Some(vec![])` removes every directive. Otherwise each listed
    /// directive replaces a same-named directive or is appended.
    pub directives: Option<Vec<DirectiveAnnotation>>,
    pub name: Option<String>,
}

/// Structured edit operations over a [`TypeGraph`].
///
/// Every operation is pure: the input graph is left untouched and a new,
/// fully validated graph is returned. A failed operation returns an error
/// and no graph at all, so partially applied edits are never observable.
pub struct SchemaMutator;
impl SchemaMutator {
    /// Add a new type with an optional type-level directive (given by name,
    /// with or without a leading `@`).
    pub fn add_type(
        graph: &TypeGraph,
        name: &str,
        kind: TypeKind,
        directive: Option<&str>,
    ) -> Result<(TypeGraph, TypeDef)> {
        check_new_type_name(graph, name)?;

        let mut type_def = TypeDef::new(name, kind);
        if let Some(directive) = directive {
            type_def = type_def.with_directive(DirectiveAnnotation::new(directive));
        }

        let mut new_graph = graph.clone();
        new_graph.types.insert(name.to_string(), type_def.clone());
        Ok((new_graph, type_def))
    }

    /// Rename a type and rewrite every field referencing it in the same
    /// pass. The renamed type keeps its position in the graph.
    pub fn rename_type(
        graph: &TypeGraph,
        old_name: &str,
        new_name: &str,
    ) -> Result<TypeGraph> {
        graph.type_or_err(old_name)?;
        if old_name == new_name {
            return Ok(graph.clone());
        }
        check_new_type_name(graph, new_name)?;

        let types = graph.types.iter()
            .map(|(key, type_)| {
                let mut type_ = type_.clone();
                if key == old_name {
                    type_.name = new_name.to_string();
                }
                for field in type_.fields.values_mut() {
                    if field.field_type.name == old_name {
                        field.field_type.set_name(new_name);
                    }
                }
                (type_.name.to_string(), type_)
            })
            .collect::<IndexMap<_, _>>();

        finish(TypeGraph { types })
    }

    /// Remove a type after first removing every field, on any other type,
    /// whose type references it.
    pub fn remove_type(graph: &TypeGraph, name: &str) -> Result<TypeGraph> {
        graph.type_or_err(name)?;

        let mut new_graph = graph.clone();
        for type_ in new_graph.types.values_mut() {
            type_.fields.retain(|_, field| field.field_type.name != name);
        }
        new_graph.types.shift_remove(name);
        finish(new_graph)
    }

    /// Update a type's name, description, or directives. A name change is
    /// applied through [`SchemaMutator::rename_type`].
    pub fn update_type(
        graph: &TypeGraph,
        type_name: &str,
        updates: TypeUpdates,
    ) -> Result<TypeGraph> {
        graph.type_or_err(type_name)?;

        let mut new_graph = graph.clone();
        if let Some(type_) = new_graph.types.get_mut(type_name) {
            if let Some(description) = updates.description {
                type_.description = Some(description);
            }
            if let Some(directives) = updates.directives {
                merge_directives(&mut type_.directives, directives);
            }
        }

        match updates.name {
            Some(new_name) if new_name != type_name =>
                Self::rename_type(&new_graph, type_name, &new_name),
            _ => finish(new_graph),
        }
    }

    /// Insert a complete type definition under `name`, replacing (in
    /// place) any type already using that name.
    pub fn set_type(
        graph: &TypeGraph,
        name: &str,
        type_def: TypeDef,
    ) -> Result<TypeGraph> {
        if !graph.has_type(name) {
            check_new_type_name(graph, name)?;
        }
        for field_name in type_def.fields.keys() {
            check_field_name(name, field_name)?;
        }

        let mut type_def = type_def;
        type_def.name = name.to_string();

        let mut new_graph = graph.clone();
        new_graph.types.insert(name.to_string(), type_def);
        finish(new_graph)
    }

    /// Add a field to a type. If the type already has a field with that
    /// name the call degrades to [`SchemaMutator::update_field`].
    pub fn add_field(
        graph: &TypeGraph,
        type_name: &str,
        field_name: &str,
        props: FieldProps,
    ) -> Result<TypeGraph> {
        let type_ = graph.type_or_err(type_name)?;
        if type_.fields.contains_key(field_name) {
            log::trace!(
                "Field `{type_name}.{field_name}` already exists; updating it \
                instead."
            );
            return Self::update_field(graph, type_name, field_name, props.into());
        }
        check_field_name(type_name, field_name)?;
        check_field_type(graph, type_name, field_name, &props.type_name)?;

        let field = FieldDef {
            arguments: props.arguments,
            description: props.description,
            directives: props.directives,
            field_type: FieldType::new(
                props.type_name,
                props.is_list,
                props.is_non_null,
            ),
            name: field_name.to_string(),
        };

        let mut new_graph = graph.clone();
        if let Some(type_) = new_graph.types.get_mut(type_name) {
            type_.fields.insert(field_name.to_string(), field);
        }
        finish(new_graph)
    }

    pub fn update_field(
        graph: &TypeGraph,
        type_name: &str,
        field_name: &str,
        updates: FieldUpdates,
    ) -> Result<TypeGraph> {
        let type_ = graph.type_or_err(type_name)?;
        let mut field = type_.fields.get(field_name).cloned().ok_or_else(|| {
            SchemaError::UnknownField {
                field_name: field_name.to_string(),
                type_name: type_name.to_string(),
            }
        })?;

        if let Some(new_type_name) = &updates.type_name {
            check_field_type(graph, type_name, field_name, new_type_name)?;
            field.field_type.set_name(new_type_name);
        }
        if let Some(is_list) = updates.is_list {
            field.field_type.is_list = is_list;
        }
        if let Some(is_non_null) = updates.is_non_null {
            field.field_type.is_non_null = is_non_null;
        }
        if let Some(description) = updates.description {
            field.description = Some(description);
        }
        if let Some(directives) = updates.directives {
            field.directives = directives;
        }
        if let Some(arguments) = updates.arguments {
            field.arguments = arguments;
        }

        let mut new_graph = graph.clone();
        let Some(type_) = new_graph.types.get_mut(type_name) else {
            return Err(SchemaError::UnknownType {
                type_name: type_name.to_string(),
            });
        };

        match updates.name {
            Some(new_name) if new_name != field_name => {
                check_field_name(type_name, &new_name)?;
                if type_.fields.contains_key(&new_name) {
                    return Err(SchemaError::DuplicateFieldName {
                        field_name: new_name,
                        type_name: type_name.to_string(),
                    });
                }
                let index = type_.fields.get_index_of(field_name).unwrap_or(0);
                type_.fields.shift_remove(field_name);
                field.name = new_name.to_string();
                type_.fields.shift_insert(index, new_name, field);
            },
            _ => {
                type_.fields.insert(field_name.to_string(), field);
            },
        }

        finish(new_graph)
    }

    pub fn remove_field(
        graph: &TypeGraph,
        type_name: &str,
        field_name: &str,
    ) -> Result<TypeGraph> {
        if !graph.type_or_err(type_name)?.fields.contains_key(field_name) {
            return Err(SchemaError::UnknownField {
                field_name: field_name.to_string(),
                type_name: type_name.to_string(),
            });
        }

        let mut new_graph = graph.clone();
        if let Some(type_) = new_graph.types.get_mut(type_name) {
            type_.fields.shift_remove(field_name);
        }
        finish(new_graph)
    }

    /// Names of every type defined in the graph, in declaration order.
    pub fn get_custom_type_names(graph: &TypeGraph) -> Vec<String> {
        graph.types.keys().cloned().collect()
    }

    pub fn get_builtin_types() -> &'static [BuiltInType] {
        BuiltInTypeRegistry::all()
    }

    pub fn clear() -> TypeGraph {
        TypeGraph::new()
    }
}

fn finish(graph: TypeGraph) -> Result<TypeGraph> {
    graph.validate()?;
    Ok(graph)
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => (),
        _ => return false,
    }
    !name.starts_with("__")
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

fn check_new_type_name(graph: &TypeGraph, name: &str) -> Result<()> {
    if !is_valid_name(name) {
        return Err(SchemaError::InvalidTypeName {
            type_name: name.to_string(),
        });
    }
    if BuiltInTypeRegistry::get(name).is_some()
        || BuiltInTypeRegistry::is_known_field_type(name) {
        return Err(SchemaError::ReservedTypeName {
            type_name: name.to_string(),
        });
    }
    if graph.has_type(name) {
        return Err(SchemaError::DuplicateTypeName {
            type_name: name.to_string(),
        });
    }
    Ok(())
}

fn check_field_name(type_name: &str, field_name: &str) -> Result<()> {
    if is_valid_name(field_name) {
        Ok(())
    } else {
        Err(SchemaError::InvalidFieldName {
            field_name: field_name.to_string(),
            type_name: type_name.to_string(),
        })
    }
}

fn check_field_type(
    graph: &TypeGraph,
    type_name: &str,
    field_name: &str,
    referenced_type: &str,
) -> Result<()> {
    if graph.resolves_type_name(referenced_type) {
        Ok(())
    } else {
        Err(SchemaError::DanglingTypeReference {
            field_name: field_name.to_string(),
            referenced_type: referenced_type.to_string(),
            type_name: type_name.to_string(),
        })
    }
}

fn merge_directives(
    existing: &mut Vec<DirectiveAnnotation>,
    updates: Vec<DirectiveAnnotation>,
) {
    if updates.is_empty() {
        existing.clear();
        return;
    }
    for directive in updates {
        match existing.iter_mut().find(|d| d.name == directive.name) {
            Some(current) => *current = directive,
            None => existing.push(directive),
        }
    }
}
