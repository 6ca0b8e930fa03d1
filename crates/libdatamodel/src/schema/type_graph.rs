use crate::builtin_types::BuiltInTypeRegistry;
use crate::schema::FieldDef;
use crate::schema::SchemaError;
use crate::schema::TypeDef;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaError>;

/// An immutable, name-keyed graph of [`TypeDef`]s.
///
/// Types refer to one another by name only, never by pointer, so
/// self-referential and mutually-referential types need no special
/// handling. New graphs are produced by
/// [`SchemaMutator`](crate::schema::SchemaMutator) operations or by parsing
/// schema text through a [`SchemaSyntax`](crate::schema::SchemaSyntax).
///
/// Equality is structural and insensitive to declaration order.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TypeGraph {
    pub(crate) types: IndexMap<String, TypeDef>,
}
impl TypeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_field(&self, type_name: &str, field_name: &str) -> Option<&FieldDef> {
        self.types.get(type_name).and_then(|type_| type_.field(field_name))
    }

    pub fn get_type(&self, type_name: &str) -> Option<&TypeDef> {
        self.types.get(type_name)
    }

    pub fn has_field(&self, type_name: &str, field_name: &str) -> bool {
        self.get_field(type_name, field_name).is_some()
    }

    pub fn has_type(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn type_names(&self) -> Vec<&str> {
        self.types.keys().map(String::as_str).collect()
    }

    pub fn types(&self) -> impl Iterator<Item = &TypeDef> {
        self.types.values()
    }

    pub(crate) fn type_or_err(&self, type_name: &str) -> Result<&TypeDef> {
        self.types.get(type_name).ok_or_else(|| SchemaError::UnknownType {
            type_name: type_name.to_string(),
        })
    }

    /// True when a field may use `type_name` as its type within this graph.
    pub fn resolves_type_name(&self, type_name: &str) -> bool {
        BuiltInTypeRegistry::is_known_field_type(type_name)
            || self.types.contains_key(type_name)
    }

    /// Check every graph invariant, failing on the first violation found.
    pub fn validate(&self) -> Result<()> {
        match self.validation_errors().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Collect every invariant violation in this graph, in declaration
    /// order.
    pub fn validation_errors(&self) -> Vec<SchemaError> {
        let mut errors = vec![];
        for (key, type_) in &self.types {
            if key != &type_.name {
                errors.push(SchemaError::MismatchedTypeKey {
                    key: key.to_string(),
                    type_name: type_.name.to_string(),
                });
            }

            for (field_key, field) in &type_.fields {
                if field_key != &field.name {
                    errors.push(SchemaError::InvalidFieldName {
                        field_name: field_key.to_string(),
                        type_name: type_.name.to_string(),
                    });
                }

                let referenced_type = field.field_type.name();
                if !self.resolves_type_name(referenced_type) {
                    errors.push(SchemaError::DanglingTypeReference {
                        field_name: field.name.to_string(),
                        referenced_type: referenced_type.to_string(),
                        type_name: type_.name.to_string(),
                    });
                }

                if type_.is_inline()
                    && field.is_relation()
                    && field.field_type.is_list() {
                    errors.push(SchemaError::InlineTypeWithRelationList {
                        field_name: field.name.to_string(),
                        type_name: type_.name.to_string(),
                    });
                }
            }
        }
        errors
    }
}
