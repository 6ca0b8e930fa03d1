use crate::schema::FieldDef;
use indexmap::IndexMap;

/// Name of the type-level directive marking a type as inline: instances of
/// an inline type are embedded in their parent's selection rather than
/// fetched through a relation.
pub const INLINE_TYPE_DIRECTIVE_NAME: &str = "inline";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeKind {
    #[default]
    Object,
    Interface,
}
impl TypeKind {
    /// The SDL keyword introducing a definition of this kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Object => "type",
            Self::Interface => "interface",
        }
    }
}

/// A directive applied to a type or field, e.g. `@view(version: "2")`.
/// Argument values are kept as GraphQL literal text.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DirectiveAnnotation {
    pub(crate) arguments: IndexMap<String, String>,
    pub(crate) name: String,
}
impl DirectiveAnnotation {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            arguments: IndexMap::new(),
            name: name.as_ref().trim_start_matches('@').to_string(),
        }
    }

    pub fn with_argument(
        mut self,
        name: impl Into<String>,
        literal: impl Into<String>,
    ) -> Self {
        self.arguments.insert(name.into(), literal.into());
        self
    }

    pub fn arguments(&self) -> &IndexMap<String, String> {
        &self.arguments
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn to_sdl_string(&self) -> String {
        if self.arguments.is_empty() {
            return format!("@{}", self.name);
        }
        let args = self.arguments.iter()
            .map(|(name, literal)| format!("{name}: {literal}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("@{}({args})", self.name)
    }
}

/// A type definition within a [`TypeGraph`](crate::schema::TypeGraph).
///
/// Fields are keyed by name and kept in declaration order.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TypeDef {
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) fields: IndexMap<String, FieldDef>,
    pub(crate) kind: TypeKind,
    pub(crate) name: String,
    pub(crate) version: Option<String>,
}
impl TypeDef {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            description: None,
            directives: vec![],
            fields: IndexMap::new(),
            kind,
            name: name.into(),
            version: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_directive(mut self, directive: DirectiveAnnotation) -> Self {
        self.directives.push(directive);
        self
    }

    /// Append a field, replacing any field already using the same name.
    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.insert(field.name.to_string(), field);
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn has_directive(&self, name: &str) -> bool {
        self.directives.iter().any(|d| d.name == name)
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.values()
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }

    pub fn is_inline(&self) -> bool {
        self.has_directive(INLINE_TYPE_DIRECTIVE_NAME)
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Version of the backend view this type was loaded from, if any.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}
