/// Distinguishes the two kinds of entries held by the
/// [`BuiltInTypeRegistry`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum BuiltInTypeKind {
    Scalar,
    /// A directive that annotates a field definition.
    FieldDirective,
    /// A directive that annotates a type definition.
    TypeDirective,
}

/// A single scalar or directive that every data model understands without
/// declaring it.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BuiltInType {
    pub name: &'static str,
    pub kind: BuiltInTypeKind,
    /// Storage-level type tag understood by the backend.
    pub wire_type: &'static str,
    /// Type hint used when generating client code for this type.
    pub type_hint: &'static str,
    /// Declaration emitted verbatim in a schema preamble. Only directives
    /// carry one; scalars are emitted as `scalar <name>`.
    pub body: Option<&'static str>,
}
impl BuiltInType {
    pub fn is_directive(&self) -> bool {
        !matches!(self.kind, BuiltInTypeKind::Scalar)
    }

    /// The SDL declaration for this entry.
    pub fn declaration(&self) -> String {
        match self.body {
            Some(body) => body.to_string(),
            None => format!("scalar {}", self.name),
        }
    }
}

const fn scalar(
    name: &'static str,
    wire_type: &'static str,
    type_hint: &'static str,
) -> BuiltInType {
    BuiltInType {
        name,
        kind: BuiltInTypeKind::Scalar,
        wire_type,
        type_hint,
        body: None,
    }
}

const BUILTIN_TYPES: &[BuiltInType] = &[
    scalar("String", "text", "string"),
    scalar("Int", "int32", "number"),
    scalar("Int64", "int64", "number"),
    scalar("Float", "float64", "number"),
    scalar("Float32", "float32", "number"),
    scalar("Float64", "float64", "number"),
    scalar("Timestamp", "timestamp", "string"),
    scalar("JSONObject", "json", "object"),
    scalar("Date", "date", "string"),
    scalar("Boolean", "boolean", "boolean"),
    scalar("TimeSeries", "timeseries", "string"),
    BuiltInType {
        name: "view",
        kind: BuiltInTypeKind::FieldDirective,
        wire_type: "directive",
        type_hint: "",
        body: Some(
            "directive @view(space: String, version: String) \
             on OBJECT | INTERFACE | FIELD_DEFINITION",
        ),
    },
    BuiltInType {
        name: "mapping",
        kind: BuiltInTypeKind::FieldDirective,
        wire_type: "directive",
        type_hint: "",
        body: Some(
            "directive @mapping(space: String, container: String, \
             property: String) on FIELD_DEFINITION",
        ),
    },
    BuiltInType {
        name: "relation",
        kind: BuiltInTypeKind::FieldDirective,
        wire_type: "directive",
        type_hint: "",
        body: Some(
            "directive @relation(type: JSONObject, name: String, \
             direction: String) on FIELD_DEFINITION",
        ),
    },
    BuiltInType {
        name: "container",
        kind: BuiltInTypeKind::TypeDirective,
        wire_type: "directive",
        type_hint: "",
        body: Some(
            "directive @container(constraints: [JSONObject], \
             indexes: [JSONObject]) on OBJECT | INTERFACE",
        ),
    },
];

/// Scalars which reference a resource living outside of the data model.
/// These are always selected as `field { externalId }` and never as a bare
/// scalar.
pub const RESOURCE_REFERENCE_TYPE_NAMES: &[&str] = &[
    "TimeSeries",
    "File",
    "Sequence",
];

/// Static table of the scalars and directives known to every data model.
///
/// A field type whose name is absent from this registry is a custom type
/// and must name a type defined in the same
/// [`TypeGraph`](crate::schema::TypeGraph).
pub struct BuiltInTypeRegistry;
impl BuiltInTypeRegistry {
    pub fn all() -> &'static [BuiltInType] {
        BUILTIN_TYPES
    }

    pub fn get(name: &str) -> Option<&'static BuiltInType> {
        BUILTIN_TYPES.iter().find(|builtin| builtin.name == name)
    }

    /// True when `name` is a built-in scalar (directives are not types).
    pub fn is_builtin_scalar(name: &str) -> bool {
        Self::get(name).is_some_and(|builtin| !builtin.is_directive())
    }

    /// True when `name` may appear as a field type without a matching
    /// type definition in the graph.
    pub fn is_known_field_type(name: &str) -> bool {
        Self::is_builtin_scalar(name)
            || RESOURCE_REFERENCE_TYPE_NAMES.contains(&name)
    }

    pub fn is_resource_reference(name: &str) -> bool {
        RESOURCE_REFERENCE_TYPE_NAMES.contains(&name)
    }

    pub fn scalars() -> impl Iterator<Item = &'static BuiltInType> {
        BUILTIN_TYPES.iter().filter(|builtin| !builtin.is_directive())
    }

    pub fn directives() -> impl Iterator<Item = &'static BuiltInType> {
        BUILTIN_TYPES.iter().filter(|builtin| builtin.is_directive())
    }

    /// Every registry declaration, scalars first, one per line.
    pub fn preamble() -> String {
        BUILTIN_TYPES.iter()
            .map(BuiltInType::declaration)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
