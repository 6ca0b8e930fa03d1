use crate::ast;
use crate::builtin_types::BuiltInTypeRegistry;
use crate::schema::DirectiveAnnotation;
use crate::schema::FieldArgument;
use crate::schema::FieldDef;
use crate::schema::FieldType;
use crate::schema::SchemaError;
use crate::schema::TypeDef;
use crate::schema::TypeGraph;
use crate::schema::TypeKind;
use graphql_parser::schema::Value;
use indexmap::IndexMap;
use inherent::inherent;

type Result<T> = std::result::Result<T, SchemaError>;

/// The backend view a type was published as. Used to attach versions to
/// types while parsing.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ViewVersion {
    #[serde(rename = "externalId")]
    pub external_id: String,
    pub version: String,
}

/// Converts between raw schema text and a structured [`TypeGraph`].
///
/// The raw syntax is opaque to the rest of this crate: mutations operate on
/// the [`TypeGraph`] and callers print it back out when they need text.
pub trait SchemaSyntax {
    fn parse(&self, schema_text: &str, views: &[ViewVersion]) -> Result<TypeGraph>;

    fn print(&self, graph: &TypeGraph) -> String;
}

/// [`SchemaSyntax`] backed by `graphql-parser`'s SDL parser.
///
/// Only object and interface type definitions are loaded; any other
/// definition in the document is skipped.
#[derive(Clone, Debug, Default)]
pub struct GraphQLSchemaSyntax;
impl GraphQLSchemaSyntax {
    pub fn new() -> Self {
        Self
    }

    /// SDL declaring every built-in scalar and directive.
    pub fn builtin_preamble(&self) -> String {
        BuiltInTypeRegistry::preamble()
    }

    /// Parse and validate schema text, returning every problem found.
    pub fn validate_sdl(&self, schema_text: &str) -> Vec<SchemaError> {
        if schema_text.is_empty() {
            return vec![SchemaError::EmptySchema];
        }
        match self.load_unvalidated(schema_text, &[]) {
            Ok(graph) => graph.validation_errors(),
            Err(err) => vec![err],
        }
    }

    fn load_unvalidated(
        &self,
        schema_text: &str,
        views: &[ViewVersion],
    ) -> Result<TypeGraph> {
        let mut graph = TypeGraph::new();
        if schema_text.trim().is_empty() {
            return Ok(graph);
        }

        let ast_doc =
            graphql_parser::schema::parse_schema::<String>(schema_text)
                .map_err(|err| SchemaError::ParseError {
                    err: err.to_string(),
                })?.into_static();

        for def in ast_doc.definitions {
            let type_def = match def {
                ast::schema::Definition::TypeDefinition(
                    ast::schema::TypeDefinition::Object(obj),
                ) => type_def_from_ast(
                    TypeKind::Object,
                    obj.name,
                    obj.description,
                    &obj.directives,
                    &obj.fields,
                )?,

                ast::schema::Definition::TypeDefinition(
                    ast::schema::TypeDefinition::Interface(iface),
                ) => type_def_from_ast(
                    TypeKind::Interface,
                    iface.name,
                    iface.description,
                    &iface.directives,
                    &iface.fields,
                )?,

                _ => continue,
            };

            if graph.types.contains_key(type_def.name()) {
                return Err(SchemaError::DuplicateTypeName {
                    type_name: type_def.name,
                });
            }

            let mut type_def = type_def;
            type_def.version = views.iter()
                .find(|view| view.external_id == type_def.name)
                .map(|view| view.version.to_string());
            graph.types.insert(type_def.name.to_string(), type_def);
        }

        Ok(graph)
    }
}

#[inherent]
impl SchemaSyntax for GraphQLSchemaSyntax {
    /// Parse SDL into a validated [`TypeGraph`]. Empty (or whitespace-only)
    /// text yields an empty graph.
    pub fn parse(
        &self,
        schema_text: &str,
        views: &[ViewVersion],
    ) -> Result<TypeGraph> {
        let graph = self.load_unvalidated(schema_text, views)?;
        graph.validate()?;
        log::trace!("Parsed schema with {} types.", graph.len());
        Ok(graph)
    }

    /// Print the graph as SDL. The output is deterministic: types and
    /// fields appear in declaration order.
    pub fn print(&self, graph: &TypeGraph) -> String {
        graph.types()
            .map(type_def_to_sdl)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn type_def_to_sdl(type_def: &TypeDef) -> String {
    let mut sdl = String::new();
    if let Some(description) = type_def.description() {
        sdl.push_str(&quote_string(description));
        sdl.push('\n');
    }
    sdl.push_str(type_def.kind().keyword());
    sdl.push(' ');
    sdl.push_str(type_def.name());
    for directive in type_def.directives() {
        sdl.push(' ');
        sdl.push_str(&directive.to_sdl_string());
    }

    if type_def.fields.is_empty() {
        sdl.push('\n');
        return sdl;
    }

    sdl.push_str(" {\n");
    for field in type_def.fields() {
        if let Some(description) = field.description() {
            sdl.push_str("  ");
            sdl.push_str(&quote_string(description));
            sdl.push('\n');
        }
        sdl.push_str("  ");
        sdl.push_str(&field.to_sdl_string());
        sdl.push('\n');
    }
    sdl.push_str("}\n");
    sdl
}

fn type_def_from_ast(
    kind: TypeKind,
    name: String,
    description: Option<String>,
    directives: &[ast::schema::Directive],
    fields: &[ast::schema::Field],
) -> Result<TypeDef> {
    let mut field_map = IndexMap::new();
    for field in fields {
        if field_map.contains_key(&field.name) {
            return Err(SchemaError::DuplicateFieldName {
                field_name: field.name.to_string(),
                type_name: name,
            });
        }

        let field_type = field_type_from_ast(&name, &field.name, &field.field_type)?;
        field_map.insert(field.name.to_string(), FieldDef {
            arguments: field.arguments.iter()
                .map(field_argument_from_ast)
                .collect(),
            description: field.description.to_owned(),
            directives: directives_from_ast(&field.directives),
            field_type,
            name: field.name.to_string(),
        });
    }

    Ok(TypeDef {
        description,
        directives: directives_from_ast(directives),
        fields: field_map,
        kind,
        name,
        version: None,
    })
}

fn field_type_from_ast(
    type_name: &str,
    field_name: &str,
    ast_type: &ast::schema::Type,
) -> Result<FieldType> {
    use graphql_parser::schema::Type;

    let (non_null, inner) = match ast_type {
        Type::NonNullType(inner) => (true, inner.as_ref()),
        other => (false, other),
    };

    match inner {
        Type::NamedType(name) => Ok(FieldType::new(name, false, non_null)),

        Type::ListType(item) => match item.as_ref() {
            Type::NamedType(name) => Ok(FieldType::new(name, true, non_null)),
            Type::NonNullType(named) => match named.as_ref() {
                Type::NamedType(name) => Ok(FieldType::new(name, true, non_null)),
                _ => Err(SchemaError::UnsupportedNestedList {
                    field_name: field_name.to_string(),
                    type_name: type_name.to_string(),
                }),
            },
            Type::ListType(_) => Err(SchemaError::UnsupportedNestedList {
                field_name: field_name.to_string(),
                type_name: type_name.to_string(),
            }),
        },

        // A non-null wrapper directly inside another is not valid SDL and
        // is rejected by the parser before reaching this point.
        Type::NonNullType(_) => Err(SchemaError::UnsupportedNestedList {
            field_name: field_name.to_string(),
            type_name: type_name.to_string(),
        }),
    }
}

fn field_argument_from_ast(arg: &ast::schema::InputValue) -> FieldArgument {
    FieldArgument {
        default_value: arg.default_value.as_ref().map(value_to_literal),
        name: arg.name.to_string(),
        type_annotation: ast_type_to_sdl(&arg.value_type),
    }
}

fn ast_type_to_sdl(ast_type: &ast::schema::Type) -> String {
    use graphql_parser::schema::Type;
    match ast_type {
        Type::NamedType(name) => name.to_string(),
        Type::ListType(inner) => format!("[{}]", ast_type_to_sdl(inner)),
        Type::NonNullType(inner) => format!("{}!", ast_type_to_sdl(inner)),
    }
}

fn directives_from_ast(
    directives: &[ast::schema::Directive],
) -> Vec<DirectiveAnnotation> {
    directives.iter()
        .map(|directive| DirectiveAnnotation {
            arguments: directive.arguments.iter()
                .map(|(name, value)| (name.to_string(), value_to_literal(value)))
                .collect(),
            name: directive.name.to_string(),
        })
        .collect()
}

fn value_to_literal(value: &Value<'static, String>) -> String {
    match value {
        Value::Variable(name) => format!("${name}"),
        Value::Int(num) => num.as_i64()
            .map(|n| n.to_string())
            .unwrap_or_default(),
        Value::Float(num) => num.to_string(),
        Value::String(s) => quote_string(s),
        Value::Boolean(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Enum(name) => name.to_string(),
        Value::List(items) => format!(
            "[{}]",
            items.iter().map(value_to_literal).collect::<Vec<_>>().join(", "),
        ),
        Value::Object(entries) => format!(
            "{{{}}}",
            entries.iter()
                .map(|(key, value)| format!("{key}: {}", value_to_literal(value)))
                .collect::<Vec<_>>()
                .join(", "),
        ),
    }
}

/// Render `s` as a GraphQL string literal.
pub(crate) fn quote_string(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
