use crate::builtin_types::BuiltInTypeRegistry;
use crate::schema::DirectiveAnnotation;

/// The annotated type of a [`FieldDef`].
///
/// Only a single level of list nesting is representable; `is_non_null`
/// applies to the outermost type (`[Post]!` is a non-null list).
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldType {
    pub(crate) is_custom: bool,
    pub(crate) is_list: bool,
    pub(crate) is_non_null: bool,
    pub(crate) name: String,
}
impl FieldType {
    pub fn new(name: impl Into<String>, is_list: bool, is_non_null: bool) -> Self {
        let name = name.into();
        Self {
            is_custom: !BuiltInTypeRegistry::is_builtin_scalar(&name),
            is_list,
            is_non_null,
            name,
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, false, false)
    }

    /// True iff the type name is absent from the
    /// [`BuiltInTypeRegistry`].
    pub fn is_custom(&self) -> bool {
        self.is_custom
    }

    pub fn is_list(&self) -> bool {
        self.is_list
    }

    pub fn is_non_null(&self) -> bool {
        self.is_non_null
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
        self.is_custom = !BuiltInTypeRegistry::is_builtin_scalar(name);
    }

    pub fn to_sdl_string(&self) -> String {
        let base =
            if self.is_list {
                format!("[{}]", self.name)
            } else {
                self.name.to_string()
            };

        if self.is_non_null {
            format!("{base}!")
        } else {
            base
        }
    }
}

/// An argument declared on a field definition. The type annotation and
/// default value are kept as raw SDL text.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldArgument {
    pub default_value: Option<String>,
    pub name: String,
    pub type_annotation: String,
}
impl FieldArgument {
    pub fn to_sdl_string(&self) -> String {
        match &self.default_value {
            Some(default) =>
                format!("{}: {} = {default}", self.name, self.type_annotation),
            None => format!("{}: {}", self.name, self.type_annotation),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldDef {
    pub(crate) arguments: Vec<FieldArgument>,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) field_type: FieldType,
    pub(crate) name: String,
}
impl FieldDef {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            arguments: vec![],
            description: None,
            directives: vec![],
            field_type,
            name: name.into(),
        }
    }

    pub fn arguments(&self) -> &Vec<FieldArgument> {
        &self.arguments
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn field_type(&self) -> &FieldType {
        &self.field_type
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// A field whose type is another type in the graph and which is
    /// therefore selected through a relation.
    pub fn is_relation(&self) -> bool {
        self.field_type.is_custom
            && !BuiltInTypeRegistry::is_resource_reference(&self.field_type.name)
    }

    pub fn to_sdl_string(&self) -> String {
        let mut sdl = self.name.to_string();
        if !self.arguments.is_empty() {
            let args = self.arguments.iter()
                .map(FieldArgument::to_sdl_string)
                .collect::<Vec<_>>()
                .join(", ");
            sdl.push_str(&format!("({args})"));
        }
        sdl.push_str(": ");
        sdl.push_str(&self.field_type.to_sdl_string());
        for directive in &self.directives {
            sdl.push(' ');
            sdl.push_str(&directive.to_sdl_string());
        }
        sdl
    }
}
