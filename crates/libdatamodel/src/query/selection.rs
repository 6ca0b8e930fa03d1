/// A single field within a synthesized selection set, with its arguments
/// already rendered as GraphQL literal (or variable) text.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct FieldSelection {
    arguments: Vec<(String, String)>,
    name: String,
    selection_set: Vec<FieldSelection>,
}
impl FieldSelection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            arguments: vec![],
            name: name.into(),
            selection_set: vec![],
        }
    }

    pub fn leaves<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<Self> {
        names.into_iter().map(Self::new).collect()
    }

    pub fn with_argument(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.arguments.push((name.into(), value.into()));
        self
    }

    pub fn with_selection(mut self, selection: FieldSelection) -> Self {
        self.selection_set.push(selection);
        self
    }

    pub fn with_selections(mut self, selections: Vec<FieldSelection>) -> Self {
        self.selection_set.extend(selections);
        self
    }

    fn write(&self, out: &mut String, depth: usize) {
        push_indent(out, depth);
        out.push_str(&self.name);
        if !self.arguments.is_empty() {
            let args = self.arguments.iter()
                .map(|(name, value)| format!("{name}: {value}"))
                .collect::<Vec<_>>()
                .join(", ");
            out.push('(');
            out.push_str(&args);
            out.push(')');
        }
        if !self.selection_set.is_empty() {
            out.push_str(" {\n");
            for selection in &self.selection_set {
                selection.write(out, depth + 1);
            }
            push_indent(out, depth);
            out.push('}');
        }
        out.push('\n');
    }
}

/// A named query operation with a single root field.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct QueryOperation {
    pub name: String,
    pub root: FieldSelection,
    /// `(variable name, type annotation)` pairs, without the `$` prefix.
    pub variables: Vec<(String, String)>,
}
impl QueryOperation {
    pub fn to_query_string(&self) -> String {
        Self::render(&self.name, &self.variables, std::slice::from_ref(&self.root))
    }

    /// Render an operation with several root fields.
    pub fn render(
        name: &str,
        variables: &[(String, String)],
        roots: &[FieldSelection],
    ) -> String {
        let mut out = format!("query {name}");
        if !variables.is_empty() {
            let vars = variables.iter()
                .map(|(name, type_)| format!("${name}: {type_}"))
                .collect::<Vec<_>>()
                .join(", ");
            out.push('(');
            out.push_str(&vars);
            out.push(')');
        }
        out.push_str(" {\n");
        for root in roots {
            root.write(&mut out, 1);
        }
        out.push_str("}\n");
        out
    }
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}
