/// A synthesized query document together with the variables it expects.
#[derive(Clone, Debug, PartialEq)]
pub struct CompiledQuery {
    pub(crate) operation_name: String,
    pub(crate) query: String,
    pub(crate) variables: serde_json::Map<String, serde_json::Value>,
}
impl CompiledQuery {
    /// Name of the operation, which is also the key of the operation's
    /// result in the response's `data` object.
    pub fn operation_name(&self) -> &str {
        self.operation_name.as_str()
    }

    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    pub fn variables(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.variables
    }

    pub fn into_query(self) -> String {
        self.query
    }
}
impl std::fmt::Display for CompiledQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.query)
    }
}
