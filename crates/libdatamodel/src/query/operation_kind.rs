/// The kinds of query document a
/// [`QuerySynthesizer`](crate::query::QuerySynthesizer) can produce. The kind
/// determines the operation's name and the shape of its parameters.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum OperationKind {
    Get,
    List,
    Search,
}
impl OperationKind {
    /// The operation name exposed by the backend for `type_name`, e.g.
    /// `listPerson`, `searchPerson` or `getPersonById`.
    pub fn operation_name(&self, type_name: &str) -> String {
        match self {
            Self::Get => format!("get{type_name}ById"),
            Self::List => format!("list{type_name}"),
            Self::Search => format!("search{type_name}"),
        }
    }

    /// Name of the filter input type the backend declares for this kind of
    /// operation on `type_name`.
    pub fn filter_type_name(&self, type_name: &str) -> String {
        match self {
            Self::Get | Self::List => format!("_List{type_name}Filter"),
            Self::Search => format!("_Search{type_name}Filter"),
        }
    }
}
