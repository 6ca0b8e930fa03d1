use indexmap::IndexMap;

/// Page size used for list-valued relations nested inside a selection when
/// the caller does not pick one.
pub const DEFAULT_NESTED_LIMIT: u32 = 2;

#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum SortDirection {
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DESC")]
    Desc,
}
impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SortSpec {
    pub direction: SortDirection,
    pub field_name: String,
}
impl SortSpec {
    pub fn new(field_name: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            direction,
            field_name: field_name.into(),
        }
    }
}

/// Parameters for a paginated `list<T>` query.
#[derive(Clone, Debug, PartialEq)]
pub struct ListQueryParams {
    pub cursor: Option<String>,
    /// Value bound to the `$filter` variable. It travels with the query's
    /// variables and never changes the query text.
    pub filter: Option<serde_json::Value>,
    pub limit: u32,
    /// When set, only these declared fields are selected. System fields are
    /// always selected.
    pub limit_fields: Option<Vec<String>>,
    pub nested_limit: u32,
    pub sort: Option<SortSpec>,
    pub type_name: String,
}
impl ListQueryParams {
    pub fn new(type_name: impl Into<String>, limit: u32) -> Self {
        Self {
            cursor: None,
            filter: None,
            limit,
            limit_fields: None,
            nested_limit: DEFAULT_NESTED_LIMIT,
            sort: None,
            type_name: type_name.into(),
        }
    }
}

/// Parameters for a `get<T>ById` query.
#[derive(Clone, Debug, PartialEq)]
pub struct GetByIdQueryParams {
    pub external_id: String,
    pub limit_fields: Option<Vec<String>>,
    /// Cursors for list-valued relation fields, keyed by field name.
    pub nested_cursors: IndexMap<String, String>,
    /// Filters for list-valued relation fields, keyed by field name. Each
    /// one is declared as a query variable named after its field.
    pub nested_filters: IndexMap<String, serde_json::Value>,
    pub nested_limit: u32,
    pub space: String,
    pub type_name: String,
}
impl GetByIdQueryParams {
    pub fn new(
        type_name: impl Into<String>,
        space: impl Into<String>,
        external_id: impl Into<String>,
    ) -> Self {
        Self {
            external_id: external_id.into(),
            limit_fields: None,
            nested_cursors: IndexMap::new(),
            nested_filters: IndexMap::new(),
            nested_limit: DEFAULT_NESTED_LIMIT,
            space: space.into(),
            type_name: type_name.into(),
        }
    }
}

/// Parameters for a full-text `search<T>` query.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchQueryParams {
    pub filter: Option<serde_json::Value>,
    pub limit: Option<u32>,
    pub limit_fields: Option<Vec<String>>,
    pub nested_limit: u32,
    pub search_term: String,
    pub type_name: String,
}
impl SearchQueryParams {
    pub fn new(type_name: impl Into<String>, search_term: impl Into<String>) -> Self {
        Self {
            filter: None,
            limit: None,
            limit_fields: None,
            nested_limit: DEFAULT_NESTED_LIMIT,
            search_term: search_term.into(),
            type_name: type_name.into(),
        }
    }
}
