/// A schema-compilation error reported when publishing a data model's DML.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DmlError {
    #[serde(default)]
    pub hint: Option<String>,
    pub kind: String,
    #[serde(default)]
    pub location: DmlErrorLocation,
    pub message: String,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DmlErrorLocation {
    pub column: u32,
    pub line: u32,
}
