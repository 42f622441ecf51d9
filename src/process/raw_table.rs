#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    /// Column names from the table's first row (`th` cells), trimmed.
    pub headers: Vec<String>,
    /// Each later row with at least one `td`, as trimmed strings.
    pub rows: Vec<Vec<String>>,
}
