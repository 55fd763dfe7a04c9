//! Physical line normalization for Diaguard backups
//!
//! Splits one backup line into a record type tag and its field values. The
//! format wraps fields in double quotes without any escaping, so exactly one
//! leading and one trailing quote are stripped per field; embedded quotes or
//! semicolons inside a field are not representable in the format.

/// One physical backup line split into a record tag and field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// Record type tag (first `;`-separated element); empty for blank lines
    pub record_type: String,

    /// Remaining field values, in order, with outer quotes stripped
    pub fields: Vec<String>,
}

impl RawRecord {
    /// Normalize one physical line
    pub fn parse(line: &str) -> Self {
        let mut parts = line.trim().split(';').map(strip_quotes);

        let record_type = parts.next().unwrap_or_default().to_string();
        let fields = parts.map(str::to_string).collect();

        Self {
            record_type,
            fields,
        }
    }

    /// Field value at `index`, if present
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// Last field value, if any
    pub fn last_field(&self) -> Option<&str> {
        self.fields.last().map(String::as_str)
    }
}

/// Strip at most one leading and one trailing double quote
fn strip_quotes(field: &str) -> &str {
    let field = field.strip_prefix('"').unwrap_or(field);
    field.strip_suffix('"').unwrap_or(field)
}
