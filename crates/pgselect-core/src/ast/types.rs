//! SQL data type references.

use core::fmt;

use serde::Serialize;

/// A type named in a cast (`x::varchar(10)`, `CAST(x AS int)`).
///
/// Names are kept as written, lower-cased, with multi-word names joined
/// by single spaces (`double precision`, `time without time zone`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataType {
    /// The type name.
    #[serde(rename = "type")]
    pub name: String,
    /// Length, precision or scale arguments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<Vec<i64>>,
}

impl DataType {
    /// Creates a type reference without arguments.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config: None,
        }
    }

    /// Creates a type reference with arguments.
    #[must_use]
    pub fn with_config(name: impl Into<String>, config: Vec<i64>) -> Self {
        Self {
            name: name.into(),
            config: Some(config),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(config) = &self.config {
            let args: Vec<String> = config.iter().map(ToString::to_string).collect();
            write!(f, "({})", args.join(", "))?;
        }
        Ok(())
    }
}
