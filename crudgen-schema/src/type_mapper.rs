//! Mapping from PostgreSQL column types to TypeScript types.

/// A column as reported by `information_schema.columns`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    /// SQL standard type name (`integer`, `ARRAY`, `USER-DEFINED`, ...)
    pub data_type: String,
    /// Underlying type name (`int4`, `_text`, `mood`, ...)
    pub udt_name: String,
    pub nullable: bool,
}

impl ColumnInfo {
    pub fn new(
        name: impl Into<String>,
        data_type: impl Into<String>,
        udt_name: impl Into<String>,
        nullable: bool,
    ) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            udt_name: udt_name.into(),
            nullable,
        }
    }

    fn is_array(&self) -> bool {
        self.data_type == "ARRAY"
    }
}

/// Trait for mapping database column types to language-specific type strings.
pub trait TypeMapper {
    /// Map an element type name (`int4`, `text`, ...)
    fn map_udt(&self, udt_name: &str) -> &'static str;

    /// Wrap an element type as an array
    fn array_of(&self, element: &str) -> String;

    /// Wrap a type as nullable
    fn nullable(&self, ty: &str) -> String;

    /// Map a whole column, including array and null handling.
    fn map_column(&self, column: &ColumnInfo) -> String {
        let ty = if column.is_array() {
            // Array udt names carry a leading underscore (`_int4`)
            let element = column
                .udt_name
                .strip_prefix('_')
                .unwrap_or(&column.udt_name);
            self.array_of(self.map_udt(element))
        } else {
            self.map_udt(&column.udt_name).to_string()
        };

        if column.nullable {
            self.nullable(&ty)
        } else {
            ty
        }
    }
}

/// TypeScript type mapper, matching the types Supabase reports for rows.
pub struct TypeScriptTypeMapper;

impl TypeMapper for TypeScriptTypeMapper {
    fn map_udt(&self, udt_name: &str) -> &'static str {
        match udt_name {
            "int2" | "int4" | "int8" | "float4" | "float8" | "numeric" | "money" | "oid" => {
                "number"
            }
            "bool" => "boolean",
            "json" | "jsonb" => "unknown",
            // Text, uuid, temporal, network and user-defined enum types all
            // arrive as strings.
            _ => "string",
        }
    }

    fn array_of(&self, element: &str) -> String {
        format!("{}[]", element)
    }

    fn nullable(&self, ty: &str) -> String {
        format!("{} | null", ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(data_type: &str, udt_name: &str, nullable: bool) -> String {
        TypeScriptTypeMapper.map_column(&ColumnInfo::new("c", data_type, udt_name, nullable))
    }

    #[test]
    fn test_numeric_types() {
        assert_eq!(map("integer", "int4", false), "number");
        assert_eq!(map("bigint", "int8", false), "number");
        assert_eq!(map("numeric", "numeric", false), "number");
        assert_eq!(map("double precision", "float8", false), "number");
    }

    #[test]
    fn test_boolean_and_json() {
        assert_eq!(map("boolean", "bool", false), "boolean");
        assert_eq!(map("jsonb", "jsonb", false), "unknown");
    }

    #[test]
    fn test_string_like_types() {
        assert_eq!(map("text", "text", false), "string");
        assert_eq!(map("uuid", "uuid", false), "string");
        assert_eq!(map("timestamp with time zone", "timestamptz", false), "string");
        assert_eq!(map("date", "date", false), "string");
        assert_eq!(map("USER-DEFINED", "mood", false), "string");
    }

    #[test]
    fn test_arrays() {
        assert_eq!(map("ARRAY", "_int4", false), "number[]");
        assert_eq!(map("ARRAY", "_text", false), "string[]");
    }

    #[test]
    fn test_nullable() {
        assert_eq!(map("text", "text", true), "string | null");
        assert_eq!(map("ARRAY", "_bool", true), "boolean[] | null");
    }
}
