/// Contents written by `crudgen init`.
pub const STARTER_TEMPLATE: &str = r#"# crudgen configuration
# Every section is optional; the values below are the defaults.

[output]
# Directory that holds one folder of generated files per table
dir = "data"

[client]
# Where your project exports the Supabase client factory
import = "@/utils/supabase/server"
factory = "createClient"

# Uncomment to read column types from a live PostgreSQL database.
# [database]
# env = "DATABASE_URL"
# schema = "public"

[generate]
key = "id"
operations = ["create", "read", "update", "delete", "list"]

# Declare tables here when no database is configured.
[tables.users]
order_by = "created_at"

[tables.users.columns]
id = "string"
email = "string"
created_at = "string"
"#;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::Manifest;

    #[test]
    fn test_starter_template_parses() {
        let manifest = Manifest::from_str(STARTER_TEMPLATE).unwrap();
        assert!(manifest.database.is_none());
        let schema = manifest.table_schema("users").unwrap();
        assert_eq!(schema.len(), 3);
        assert_eq!(manifest.order_by("users"), Some("created_at"));
    }
}
