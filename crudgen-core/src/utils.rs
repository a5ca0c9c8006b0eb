//! Shared string helpers for code generation.

/// Upper-case the first character of `s`, leaving the rest untouched
/// (e.g., "user_profiles" -> "User_profiles").
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Drop trailing `| null` / `| undefined` union members from a TypeScript type.
pub fn strip_nullable(ty: &str) -> &str {
    let mut ty = ty.trim();
    while let Some(rest) = ty
        .strip_suffix("| null")
        .or_else(|| ty.strip_suffix("| undefined"))
    {
        ty = rest.trim_end();
    }
    ty
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("users"), "Users");
        assert_eq!(capitalize_first("user_profiles"), "User_profiles");
        assert_eq!(capitalize_first("userProfiles"), "UserProfiles");
        assert_eq!(capitalize_first("Users"), "Users");
        assert_eq!(capitalize_first("_audit"), "_audit");
        assert_eq!(capitalize_first("x"), "X");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_capitalize_first_only_touches_first_char() {
        let name = "oRDERS_2024";
        let capitalized = capitalize_first(name);
        assert_eq!(&capitalized[1..], &name[1..]);
        assert_eq!(capitalized, "ORDERS_2024");
    }

    #[test]
    fn test_strip_nullable() {
        assert_eq!(strip_nullable("string"), "string");
        assert_eq!(strip_nullable("string | null"), "string");
        assert_eq!(strip_nullable("number | undefined"), "number");
        assert_eq!(strip_nullable("number | null | undefined"), "number");
        assert_eq!(strip_nullable("number | undefined | null"), "number");
        assert_eq!(strip_nullable("  boolean  "), "boolean");
    }
}
