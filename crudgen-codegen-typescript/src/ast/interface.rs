//! TypeScript interface builder.

use crudgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A field in a TypeScript interface.
#[derive(Debug, Clone)]
struct InterfaceField {
    name: String,
    ty: String,
    optional: bool,
}

impl InterfaceField {
    fn declaration(&self) -> String {
        let optional = if self.optional { "?" } else { "" };
        format!("{}{}: {};", self.name, optional, self.ty)
    }
}

/// Builder for module-local TypeScript interfaces (`interface X { ... }`).
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    fields: Vec<InterfaceField>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a required field.
    pub fn field(self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.push(name, ty, false)
    }

    /// Add an optional field.
    pub fn optional_field(self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.push(name, ty, true)
    }

    fn push(mut self, name: impl Into<String>, ty: impl Into<String>, optional: bool) -> Self {
        self.fields.push(InterfaceField {
            name: name.into(),
            ty: ty.into(),
            optional,
        });
        self
    }

    /// Build the interface as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.fields.is_empty() {
            return vec![CodeFragment::line(format!("interface {} {{}}", self.name))];
        }

        vec![CodeFragment::block(
            format!("interface {} {{", self.name),
            self.fields
                .iter()
                .map(|field| CodeFragment::line(field.declaration()))
                .collect(),
            Some("}".to_string()),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_interface() {
        let i = Interface::new("Empty").build();
        assert_eq!(i, "interface Empty {}\n");
    }

    #[test]
    fn test_interface_with_fields() {
        let i = Interface::new("createUsersProps")
            .field("id", "string")
            .field("email", "string")
            .build();
        assert_eq!(
            i,
            "interface createUsersProps {\n  id: string;\n  email: string;\n}\n"
        );
    }

    #[test]
    fn test_interface_with_optional_field() {
        let i = Interface::new("updateUsersProps")
            .field("required", "string")
            .optional_field("optional", "number | null")
            .build();
        assert!(i.contains("  required: string;\n"));
        assert!(i.contains("  optional?: number | null;\n"));
    }
}
