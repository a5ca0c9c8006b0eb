//! `update.ts`: patch the row matching the key.

use crate::ast::{Fn, Interface, Param, property_name};

use super::TableContext;

pub struct UpdateTs<'a> {
    pub(super) ctx: TableContext<'a>,
}

impl<'a> UpdateTs<'a> {
    pub fn new(ctx: TableContext<'a>) -> Self {
        Self { ctx }
    }

    fn function_name(&self) -> String {
        format!("update{}", self.ctx.type_name())
    }

    fn props_name(&self) -> String {
        format!("{}Props", self.function_name())
    }

    /// Every column is optional: a patch may touch any subset.
    fn build_props(&self) -> Interface {
        self.ctx
            .schema
            .columns()
            .fold(Interface::new(self.props_name()), |i, (name, ty)| {
                i.optional_field(property_name(name), ty)
            })
    }

    fn build_function(&self) -> Fn {
        Fn::new(self.function_name())
            .async_()
            .param(Param::new("id", self.ctx.key_type()))
            .param(Param::new("data", self.props_name()))
            .body_line(self.ctx.client_line())
            .body_fragment(
                self.ctx
                    .query()
                    .call("update", "data")
                    .call_args("eq", vec![self.ctx.key_literal(), "id".to_string()])
                    .call_empty("select")
                    .statement("const { data: result, error } = await "),
            )
            .body_blank()
            .body_line("if (error) throw error;")
            .body_line("return result;")
    }

    pub fn render(&self) -> String {
        self.ctx
            .file()
            .add(self.build_props())
            .add(self.build_function())
            .render()
    }
}
