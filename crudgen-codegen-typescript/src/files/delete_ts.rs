//! `delete.ts`: remove the row matching the key.

use crate::ast::{Fn, Interface, Param};

use super::TableContext;

pub struct DeleteTs<'a> {
    pub(super) ctx: TableContext<'a>,
}

impl<'a> DeleteTs<'a> {
    pub fn new(ctx: TableContext<'a>) -> Self {
        Self { ctx }
    }

    fn function_name(&self) -> String {
        format!("delete{}", self.ctx.type_name())
    }

    fn props_name(&self) -> String {
        format!("{}Props", self.function_name())
    }

    fn build_props(&self) -> Interface {
        Interface::new(self.props_name()).field("id", self.ctx.key_type())
    }

    fn build_function(&self) -> Fn {
        let delete = self
            .ctx
            .query()
            .call_empty("delete")
            .call_args("eq", vec![self.ctx.key_literal(), "id".to_string()])
            .build_inline();

        Fn::new(self.function_name())
            .async_()
            .param(Param::new("{ id }", self.props_name()))
            .body_line(self.ctx.client_line())
            .body_line(format!("const {{ error }} = await {};", delete))
            .body_blank()
            .body_block(
                "if (error) {",
                ["throw new Error(`Error deleting data: ${error.message}`);"],
            )
            .body_blank()
            .body_line("return { success: true };")
    }

    pub fn render(&self) -> String {
        self.ctx
            .file()
            .add(self.build_props())
            .add(self.build_function())
            .render()
    }
}
