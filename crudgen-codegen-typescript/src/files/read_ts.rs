//! `read.ts`: select all rows, or the one matching the key.

use crate::ast::{Fn, Param};

use super::TableContext;

pub struct ReadTs<'a> {
    pub(super) ctx: TableContext<'a>,
}

impl<'a> ReadTs<'a> {
    pub fn new(ctx: TableContext<'a>) -> Self {
        Self { ctx }
    }

    fn build_function(&self) -> Fn {
        let select = self.ctx.query().call("select", "\"*\"").build_inline();
        let filter = format!("query = query.eq({}, id);", self.ctx.key_literal());

        Fn::new(format!("read{}", self.ctx.type_name()))
            .async_()
            .param(Param::new("id", self.ctx.key_type()).optional())
            .body_line(self.ctx.client_line())
            .body_line(format!("let query = {};", select))
            .body_blank()
            .body_block("if (id !== undefined) {", [filter])
            .body_blank()
            .body_line("const { data, error } = await query;")
            .body_blank()
            .body_line("if (error) throw error;")
            .body_line("return data;")
    }

    pub fn render(&self) -> String {
        self.ctx.file().add(self.build_function()).render()
    }
}
