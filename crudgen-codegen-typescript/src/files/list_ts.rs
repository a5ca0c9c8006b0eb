//! `list.ts`: default-exported fetch of every row.

use crate::ast::{Fn, string_literal};

use super::TableContext;

/// Names already bound inside the generated function.
const RESERVED_BINDINGS: &[&str] = &["supabase", "error"];

/// Order column used when none is configured and the table has one.
const FALLBACK_ORDER_COLUMN: &str = "date";

pub struct ListTs<'a> {
    pub(super) ctx: TableContext<'a>,
}

impl<'a> ListTs<'a> {
    pub fn new(ctx: TableContext<'a>) -> Self {
        Self { ctx }
    }

    /// Variable holding the rows, named after the table unless that would
    /// shadow another local.
    fn binding(&self) -> &str {
        let table = self.ctx.table();
        if RESERVED_BINDINGS.contains(&table) {
            "rows"
        } else {
            table
        }
    }

    fn order_column(&self) -> Option<&str> {
        match &self.ctx.options.order_by {
            Some(column) => Some(column.as_str()),
            None if self.ctx.schema.has_column(FALLBACK_ORDER_COLUMN) => {
                Some(FALLBACK_ORDER_COLUMN)
            }
            None => None,
        }
    }

    fn build_function(&self) -> Fn {
        let binding = self.binding();
        let order = self
            .order_column()
            .map(|column| vec![string_literal(column), "{ ascending: true }".to_string()]);

        let mut query = self.ctx.query().call("select", "\"*\"");
        if let Some(args) = order {
            query = query.call_args("order", args);
        }

        Fn::new(format!("get{}", self.ctx.type_name()))
            .default_export()
            .async_()
            .body_line(self.ctx.client_line())
            .body_fragment(query.statement(&format!(
                "const {{ data: {}, error }} = await ",
                binding
            )))
            .body_blank()
            .body_block(
                "if (error) {",
                ["throw new Error(`An error occurred retrieving data: ${error.message}`);"],
            )
            .body_blank()
            .body_line(format!("return {};", binding))
    }

    pub fn render(&self) -> String {
        self.ctx.file().add(self.build_function()).render()
    }
}
