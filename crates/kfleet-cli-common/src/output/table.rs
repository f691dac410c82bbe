use std::sync::Arc;

use comfy_table::Row;
use comfy_table::Table;

use crate::Terminal;
use crate::t_println;

pub trait TableOutputHandler {
    fn header(&self) -> Row;
    fn content(&self) -> Vec<Row>;
    fn errors(&self) -> Vec<String>;
}

pub struct TableRenderer<O>(Arc<O>);

impl<O> TableRenderer<O>
where
    O: Terminal,
{
    pub fn new(out: Arc<O>) -> Self {
        Self(out)
    }

    pub fn render<T>(&self, list: &T, indent: bool)
    where
        T: TableOutputHandler,
    {
        self.display_errors(list);
        self.display_table(list, indent);
    }

    // display errors one at a time
    fn display_errors<T: TableOutputHandler>(&self, list: &T) {
        let errors = list.errors();
        if !errors.is_empty() {
            for error in errors {
                t_println!(self.0, "{}", error);
            }
            t_println!(self.0, "-------------");
        }
    }

    /// convert result to table output and print to terminal
    fn display_table<T>(&self, list: &T, indent: bool)
    where
        T: TableOutputHandler,
    {
        let header = list.header();
        let content = list.content();

        // if table is empty, return
        if content.is_empty() {
            return;
        }

        let mut table = Table::new();
        table.load_preset(comfy_table::presets::NOTHING);
        table.set_header(header);

        for row in content {
            table.add_row(row);
        }

        let pad = if indent { "    " } else { "" };
        for line in table.to_string().lines() {
            t_println!(self.0, "{}{}", pad, line.trim_end());
        }
    }
}
