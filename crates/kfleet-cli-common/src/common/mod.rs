use clap::Parser;

use crate::output::OutputType;

#[derive(Debug, Parser, Default, Clone)]
pub struct OutputFormat {
    /// Format to display the instances in; omit for a table
    #[arg(
        default_value_t,
        hide_default_value = true,
        short = 'o',
        long = "output",
        value_name = "format",
        value_enum,
        ignore_case = true
    )]
    pub format: OutputType,
}
