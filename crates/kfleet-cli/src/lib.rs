//! # Root CLI
//!
//! CLI configurations at the top of the tree

mod config;
mod connection;
mod error;
mod kafka;

pub(crate) use error::{CliError, Result};

use kfleet_cli_common as common;

pub use root::Root;

mod root {

    use std::sync::Arc;

    use clap::{Parser, Subcommand};

    use crate::common::COMMAND_TEMPLATE;
    use crate::common::PrintTerminal;
    use crate::kafka::KafkaCmd;

    use super::Result;

    /// kfleet Command Line Interface
    #[derive(Parser, Debug)]
    #[command(
        name = "kfleet",
        about = "Manage your fleet of Kafka instances",
        help_template = COMMAND_TEMPLATE,
        max_term_width = 100,
        version
    )]
    pub struct Root {
        #[command(subcommand)]
        command: RootCmd,
    }

    impl Root {
        pub async fn process(self) -> Result<()> {
            self.command.process().await
        }
    }

    #[derive(Debug, Subcommand)]
    enum RootCmd {
        /// View and manage Kafka instances
        #[command(subcommand)]
        Kafka(KafkaCmd),
    }

    impl RootCmd {
        async fn process(self) -> Result<()> {
            let out = Arc::new(PrintTerminal::new());
            match self {
                Self::Kafka(kafka) => kafka.process(out).await,
            }
        }
    }
}
