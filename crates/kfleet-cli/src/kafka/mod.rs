mod list;

use std::sync::Arc;

use clap::Subcommand;

use crate::common::Terminal;
use crate::Result;

use list::ListKafkasOpt;

#[derive(Debug, Subcommand)]
pub enum KafkaCmd {
    /// List Kafka instances
    ///
    /// Shows the instances you own with the cluster each one runs on.
    /// The instance selected in the current context is marked.
    #[command(name = "list", visible_alias = "ls")]
    List(ListKafkasOpt),
}

impl KafkaCmd {
    pub async fn process<O: Terminal>(self, out: Arc<O>) -> Result<()> {
        match self {
            Self::List(list) => list.process(out).await,
        }
    }
}
