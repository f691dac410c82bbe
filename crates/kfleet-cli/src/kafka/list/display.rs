//!
//! # Kafka list - output processing
//!
//! Format kafka instances based on output type
//!

use std::sync::Arc;

use comfy_table::{Cell, CellAlignment, Row};

use kfleet_mgmt_api::KafkaRequestList;

use crate::common::output::{OutputError, SerializeType, TableOutputHandler};
use crate::common::{t_println, Terminal};

use super::rows::KafkaRow;

pub const NO_KAFKAS_MESSAGE: &str = "No Kafka instances were found.";

pub struct KafkaRows(pub Vec<KafkaRow>);

/// raw page, exactly as returned by the api
pub fn format_raw_page<O: Terminal>(
    out: Arc<O>,
    kafkas: &KafkaRequestList,
    mode: SerializeType,
) -> Result<(), OutputError> {
    out.render_serde(kafkas.raw(), mode)
}

pub fn format_rows<O: Terminal>(out: Arc<O>, rows: Vec<KafkaRow>) {
    out.render_table(&KafkaRows(rows), false);
}

pub fn format_no_kafkas<O: Terminal>(out: Arc<O>) {
    t_println!(out, "{}", NO_KAFKAS_MESSAGE);
}

// -----------------------------------
// Output Handlers
// -----------------------------------
impl TableOutputHandler for KafkaRows {
    /// table header implementation
    fn header(&self) -> Row {
        Row::from([
            "ID",
            "Name",
            "Owner",
            "Status",
            "Cloud Provider",
            "Region",
            "Openshift Cluster",
        ])
    }

    /// return errors in string format
    fn errors(&self) -> Vec<String> {
        vec![]
    }

    /// table content implementation
    fn content(&self) -> Vec<Row> {
        self.0
            .iter()
            .map(|row| {
                Row::from([
                    Cell::new(&row.id).set_alignment(CellAlignment::Left),
                    Cell::new(&row.name).set_alignment(CellAlignment::Left),
                    Cell::new(&row.owner),
                    Cell::new(&row.status),
                    Cell::new(&row.cloud_provider),
                    Cell::new(&row.region),
                    Cell::new(&row.openshift_cluster),
                ])
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, name: &str) -> KafkaRow {
        KafkaRow {
            id: id.to_owned(),
            name: name.to_owned(),
            owner: "jdoe".to_owned(),
            status: "ready".to_owned(),
            cloud_provider: "aws".to_owned(),
            region: "us-east-1".to_owned(),
            openshift_cluster: "Hosted by the service".to_owned(),
        }
    }

    #[test]
    fn test_header_columns() {
        let header = KafkaRows(vec![]).header();
        let names: Vec<String> = header.cell_iter().map(|cell| cell.content()).collect();
        assert_eq!(
            names,
            vec![
                "ID",
                "Name",
                "Owner",
                "Status",
                "Cloud Provider",
                "Region",
                "Openshift Cluster"
            ]
        );
    }

    #[test]
    fn test_content_one_row_per_kafka() {
        let rows = KafkaRows(vec![row("k1", "alpha"), row("k2", "beta")]);
        let content = rows.content();

        assert_eq!(content.len(), 2);
        let first: Vec<String> = content[0].cell_iter().map(|cell| cell.content()).collect();
        assert_eq!(first[0], "k1");
        assert_eq!(first[1], "alpha");
        assert_eq!(first[6], "Hosted by the service");
    }
}
