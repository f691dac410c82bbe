use tracing::warn;

use kfleet_mgmt_api::KafkaRequest;

use crate::common::icon;

use super::clusters::ClusterIndex;

/// selection value meaning no instance is current
pub const NO_SELECTION: &str = "-";
pub const HOSTED_CLUSTER_LABEL: &str = "Hosted by the service";
const UNKNOWN_CLUSTER_NAME: &str = "unknown";

/// One table line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KafkaRow {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub status: String,
    pub cloud_provider: String,
    pub region: String,
    pub openshift_cluster: String,
}

/// Fixed text used while projecting rows
#[derive(Debug, Clone, Copy)]
pub struct RowLabels<'a> {
    pub current_marker: &'a str,
    pub hosted_cluster: &'a str,
}

impl RowLabels<'static> {
    pub fn for_terminal() -> Self {
        Self {
            current_marker: icon::emoji("✔", "(current)"),
            hosted_cluster: HOSTED_CLUSTER_LABEL,
        }
    }
}

/// One row per instance, in the order given
pub fn project_rows(
    kafkas: &[KafkaRequest],
    clusters: &ClusterIndex,
    selected_id: Option<&str>,
    labels: &RowLabels<'_>,
) -> Vec<KafkaRow> {
    let selected_id = selected_id.filter(|id| *id != NO_SELECTION);

    kafkas
        .iter()
        .map(|kafka| {
            let name = if selected_id == Some(kafka.id.as_str()) {
                format!("{} {}", kafka.name, labels.current_marker)
            } else {
                kafka.name.clone()
            };

            KafkaRow {
                id: kafka.id.clone(),
                name,
                owner: kafka.owner.clone(),
                status: kafka.status.clone(),
                cloud_provider: kafka.cloud_provider.clone(),
                region: kafka.region.clone(),
                openshift_cluster: cluster_label(kafka, clusters, labels),
            }
        })
        .collect()
}

fn cluster_label(kafka: &KafkaRequest, clusters: &ClusterIndex, labels: &RowLabels<'_>) -> String {
    match kafka.cluster_id.as_deref() {
        None => labels.hosted_cluster.to_owned(),
        Some(cluster_id) => match clusters.get(cluster_id) {
            Some(cluster) => format!("{} ({})", cluster.name, cluster.id),
            None => {
                warn!(
                    kafka_id = %kafka.id,
                    cluster_id,
                    "cluster not returned by the cluster management api"
                );
                format!("{UNKNOWN_CLUSTER_NAME} ({cluster_id})")
            }
        },
    }
}
