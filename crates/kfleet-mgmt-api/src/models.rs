//!
//! # Management API objects
//!
//! A kafka page keeps the document exactly as received, so a structured dump
//! reproduces the response. Only the fields the CLI reads are typed.
//!

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Typed view of one kafka instance
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct KafkaRequest {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub owner: String,
    /// accepted, preparing, provisioning, ready, failed, deprovision, deleting
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub cloud_provider: String,
    #[serde(default)]
    pub region: String,
    /// dedicated cluster the instance runs on, absent or null when hosted by the service
    #[serde(default)]
    pub cluster_id: Option<String>,
}

/// One page of kafka instances.
///
/// Serializes back to the received document, untouched. `items` is the typed
/// view used to build table rows.
#[derive(Debug, Clone, PartialEq)]
pub struct KafkaRequestList {
    pub items: Vec<KafkaRequest>,
    raw: Value,
}

#[derive(Deserialize)]
struct KafkaItems {
    #[serde(default)]
    items: Vec<KafkaRequest>,
}

impl KafkaRequestList {
    pub fn from_value(raw: Value) -> serde_json::Result<Self> {
        let KafkaItems { items } = KafkaItems::deserialize(&raw)?;
        Ok(Self { items, raw })
    }

    /// the page as sent by the api
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Serialize for KafkaRequestList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for KafkaRequestList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Self::from_value(raw).map_err(D::Error::custom)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Cluster {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ClusterList {
    #[serde(default)]
    pub items: Vec<Cluster>,
}

/// error document returned with non-2xx responses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const KAFKA_PAGE: &str = r#"{
        "kind": "KafkaRequestList",
        "page": 1,
        "size": 2,
        "total": 2,
        "items": [
            {
                "id": "cbt1a0ccve2rsr6fkvfg",
                "kind": "Kafka",
                "href": "/api/kafkas_mgmt/v1/kafkas/cbt1a0ccve2rsr6fkvfg",
                "status": "ready",
                "cloud_provider": "aws",
                "multi_az": true,
                "region": "us-east-1",
                "owner": "jdoe",
                "name": "orders",
                "bootstrap_server_host": "orders-cbt1a0ccve2rsr6fkvfg.kafka.example.com:443",
                "cluster_id": "1vc6abc0fn0ip2pp3m0j7t3ppu3qpkoe"
            },
            {
                "id": "cbt1b3kcve2rsr6fkvgg",
                "kind": "Kafka",
                "status": "provisioning",
                "cloud_provider": "aws",
                "region": "eu-west-1",
                "owner": "jdoe",
                "name": "audit"
            }
        ]
    }"#;

    #[test]
    fn test_decode_kafka_page() {
        let page: KafkaRequestList = serde_json::from_str(KAFKA_PAGE).expect("decode");

        assert_eq!(page.items.len(), 2);

        let orders = &page.items[0];
        assert_eq!(orders.name, "orders");
        assert_eq!(
            orders.cluster_id.as_deref(),
            Some("1vc6abc0fn0ip2pp3m0j7t3ppu3qpkoe")
        );

        let audit = &page.items[1];
        assert_eq!(audit.status, "provisioning");
        assert!(audit.cluster_id.is_none());
    }

    #[test]
    fn test_null_cluster_id_is_hosted() {
        let kafka: KafkaRequest =
            serde_json::from_str(r#"{"id":"k1","name":"a","cluster_id":null}"#).expect("decode");
        assert!(kafka.cluster_id.is_none());
    }

    #[test]
    fn test_page_reserializes_unchanged() {
        let page: KafkaRequestList = serde_json::from_str(KAFKA_PAGE).expect("decode");
        let expected: Value = serde_json::from_str(KAFKA_PAGE).expect("value");

        assert_eq!(serde_json::to_value(&page).expect("encode"), expected);
    }

    #[test]
    fn test_sparse_page_adds_and_drops_nothing() {
        let sparse = r#"{"items":[{"id":"k1","cluster_id":null,"reserved":1}]}"#;
        let page: KafkaRequestList = serde_json::from_str(sparse).expect("decode");

        assert_eq!(page.items[0].id, "k1");
        assert_eq!(page.items[0].name, "");
        assert!(page.items[0].cluster_id.is_none());
        assert_eq!(serde_json::to_string(&page).expect("encode"), sparse);
        assert_eq!(
            serde_json::to_value(&page).expect("encode"),
            json!({"items": [{"id": "k1", "cluster_id": null, "reserved": 1}]})
        );
    }

    #[test]
    fn test_key_order_kept() {
        let page = KafkaRequestList::from_value(json!({"total": 0, "kind": "KafkaRequestList"}))
            .expect("page");

        assert!(page.is_empty());
        assert_eq!(
            serde_json::to_string(&page).expect("encode"),
            r#"{"total":0,"kind":"KafkaRequestList"}"#
        );
    }

    #[test]
    fn test_page_without_item_id_is_rejected() {
        assert!(KafkaRequestList::from_value(json!({"items": [{"name": "x"}]})).is_err());
    }

    #[test]
    fn test_decode_cluster_page() {
        let clusters: ClusterList = serde_json::from_str(
            r#"{
                "kind": "ClusterList",
                "page": 1,
                "size": 1,
                "total": 1,
                "items": [
                    {
                        "kind": "Cluster",
                        "id": "1vc6abc0fn0ip2pp3m0j7t3ppu3qpkoe",
                        "name": "prod-east",
                        "state": "ready"
                    }
                ]
            }"#,
        )
        .expect("decode");

        assert_eq!(clusters.items.len(), 1);
        assert_eq!(clusters.items[0].name, "prod-east");
    }
}
