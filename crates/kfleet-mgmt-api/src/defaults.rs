pub const CLI_CONFIG_PATH: &str = ".kfleet";

pub const DEFAULT_API_URL: &str = "https://api.openshift.com";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_PAGE_NUMBER: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

pub const KAFKAS_PATH: &str = "/api/kafkas_mgmt/v1/kafkas";
pub const CLUSTERS_PATH: &str = "/api/clusters_mgmt/v1/clusters";
