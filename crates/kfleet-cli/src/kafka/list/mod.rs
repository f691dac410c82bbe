//!
//! # List Kafkas CLI
//!
//! Fetch one page of kafka instances, resolve the clusters they run on and
//! render them as a table, or dump the raw page as json/yaml.
//!

mod clusters;
mod display;
mod fetch;
mod query;
mod rows;

use std::sync::Arc;

use clap::Parser;
use tracing::debug;

use kfleet_mgmt_api::defaults::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
use kfleet_mgmt_api::ManagementApi;

use crate::common::output::OutputType;
use crate::common::{OutputFormat, Terminal};
use crate::config::{ConnectionConfig, ContextFile};
use crate::connection::{connect, ConnectionOverrides};
use crate::Result;

use self::clusters::resolve_clusters;
use self::fetch::fetch_kafkas;
use self::query::validate_search_input;
use self::rows::{project_rows, RowLabels};

// -----------------------------------
// CLI Options
// -----------------------------------

#[derive(Debug, Parser)]
pub struct ListKafkasOpt {
    #[clap(flatten)]
    output: OutputFormat,

    /// Page of results to display
    #[arg(
        long,
        default_value_t = DEFAULT_PAGE_NUMBER,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    page: u32,

    /// Number of instances per page
    #[arg(
        long,
        default_value_t = DEFAULT_PAGE_SIZE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    limit: u32,

    /// Only show instances whose name, owner, cloud provider, region or
    /// status contains this text
    #[arg(long, value_name = "text")]
    search: Option<String>,

    #[arg(long, hide = true)]
    cluster_mgmt_api_url: Option<String>,

    #[arg(long, hide = true)]
    access_token: Option<String>,
}

impl ListKafkasOpt {
    pub async fn process<O: Terminal>(self, out: Arc<O>) -> Result<()> {
        let search = self.search.unwrap_or_default();
        validate_search_input(&search)?;

        let config = ConnectionConfig::load()?;
        let api = connect(
            &config,
            ConnectionOverrides {
                access_token: self.access_token,
                cluster_mgmt_api_url: self.cluster_mgmt_api_url,
            },
        )?;

        let request = ListRequest {
            page: self.page,
            limit: self.limit,
            search,
            format: self.output.format,
        };
        list_kafkas(&api, out, request, load_active_kafka).await
    }
}

/// validated list inputs
#[derive(Debug, Clone)]
struct ListRequest {
    page: u32,
    limit: u32,
    search: String,
    format: OutputType,
}

fn load_active_kafka() -> Result<Option<String>> {
    let contexts = ContextFile::load_default()?;
    Ok(contexts.active_kafka_id()?.map(str::to_owned))
}

/// The list pipeline. `active_kafka` is only consulted for table output.
async fn list_kafkas<A, O, S>(
    api: &A,
    out: Arc<O>,
    request: ListRequest,
    active_kafka: S,
) -> Result<()>
where
    A: ManagementApi + ?Sized,
    O: Terminal,
    S: FnOnce() -> Result<Option<String>>,
{
    debug!(?request, "list kafkas");
    let kafkas = fetch_kafkas(api, request.page, request.limit, &request.search).await?;

    if !request.format.is_table() {
        display::format_raw_page(out, &kafkas, request.format.into())?;
        return Ok(());
    }

    if kafkas.is_empty() {
        display::format_no_kafkas(out);
        return Ok(());
    }

    let selected = active_kafka()?;
    let clusters = resolve_clusters(api, &kafkas.items).await?;
    let rows = project_rows(
        &kafkas.items,
        &clusters,
        selected.as_deref(),
        &RowLabels::for_terminal(),
    );
    display::format_rows(out, rows);
    Ok(())
}
