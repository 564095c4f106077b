mod config;
mod databricks;
mod error;
mod imds;

use log::{debug, error, info};
use reqwest::Client;

use config::Config;
use databricks::ClusterApi;
use error::Error;
use imds::{ImdsClient, DATABRICKS_RESOURCE_ID, MANAGEMENT_RESOURCE_ID};

#[tokio::main]
async fn main() {
    pretty_env_logger::init();
    dotenv::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = run(config).await {
        error!("{}", err);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Error> {
    let http = Client::new();
    let imds = ImdsClient::new(http.clone());

    // Two tokens: the management-plane token and the workspace-scoped one.
    let mgmt_token = imds.fetch_token(MANAGEMENT_RESOURCE_ID).await?;
    let adb_token = imds.fetch_token(DATABRICKS_RESOURCE_ID).await?;
    debug!("fetched both IMDS tokens");

    let api = ClusterApi::new(http, &config.org_id);
    let clusters = api
        .list_clusters(&adb_token, &mgmt_token, &config.resource_id)
        .await?;
    info!("cluster list fetched for org {}", config.org_id);

    // Value's alternate Display form is the pretty-printed JSON.
    println!("{:#}", clusters);

    Ok(())
}
