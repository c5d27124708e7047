#[tokio::main]
async fn main() {
    if let Err(err) = hc_api::run().await {
        tracing::error!(error = %err, "hc-api failed");
        std::process::exit(1);
    }
}
