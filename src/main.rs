/// The entry point of the application.
/// Initializes the runtime and runs the poller service, surfacing any
/// startup or shutdown errors.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    versionwatch::run().await?;
    Ok(())
}
