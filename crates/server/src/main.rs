#[tokio::main]
async fn main() -> anyhow::Result<()> {
    wordtrail_server::start().await
}
