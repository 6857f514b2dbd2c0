#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pubapi::run().await?;
    Ok(())
}
