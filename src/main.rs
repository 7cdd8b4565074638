#[tokio::main]
async fn main() -> anyhow::Result<()> {
    miru_episodes_lib::run().await?;
    Ok(())
}
