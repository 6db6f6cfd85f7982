#[tokio::main]
async fn main() -> anyhow::Result<()> {
    restart_lib::run().await
}
