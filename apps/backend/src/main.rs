#[tokio::main]
async fn main() -> anyhow::Result<()> {
    quickcache_backend::run().await
}
