use anyhow::Result;
use examside_scrape::utils::logging;
use examside_scrape::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::load()?;

    // 初始化日志
    logging::init(&config)?;

    // 无论运行是否成功都要关闭浏览器
    let app = App::initialize(config).await?;
    let result = app.run().await;
    app.shutdown().await?;

    result.map(|_| ())
}
