//! 课程目录演示程序
//! 解析 slug、拉取目录页数据、按过滤词输出视图模型
//!
//! 运行命令：
//! cargo run --example catalog_demo -- --base-url http://localhost:4000/api/v1 --slug All --filter react

use clap::Parser;
use rscatalog::{CatalogController, ConfigManager, ViewStatus};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// 命令行参数
#[derive(Debug, Parser)]
#[command(name = "catalog_demo", version, about = "Course catalog aggregation demo")]
struct Args {
    /// 后端接口根地址
    #[arg(long, env = "RSCATALOG_API_BASE", default_value = "http://localhost:4000/api/v1/")]
    base_url: String,

    /// 目录 slug（"All" 为聚合视图）
    #[arg(long, default_value = "All")]
    slug: String,

    /// 课程名过滤词
    #[arg(long, default_value = "")]
    filter: String,

    /// 请求超时（秒）
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// 详细日志（未设置 RUST_LOG 时使用 debug 级别）
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // ========== 1. 构建配置 ==========
    let config = ConfigManager::custom()
        .api_base_url(args.base_url)
        .http_timeout(args.timeout)
        .verbose(args.verbose)
        .build();

    // ========== 2. 日志系统初始化 ==========
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.default_log_level())),
        )
        .init();

    // ========== 3. 构建控制器 ==========
    let controller = CatalogController::from_config(&config)?;
    controller.set_filter(args.filter.as_str());

    // ========== 4. 导航并输出结果 ==========
    let start = Instant::now();
    controller.navigate(args.slug.as_str()).await;
    let view = controller.snapshot();

    println!("✅ 完成 | 耗时: {:.3} 毫秒", start.elapsed().as_secs_f64() * 1000.0);
    match &view.status {
        ViewStatus::Error(err) => anyhow::bail!("目录加载失败：{}", err),
        _ => println!("{}", serde_json::to_string_pretty(&view)?),
    }

    Ok(())
}
