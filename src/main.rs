use clap::Parser;
use receipt_render::domain::ports::Surface;
use receipt_render::utils::{logger, validation::Validate};
use receipt_render::{
    CliConfig, LocalStorage, ReceiptConfig, ReceiptError, ReceiptRenderer, RecordingSurface,
    RenderEngine,
};
use std::time::Instant;

fn main() {
    let start = Instant::now();
    let args = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);
    tracing::info!("🧾 Starting receipt-render");

    let config = match args.load_receipt_config() {
        Ok(config) => config,
        Err(e) => fail(&e, start),
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(&e, start);
    }

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no image will be written");
        print_preview(&config);
        println!("耗时: {:?}", start.elapsed());
        return;
    }

    let monitor_enabled = config.monitoring_enabled();
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let engine = RenderEngine::new_with_monitoring(LocalStorage::default(), monitor_enabled);
    match engine.run(&config) {
        Ok(outcome) => {
            tracing::info!(
                "✅ Receipt rendered: {}x{}, {} items, total {:.2}",
                outcome.width,
                outcome.height,
                outcome.summary.item_rows,
                outcome.summary.total
            );
            println!("小票已生成，保存为 {}", outcome.output_path);
        }
        Err(e) => fail(&e, start),
    }

    println!("耗时: {:?}", start.elapsed());
}

fn print_preview(config: &ReceiptConfig) {
    let layout = config.layout.clone();
    let mut surface = RecordingSurface::new(layout.width, layout.height);
    let summary = ReceiptRenderer::new(layout).render(&mut surface, &config.to_context());

    println!("{}", surface.to_text_preview());
    println!(
        "canvas {}x{}, {} items, {} dash segments -> {}",
        surface.width(),
        surface.height(),
        summary.item_rows,
        summary.dash_segments,
        config.output_path()
    );
}

fn fail(e: &ReceiptError, start: Instant) -> ! {
    tracing::error!(
        "❌ Render failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    println!("❌ {}", e.user_friendly_message());
    println!("💡 建議: {}", e.recovery_suggestion());
    println!("耗时: {:?}", start.elapsed());
    std::process::exit(e.exit_code());
}
