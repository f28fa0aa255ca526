use {
    clap::Parser,
    coin_table::{Cli, config::WINDOW, run_app, run_headless},
    eframe::NativeOptions,
    std::{panic, process},
};

fn main() -> eframe::Result {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };

    let mut builder = env_logger::Builder::new();

    builder
        .filter(None, global_level)
        .filter(Some("coin_table"), my_code_level)
        .init();

    let args = Cli::parse();

    if args.headless {
        match run_headless(&args) {
            Ok(report) => {
                println!("{}", report);
                return Ok(());
            }
            Err(e) => {
                eprintln!("{:#}", e);
                process::exit(1);
            }
        }
    }

    let options = NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size(WINDOW.inner_size)
            .with_min_inner_size(WINDOW.min_inner_size)
            .with_title(WINDOW.title),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW.app_name,
        options,
        Box::new(move |cc| Ok(Box::new(run_app(cc, args)))),
    )
}
