use classify_app::main::ClassifyApp;
use config::{ClassifierKind, Config, LoggerKind, CONFIG_ENV_VAR};
use eframe::egui;
use file_picker::impl_rfd::FilePickerRfd;
use image_classifier::impl_fake::ModelProviderFake;
use image_classifier::impl_tract_onnx::ModelProviderTractOnnx;
use image_classifier::interface::ModelProvider;
use library::logger::impl_console::LoggerConsole;
use library::logger::impl_tracing::LoggerTracing;
use library::logger::interface::Logger;
use std::sync::Arc;

mod classify_app;
mod config;
mod file_picker;
mod image_classifier;
mod library;
mod logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let config_path = config::config_path_from(std::env::args(), std::env::var(CONFIG_ENV_VAR).ok());
    let config = Config::load(config_path.as_deref())?;

    let logger = new_logger(&config);

    let model_provider = new_model_provider(&config, logger.clone());

    let file_picker = Arc::new(FilePickerRfd::new(logger.clone()));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([320.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "AI Image Classification",
        options,
        Box::new(move |_cc| {
            Box::new(ClassifyApp::new(config, logger, model_provider, file_picker))
        }),
    )?;

    Ok(())
}

fn new_logger(config: &Config) -> Arc<dyn Logger + Send + Sync> {
    match config.logger {
        LoggerKind::Tracing => Arc::new(LoggerTracing::new()),
        LoggerKind::Console => Arc::new(LoggerConsole::new(config.logger_timezone())),
    }
}

fn new_model_provider(
    config: &Config,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Arc<dyn ModelProvider + Send + Sync> {
    match config.classifier {
        ClassifierKind::Onnx => Arc::new(ModelProviderTractOnnx::new(
            config.model.clone(),
            logger.with_namespace("model"),
        )),
        ClassifierKind::Fake => {
            let provider = ModelProviderFake::new(
                logger.with_namespace("model"),
                config.fake.load_delay(),
                config.fake.predictions.clone(),
                config.model.top_k,
            );
            if config.fake.fail_load {
                Arc::new(provider.failing())
            } else {
                Arc::new(provider)
            }
        }
    }
}
