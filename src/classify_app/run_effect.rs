use crate::classify_app::core::{Effect, LogLine, Msg};
use crate::classify_app::upload::Upload;
use crate::image_classifier::interface::ModelProvider;
use crate::library::logger::interface::Logger;
use std::sync::mpsc::Sender;
use std::sync::Arc;

#[derive(Clone)]
pub struct RunEffect {
    logger: Arc<dyn Logger + Send + Sync>,
    model_provider: Arc<dyn ModelProvider + Send + Sync>,
}

impl RunEffect {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        model_provider: Arc<dyn ModelProvider + Send + Sync>,
    ) -> Self {
        Self {
            logger,
            model_provider,
        }
    }

    pub fn run_effect(&self, effect: Effect, msg_sender: Sender<Msg>) {
        let _ = self
            .logger
            .debug(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::LoadModel => {
                let _ = self.logger.info("Loading model...");
                let loaded = self.model_provider.load();
                let _ = msg_sender.send(Msg::ModelLoadDone(loaded));
            }
            Effect::DecodeImage { upload_id, path } => {
                let decoded = Upload::decode(upload_id, &path);
                if let Ok(upload) = &decoded {
                    let _ = self.logger.info(&format!(
                        "Decoded {} ({}x{})",
                        upload.file_name(),
                        upload.image.width(),
                        upload.image.height()
                    ));
                }
                let _ = msg_sender.send(Msg::ImageDecoded {
                    upload_id,
                    result: decoded,
                });
            }
            Effect::Classify {
                upload_id,
                classifier,
                upload,
            } => {
                let classifications = classifier.classify(&upload.image);
                let _ = msg_sender.send(Msg::ClassifyDone {
                    upload_id,
                    result: classifications,
                });
            }
            Effect::Log(LogLine::Info(message)) => {
                let _ = self.logger.info(&message);
            }
            Effect::Log(LogLine::Error(message)) => {
                let _ = self.logger.error(&message);
            }
        }
    }
}
