use crate::classify_app::core::{init, transition, Effect, Msg, State};
use crate::classify_app::render::Render;
use crate::classify_app::run_effect::RunEffect;
use crate::classify_app::view_model::ViewModel;
use crate::config::Config;
use crate::file_picker::interface::FilePicker;
use crate::image_classifier::interface::ModelProvider;
use crate::library::logger::interface::Logger;
use crate::library::state_machine::StateMachine;
use eframe::egui;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;

const BUSY_REPAINT_INTERVAL: Duration = Duration::from_millis(50);

pub type TransitionFn = Box<dyn Fn(State, Msg) -> (State, Vec<Effect>)>;
pub type RunEffectFn = Box<dyn Fn(Effect, Sender<Msg>) + Send + Sync>;
pub type ClassifyMachine = StateMachine<State, Msg, Effect, TransitionFn, RunEffectFn>;

/// Builds the state machine, starting the model load right away.
pub fn new_machine(
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    model_provider: Arc<dyn ModelProvider + Send + Sync>,
) -> ClassifyMachine {
    let transition_logger = logger.with_namespace("transition");
    let run_effect = RunEffect::new(logger.with_namespace("effect"), model_provider);
    let initial = init(&config);

    let transition_fn: TransitionFn = Box::new(move |state, msg| {
        let _ = transition_logger.debug(&format!("msg: {:?}", msg));
        let (new_state, effects) = transition(&config, state, msg);
        let _ = transition_logger.debug(&format!("effects: {:?}", effects));
        (new_state, effects)
    });
    let run_effect_fn: RunEffectFn =
        Box::new(move |effect, msg_sender| run_effect.run_effect(effect, msg_sender));

    StateMachine::new(initial, transition_fn, run_effect_fn)
}

pub struct ClassifyApp {
    config: Config,
    machine: ClassifyMachine,
    file_picker: Arc<dyn FilePicker>,
    render: Render,
    last_width: Option<f32>,
}

impl ClassifyApp {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        model_provider: Arc<dyn ModelProvider + Send + Sync>,
        file_picker: Arc<dyn FilePicker>,
    ) -> Self {
        let machine = new_machine(config.clone(), logger, model_provider);

        Self {
            config,
            machine,
            file_picker,
            render: Render::new(),
            last_width: None,
        }
    }

    fn sync_width(&mut self, width: f32) {
        if self.last_width != Some(width) {
            self.last_width = Some(width);
            self.machine.dispatch(Msg::Resized { width });
        }
    }

    fn upload(&mut self) {
        let picked = self.file_picker.pick_image();
        self.machine.dispatch(Msg::FilePicked(picked));
    }
}

impl eframe::App for ClassifyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.machine.pump();
        self.sync_width(ctx.screen_rect().width());

        let view = ViewModel::from_state(&self.config, self.machine.state());
        let output = self.render.render(ctx, &view);

        if output.upload_clicked {
            self.upload();
        }

        let busy = self.machine.in_flight() > 0 || view.loading_indicator.is_some();
        if busy {
            ctx.request_repaint_after(BUSY_REPAINT_INTERVAL);
        }
    }
}
