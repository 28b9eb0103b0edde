use super::fixture::{tabby_cat, upload, Fixture};
use crate::classify_app::core::{Effect, LogLine, ModelState, Msg, MODEL_NOT_AVAILABLE};
use crate::classify_app::layout::Direction;
use crate::classify_app::upload::DecodeError;
use crate::classify_app::view_model::{ViewModel, LOADING_TEXT, UPLOAD_BUTTON_TEXT};
use crate::image_classifier::error::ClassifierError;
use crate::image_classifier::interface::Classification;
use std::path::PathBuf;

#[test]
fn test_init() {
    let f = Fixture::new();
    let (state, effects) = crate::classify_app::core::init(&f.config);

    assert!(matches!(state.model, ModelState::Loading));
    assert!(state.predictions.is_empty());
    assert!(state.upload.is_none());
    assert_eq!(state.layout.direction, Direction::Row);
    assert!(matches!(effects.as_slice(), [Effect::LoadModel]));
}

#[test]
fn test_upload_control_hidden_while_loading() {
    let f = Fixture::new();

    let view = ViewModel::from_state(&f.config, &f.init());

    assert_eq!(view.upload_button, None);
    assert_eq!(view.loading_indicator, Some(LOADING_TEXT));
    assert!(view.image.is_none());
    assert!(view.prediction_lines.is_empty());
}

#[test]
fn test_upload_control_shown_after_load() {
    let f = Fixture::new();

    let (state, effects) = f.step(f.init(), Msg::ModelLoadDone(Ok(f.classifier())));
    let view = ViewModel::from_state(&f.config, &state);

    assert!(state.model.is_ready());
    assert_eq!(view.upload_button, Some(UPLOAD_BUTTON_TEXT));
    assert_eq!(view.loading_indicator, None);
    assert!(matches!(effects.as_slice(), [Effect::Log(LogLine::Info(_))]));
}

#[test]
fn test_model_load_failure_stays_loading() {
    let f = Fixture::new();

    let (state, effects) = f.step(
        f.init(),
        Msg::ModelLoadDone(Err(ClassifierError::Unavailable("offline".to_string()))),
    );
    let view = ViewModel::from_state(&f.config, &state);

    assert!(matches!(state.model, ModelState::Loading));
    assert_eq!(view.loading_indicator, Some(LOADING_TEXT));
    assert_eq!(view.upload_button, None);
    // only a log line, no retry
    assert!(matches!(effects.as_slice(), [Effect::Log(LogLine::Error(_))]));
}

#[test]
fn test_file_picked_decodes_image() {
    let f = Fixture::new();

    let (state, effects) = f.step(
        f.ready_state(),
        Msg::FilePicked(Some(PathBuf::from("cat.png"))),
    );

    assert_eq!(state.latest_upload_id, 1);
    match effects.as_slice() {
        [Effect::DecodeImage { upload_id, path }] => {
            assert_eq!(*upload_id, 1);
            assert_eq!(path, &PathBuf::from("cat.png"));
        }
        other => panic!("Unexpected effects: {:?}", other),
    }
}

#[test]
fn test_file_dialog_cancelled() {
    let f = Fixture::new();

    let (state, effects) = f.step(f.ready_state(), Msg::FilePicked(None));

    assert_eq!(state.latest_upload_id, 0);
    assert!(effects.is_empty());
}

#[test]
fn test_tabby_cat_flow_renders_single_line() {
    let f = Fixture::new();

    let (state, _) = f.step(
        f.ready_state(),
        Msg::FilePicked(Some(PathBuf::from("cat.png"))),
    );
    let (state, effects) = f.step(
        state,
        Msg::ImageDecoded {
            upload_id: 1,
            result: Ok(upload(1)),
        },
    );

    assert_eq!(state.classifying, Some(1));
    assert!(matches!(
        effects.as_slice(),
        [Effect::Classify { upload_id: 1, .. }]
    ));

    let (state, effects) = f.step(
        state,
        Msg::ClassifyDone {
            upload_id: 1,
            result: Ok(vec![tabby_cat()]),
        },
    );
    let view = ViewModel::from_state(&f.config, &state);

    assert!(effects.is_empty());
    assert_eq!(state.classifying, None);
    assert_eq!(view.prediction_lines.len(), 1);
    assert_eq!(
        view.prediction_lines[0].sentence,
        "82.00% chances that it is a Tabby cat"
    );
    assert_eq!(view.prediction_lines[0].percent, "82.00%");
    assert!(view.image.is_some());
    assert!(view.results_filled);
}

#[test]
fn test_no_classify_while_model_unavailable() {
    let f = Fixture::new();

    let (state, _) = f.step(f.init(), Msg::FilePicked(Some(PathBuf::from("cat.png"))));
    let (state, effects) = f.step(
        state,
        Msg::ImageDecoded {
            upload_id: 1,
            result: Ok(upload(1)),
        },
    );

    assert!(!effects.iter().any(|e| matches!(e, Effect::Classify { .. })));
    assert!(matches!(
        effects.as_slice(),
        [Effect::Log(LogLine::Info(message))] if message == MODEL_NOT_AVAILABLE
    ));
    assert_eq!(state.classifying, None);
    assert!(state.predictions.is_empty());
    assert_eq!(f.classify_calls(), 0);
}

#[test]
fn test_decode_failure_keeps_previous_image() {
    let f = Fixture::new();
    let mut state = f.ready_state();
    state.upload = Some(upload(1));
    state.latest_upload_id = 2;

    let (state, effects) = f.step(
        state,
        Msg::ImageDecoded {
            upload_id: 2,
            result: Err(DecodeError::Image {
                path: PathBuf::from("broken.png"),
                source: image::ImageError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "missing",
                )),
            }),
        },
    );

    assert_eq!(state.upload.as_ref().map(|u| u.id), Some(1));
    assert!(matches!(effects.as_slice(), [Effect::Log(LogLine::Error(_))]));
}

#[test]
fn test_stale_results_are_ignored() {
    let f = Fixture::new();

    let (state, _) = f.step(f.ready_state(), Msg::FilePicked(Some(PathBuf::from("a.png"))));
    let (state, _) = f.step(
        state,
        Msg::ImageDecoded {
            upload_id: 1,
            result: Ok(upload(1)),
        },
    );
    let (state, _) = f.step(state, Msg::FilePicked(Some(PathBuf::from("b.png"))));
    let (state, _) = f.step(
        state,
        Msg::ImageDecoded {
            upload_id: 2,
            result: Ok(upload(2)),
        },
    );

    let (state, effects) = f.step(
        state,
        Msg::ClassifyDone {
            upload_id: 1,
            result: Ok(vec![tabby_cat()]),
        },
    );

    assert!(effects.is_empty());
    assert!(state.predictions.is_empty());
    assert_eq!(state.classifying, Some(2));

    // a decode for an old pick does not replace the image on screen
    let (state, _) = f.step(
        state,
        Msg::ImageDecoded {
            upload_id: 1,
            result: Ok(upload(1)),
        },
    );
    assert_eq!(state.upload.as_ref().map(|u| u.id), Some(2));
}

#[test]
fn test_classify_failure_keeps_previous_predictions() {
    let f = Fixture::new();
    let mut state = f.ready_state();
    state.predictions = vec![tabby_cat().into()];
    state.latest_upload_id = 3;
    state.classifying = Some(3);

    let (state, effects) = f.step(
        state,
        Msg::ClassifyDone {
            upload_id: 3,
            result: Err(ClassifierError::Inference("boom".to_string())),
        },
    );

    assert_eq!(state.predictions.len(), 1);
    assert_eq!(state.classifying, None);
    assert!(matches!(effects.as_slice(), [Effect::Log(LogLine::Error(_))]));
}

#[test]
fn test_new_results_replace_old_ones_in_order() {
    let f = Fixture::new();
    let mut state = f.ready_state();
    state.predictions = vec![tabby_cat().into()];
    state.latest_upload_id = 1;
    state.classifying = Some(1);

    let (state, _) = f.step(
        state,
        Msg::ClassifyDone {
            upload_id: 1,
            result: Ok(vec![
                Classification {
                    label: "golden retriever".to_string(),
                    probability: 0.6,
                },
                Classification {
                    label: "tennis ball".to_string(),
                    probability: 0.25,
                },
            ]),
        },
    );
    let view = ViewModel::from_state(&f.config, &state);

    let sentences: Vec<&str> = view
        .prediction_lines
        .iter()
        .map(|line| line.sentence.as_str())
        .collect();
    assert_eq!(
        sentences,
        vec![
            "60.00% chances that it is a Golden retriever",
            "25.00% chances that it is a Tennis ball",
        ]
    );
}

#[test]
fn test_resize_switches_layout() {
    let f = Fixture::new();

    let (state, effects) = f.step(f.init(), Msg::Resized { width: 480.0 });
    assert_eq!(state.layout.direction, Direction::Column);
    assert_eq!(state.layout.gap, 10.0);
    assert!(effects.is_empty());

    let (state, _) = f.step(state, Msg::Resized { width: 1024.0 });
    assert_eq!(state.layout.direction, Direction::Row);
    assert_eq!(state.layout.gap, 100.0);
}

#[test]
fn test_results_panel_empty_before_upload() {
    let f = Fixture::new();

    let view = ViewModel::from_state(&f.config, &f.ready_state());

    assert!(!view.results_filled);
    assert!(view.image.is_none());
}

#[test]
fn test_image_display_size_fits_box() {
    let f = Fixture::new();
    let mut state = f.ready_state();
    state.upload = Some(upload(1));

    let view = ViewModel::from_state(&f.config, &state);
    let (width, height) = view.image.unwrap().display_size();

    // 16x12 scaled to fit 300x300
    assert!((width - 300.0).abs() < 1e-3);
    assert!((height - 225.0).abs() < 1e-3);
}
