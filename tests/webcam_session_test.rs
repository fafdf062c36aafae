
use hand_gesture_mouse::{
    app::{run_webcam_mode, SessionExit, SessionOptions, WebcamSession},
    config::GestureConfig,
    controller::GestureController,
    constants::QUIT_KEY,
    Error,
};
use std::{cell::RefCell, rc::Rc};
use test_helpers::{
    lit_pixels, synthetic_hand, FailingActuator, RecordingActuator, RecordingWindow, ScriptedDetector, ScriptedSource, WindowLog,
};

const SCREEN: (u32, u32) = (1920, 1080);
const MOVE: [u8; 5] = [0, 1, 0, 0, 0];
const PINCH: [u8; 5] = [0, 1, 1, 0, 0];

fn gesture_settings(mirror_x: bool) -> GestureConfig {
    GestureConfig {
        mirror_x,
        ..GestureConfig::default()
    }
}

/// A hand sweeping left to right across the frame, one step per frame
fn sweep() -> Vec<Vec<hand_gesture_mouse::hand::Hand>> {
    (200..=1100)
        .step_by(100)
        .map(|x| vec![synthetic_hand(MOVE, (x, 360), (x + 30, 420))])
        .collect()
}

#[test]
fn test_sweep_moves_cursor_monotonically() {
    let script = sweep();
    let frames = script.len();
    let source = ScriptedSource::new(frames).unwrap();
    let detector = ScriptedDetector::new(script);
    let window = RecordingWindow::new(vec![]);
    let controller =
        GestureController::new(gesture_settings(false), SCREEN, Some(RecordingActuator::default())).unwrap();

    let mut session = WebcamSession::new(source, detector, window, controller, SessionOptions::default());
    let exit = session.run().unwrap();

    assert_eq!(exit, SessionExit::CaptureFailed);
    assert_eq!(session.frames_processed(), frames as u64);

    let moves = &session.controller().actuator().unwrap().moves;
    assert_eq!(moves.len(), frames);
    for pair in moves.windows(2) {
        assert!(pair[1].0 > pair[0].0, "x should increase: {pair:?}");
    }
    for &(x, y) in moves {
        assert!(x > 0.0 && x <= f64::from(SCREEN.0));
        assert!(y > 0.0 && y <= f64::from(SCREEN.1));
    }
}

#[test]
fn test_sweep_mirrored_moves_cursor_right_to_left() {
    let script = sweep();
    let frames = script.len();
    let source = ScriptedSource::new(frames).unwrap();
    let detector = ScriptedDetector::new(script);
    let window = RecordingWindow::new(vec![]);
    let controller =
        GestureController::new(gesture_settings(true), SCREEN, Some(RecordingActuator::default())).unwrap();

    let mut session = WebcamSession::new(source, detector, window, controller, SessionOptions::default());
    session.run().unwrap();

    let moves = &session.controller().actuator().unwrap().moves;
    assert_eq!(moves.len(), frames);
    for pair in moves.windows(2) {
        assert!(pair[1].0 < pair[0].0, "mirrored x should decrease: {pair:?}");
    }
    assert!(moves.iter().all(|&(x, _)| x < f64::from(SCREEN.0)));
}

#[test]
fn test_capture_failure_ends_session() {
    let source = ScriptedSource::new(2).unwrap();
    let detector = ScriptedDetector::default();
    let window = RecordingWindow::new(vec![]);
    let log = Rc::clone(&window.log);
    let controller = GestureController::<RecordingActuator>::new(gesture_settings(true), SCREEN, None).unwrap();

    let mut session = WebcamSession::new(source, detector, window, controller, SessionOptions::default());
    assert_eq!(session.run().unwrap(), SessionExit::CaptureFailed);
    assert_eq!(session.frames_processed(), 2);
    assert_eq!(log.borrow().shown, 2);
    assert_eq!(log.borrow().waits, vec![1, 1]);
}

#[test]
fn test_quit_key_stops_loop() {
    let source = ScriptedSource::new(10).unwrap();
    let detector = ScriptedDetector::default();
    let window = RecordingWindow::new(vec![-1, i32::from(b'a'), QUIT_KEY]);
    let controller = GestureController::<RecordingActuator>::new(gesture_settings(true), SCREEN, None).unwrap();

    let mut session = WebcamSession::new(source, detector, window, controller, SessionOptions::default());
    assert_eq!(session.run().unwrap(), SessionExit::Quit);
    assert_eq!(session.frames_processed(), 3);
}

#[test]
fn test_quit_key_ignores_modifier_bits() {
    let source = ScriptedSource::new(5).unwrap();
    let detector = ScriptedDetector::default();
    let window = RecordingWindow::new(vec![0x10_0000 | QUIT_KEY]);
    let controller = GestureController::<RecordingActuator>::new(gesture_settings(true), SCREEN, None).unwrap();

    let mut session = WebcamSession::new(source, detector, window, controller, SessionOptions::default());
    assert_eq!(session.run().unwrap(), SessionExit::Quit);
    assert_eq!(session.frames_processed(), 1);
}

#[test]
fn test_frames_without_hand_leave_cursor_alone() {
    let source = ScriptedSource::new(4).unwrap();
    let detector = ScriptedDetector::new(vec![vec![]; 4]);
    let window = RecordingWindow::new(vec![]);
    let log = Rc::clone(&window.log);
    let controller =
        GestureController::new(gesture_settings(true), SCREEN, Some(RecordingActuator::default())).unwrap();

    let mut session = WebcamSession::new(source, detector, window, controller, SessionOptions::default());
    session.run().unwrap();

    let actuator = session.controller().actuator().unwrap();
    assert!(actuator.moves.is_empty());
    assert_eq!(actuator.clicks, 0);
    // Every frame is still previewed
    assert_eq!(log.borrow().shown, 4);
    assert_eq!(log.borrow().topmost_requests, 4);
}

#[test]
fn test_held_pinch_clicks_on_every_frame() {
    let hand = synthetic_hand(PINCH, (600, 300), (620, 300));
    let source = ScriptedSource::new(3).unwrap();
    let detector = ScriptedDetector::repeating(&hand, 3);
    let window = RecordingWindow::new(vec![]);
    let controller =
        GestureController::new(gesture_settings(true), SCREEN, Some(RecordingActuator::default())).unwrap();

    let mut session = WebcamSession::new(source, detector, window, controller, SessionOptions::default());
    session.run().unwrap();

    let actuator = session.controller().actuator().unwrap();
    assert_eq!(actuator.clicks, 3);
    assert!(actuator.moves.is_empty());
}

#[test]
fn test_wide_pinch_does_not_click() {
    let hand = synthetic_hand(PINCH, (500, 300), (600, 300));
    let source = ScriptedSource::new(2).unwrap();
    let detector = ScriptedDetector::repeating(&hand, 2);
    let window = RecordingWindow::new(vec![]);
    let controller =
        GestureController::new(gesture_settings(true), SCREEN, Some(RecordingActuator::default())).unwrap();

    let mut session = WebcamSession::new(source, detector, window, controller, SessionOptions::default());
    session.run().unwrap();

    assert_eq!(session.controller().actuator().unwrap().clicks, 0);
}

#[test]
fn test_failing_actuator_keeps_loop_running() {
    let source = ScriptedSource::new(3).unwrap();
    let detector = ScriptedDetector::repeating(&synthetic_hand(MOVE, (640, 360), (670, 420)), 3);
    let window = RecordingWindow::new(vec![]);
    let controller = GestureController::new(gesture_settings(true), SCREEN, Some(FailingActuator)).unwrap();

    let mut session = WebcamSession::new(source, detector, window, controller, SessionOptions::default());
    assert_eq!(session.run().unwrap(), SessionExit::CaptureFailed);
    assert_eq!(session.frames_processed(), 3);
}

#[test]
fn test_resources_released_on_drop() {
    let source = ScriptedSource::new(1).unwrap();
    let released = Rc::clone(&source.released);
    let log = Rc::new(RefCell::new(WindowLog::default()));
    let window = RecordingWindow::with_log(vec![QUIT_KEY], Rc::clone(&log));
    let controller = GestureController::<RecordingActuator>::new(gesture_settings(true), SCREEN, None).unwrap();

    {
        let mut session =
            WebcamSession::new(source, ScriptedDetector::default(), window, controller, SessionOptions::default());
        assert_eq!(session.run().unwrap(), SessionExit::Quit);
        assert!(!*released.borrow());
        assert!(!log.borrow().closed);
    }

    assert!(*released.borrow());
    assert!(log.borrow().closed);
}

/// Run two hand-free frames and count lit pixels where the FPS text goes
fn fps_corner_pixels(show_fps: bool) -> usize {
    let source = ScriptedSource::new(2).unwrap();
    let window = RecordingWindow::new(vec![]);
    let log = Rc::clone(&window.log);
    let controller = GestureController::<RecordingActuator>::new(gesture_settings(true), SCREEN, None).unwrap();
    let options = SessionOptions { show_fps };

    let mut session = WebcamSession::new(source, ScriptedDetector::default(), window, controller, options);
    session.run().unwrap();

    let log = log.borrow();
    assert_eq!(log.shown, 2);
    lit_pixels(log.last_frame.as_ref().unwrap(), 200, 80).unwrap()
}

#[test]
fn test_fps_overlay_drawn_by_default() {
    assert!(fps_corner_pixels(true) > 0);
}

#[test]
fn test_fps_overlay_can_be_disabled() {
    assert_eq!(fps_corner_pixels(false), 0);
}

#[test]
fn test_camera_open_failure_ends_webcam_mode() {
    let log = Rc::new(RefCell::new(WindowLog::default()));
    let controller = GestureController::<RecordingActuator>::new(gesture_settings(true), SCREEN, None).unwrap();

    let exit = run_webcam_mode(
        || -> hand_gesture_mouse::Result<ScriptedSource> {
            Err(Error::Camera("index 0 could not be opened".to_string()))
        },
        ScriptedDetector::default(),
        || Ok(RecordingWindow::with_log(vec![], Rc::clone(&log))),
        controller,
        SessionOptions::default(),
    )
    .unwrap();

    assert_eq!(exit, None);
    assert_eq!(log.borrow().opened, 0);
    assert_eq!(log.borrow().shown, 0);
}

#[test]
fn test_window_open_failure_releases_camera() {
    let source = ScriptedSource::new(3).unwrap();
    let released = Rc::clone(&source.released);
    let controller = GestureController::<RecordingActuator>::new(gesture_settings(true), SCREEN, None).unwrap();

    let exit = run_webcam_mode(
        move || Ok(source),
        ScriptedDetector::default(),
        || -> hand_gesture_mouse::Result<RecordingWindow> { Err(Error::InvalidInput("no display".to_string())) },
        controller,
        SessionOptions::default(),
    )
    .unwrap();

    assert_eq!(exit, None);
    assert!(*released.borrow());
}

#[test]
fn test_webcam_mode_runs_until_capture_fails() {
    let controller = GestureController::<RecordingActuator>::new(gesture_settings(true), SCREEN, None).unwrap();
    let log = Rc::new(RefCell::new(WindowLog::default()));

    let exit = run_webcam_mode(
        || ScriptedSource::new(2),
        ScriptedDetector::default(),
        || Ok(RecordingWindow::with_log(vec![], Rc::clone(&log))),
        controller,
        SessionOptions::default(),
    )
    .unwrap();

    assert_eq!(exit, Some(SessionExit::CaptureFailed));
    assert_eq!(log.borrow().shown, 2);
    assert!(log.borrow().closed);
}
