
use hand_gesture_mouse::{app::run_image_mode, Error};
use opencv::{core::Vector, imgcodecs};
use std::{cell::RefCell, path::Path, rc::Rc};
use test_helpers::{create_test_frame, synthetic_hand, RecordingWindow, ScriptedDetector, WindowLog};

#[test]
fn test_missing_image_skips_detection_and_window() {
    let mut detector = ScriptedDetector::default();
    let log = Rc::new(RefCell::new(WindowLog::default()));

    let result = run_image_mode(Path::new("/nonexistent/hand.jpg"), &mut detector, || {
        Ok(RecordingWindow::with_log(vec![], Rc::clone(&log)))
    })
    .unwrap();

    assert_eq!(result, None);
    assert_eq!(detector.calls, 0);
    assert_eq!(log.borrow().opened, 0);
}

#[test]
fn test_image_with_hand_reports_landmarks() {
    let path = std::env::temp_dir().join("hand_gesture_mouse_image_mode.png");
    let frame = create_test_frame().unwrap();
    assert!(imgcodecs::imwrite(path.to_str().unwrap(), &frame, &Vector::new()).unwrap());

    let hand = synthetic_hand([1, 1, 1, 1, 1], (600, 200), (640, 190));
    let mut detector = ScriptedDetector::new(vec![vec![hand]]);
    let log = Rc::new(RefCell::new(WindowLog::default()));

    let result = run_image_mode(&path, &mut detector, || {
        Ok(RecordingWindow::with_log(vec![], Rc::clone(&log)))
    })
    .unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(result, Some(21));
    assert_eq!(detector.calls, 1);
    let log = log.borrow();
    assert_eq!(log.opened, 1);
    assert_eq!(log.shown, 1);
    // Blocks until a key press
    assert_eq!(log.waits, vec![0]);
    assert!(log.closed);
}

#[test]
fn test_image_without_hand_still_shows_window() {
    let path = std::env::temp_dir().join("hand_gesture_mouse_image_mode_empty.png");
    let frame = create_test_frame().unwrap();
    assert!(imgcodecs::imwrite(path.to_str().unwrap(), &frame, &Vector::new()).unwrap());

    let mut detector = ScriptedDetector::default();
    let log = Rc::new(RefCell::new(WindowLog::default()));

    let result = run_image_mode(&path, &mut detector, || {
        Ok(RecordingWindow::with_log(vec![], Rc::clone(&log)))
    })
    .unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(result, None);
    assert_eq!(detector.calls, 1);
    assert_eq!(log.borrow().shown, 1);
}

#[test]
fn test_window_failure_still_reports_landmarks() {
    let path = std::env::temp_dir().join("hand_gesture_mouse_image_mode_headless.png");
    let frame = create_test_frame().unwrap();
    assert!(imgcodecs::imwrite(path.to_str().unwrap(), &frame, &Vector::new()).unwrap());

    let hand = synthetic_hand([0, 1, 0, 0, 0], (600, 200), (640, 300));
    let mut detector = ScriptedDetector::new(vec![vec![hand]]);

    let result = run_image_mode(&path, &mut detector, || -> hand_gesture_mouse::Result<RecordingWindow> {
        Err(Error::InvalidInput("no display".to_string()))
    })
    .unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(result, Some(21));
    assert_eq!(detector.calls, 1);
}
