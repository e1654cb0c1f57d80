use centroidtrack_rs::{BoundingBox, Centroid, CentroidTracker, TrackerConfig};

fn bbox(x1: f32, y1: f32, x2: f32, y2: f32) -> BoundingBox {
    BoundingBox::new(x1, y1, x2, y2)
}

#[test]
fn test_basic_tracking() {
    let mut tracker = CentroidTracker::new(TrackerConfig { max_disappeared: 2 });

    // Frame 1: one detection registers object 0 at the box midpoint.
    let objects = tracker.update(&[bbox(0.0, 0.0, 10.0, 10.0)]).unwrap();
    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0].object_id, 0);
    assert_eq!(objects[0].centroid, Centroid::new(5, 5));

    // Frame 2: the object moved; same id, new centroid, counter reset.
    let objects = tracker.update(&[bbox(2.0, 2.0, 12.0, 12.0)]).unwrap();
    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0].object_id, 0);
    assert_eq!(objects[0].centroid, Centroid::new(7, 7));
    assert_eq!(objects[0].disappeared, 0);

    // Frame 3: no detections; the object is retained with one miss.
    let objects = tracker.update(&[]).unwrap();
    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0].disappeared, 1);

    // Frame 4: still nothing; the counter reaches the threshold and the
    // object is evicted.
    let objects = tracker.update(&[]).unwrap();
    assert!(objects.is_empty());
}

#[test]
fn test_identities_follow_nearest_candidates() {
    let mut tracker = CentroidTracker::new(TrackerConfig::default());

    // Two well-separated objects.
    tracker
        .update(&[bbox(0.0, 0.0, 10.0, 10.0), bbox(200.0, 0.0, 210.0, 10.0)])
        .unwrap();

    // Both drift slightly; detection order is reversed to make sure
    // identity follows proximity, not input position.
    let objects = tracker
        .update(&[bbox(203.0, 1.0, 213.0, 11.0), bbox(3.0, 1.0, 13.0, 11.0)])
        .unwrap();

    assert_eq!(objects.len(), 2);
    assert_eq!(objects[0].object_id, 0);
    assert_eq!(objects[0].centroid, Centroid::new(8, 6));
    assert_eq!(objects[1].object_id, 1);
    assert_eq!(objects[1].centroid, Centroid::new(208, 6));
    assert!(objects.iter().all(|o| o.disappeared == 0));
}

#[test]
fn test_excess_candidates_are_registered() {
    let mut tracker = CentroidTracker::new(TrackerConfig::default());
    tracker.update(&[bbox(0.0, 0.0, 10.0, 10.0)]).unwrap();

    let objects = tracker
        .update(&[
            bbox(1.0, 1.0, 11.0, 11.0),
            bbox(300.0, 0.0, 310.0, 10.0),
            bbox(0.0, 300.0, 10.0, 310.0),
        ])
        .unwrap();

    // Total equals the candidate count; new ids extend the sequence.
    assert_eq!(objects.len(), 3);
    assert_eq!(objects[0].object_id, 0);
    assert_eq!(objects[1].object_id, 1);
    assert_eq!(objects[2].object_id, 2);
}

#[test]
fn test_missing_objects_age_without_registration() {
    let mut tracker = CentroidTracker::new(TrackerConfig::default());
    tracker
        .update(&[
            bbox(0.0, 0.0, 10.0, 10.0),
            bbox(200.0, 0.0, 210.0, 10.0),
            bbox(0.0, 200.0, 10.0, 210.0),
        ])
        .unwrap();

    // Only the first object is seen again.
    let objects = tracker.update(&[bbox(1.0, 1.0, 11.0, 11.0)]).unwrap();
    assert_eq!(objects.len(), 3);
    assert_eq!(objects[0].disappeared, 0);
    assert_eq!(objects[1].disappeared, 1);
    assert_eq!(objects[2].disappeared, 1);
}

#[test]
fn test_object_ids_are_never_reused() {
    let mut tracker = CentroidTracker::new(TrackerConfig { max_disappeared: 1 });

    tracker.update(&[bbox(0.0, 0.0, 10.0, 10.0)]).unwrap();
    let objects = tracker.update(&[]).unwrap();
    assert!(objects.is_empty());

    // A new detection at the same spot is a new identity, not object 0.
    let objects = tracker.update(&[bbox(0.0, 0.0, 10.0, 10.0)]).unwrap();
    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0].object_id, 1);
}

#[test]
fn test_empty_frames_increment_every_counter() {
    let mut tracker = CentroidTracker::new(TrackerConfig::default());
    tracker
        .update(&[bbox(0.0, 0.0, 10.0, 10.0), bbox(200.0, 0.0, 210.0, 10.0)])
        .unwrap();

    for expected in 1..=3 {
        let objects = tracker.update(&[]).unwrap();
        assert_eq!(objects.len(), 2);
        assert!(objects.iter().all(|o| o.disappeared == expected));
    }
}

#[test]
fn test_reappearance_within_tolerance_keeps_identity() {
    let mut tracker = CentroidTracker::new(TrackerConfig { max_disappeared: 5 });

    tracker.update(&[bbox(100.0, 100.0, 200.0, 200.0)]).unwrap();
    tracker.update(&[]).unwrap();
    tracker.update(&[]).unwrap();

    let objects = tracker.update(&[bbox(110.0, 110.0, 210.0, 210.0)]).unwrap();
    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0].object_id, 0);
    assert_eq!(objects[0].centroid, Centroid::new(160, 160));
    assert_eq!(objects[0].disappeared, 0);
}
