use std::io::Cursor;
use tilt_core::OrientationSample;
use tilt_sensor::{LineSource, PermissionState, SensorClient, SweepSource};

#[tokio::test]
async fn streams_every_sample_in_order() {
    let source = LineSource::new(Cursor::new("0 90 0\n# skip\n45 90 0\n90 - 0\n"));
    let mut client = SensorClient::start(source, 0.0).unwrap();

    let mut samples = Vec::new();
    while let Some(sample) = client.recv().await {
        samples.push(sample);
    }
    assert_eq!(
        samples,
        vec![
            OrientationSample::from_degrees(0.0, 90.0, 0.0),
            OrientationSample::from_degrees(45.0, 90.0, 0.0),
            OrientationSample::new(Some(90.0), None, Some(0.0)),
        ]
    );
    assert_eq!(client.finish().await.unwrap(), 3);
}

#[tokio::test]
async fn denied_permission_stops_before_streaming() {
    let source = SweepSource::new(90.0, 0.0, 10.0, 5).with_permission(PermissionState::Denied);
    let err = SensorClient::start(source, 0.0).err().unwrap();
    assert!(err.to_string().contains("denied"));
}

#[tokio::test]
async fn granted_permission_streams() {
    let source = SweepSource::new(90.0, 0.0, 10.0, 4).with_permission(PermissionState::Granted);
    let mut client = SensorClient::start(source, 1000.0).unwrap();
    let mut count = 0;
    while client.recv().await.is_some() {
        count += 1;
    }
    assert_eq!(count, 4);
}

#[tokio::test]
async fn source_errors_surface_from_finish() {
    let source = LineSource::new(Cursor::new("1 2 3\nnot a sample\n"));
    let mut client = SensorClient::start(source, 0.0).unwrap();
    assert!(client.recv().await.is_some());
    assert!(client.recv().await.is_none());
    let err = client.finish().await.unwrap_err();
    assert!(format!("{err:#}").contains("line 2"));
}

#[tokio::test]
async fn dropping_receiver_ends_task() {
    let source = SweepSource::new(90.0, 0.0, 1.0, u32::MAX);
    let mut client = SensorClient::start(source, 0.0).unwrap();
    assert!(client.recv().await.is_some());
    let delivered = client.finish().await.unwrap();
    assert!(delivered >= 1);
}

#[tokio::test]
async fn boxed_sources_keep_their_gate() {
    let source: Box<dyn tilt_sensor::OrientationSource> =
        Box::new(SweepSource::new(90.0, 0.0, 10.0, 1).with_permission(PermissionState::Denied));
    assert!(SensorClient::start(source, 0.0).is_err());
}

#[tokio::test]
async fn unrepresentable_rate_is_an_error() {
    for rate in [1e-20_f32, 1e-39] {
        let source = SweepSource::new(90.0, 0.0, 1.0, 1);
        let err = SensorClient::start(source, rate).err().unwrap();
        assert!(err.to_string().contains("out of range"), "{rate}: {err}");
    }
}
