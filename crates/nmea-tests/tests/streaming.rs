//! Async transport tests: a device writing over an in-memory pipe.

use nmea_decoder::{StreamDecoder, streaming};
use nmea_tests::{GGA, RMC, assert_same_events, decode_all};
use tokio::io::AsyncWriteExt;

#[tokio::test]
async fn pump_decodes_fragmented_writes() {
    let stream = format!("{GGA}{RMC}{GGA}").into_bytes();
    let expected = decode_all(&stream);
    let (mut device, mut host) = tokio::io::duplex(16);

    let writer = {
        let stream = stream.clone();
        tokio::spawn(async move {
            for piece in stream.chunks(11) {
                device.write_all(piece).await.unwrap();
                tokio::task::yield_now().await;
            }
        })
    };

    let mut decoder = StreamDecoder::new(Vec::new());
    let read = streaming::pump(&mut host, &mut decoder, 7).await.unwrap();
    writer.await.unwrap();

    assert_eq!(read, stream.len() as u64);
    assert_same_events(decoder.sink(), &expected);
}

#[tokio::test]
async fn callbacks_receive_positions_and_headings() {
    let mut positions = Vec::new();
    let mut headings = Vec::new();
    let input = format!("{GGA}{RMC}");
    let mut reader = input.as_bytes();

    {
        let mut decoder = StreamDecoder::from_callbacks(
            |lat: f64, lon: f64, _| positions.push((lat, lon)),
            |heading: f32, _| headings.push(heading),
        );
        streaming::pump(&mut reader, &mut decoder, 5).await.unwrap();
    }

    assert_eq!(positions.len(), 2);
    assert_eq!(headings.len(), 1);
    assert!((positions[1].0 - 49.274_167).abs() < 1e-6);
}
