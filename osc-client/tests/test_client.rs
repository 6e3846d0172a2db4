use common::{Endpoint, LiveConfig, Sample3D};
use osc_client::{OscClient, GYRO_ADDRESS};
use rosc::{decoder, OscPacket, OscType};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;

async fn local_receiver() -> (UdpSocket, Endpoint) {
    let receiver = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let port = receiver.local_addr().unwrap().port();
    (receiver, Endpoint::new("127.0.0.1", port))
}

async fn receive_xyz(receiver: &UdpSocket) -> [f32; 3] {
    let mut buf = [0u8; 1024];
    let (len, _) = tokio::time::timeout(Duration::from_secs(2), receiver.recv_from(&mut buf))
        .await
        .expect("Nothing received")
        .unwrap();
    let OscPacket::Message(msg) = decoder::decode_udp(&buf[..len]).unwrap().1 else {
        panic!("Expected a message");
    };
    assert_eq!(msg.addr, GYRO_ADDRESS);
    match msg.args.as_slice() {
        [OscType::Float(x), OscType::Float(y), OscType::Float(z)] => [*x, *y, *z],
        other => panic!("Unexpected arguments {:?}", other),
    }
}

#[tokio::test]
async fn test_reconfigure_does_not_touch_dispatched_send() {
    let (old_receiver, old_endpoint) = local_receiver().await;
    let (new_receiver, new_endpoint) = local_receiver().await;
    let client = OscClient::bind(Arc::new(LiveConfig::new(old_endpoint, Default::default())))
        .await
        .unwrap();

    // dispatched but not yet run on this current thread runtime
    let in_flight = client.send(&Sample3D::new(0.0, [1.0, 1.0, 1.0]));
    client.configure(new_endpoint.clone());
    let next = client.send(&Sample3D::new(0.1, [2.0, 2.0, 2.0]));

    in_flight.await.unwrap().unwrap();
    next.await.unwrap().unwrap();

    assert_eq!(receive_xyz(&old_receiver).await, [1.0, 1.0, 1.0]);
    assert_eq!(receive_xyz(&new_receiver).await, [2.0, 2.0, 2.0]);
    assert_eq!(client.endpoint(), new_endpoint);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_burst_of_sends_arrives_in_any_order() {
    let (receiver, endpoint) = local_receiver().await;
    let client = OscClient::bind(Arc::new(LiveConfig::new(endpoint, Default::default())))
        .await
        .unwrap();

    let handles: Vec<_> = (0..20)
        .map(|i| client.send(&Sample3D::new(0.0, [i as f64, 0.0, 0.0])))
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    // UDP gives no ordering guarantee; only the set of values is checked
    let mut received = Vec::new();
    for _ in 0..20 {
        received.push(receive_xyz(&receiver).await[0] as i32);
    }
    received.sort();
    assert_eq!(received, (0..20).collect::<Vec<i32>>());
}
