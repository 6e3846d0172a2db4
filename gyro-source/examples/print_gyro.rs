use std::sync::Arc;

use common::{LiveConfig, Sample3D};
use publisher::Listener;
use tokio::time::Duration;

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = Arc::new(LiveConfig::default());

    // Start phyphox service
    let (handle_phyphox, phyphox) =
        gyro_source::run_service(gyro_source::DEFAULT_PHYPHOX_URL, config, Some(4)).unwrap();

    phyphox.register_listener(&mut Listener::new(|_id, sample: Arc<Sample3D>| async move {
        println!("{:.3} {}", sample.get_timestamp(), sample);
    }));

    let timeout_duration = Duration::from_secs(200);
    let _ = tokio::time::timeout(timeout_duration, async {
        handle_phyphox.await.unwrap();
    })
    .await;
}
