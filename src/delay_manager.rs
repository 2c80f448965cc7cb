use log::info;
use rand::Rng;
use std::thread;
use std::time::Duration;

const MIN_BACKOFF_SECS: f64 = 1.0;
const MAX_BACKOFF_SECS: f64 = 3.0;

pub fn retry_backoff() {
    let mut rng = rand::thread_rng();
    let wait = rng.gen_range(MIN_BACKOFF_SECS..=MAX_BACKOFF_SECS);
    info!("Waiting {:.2} seconds before retrying...", wait);
    thread::sleep(Duration::from_secs_f64(wait));
}
