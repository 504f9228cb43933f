use rand::Rng;
use std::time::Duration;

/// Uniform pause between detail pages to avoid request-pattern detection.
pub fn random_pause() {
    let seconds = rand::rng().random_range(2.0..=5.0);
    println!("     -> Pausing for {:.1} seconds...", seconds);
    std::thread::sleep(Duration::from_secs_f64(seconds));
}
