//! Simulates a download of uneven chunks, reporting throughput as a custom
//! token.

use rand::Rng;
use std::time::Duration;
use tickline::{Options, ProgressBar};

const SIZE: u64 = 1024 * 1024;

fn main() -> Result<(), tickline::Error> {
    env_logger::init();
    println!("Downloading...");

    let opts = Options::new(SIZE).width(40).complete('#').incomplete(' ');
    let mut bar = ProgressBar::new(
        "[:bar] :percent :elapseds elapsed, :etas left (:speed)",
        opts,
    )?;

    let mut rng = rand::thread_rng();

    while !bar.is_complete() {
        let chunk = rng.gen_range(4096..32768);
        let wait = rng.gen_range(5..40);
        std::thread::sleep(Duration::from_millis(wait));

        let speed = format!("{:.1}KB/s", chunk as f64 / 1024.0 / (wait as f64 / 1000.0));
        bar.tick_by_with(chunk, [("speed", speed)])?;
    }

    println!("Complete!");
    Ok(())
}
