//! Writes messages above a running bar without disturbing it.

use rand::Rng;
use std::time::Duration;
use tickline::{Options, ProgressBar};

const NUM_IMAGES: u64 = 124;

fn main() -> Result<(), tickline::Error> {
    env_logger::init();
    println!("Processing images...");

    let mut bar = ProgressBar::new(":current/:total [:bar] :rate/s", Options::new(NUM_IMAGES).width(40))?;
    let mut rng = rand::thread_rng();

    for i in 0..NUM_IMAGES {
        std::thread::sleep(Duration::from_millis(15));

        // Simulate our resizing failing because we expected a square image.
        if rng.gen_ratio(1, 20) {
            bar.interrupt(&format!("Image #{:03}: Not square.", i))?;
        }

        bar.tick()?;
    }

    println!("Complete!");
    Ok(())
}
