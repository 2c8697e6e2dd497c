use std::time::Duration;
use tickline::{Options, ProgressBar};

fn main() -> Result<(), tickline::Error> {
    env_logger::init();
    println!("Starting bar...");

    let opts = Options::new(50).width(30).hide_after(false);
    let mut bar = ProgressBar::new("[:bar] :current/:total :percent", opts)?;

    for _ in 0..50 {
        std::thread::sleep(Duration::from_millis(60));
        bar.tick()?;
    }

    println!();
    println!("Complete!");
    Ok(())
}
