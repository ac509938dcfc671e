// demos/shared_feed.rs
//! A producer thread feeds a shared buffer while the main thread consumes it

use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use tsbuf::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    let shared = SharedBuffer::with_config(BufferConfig {
        maxlen: 16,
        return_type: ReturnType::UArray,
    });

    let producer = shared.clone();
    let handle = thread::spawn(move || -> Result<()> {
        for burst in 0..10 {
            let t0 = burst as f64;
            let rows: Vec<[f64; 4]> = (0..5)
                .map(|k| {
                    let t = t0 + k as f64 * 0.2;
                    [t, 0.001, t * 2.0, 0.05]
                })
                .collect();
            producer.add_rows(rows)?;
            thread::sleep(Duration::from_millis(5));
        }
        Ok(())
    });

    let mut consumed = 0;
    while !handle.is_finished() || !shared.is_empty() {
        let out = shared.pop(4);
        if out.is_empty() {
            thread::sleep(Duration::from_millis(2));
            continue;
        }
        consumed += out.len();
        if let Output::UArray(pairs) = out {
            tracing::info!(first = %pairs[0][0], count = pairs.len(), "consumed");
        }
    }

    handle
        .join()
        .map_err(|_| BufferError::InvalidInput("producer thread panicked".into()))??;

    let stats = shared.stats();
    println!("\nconsumed {} samples", consumed);
    println!("{:?}", stats);
    assert!(stats.is_balanced());

    Ok(())
}
