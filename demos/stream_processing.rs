// demos/stream_processing.rs
//! Streams noisy readings through a small buffer and averages each window

use tsbuf::prelude::*;

fn main() -> Result<()> {
    println!("=== Stream Processing Example ===\n");

    let mut window = TimeSeriesBuffer::with_config(BufferConfig {
        maxlen: 8,
        return_type: ReturnType::Arrays,
    });

    // Simulate a sensor delivering chunks of different sizes
    let chunks = [3usize, 5, 4, 6];
    let mut t = 0.0;

    for (i, &size) in chunks.iter().enumerate() {
        let times: Vec<f64> = (0..size).map(|k| t + k as f64 * 0.5).collect();
        let values: Vec<f64> = times.iter().map(|x| 20.0 + (x * 0.7).sin()).collect();
        t += size as f64 * 0.5;

        let evicted = window.add_columns(
            Columns::new(times)
                .time_unc(0.01)
                .value(values)
                .value_unc(0.1),
        )?;
        println!(
            "Chunk {}: added {} samples, evicted {} ({})",
            i + 1,
            size,
            evicted,
            window
        );

        if let Output::Arrays { time, value, .. } = window.show_all() {
            let mean = value.iter().sum::<f64>() / value.len() as f64;
            println!(
                "  window t=[{:.1}, {:.1}] mean value {:.3}",
                time[0],
                time[time.len() - 1],
                mean
            );
        }
    }

    // Drain the rest in pairs
    println!("\nDraining:");
    while !window.is_empty() {
        let drained = window.pop_samples(2);
        for sample in drained {
            println!("  {}", sample);
        }
    }

    Ok(())
}
