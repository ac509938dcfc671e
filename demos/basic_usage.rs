// demos/basic_usage.rs
//! Basic usage of the time-series buffer

use tsbuf::prelude::*;

fn main() -> Result<()> {
    println!("=== Basic Buffer Usage ===\n");

    // 1. Create a buffer holding at most 5 samples
    let mut buf = TimeSeriesBuffer::new(5);

    // Rows of (t, v), (t, v, uv) and (t, ut, v, uv)
    buf.add_rows(&[vec![0.0, 20.1], vec![0.1, 20.2, 0.05]])?;
    buf.add_rows([[0.2, 0.001, 20.3, 0.05]])?;

    println!("{}", buf);
    for sample in &buf {
        println!("  {}", sample);
    }

    println!("\n=== Column Input ===\n");

    // Scalars broadcast to the length of the time column
    buf.add_columns(Columns::new(vec![0.3, 0.4, 0.5]).value(vec![20.4, 20.5, 20.6]).value_unc(0.05))?;
    println!("{} (oldest evicted)", buf);

    // Uncertain numbers carry their own standard deviation
    let t = vec![UFloat::new(0.6, 0.002)];
    let v = vec![UFloat::new(20.7, 0.04)];
    buf.add_columns(Columns::new(t).value(v))?;
    println!("latest: {}", buf.latest().map(ToString::to_string).unwrap_or_default());

    println!("\n=== Output Layouts ===\n");

    for return_type in ReturnType::ALL {
        buf.set_return_type(return_type);
        let out = buf.show(2);
        println!("{:>8}: shape {:?} {:?}", return_type, out.shape(), out);
    }

    println!("\n=== Popping ===\n");

    buf.set_return_type(ReturnType::List);
    let oldest = buf.pop(2);
    println!("popped {} samples, {} left", oldest.len(), buf.len());

    // Bad input is rejected without touching the buffer
    let err = buf
        .add_columns(Columns::new(vec![1.0, 2.0]).value(vec![1.0]))
        .unwrap_err();
    println!("rejected: {}", err);
    println!("{}", buf);

    buf.burn();
    println!("after burn: {}", buf);

    Ok(())
}
