// tests/integration_tests.rs
//! Integration tests for the time-series buffer

use rand::prelude::*;
use tsbuf::prelude::*;

const MAXLEN: usize = 50;
const N: usize = 10;
const N_SAMPLES: usize = 7;

/// `n` rows of `m` numbers in `[0, 1)`.
fn matrix(rng: &mut StdRng, n: usize, m: usize) -> Vec<Vec<f64>> {
    (0..n)
        .map(|_| (0..m).map(|_| rng.gen_range(0.0..1.0)).collect())
        .collect()
}

fn column(data: &[Vec<f64>], j: usize) -> Vec<f64> {
    data.iter().map(|row| row[j]).collect()
}

fn as_rows(data: &[Vec<f64>]) -> Vec<[f64; 4]> {
    data.iter().map(|r| [r[0], r[1], r[2], r[3]]).collect()
}

fn buffer(return_type: ReturnType) -> TimeSeriesBuffer {
    TimeSeriesBuffer::with_config(BufferConfig {
        maxlen: MAXLEN,
        return_type,
    })
}

#[test]
fn test_add_rows_of_every_width() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut tsb = TimeSeriesBuffer::new(MAXLEN);
    let mut counter = 0;

    for m in [2, 3, 4] {
        let data = matrix(&mut rng, N, m);
        tsb.add_rows(&data).unwrap();

        counter += data.len();
        assert_eq!(tsb.len(), counter.min(MAXLEN));

        // the width changes, so only the timestamp is comparable
        assert_eq!(tsb.latest().unwrap().time, data[N - 1][0]);
    }
}

#[test]
fn test_add_rows_fill_past_maxlen() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut tsb = TimeSeriesBuffer::new(MAXLEN);

    let mut evicted = 0;
    for _ in 0..7 {
        evicted += tsb.add_rows(&matrix(&mut rng, N, 4)).unwrap();
    }

    assert_eq!(tsb.len(), MAXLEN);
    assert_eq!(evicted, 7 * N - MAXLEN);
}

#[test]
fn test_add_uncertain_rows() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut tsb = TimeSeriesBuffer::new(MAXLEN);
    let data = matrix(&mut rng, N, 4);

    let urows: Vec<[UFloat; 2]> = data
        .iter()
        .map(|r| [UFloat::new(r[0], r[1]), UFloat::new(r[2], r[3])])
        .collect();
    tsb.add_rows(urows).unwrap();

    assert_eq!(tsb.len(), N.min(MAXLEN));
    assert_eq!(tsb.latest().unwrap().as_array(), as_rows(&data)[N - 1]);
}

#[test]
fn test_add_column_combinations() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut tsb = TimeSeriesBuffer::new(MAXLEN);
    let data = matrix(&mut rng, N, 4);
    let (t, ut, v, uv) = (
        column(&data, 0),
        column(&data, 1),
        column(&data, 2),
        column(&data, 3),
    );
    let last = &data[N - 1];
    let ignore = Sample::EMPTY_UNC;

    // no uncertainty information
    tsb.add_columns(Columns::new(t.clone()).value(v.clone())).unwrap();
    assert_eq!(
        *tsb.latest().unwrap(),
        Sample::new(last[0], ignore, last[2], ignore)
    );

    // typical uncertainty information
    tsb.add_columns(Columns::new(t.clone()).value(v.clone()).value_unc(uv.clone()))
        .unwrap();
    assert_eq!(
        *tsb.latest().unwrap(),
        Sample::new(last[0], ignore, last[2], last[3])
    );

    // full uncertainty information
    tsb.add_columns(
        Columns::new(t.clone())
            .time_unc(ut.clone())
            .value(v.clone())
            .value_unc(uv),
    )
    .unwrap();
    assert_eq!(
        *tsb.latest().unwrap(),
        Sample::new(last[0], last[1], last[2], last[3])
    );

    // untypical uncertainty information
    tsb.add_columns(Columns::new(t).time_unc(ut).value(v)).unwrap();
    assert_eq!(
        *tsb.latest().unwrap(),
        Sample::new(last[0], last[1], last[2], ignore)
    );

    assert_eq!(tsb.len(), 4 * N);
}

#[test]
fn test_add_uncertain_columns() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut tsb = TimeSeriesBuffer::new(MAXLEN);
    let data = matrix(&mut rng, N, 4);

    let t: Vec<UFloat> = data.iter().map(|r| UFloat::new(r[0], r[1])).collect();
    let v: Vec<UFloat> = data.iter().map(|r| UFloat::new(r[2], r[3])).collect();
    tsb.add_columns(Columns::new(t).value(v)).unwrap();

    assert_eq!(tsb.len(), N.min(MAXLEN));
    assert_eq!(tsb.latest().unwrap().as_array(), as_rows(&data)[N - 1]);
}

#[test]
fn test_add_mixed_types() {
    let mut tsb = TimeSeriesBuffer::new(MAXLEN);

    // pairs mixing plain and uncertain numbers
    tsb.add_rows([
        Row::from((0.0, UFloat::new(1.0, 0.1))),
        Row::from((UFloat::new(1.0, 0.01), 2.0)),
    ])
    .unwrap();

    // uncertain times with a broadcast scalar value
    tsb.add_columns(
        Columns::new(vec![UFloat::new(2.0, 0.02), UFloat::new(3.0, 0.03)])
            .value(5.0)
            .value_unc(0.5),
    )
    .unwrap();

    // a single scalar sample
    tsb.add_columns(Columns::new(4.0).value(vec![UFloat::new(6.0, 0.6)]))
        .unwrap();

    assert_eq!(
        tsb.show_samples(5),
        vec![
            Sample::new(0.0, 0.0, 1.0, 0.1),
            Sample::new(1.0, 0.01, 2.0, 0.0),
            Sample::new(2.0, 0.02, 5.0, 0.5),
            Sample::new(3.0, 0.03, 5.0, 0.5),
            Sample::new(4.0, 0.0, 6.0, 0.6),
        ]
    );
}

#[test]
fn test_error_on_shape_mismatch() {
    let mut rng = StdRng::seed_from_u64(6);
    let mut tsb = TimeSeriesBuffer::new(MAXLEN);
    let data = matrix(&mut rng, N, 4);
    let (t, ut, v, uv) = (
        column(&data, 0),
        column(&data, 1),
        column(&data, 2),
        column(&data, 3),
    );
    let short = |c: &[f64]| c[..c.len() - 2].to_vec();

    let cases = [
        ("time_unc", short(&ut), v.clone(), uv.clone()),
        ("value", ut.clone(), short(&v), uv.clone()),
        ("value_unc", ut.clone(), v.clone(), short(&uv)),
    ];

    for (field, ut_, v_, uv_) in cases {
        let result = tsb.add_columns(
            Columns::new(t.clone())
                .time_unc(ut_)
                .value(v_)
                .value_unc(uv_),
        );
        assert_eq!(
            result,
            Err(BufferError::LengthMismatch {
                field,
                expected: N,
                actual: N - 2,
            })
        );
    }

    assert!(tsb.is_empty());
}

#[test]
fn test_error_on_row_width() {
    let mut tsb = TimeSeriesBuffer::new(MAXLEN);
    let data = vec![vec![0.0, 1.0], vec![0.0; 5]];
    assert_eq!(tsb.add_rows(&data), Err(BufferError::UnsupportedWidth(5)));
    assert!(tsb.is_empty());
}

#[test]
fn test_pop_size_and_order() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut tsb = buffer(ReturnType::Array);
    let data = matrix(&mut rng, N, 4);
    tsb.add_rows(&data).unwrap();

    let length_before_pop = tsb.len();
    let result = tsb.pop(N_SAMPLES);
    let length_after_pop = tsb.len();

    if N_SAMPLES > length_before_pop {
        assert_eq!(length_after_pop, 0);
    } else {
        assert_eq!(length_before_pop - N_SAMPLES, length_after_pop);
    }

    // the oldest elements come out first
    assert_eq!(result, Output::Array(as_rows(&data)[..N_SAMPLES].to_vec()));
}

#[test]
fn test_show_size_and_order() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut tsb = buffer(ReturnType::Array);
    let data = matrix(&mut rng, N, 4);
    tsb.add_rows(&data).unwrap();

    let length_before_show = tsb.len();
    let result = tsb.show(N_SAMPLES);
    assert_eq!(tsb.len(), length_before_show);

    // the newest elements, in insertion order
    assert_eq!(result, Output::Array(as_rows(&data)[N - N_SAMPLES..].to_vec()));
}

#[test]
fn test_show_all() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut tsb = buffer(ReturnType::Array);
    let data = matrix(&mut rng, N, 4);
    tsb.add_rows(&data).unwrap();

    let result = tsb.show_all();
    assert_eq!(result.len(), N);
    assert_eq!(result, Output::Array(as_rows(&data)));
}

#[test]
fn test_return_format_list() {
    let mut tsb = buffer(ReturnType::List);
    tsb.add_rows(&matrix(&mut StdRng::seed_from_u64(10), N, 4)).unwrap();

    match tsb.show(N_SAMPLES) {
        Output::List(samples) => assert_eq!(samples.len(), N_SAMPLES),
        other => panic!("expected list, got {:?}", other),
    }
}

#[test]
fn test_return_format_array() {
    let mut tsb = buffer(ReturnType::Array);
    tsb.add_rows(&matrix(&mut StdRng::seed_from_u64(11), N, 4)).unwrap();

    let result = tsb.show(N_SAMPLES);
    assert_eq!(result.shape(), (N_SAMPLES, 4));
    assert!(matches!(result, Output::Array(_)));
}

#[test]
fn test_return_format_arrays() {
    let mut tsb = buffer(ReturnType::Arrays);
    let data = matrix(&mut StdRng::seed_from_u64(12), N, 4);
    tsb.add_rows(&data).unwrap();

    match tsb.show(N_SAMPLES) {
        Output::Arrays {
            time,
            time_unc,
            value,
            value_unc,
        } => {
            let tail = N - N_SAMPLES;
            assert_eq!(time, &column(&data, 0)[tail..]);
            assert_eq!(time_unc, &column(&data, 1)[tail..]);
            assert_eq!(value, &column(&data, 2)[tail..]);
            assert_eq!(value_unc, &column(&data, 3)[tail..]);
        }
        other => panic!("expected arrays, got {:?}", other),
    }
}

#[test]
fn test_return_format_uarray() {
    let mut tsb = buffer(ReturnType::UArray);
    let data = matrix(&mut StdRng::seed_from_u64(13), N, 4);
    tsb.add_rows(&data).unwrap();

    match tsb.show(N_SAMPLES) {
        Output::UArray(rows) => {
            assert_eq!(rows.len(), N_SAMPLES);
            let last = &data[N - 1];
            assert_eq!(
                rows[N_SAMPLES - 1],
                [UFloat::new(last[0], last[1]), UFloat::new(last[2], last[3])]
            );
        }
        other => panic!("expected uarray, got {:?}", other),
    }
}

#[test]
fn test_return_format_uarrays() {
    let mut tsb = buffer(ReturnType::UArrays);
    tsb.add_rows(&matrix(&mut StdRng::seed_from_u64(14), N, 4)).unwrap();

    match tsb.show(N_SAMPLES) {
        Output::UArrays { time, value } => {
            assert_eq!(time.len(), N_SAMPLES);
            assert_eq!(value.len(), N_SAMPLES);
        }
        other => panic!("expected uarrays, got {:?}", other),
    }
}

#[test]
fn test_pop_empty_buffer_keeps_layout() {
    for return_type in ReturnType::ALL {
        let mut tsb = buffer(return_type);
        let popped = tsb.pop(1);
        let shown = tsb.show(N_SAMPLES);

        for result in [popped, shown] {
            assert!(result.is_empty());
            assert_eq!(result.return_type(), return_type);
        }
    }

    let mut tsb = buffer(ReturnType::Array);
    assert_eq!(tsb.pop(1).shape(), (0, 4));
    let tsb = buffer(ReturnType::UArray);
    assert_eq!(tsb.show(N_SAMPLES).shape(), (0, 2));
}

#[test]
fn test_return_type_from_config_string() {
    let return_type: ReturnType = "uarrays".parse().unwrap();
    let tsb = buffer(return_type);
    assert_eq!(tsb.return_type(), ReturnType::UArrays);
    assert!("matrix".parse::<ReturnType>().is_err());
}

#[test]
fn test_shared_buffer_concurrency() {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    let shared = SharedBuffer::new(1000);
    let consumed = Arc::new(AtomicUsize::new(0));

    let producers: Vec<_> = (0..4)
        .map(|p| {
            let shared = shared.clone();
            thread::spawn(move || {
                for i in 0..100 {
                    shared.push(Sample::exact((p * 100 + i) as f64, 1.0));
                }
            })
        })
        .collect();

    let consumer = {
        let shared = shared.clone();
        let consumed = Arc::clone(&consumed);
        thread::spawn(move || {
            for _ in 0..50 {
                consumed.fetch_add(shared.pop(5).len(), Ordering::Relaxed);
                thread::yield_now();
            }
        })
    };

    for handle in producers {
        handle.join().unwrap();
    }
    consumer.join().unwrap();

    let stats = shared.stats();
    assert_eq!(stats.total_added, 400);
    assert_eq!(stats.total_evicted, 0);
    assert_eq!(stats.total_popped, consumed.load(Ordering::Relaxed));
    assert_eq!(stats.len + stats.total_popped, 400);
    assert!(stats.is_balanced());
}
