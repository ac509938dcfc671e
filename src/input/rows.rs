// src/input/rows.rs
//! Row-wise input: one datapoint per row, 2 to 4 columns wide.

use crate::error::{BufferError, Result};
use crate::sample::{Quantity, Sample, UFloat};

/// A single datapoint in one of the supported row layouts.
///
/// | width | layout                                  |
/// |-------|-----------------------------------------|
/// | 2     | `(time, value)`, either may be uncertain |
/// | 3     | `(time, value, value_unc)`              |
/// | 4     | `(time, time_unc, value, value_unc)`    |
///
/// # Examples
///
/// ```
/// use tsbuf::{Row, Sample, UFloat};
///
/// let pair = Row::from((UFloat::new(1.0, 0.01), 20.5));
/// assert_eq!(Sample::from(pair), Sample::new(1.0, 0.01, 20.5, 0.0));
///
/// let row = Row::try_from(&[1.0, 20.5, 0.1][..])?;
/// assert_eq!(Sample::from(row), Sample::new(1.0, 0.0, 20.5, 0.1));
/// # Ok::<(), tsbuf::BufferError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Row {
    /// `(time, value)`
    Pair(Quantity, Quantity),
    /// `(time, value, value_unc)`
    Triple(f64, f64, f64),
    /// `(time, time_unc, value, value_unc)`
    Quad(f64, f64, f64, f64),
}

impl Row {
    /// Number of columns of this layout.
    pub fn width(&self) -> usize {
        match self {
            Self::Pair(..) => 2,
            Self::Triple(..) => 3,
            Self::Quad(..) => 4,
        }
    }
}

impl From<Row> for Sample {
    fn from(row: Row) -> Self {
        match row {
            Row::Pair(t, v) => {
                let (time, time_unc) = t.split();
                let (value, value_unc) = v.split();
                Sample::new(time, time_unc, value, value_unc)
            }
            Row::Triple(time, value, value_unc) => {
                Sample::new(time, Sample::EMPTY_UNC, value, value_unc)
            }
            Row::Quad(time, time_unc, value, value_unc) => {
                Sample::new(time, time_unc, value, value_unc)
            }
        }
    }
}

impl TryFrom<&[f64]> for Row {
    type Error = BufferError;

    fn try_from(row: &[f64]) -> Result<Self> {
        match *row {
            [t, v] => Ok(Self::Pair(t.into(), v.into())),
            [t, v, uv] => Ok(Self::Triple(t, v, uv)),
            [t, ut, v, uv] => Ok(Self::Quad(t, ut, v, uv)),
            _ => Err(BufferError::UnsupportedWidth(row.len())),
        }
    }
}

impl TryFrom<&Vec<f64>> for Row {
    type Error = BufferError;

    fn try_from(row: &Vec<f64>) -> Result<Self> {
        Self::try_from(row.as_slice())
    }
}

impl<A: Into<Quantity>, B: Into<Quantity>> From<(A, B)> for Row {
    fn from((t, v): (A, B)) -> Self {
        Self::Pair(t.into(), v.into())
    }
}

impl From<(f64, f64, f64)> for Row {
    fn from((t, v, uv): (f64, f64, f64)) -> Self {
        Self::Triple(t, v, uv)
    }
}

impl From<(f64, f64, f64, f64)> for Row {
    fn from((t, ut, v, uv): (f64, f64, f64, f64)) -> Self {
        Self::Quad(t, ut, v, uv)
    }
}

impl From<[f64; 2]> for Row {
    fn from([t, v]: [f64; 2]) -> Self {
        Self::Pair(t.into(), v.into())
    }
}

impl From<[f64; 3]> for Row {
    fn from([t, v, uv]: [f64; 3]) -> Self {
        Self::Triple(t, v, uv)
    }
}

impl From<[f64; 4]> for Row {
    fn from([t, ut, v, uv]: [f64; 4]) -> Self {
        Self::Quad(t, ut, v, uv)
    }
}

impl From<[UFloat; 2]> for Row {
    fn from([t, v]: [UFloat; 2]) -> Self {
        Self::Pair(t.into(), v.into())
    }
}

impl From<Sample> for Row {
    fn from(s: Sample) -> Self {
        Self::Quad(s.time, s.time_unc, s.value, s.value_unc)
    }
}

/// Converts a batch of rows, failing on the first row that cannot be read.
pub(crate) fn collect_rows<I, R>(rows: I) -> Result<Vec<Sample>>
where
    I: IntoIterator<Item = R>,
    R: TryInto<Row>,
    BufferError: From<R::Error>,
{
    rows.into_iter()
        .map(|r| -> Result<Sample> {
            let row: Row = r.try_into()?;
            Ok(row.into())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths() {
        assert_eq!(Row::try_from(&[1.0, 2.0][..]).unwrap().width(), 2);
        assert_eq!(Row::try_from(&[1.0, 2.0, 3.0][..]).unwrap().width(), 3);
        assert_eq!(Row::try_from(&[1.0, 2.0, 3.0, 4.0][..]).unwrap().width(), 4);
    }

    #[test]
    fn test_unsupported_width() {
        assert_eq!(
            Row::try_from(&[1.0][..]),
            Err(BufferError::UnsupportedWidth(1))
        );
        assert_eq!(
            Row::try_from(&[1.0; 5][..]),
            Err(BufferError::UnsupportedWidth(5))
        );
    }

    #[test]
    fn test_pair_layouts() {
        let plain = Sample::from(Row::from([1.0, 2.0]));
        assert_eq!(plain, Sample::new(1.0, 0.0, 2.0, 0.0));

        let mixed = Sample::from(Row::from((1.0, UFloat::new(2.0, 0.2))));
        assert_eq!(mixed, Sample::new(1.0, 0.0, 2.0, 0.2));

        let uncertain = Sample::from(Row::from([UFloat::new(1.0, 0.1), UFloat::new(2.0, 0.2)]));
        assert_eq!(uncertain, Sample::new(1.0, 0.1, 2.0, 0.2));
    }

    #[test]
    fn test_triple_and_quad() {
        assert_eq!(
            Sample::from(Row::from((1.0, 2.0, 0.2))),
            Sample::new(1.0, 0.0, 2.0, 0.2)
        );
        assert_eq!(
            Sample::from(Row::from((1.0, 0.1, 2.0, 0.2))),
            Sample::new(1.0, 0.1, 2.0, 0.2)
        );
    }

    #[test]
    fn test_collect_rows_stops_on_bad_row() {
        let rows: Vec<Vec<f64>> = vec![vec![1.0, 2.0], vec![1.0, 2.0, 3.0, 4.0, 5.0]];
        let result = collect_rows(&rows);
        assert_eq!(result, Err(BufferError::UnsupportedWidth(5)));
    }
}
