use std::fmt;
use std::sync::Arc;

use chrono::format::{Item, StrftimeItems};

use crate::core::Quantity;
use crate::core::primitives::unix_seconds_to_datetime;
use crate::error::{ChartError, ChartResult};

type FormatFn<T> = dyn Fn(T) -> String + Send + Sync;

/// Turns one axis value into label text.
///
/// Formatters live on the chart configuration rather than on the quantity
/// type, so two charts over the same data can label it differently.
pub struct AxisFormatter<T> {
    format: Arc<FormatFn<T>>,
}

impl<T: Quantity> AxisFormatter<T> {
    pub fn new(format: impl Fn(T) -> String + Send + Sync + 'static) -> Self {
        Self {
            format: Arc::new(format),
        }
    }

    /// Fixed-point decimal with `precision` fractional digits.
    #[must_use]
    pub fn decimal(precision: usize) -> Self {
        Self::new(move |value: T| format!("{:.*}", precision, value.to_f64()))
    }

    /// Reads the value as unix seconds and formats it in UTC with a
    /// `strftime` pattern. Values outside the representable date range fall
    /// back to a two-digit decimal.
    pub fn utc_date_time(pattern: impl Into<String>) -> ChartResult<Self> {
        let pattern = pattern.into();
        let has_error = StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error));
        if pattern.is_empty() || has_error {
            return Err(ChartError::InvalidData(format!(
                "invalid date/time label pattern `{pattern}`"
            )));
        }

        Ok(Self::new(move |value: T| {
            let seconds = value.to_f64();
            match unix_seconds_to_datetime(seconds) {
                Some(time) => time.format(&pattern).to_string(),
                None => format!("{seconds:.2}"),
            }
        }))
    }

    #[must_use]
    pub fn format(&self, value: T) -> String {
        (self.format)(value)
    }
}

impl<T: Quantity> Default for AxisFormatter<T> {
    fn default() -> Self {
        Self::decimal(1)
    }
}

impl<T> Clone for AxisFormatter<T> {
    fn clone(&self) -> Self {
        Self {
            format: Arc::clone(&self.format),
        }
    }
}

impl<T> fmt::Debug for AxisFormatter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxisFormatter").finish_non_exhaustive()
    }
}
