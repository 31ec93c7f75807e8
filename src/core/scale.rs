use crate::error::{ChartError, ChartResult};

/// Linear value-to-offset mapping over a vertical band.
///
/// Offsets grow upward from the band bottom: the domain minimum maps to 0,
/// the domain maximum to the full band height. Callers subtract the offset
/// from the band's bottom pixel to obtain a screen Y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn value_to_offset(self, value: f64, height_px: f64) -> ChartResult<f64> {
        if !height_px.is_finite() || height_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "band height must be finite and > 0".to_owned(),
            ));
        }

        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(normalized * height_px)
    }

    pub fn offset_to_value(self, offset_px: f64, height_px: f64) -> ChartResult<f64> {
        if !height_px.is_finite() || height_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "band height must be finite and > 0".to_owned(),
            ));
        }

        if !offset_px.is_finite() {
            return Err(ChartError::InvalidData("offset must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = offset_px / height_px;
        Ok(self.domain_start + normalized * span)
    }
}
