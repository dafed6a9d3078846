//! The public parameter surface: every field a caller supplies to [`crate::encode`], assembled
//! through a builder that performs no validation of its own — validation happens exactly once,
//! inside `encode`, so a [`GpTagParams`] is always a plain data holder.

/// The complete set of inputs to one GP-Tag encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct GpTagParams {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub quaternion: [f64; 4],
    pub scale: f64,
    pub accuracy: u32,
    pub tag_id: u32,
    pub version_id: u32,
    pub unit: u32,
}

impl GpTagParams {
    /// Starts a builder with the format's base unit (`U = 10`) and all other fields zeroed; every
    /// field should be set explicitly before encoding.
    pub fn builder() -> GpTagParamsBuilder {
        GpTagParamsBuilder::default()
    }
}

/// Builds a [`GpTagParams`] field by field. Every setter simply stores the value it is given;
/// out-of-range values are accepted here and rejected later, at the single validation point inside
/// [`crate::encode`].
#[derive(Debug, Clone, Default)]
pub struct GpTagParamsBuilder {
    latitude: f64,
    longitude: f64,
    altitude: f64,
    quaternion: [f64; 4],
    scale: f64,
    accuracy: u32,
    tag_id: u32,
    version_id: u32,
    unit: Option<u32>,
}

impl GpTagParamsBuilder {
    pub fn latitude(mut self, value: f64) -> Self {
        self.latitude = value;
        self
    }

    pub fn longitude(mut self, value: f64) -> Self {
        self.longitude = value;
        self
    }

    pub fn altitude(mut self, value: f64) -> Self {
        self.altitude = value;
        self
    }

    pub fn quaternion(mut self, qx: f64, qy: f64, qz: f64, qw: f64) -> Self {
        self.quaternion = [qx, qy, qz, qw];
        self
    }

    pub fn scale(mut self, value: f64) -> Self {
        self.scale = value;
        self
    }

    pub fn accuracy(mut self, value: u32) -> Self {
        self.accuracy = value;
        self
    }

    pub fn tag_id(mut self, value: u32) -> Self {
        self.tag_id = value;
        self
    }

    pub fn version_id(mut self, value: u32) -> Self {
        self.version_id = value;
        self
    }

    /// Sets the base unit `U`, in pixels per module. Defaults to 10 if never called.
    pub fn unit(mut self, value: u32) -> Self {
        self.unit = Some(value);
        self
    }

    pub fn build(self) -> GpTagParams {
        GpTagParams {
            latitude: self.latitude,
            longitude: self.longitude,
            altitude: self.altitude,
            quaternion: self.quaternion,
            scale: self.scale,
            accuracy: self.accuracy,
            tag_id: self.tag_id,
            version_id: self.version_id,
            unit: self.unit.unwrap_or(10),
        }
    }
}
