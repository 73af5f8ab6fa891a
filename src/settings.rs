use crate::error::PackError;

// Opaque placeholder for the figure/rendering subtree, consumed only by an
// external renderer not implemented here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FigureSettings;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub workers_num: usize,
    pub max_time_in_seconds: u64,
    pub rotation: bool,
    pub figure: FigureSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self { workers_num: 1, max_time_in_seconds: 60, rotation: true, figure: FigureSettings }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), PackError> {
        if self.workers_num == 0 {
            return Err(PackError::Settings("workers_num must be a positive integer".into()));
        }
        if self.max_time_in_seconds == 0 {
            return Err(PackError::Settings("max_time_in_seconds must be a positive integer".into()));
        }
        Ok(())
    }
}
