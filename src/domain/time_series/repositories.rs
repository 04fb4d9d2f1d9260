use super::entities::Series;
use crate::domain::errors::AppError;

/// Upstream provider of the master series, called once at mount and again
/// whenever the caller decides the data should be refreshed.
pub trait SeriesSource {
    fn load(&self) -> Result<Series, AppError>;
}

impl<F> SeriesSource for F
where
    F: Fn() -> Result<Series, AppError>,
{
    fn load(&self) -> Result<Series, AppError> {
        self()
    }
}
