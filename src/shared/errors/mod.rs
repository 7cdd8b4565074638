mod api_error;
mod app_error;

pub use api_error::ErrorBody;
pub use app_error::{AppError, AppResult};
