mod app_context;
mod notify;

pub use app_context::AppContext;
pub use notify::StderrNotify;
