use crate::errors::AppResult;

/// Runtime for the few async bits of a CLI session.
pub fn single_thread_runtime() -> AppResult<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}
