/// Runs blocking work (dialogs, disk writes) inline on the UI thread inside a named span.
pub fn run_blocking<F, T>(label: &'static str, f: F) -> T
where
    F: FnOnce() -> T,
{
    let _span = tracing::debug_span!("blocking", task = label).entered();
    f()
}
