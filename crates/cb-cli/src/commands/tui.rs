use std::path::Path;

use cb_tui::Source;

pub fn run(
    source: Source,
    input: Option<&str>,
    log_file: Option<&Path>,
    verbose: u8,
) -> Result<(), String> {
    cb_tui::logging::init_for_tui(verbose, log_file)?;
    cb_tui::launch(source, input)
}
