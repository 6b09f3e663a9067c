use cb_tui::Source;

pub fn run(source: Source) -> Result<(), String> {
    let records = super::fetch(source)?;
    let json = serde_json::to_string_pretty(&records).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}
