use cb_core::GROUPABLE_FIELDS;

pub fn run() -> Result<(), String> {
    for field in GROUPABLE_FIELDS {
        println!("  {field}");
    }
    Ok(())
}
