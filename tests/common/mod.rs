use std::fs::File;
use std::io::Error;
use std::path::Path;

pub fn write_tape(path: &Path, keys: &[&str]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["key"])?;
    for key in keys {
        wtr.write_record([*key])?;
    }

    wtr.flush()?;
    Ok(())
}
