//! Packages a tiny dataset into an archive, loads it back, and iterates it in
//! batches.

use scalargrad_data::{archive, ArchiveBundle, DataLoader, ScalarDataError, SequentialSampler};

fn main() -> Result<(), ScalarDataError> {
    let path = std::env::temp_dir().join("scalargrad-example.safetensors");

    let bundle = ArchiveBundle::new(
        vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        vec![0, 1, 0],
        vec![7.0, 8.0],
        vec![1],
        2,
    )?;
    archive::save(&path, &bundle)?;
    println!("archive written to {}", path.display());

    let loaded = archive::load(&path)?;
    println!(
        "loaded {} train rows and {} test rows of {} features",
        loaded.train_samples(),
        loaded.test_samples(),
        loaded.sample_len
    );

    let (train, _test) = loaded.into_datasets()?;
    let loader = DataLoader::new(train, 2, SequentialSampler::new(), false, None);
    for (i, batch) in loader.enumerate() {
        let batch = batch?;
        println!("batch {i}: {batch:?}");
    }

    std::fs::remove_file(&path).ok();
    Ok(())
}
