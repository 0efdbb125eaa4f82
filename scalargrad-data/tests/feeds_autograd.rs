//! The data crate only supplies bulk numeric arrays; this test exercises the
//! hand-off, feeding loader batches into the autograd core as leaf nodes.

use scalargrad_data::{ArchiveBundle, DataLoader, SequentialSampler};
use scalargrad_core::{Number, ScalarGradError};

#[test]
fn batch_mean_gradients_flow_to_each_feature() -> Result<(), ScalarGradError> {
    let bundle = ArchiveBundle::new(
        vec![1.0, 2.0, 3.0, 4.0],
        vec![0, 1],
        vec![],
        vec![],
        2,
    )
    .expect("bundle creation failed");
    let (train, _test) = bundle.into_datasets().expect("packaging failed");

    let mut loader = DataLoader::new(train, 2, SequentialSampler::new(), false, None);
    let batch = loader.next().expect("no batch").expect("batch failed");

    // mean over every feature in the batch, built as a graph
    let leaves: Vec<Number<f64>> = batch
        .iter()
        .flat_map(|(features, _label)| features.iter().map(|&v| Number::new(f64::from(v))))
        .collect();
    let mut total = Number::new(0.0);
    for leaf in &leaves {
        total = total.add(leaf)?;
    }
    let count = Number::new(leaves.len() as f64);
    let mean = total.div(&count)?;
    assert_eq!(mean.value(), 2.5);

    mean.backward()?;
    for leaf in &leaves {
        assert_eq!(leaf.grad(), 0.25, "each feature contributes 1/n to the mean");
    }
    Ok(())
}
