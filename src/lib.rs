#![doc = r#"
BIBSnet — a validating launcher for nnU-Net infant brain segmentation.

This crate checks the inputs of a single BIBSnet prediction (a subject directory
holding one T1w and one T2w NIfTI image, an output directory, the
`nnUNet_predict` executable, a task id and a model name), then runs the
predictor as a blocking subprocess and reports how long it took. It powers the
`bibsnet` CLI and can be embedded in other Rust pipelines.

Input naming
------------
nnU-Net reads channels from file suffixes: T1w images end in `_0000.nii.gz` and
T2w images end in `_0001.nii.gz`. The input directory must hold exactly one of
each.

Quick start
-----------
```rust,no_run
use std::path::Path;
use bibsnet::{prepare_run, run_prediction};

fn main() -> bibsnet::Result<()> {
    let config = prepare_run(
        Path::new("/data/sub-01/ses-1"),
        Path::new("/out/sub-01/ses-1"),
        Path::new("/opt/bibsnet/nnUNet_predict"),
        512,
        "3d_fullres",
    )?;

    let exit = run_prediction(&config)?;
    println!("predictor exited with {}", exit.code());
    Ok(())
}
```

Error handling
--------------
All public functions return `bibsnet::Result<T>`. Validation failures surface as
`Error::Validation` before any process is started; a predictor that cannot be
launched is `Error::Spawn`. A predictor that runs and exits non-zero is not an
error: inspect the returned [`PredictorExit`].

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — validators, the predictor command, and timing reports.
- [`types`] — `Modality`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod types;

pub use crate::core::invoke::{PredictCommand, PredictorExit};
pub use crate::core::params::{PredictorDefaults, RunConfiguration};
pub use crate::core::report::{RunOutcome, RunReport, format_elapsed};
pub use error::{Error, Result};
pub use types::Modality;

pub use api::{prepare_run, run_prediction};
