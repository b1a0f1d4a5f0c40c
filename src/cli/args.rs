use clap::Parser;
use std::path::PathBuf;

use bibsnet::core::validate::{parse_readable_dir, parse_readable_file, parse_whole_number};

#[derive(Parser)]
#[command(name = "bibsnet", version, about = "Run nnU-Net prediction for one BIBSnet subject")]
pub struct CliArgs {
    /// Existing input directory following nnU-Net naming conventions (T1w files
    /// end with _0000.nii.gz and T2w files end with _0001.nii.gz). It must hold
    /// exactly 1 T1w file and exactly 1 T2w file.
    #[arg(short, long, value_parser = parse_readable_dir)]
    pub input: PathBuf,

    /// Output directory; created with any missing parents
    #[arg(short, long)]
    pub output: PathBuf,

    /// Path to the nnUNet_predict executable. Defaults to nnUNet_predict in the
    /// same directory as this program.
    #[arg(short = 'n', long = "nnUNet", value_parser = parse_readable_file)]
    pub nnunet: Option<PathBuf>,

    /// Task ID, which should be a 3-digit positive integer starting with 5 (e.g. 512)
    #[arg(short, long, value_parser = parse_whole_number)]
    pub task: Option<u64>,

    /// nnU-Net model configuration passed through verbatim [default: 3d_fullres]
    #[arg(short, long)]
    pub model: Option<String>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Validate inputs and print the predictor command without running it
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}
