//! Shared types used across BIBSnet.
//! `Modality` names the two structural MRI acquisitions the predictor expects.
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Serialize, Deserialize)]
pub enum Modality {
    T1w,
    T2w,
}

impl Modality {
    pub const ALL: [Modality; 2] = [Modality::T1w, Modality::T2w];

    /// nnU-Net channel suffix for this modality.
    pub const fn suffix(self) -> &'static str {
        match self {
            Modality::T1w => "_0000.nii.gz",
            Modality::T2w => "_0001.nii.gz",
        }
    }

    /// Mirrors a `*<suffix>` shell glob: hidden names never match and the
    /// wildcard may be empty.
    pub fn matches(self, file_name: &str) -> bool {
        !file_name.starts_with('.') && file_name.ends_with(self.suffix())
    }
}

impl std::fmt::Display for Modality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Modality::T1w => "T1w",
            Modality::T2w => "T2w",
        };
        write!(f, "{}", s)
    }
}
