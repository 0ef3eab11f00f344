//! Controls for multi-item acquisition.

use serde::{Deserialize, Serialize};

/// The `batch` settings group.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchSettings {
    /// Also download the sections attached to each item.
    pub with_section: bool,
    /// Skip items published before this time, when set.
    pub batch_filter_start_time: Option<String>,
    /// Skip items published after this time, when set.
    pub batch_filter_end_time: Option<String>,
}
