use std::fmt;

/// One row of the final table: a pod and the comma-joined images it runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRow {
    pub pod: String,
    pub images: String,
}

impl ImageRow {
    pub fn new(pod: String, images: Vec<String>) -> Self {
        Self {
            pod,
            images: images.join(", "),
        }
    }
}

impl fmt::Display for ImageRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.pod, self.images)
    }
}
