/// Filename convention inferred from the first image URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct FilenamePattern {
    pub base_path: String,
    pub extension: String,
    pub start_counter: u64,
    pub zero_padded: bool,
}

impl FilenamePattern {
    /// Split `https://host/dir/01.jpg` into its numbering convention.
    ///
    /// Returns `None` when the URL has no `/` or the filename has no `.`.
    pub fn infer(first_url: &str) -> Option<Self> {
        let (base_path, filename) = first_url.rsplit_once('/')?;
        let (stem, extension) = filename.rsplit_once('.')?;

        let start_counter = if !stem.is_empty() && stem.bytes().all(|b| b.is_ascii_digit()) {
            stem.parse::<u64>().unwrap_or(1)
        } else {
            1
        };

        Some(Self {
            base_path: base_path.to_string(),
            extension: extension.to_string(),
            start_counter,
            zero_padded: filename.starts_with('0'),
        })
    }

    /// URL of the image numbered `counter`.
    pub fn url_for(&self, counter: u64) -> String {
        let filename = if self.zero_padded {
            format!("{counter:02}.{}", self.extension)
        } else {
            format!("{counter}.{}", self.extension)
        };
        format!("{}/{}", self.base_path, filename)
    }
}
