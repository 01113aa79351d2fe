use std::path::Path;

pub trait FileName {
    fn string_file_name(&self) -> &str;

    /// File name up to the first `.`, e.g. `alarm-data` for `alarm-data.lab1.json`.
    fn record_kind(&self) -> &str;
}

impl FileName for Path {
    fn string_file_name(&self) -> &str {
        self.file_name().and_then(|s| s.to_str()).unwrap_or("unknown")
    }

    fn record_kind(&self) -> &str {
        let file_name = self.string_file_name();
        file_name.split('.').next().unwrap_or(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::path::PathBuf;

    #[rstest]
    #[case("dumps/device.json", "device")]
    #[case("dumps/alarm-data.lab1.json", "alarm-data")]
    #[case("tier-info", "tier-info")]
    fn record_kind_strips_every_extension(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(PathBuf::from(path).record_kind(), expected);
    }
}
