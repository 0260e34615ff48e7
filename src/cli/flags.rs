#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub legacy: bool,
    pub interactive: bool,
    pub all: bool,
    pub upper: bool,
    pub digits: bool,
    pub symbols: bool,
    /// `Some(false)` for `--no-lower`; lowercase is on unless turned off.
    pub lower: Option<bool>,
    /// Raw length text, validated with the form's rules.
    pub length: Option<String>,
    pub number: Option<usize>,
}

impl CliFlags {
    pub fn has_info_flag(&self) -> bool {
        self.help || self.version
    }
}
