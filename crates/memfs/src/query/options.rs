//! Search options.

use bitflags::bitflags;

bitflags! {
    /// Boolean switches of a grep request.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct GrepFlags: u8 {
        const CASE_INSENSITIVE  = 0b0000_0001;
        const RECURSIVE         = 0b0000_0010;
        const INVERT_MATCH      = 0b0000_0100;
        const COUNT_ONLY        = 0b0000_1000;
        const SHOW_LINE_NUMBERS = 0b0001_0000;
        const SHOW_FILE_PATH    = 0b0010_0000;
    }
}

impl GrepFlags {
    /// Maps a short command-line flag letter to its switch.
    pub fn from_short_flag(flag: char) -> Option<Self> {
        match flag {
            'i' => Some(Self::CASE_INSENSITIVE),
            'r' => Some(Self::RECURSIVE),
            'v' => Some(Self::INVERT_MATCH),
            'c' => Some(Self::COUNT_ONLY),
            'n' => Some(Self::SHOW_LINE_NUMBERS),
            _ => None,
        }
    }
}

impl Default for GrepFlags {
    fn default() -> Self {
        Self::SHOW_LINE_NUMBERS | Self::SHOW_FILE_PATH
    }
}

/// Options for a grep request.
///
/// `target_file` restricts the search to one file of the current folder;
/// `target_folder` to one child folder of it. When both are set the file
/// wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub flags: GrepFlags,
    pub target_file: Option<String>,
    pub target_folder: Option<String>,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds options from combined short flags such as `"ir"`. A leading
    /// `-` is allowed; unknown letters are ignored.
    pub fn from_short_flags(flags: &str) -> Self {
        let flags = flags
            .trim_start_matches('-')
            .chars()
            .filter_map(GrepFlags::from_short_flag)
            .fold(GrepFlags::default(), |acc, flag| acc | flag);
        Self {
            flags,
            ..Self::default()
        }
    }

    pub fn with_flag(mut self, flag: GrepFlags, enabled: bool) -> Self {
        self.flags.set(flag, enabled);
        self
    }

    pub fn case_insensitive(self, enabled: bool) -> Self {
        self.with_flag(GrepFlags::CASE_INSENSITIVE, enabled)
    }

    pub fn recursive(self, enabled: bool) -> Self {
        self.with_flag(GrepFlags::RECURSIVE, enabled)
    }

    pub fn invert_match(self, enabled: bool) -> Self {
        self.with_flag(GrepFlags::INVERT_MATCH, enabled)
    }

    pub fn count_only(self, enabled: bool) -> Self {
        self.with_flag(GrepFlags::COUNT_ONLY, enabled)
    }

    pub fn show_line_numbers(self, enabled: bool) -> Self {
        self.with_flag(GrepFlags::SHOW_LINE_NUMBERS, enabled)
    }

    pub fn show_file_path(self, enabled: bool) -> Self {
        self.with_flag(GrepFlags::SHOW_FILE_PATH, enabled)
    }

    pub fn target_file(mut self, name: impl Into<String>) -> Self {
        self.target_file = Some(name.into());
        self
    }

    pub fn target_folder(mut self, name: impl Into<String>) -> Self {
        self.target_folder = Some(name.into());
        self
    }

    #[inline]
    pub fn is_case_insensitive(&self) -> bool {
        self.flags.contains(GrepFlags::CASE_INSENSITIVE)
    }

    #[inline]
    pub fn is_recursive(&self) -> bool {
        self.flags.contains(GrepFlags::RECURSIVE)
    }

    #[inline]
    pub fn is_invert_match(&self) -> bool {
        self.flags.contains(GrepFlags::INVERT_MATCH)
    }

    #[inline]
    pub fn is_count_only(&self) -> bool {
        self.flags.contains(GrepFlags::COUNT_ONLY)
    }

    #[inline]
    pub fn shows_line_numbers(&self) -> bool {
        self.flags.contains(GrepFlags::SHOW_LINE_NUMBERS)
    }

    #[inline]
    pub fn shows_file_path(&self) -> bool {
        self.flags.contains(GrepFlags::SHOW_FILE_PATH)
    }
}
