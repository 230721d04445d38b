use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

// "6-15"、"6:15" 或单独一行 "7"
static ROW_SPAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\s*(?:[-:]\s*(\d+)\s*)?$").expect("valid regex"));

/// 闭区间的行范围，行号从 1 开始。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpan {
    start: u32,
    end: u32,
}

impl RowSpan {
    pub fn new(start: u32, end: u32) -> Result<Self> {
        if start == 0 {
            return Err(Error::InvalidRowSpan(format!("行号从 1 开始: {start}-{end}")));
        }
        if start > end {
            return Err(Error::InvalidRowSpan(format!("起始行大于结束行: {start}-{end}")));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn contains(&self, row: u32) -> bool {
        (self.start..=self.end).contains(&row)
    }

    pub fn rows(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }
}

impl fmt::Display for RowSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

impl FromStr for RowSpan {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let caps = ROW_SPAN_RE
            .captures(s)
            .ok_or_else(|| Error::InvalidRowSpan(format!("无法解析: {s:?}")))?;

        let parse = |text: &str| {
            text.parse::<u32>()
                .map_err(|_| Error::InvalidRowSpan(format!("行号超出范围: {text}")))
        };

        let start = parse(&caps[1])?;
        let end = match caps.get(2) {
            Some(m) => parse(m.as_str())?,
            None => start,
        };
        RowSpan::new(start, end)
    }
}
