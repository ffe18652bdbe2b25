//! Gleason 评分与 WHO 分级组
//!
//! 分级组通过固定查表得到，4+5 与 5+4 同属第 4 组。

use biopsy_core::Core;
use serde::Serialize;

/// Gleason 评分 → WHO 分级组
const WHO_GRADE_TABLE: [(&str, u8); 7] = [
    ("3+3", 1),
    ("3+4", 2),
    ("4+3", 3),
    ("4+4", 4),
    ("4+5", 4),
    ("5+4", 4),
    ("5+5", 5),
];

/// 可选的 Gleason 评分，按展示顺序排列
pub const GLEASON_OPTIONS: [GleasonOption; 7] = [
    GleasonOption::new("3+3=6"),
    GleasonOption::new("3+4=7a"),
    GleasonOption::new("4+3=7b"),
    GleasonOption::new("4+4=8"),
    GleasonOption::new("4+5=9"),
    GleasonOption::new("5+4=9"),
    GleasonOption::new("5+5=10"),
];

/// 去掉 `=` 之后的总分后缀
pub fn strip_total(score: &str) -> &str {
    score.split('=').next().unwrap_or(score)
}

/// 查询 WHO 分级组；空评分或无法识别的评分返回 `None`
pub fn who_grade(score: &str) -> Option<u8> {
    let pattern = strip_total(score);
    WHO_GRADE_TABLE
        .iter()
        .find(|(key, _)| *key == pattern)
        .map(|(_, grade)| *grade)
}

/// 单个 Gleason 评分选项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GleasonOption {
    display: &'static str,
}

impl GleasonOption {
    const fn new(display: &'static str) -> Self {
        Self { display }
    }

    /// 展示文本，例如 `3+4=7a`
    pub fn display(&self) -> &'static str {
        self.display
    }

    /// 写入记录的评分，例如 `3+4`
    pub fn score(&self) -> &'static str {
        strip_total(self.display)
    }

    pub fn grade(&self) -> Option<u8> {
        who_grade(self.display)
    }

    /// 记录当前评分是否对应该选项
    pub fn is_selected(&self, core: &Core) -> bool {
        core.gleason_score == self.score()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_who_grade_table() {
        assert_eq!(who_grade("3+3"), Some(1));
        assert_eq!(who_grade("3+4"), Some(2));
        assert_eq!(who_grade("4+3"), Some(3));
        assert_eq!(who_grade("4+4"), Some(4));
        assert_eq!(who_grade("4+5"), Some(4));
        assert_eq!(who_grade("5+4"), Some(4));
        assert_eq!(who_grade("5+5"), Some(5));
    }

    #[test]
    fn test_who_grade_strips_total() {
        assert_eq!(who_grade("3+4=7a"), Some(2));
        assert_eq!(who_grade("5+5=10"), Some(5));
    }

    #[test]
    fn test_unknown_scores() {
        assert_eq!(who_grade(""), None);
        assert_eq!(who_grade("2+2"), None);
        assert_eq!(who_grade("3 + 3"), None);
        assert_eq!(who_grade("=6"), None);
    }

    #[test]
    fn test_options() {
        let displays: Vec<&str> = GLEASON_OPTIONS.iter().map(|o| o.display()).collect();
        assert_eq!(
            displays,
            vec!["3+3=6", "3+4=7a", "4+3=7b", "4+4=8", "4+5=9", "5+4=9", "5+5=10"]
        );

        for option in GLEASON_OPTIONS {
            assert!(option.grade().is_some());
            assert!(!option.score().contains('='));
        }
    }

    #[test]
    fn test_option_selection() {
        let mut core = Core::new(1);
        core.gleason_score = "4+3".to_string();

        let selected: Vec<&str> = GLEASON_OPTIONS
            .iter()
            .filter(|o| o.is_selected(&core))
            .map(|o| o.display())
            .collect();
        assert_eq!(selected, vec!["4+3=7b"]);
    }
}
