//! 派生字段计算
//!
//! 每次相关字段被修改时立即重新计算，不存在缓存过期窗口。

use crate::grading::who_grade;
use biopsy_core::utils::{parse_length, round_half_up};
use biopsy_core::{Core, CoreField};

/// 由总长度和肿瘤长度计算肿瘤百分比
///
/// 任一长度无法解析、总长度不大于零或肿瘤长度为负时返回 `None`。
pub fn tumor_percentage(total_length: &str, tumor_length: &str) -> Option<u32> {
    let total = parse_length(total_length)?;
    let tumor = parse_length(tumor_length)?;

    if total <= 0.0 || tumor < 0.0 {
        return None;
    }

    Some(round_half_up(tumor / total * 100.0) as u32)
}

/// 按被修改的字段刷新派生值
pub fn apply(core: &mut Core, field: CoreField) {
    match field {
        CoreField::TotalLength | CoreField::TumorLength => {
            // 输入不完整时保留上一次的有效值
            match tumor_percentage(&core.total_length, &core.tumor_length) {
                Some(percentage) => {
                    tracing::debug!("Core {} tumor percentage -> {}", core.id, percentage);
                    core.tumor_percentage = Some(percentage);
                }
                None => {
                    tracing::debug!(
                        "Core {} lengths not computable, keeping {:?}",
                        core.id,
                        core.tumor_percentage
                    );
                }
            }
        }
        CoreField::GleasonScore => {
            core.who_grade = who_grade(&core.gleason_score);
            tracing::debug!("Core {} WHO grade -> {:?}", core.id, core.who_grade);
        }
        CoreField::Number | CoreField::Location | CoreField::CoreCount | CoreField::CoreType => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tumor_percentage() {
        assert_eq!(tumor_percentage("10", "3"), Some(30));
        assert_eq!(tumor_percentage("8", "1"), Some(13));
        assert_eq!(tumor_percentage("3", "1"), Some(33));
        assert_eq!(tumor_percentage("3", "2"), Some(67));
        assert_eq!(tumor_percentage("12,5", "2,5"), Some(20));
        assert_eq!(tumor_percentage("10", "0"), Some(0));
        assert_eq!(tumor_percentage("10", "15"), Some(150));
    }

    #[test]
    fn test_tumor_percentage_invalid_input() {
        assert_eq!(tumor_percentage("", "3"), None);
        assert_eq!(tumor_percentage("10", ""), None);
        assert_eq!(tumor_percentage("abc", "3"), None);
        assert_eq!(tumor_percentage("0", "3"), None);
        assert_eq!(tumor_percentage("-5", "3"), None);
        assert_eq!(tumor_percentage("10", "-1"), None);
    }

    #[test]
    fn test_apply_keeps_previous_percentage() {
        let mut core = Core::new(1);
        core.total_length = "10".to_string();
        core.tumor_length = "3".to_string();
        apply(&mut core, CoreField::TumorLength);
        assert_eq!(core.tumor_percentage, Some(30));

        core.total_length = "1x".to_string();
        apply(&mut core, CoreField::TotalLength);
        assert_eq!(core.tumor_percentage, Some(30));
    }

    #[test]
    fn test_apply_gleason() {
        let mut core = Core::new(1);
        core.gleason_score = "4+5".to_string();
        apply(&mut core, CoreField::GleasonScore);
        assert_eq!(core.who_grade, Some(4));

        core.gleason_score = "unknown".to_string();
        apply(&mut core, CoreField::GleasonScore);
        assert_eq!(core.who_grade, None);
    }

    #[test]
    fn test_apply_ignores_plain_fields() {
        let mut core = Core::new(1);
        core.tumor_percentage = Some(42);
        core.who_grade = Some(2);
        apply(&mut core, CoreField::Location);
        assert_eq!(core.tumor_percentage, Some(42));
        assert_eq!(core.who_grade, Some(2));
    }
}
