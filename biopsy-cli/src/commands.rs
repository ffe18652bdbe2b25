//! 命令行解析
//!
//! 每行一条命令，空行和 `#` 开头的注释行被忽略。

use biopsy_core::{BiopsyError, CoreField, CoreId, DiagnosisFlag, FeatureFlag, Result};
use biopsy_report::BiopsyReport;

/// 一条编辑命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add,
    Remove(CoreId),
    Set {
        id: CoreId,
        field: CoreField,
        value: String,
    },
    Diagnosis(CoreId, DiagnosisFlag),
    Feature(CoreId, FeatureFlag),
    Show,
    Options,
}

impl Command {
    /// 解析一行输入；空行或注释返回 `Ok(None)`
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut parts = line.split_whitespace();
        let verb = parts.next().unwrap_or_default();

        let command = match verb {
            "add" => Command::Add,
            "remove" => Command::Remove(parse_id(parts.next())?),
            "set" => {
                let id = parse_id(parts.next())?;
                let field = parts
                    .next()
                    .ok_or_else(|| BiopsyError::InvalidCommand("set: missing field".to_string()))?
                    .parse::<CoreField>()?;
                // 值可以包含空格，例如 "acinar / ductal"
                let value = parts.collect::<Vec<_>>().join(" ");
                Command::Set { id, field, value }
            }
            "diagnosis" => {
                let id = parse_id(parts.next())?;
                let flag = parts
                    .next()
                    .ok_or_else(|| BiopsyError::InvalidCommand("diagnosis: missing flag".to_string()))?
                    .parse::<DiagnosisFlag>()?;
                Command::Diagnosis(id, flag)
            }
            "feature" => {
                let id = parse_id(parts.next())?;
                let flag = parts
                    .next()
                    .ok_or_else(|| BiopsyError::InvalidCommand("feature: missing flag".to_string()))?
                    .parse::<FeatureFlag>()?;
                Command::Feature(id, flag)
            }
            "show" => Command::Show,
            "options" => Command::Options,
            other => {
                return Err(BiopsyError::InvalidCommand(format!("unknown command: {}", other)));
            }
        };

        Ok(Some(command))
    }

    /// 对报告执行命令
    pub fn apply(&self, report: &mut BiopsyReport) {
        match self {
            Command::Add => {
                report.add_core();
            }
            Command::Remove(id) => {
                report.remove_core(*id);
            }
            Command::Set { id, field, value } => {
                report.update_field(*id, *field, value);
            }
            Command::Diagnosis(id, flag) => {
                report.toggle_diagnosis(*id, *flag);
            }
            Command::Feature(id, flag) => {
                report.toggle_feature(*id, *flag);
            }
            Command::Show | Command::Options => {}
        }
    }
}

fn parse_id(token: Option<&str>) -> Result<CoreId> {
    let token = token.ok_or_else(|| BiopsyError::InvalidCommand("missing core id".to_string()))?;
    token
        .parse::<CoreId>()
        .map_err(|_| BiopsyError::InvalidCommand(format!("invalid core id: {}", token)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("add").unwrap(), Some(Command::Add));
        assert_eq!(Command::parse("  remove 3 ").unwrap(), Some(Command::Remove(3)));
        assert_eq!(
            Command::parse("set 1 totalLength 12,5").unwrap(),
            Some(Command::Set {
                id: 1,
                field: CoreField::TotalLength,
                value: "12,5".to_string(),
            })
        );
        assert_eq!(
            Command::parse("diagnosis 2 carcinoma").unwrap(),
            Some(Command::Diagnosis(2, DiagnosisFlag::Carcinoma))
        );
        assert_eq!(
            Command::parse("feature 2 epe").unwrap(),
            Some(Command::Feature(2, FeatureFlag::ExtraprostaticExtension))
        );
        assert_eq!(Command::parse("show").unwrap(), Some(Command::Show));
    }

    #[test]
    fn test_parse_value_with_spaces() {
        let command = Command::parse("set 1 type acinar / ductal").unwrap();
        assert_eq!(
            command,
            Some(Command::Set {
                id: 1,
                field: CoreField::CoreType,
                value: "acinar / ductal".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_empty_value_clears_field() {
        let command = Command::parse("set 1 location").unwrap();
        assert_eq!(
            command,
            Some(Command::Set {
                id: 1,
                field: CoreField::Location,
                value: String::new(),
            })
        );
    }

    #[test]
    fn test_skip_blank_and_comments() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   ").unwrap(), None);
        assert_eq!(Command::parse("# first core").unwrap(), None);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(Command::parse("grow 1"), Err(BiopsyError::InvalidCommand(_))));
        assert!(matches!(Command::parse("remove"), Err(BiopsyError::InvalidCommand(_))));
        assert!(matches!(Command::parse("remove x"), Err(BiopsyError::InvalidCommand(_))));
        assert!(matches!(Command::parse("set 1 whoGrade 3"), Err(BiopsyError::UnknownField(_))));
        assert!(matches!(
            Command::parse("diagnosis 1 benign"),
            Err(BiopsyError::UnknownDiagnosisFlag(_))
        ));
        assert!(matches!(Command::parse("feature 1"), Err(BiopsyError::InvalidCommand(_))));
    }

    #[test]
    fn test_apply_walkthrough() {
        let mut report = BiopsyReport::new(1);
        let script = [
            "diagnosis 1 carcinoma",
            "set 1 totalLength 10",
            "set 1 tumorLength 3",
            "set 1 gleasonScore 4+3",
        ];
        for line in script {
            Command::parse(line).unwrap().unwrap().apply(&mut report);
        }

        let core = &report.cores()[0];
        assert_eq!(core.tumor_percentage, Some(30));
        assert_eq!(core.who_grade, Some(3));
    }
}
