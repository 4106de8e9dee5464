//! 难度统计

use crate::models::{Difficulty, QuestionRecord};
use serde::Serialize;

/// 各难度的题目数量
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DifficultyTally {
    pub easy: usize,
    pub intermediate: usize,
    pub advanced: usize,
}

impl DifficultyTally {
    /// 重新扫描题目，按 `difficulty` 字段计数
    ///
    /// 缺失或无法识别的标签不计入任何档位
    pub fn from_questions(questions: &[QuestionRecord]) -> Self {
        questions
            .iter()
            .filter_map(QuestionRecord::difficulty)
            .fold(Self::default(), |mut tally, difficulty| {
                *tally.count_mut(difficulty) += 1;
                tally
            })
    }

    pub fn count(&self, difficulty: Difficulty) -> usize {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Intermediate => self.intermediate,
            Difficulty::Advanced => self.advanced,
        }
    }

    fn count_mut(&mut self, difficulty: Difficulty) -> &mut usize {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Intermediate => &mut self.intermediate,
            Difficulty::Advanced => &mut self.advanced,
        }
    }

    pub fn total(&self) -> usize {
        self.easy + self.intermediate + self.advanced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BAND_SIZE;
    use crate::services::DifficultyAssigner;
    use serde_json::json;

    fn assigned(n: usize) -> Vec<QuestionRecord> {
        let mut questions: Vec<QuestionRecord> = (0..n)
            .map(|i| serde_json::from_value(json!({ "id": i })).unwrap())
            .collect();
        DifficultyAssigner::new(DEFAULT_BAND_SIZE).assign(&mut questions);
        questions
    }

    fn tally_of(n: usize) -> DifficultyTally {
        DifficultyTally::from_questions(&assigned(n))
    }

    #[test]
    fn test_tally_scenarios() {
        let cases = [
            (0, (0, 0, 0)),
            (37, (37, 0, 0)),
            (150, (50, 50, 50)),
            (212, (50, 50, 112)),
        ];
        for (n, (easy, intermediate, advanced)) in cases {
            let tally = tally_of(n);
            assert_eq!(
                tally,
                DifficultyTally {
                    easy,
                    intermediate,
                    advanced
                },
                "N = {} 的统计不正确",
                n
            );
            assert_eq!(tally.total(), n, "各档之和应等于题目总数");
        }
    }

    #[test]
    fn test_tally_counts_case_insensitively_and_skips_unknown() {
        let questions: Vec<QuestionRecord> = vec![
            serde_json::from_value(json!({"difficulty": "Easy"})).unwrap(),
            serde_json::from_value(json!({"difficulty": "ADVANCED"})).unwrap(),
            serde_json::from_value(json!({"difficulty": "hard"})).unwrap(),
            serde_json::from_value(json!({"id": 4})).unwrap(),
        ];
        let tally = DifficultyTally::from_questions(&questions);
        assert_eq!(tally.count(Difficulty::Easy), 1);
        assert_eq!(tally.count(Difficulty::Intermediate), 0);
        assert_eq!(tally.count(Difficulty::Advanced), 1);
        assert_eq!(tally.total(), 2);
    }
}
