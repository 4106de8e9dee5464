use crate::error::{AppError, AppResult};
use crate::models::Difficulty;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 难度字段名
pub const DIFFICULTY_FIELD: &str = "difficulty";

/// 单道题目
///
/// 题目结构不固定，按原样保存所有字段（保持字段顺序），
/// 只读写 `difficulty` 一个字段。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionRecord(Map<String, Value>);

impl QuestionRecord {
    /// 读取难度标签，缺失或无法识别时返回 None
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.0
            .get(DIFFICULTY_FIELD)
            .and_then(Value::as_str)
            .and_then(Difficulty::parse)
    }

    /// 设置难度，已有的字段原位覆盖，否则追加到末尾
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.0.insert(
            DIFFICULTY_FIELD.to_string(),
            Value::String(difficulty.as_str().to_string()),
        );
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// 题目文件
///
/// 顶层必须是 JSON 对象，题目数组位于 `questions_key` 字段下。
/// 其他字段（如 title）原样保留，顺序不变。
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionDocument {
    fields: Map<String, Value>,
    questions_key: String,
    questions: Vec<QuestionRecord>,
    has_questions_key: bool,
}

impl QuestionDocument {
    /// 从已解析的 JSON 构造题目文件
    pub fn from_value(value: Value, questions_key: &str) -> AppResult<Self> {
        let mut fields = match value {
            Value::Object(fields) => fields,
            other => {
                return Err(AppError::unexpected(format!(
                    "题目文件顶层应为对象，实际为 {}",
                    json_type_name(&other)
                )))
            }
        };

        let (questions, has_questions_key) = match fields.get_mut(questions_key) {
            // 占位，保存时原位放回
            Some(slot) => (parse_questions(slot.take(), questions_key)?, true),
            None => (Vec::new(), false),
        };

        Ok(Self {
            fields,
            questions_key: questions_key.to_string(),
            questions,
            has_questions_key,
        })
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    pub fn questions_mut(&mut self) -> &mut [QuestionRecord] {
        &mut self.questions
    }

    /// 题目数量
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn title(&self) -> Option<&str> {
        self.fields.get("title").and_then(Value::as_str)
    }

    /// 转回 JSON，题目数组放回原来的位置
    pub fn to_value(&self) -> AppResult<Value> {
        let mut fields = self.fields.clone();
        if self.has_questions_key {
            let questions = serde_json::to_value(&self.questions)?;
            fields.insert(self.questions_key.clone(), questions);
        }
        Ok(Value::Object(fields))
    }
}

fn parse_questions(value: Value, questions_key: &str) -> AppResult<Vec<QuestionRecord>> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(AppError::unexpected(format!(
                "字段 \"{}\" 应为数组，实际为 {}",
                questions_key,
                json_type_name(&other)
            )))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(fields) => Ok(QuestionRecord(fields)),
            other => Err(AppError::unexpected(format!(
                "第 {} 道题目应为对象，实际为 {}",
                index + 1,
                json_type_name(&other)
            ))),
        })
        .collect()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "布尔值",
        Value::Number(_) => "数字",
        Value::String(_) => "字符串",
        Value::Array(_) => "数组",
        Value::Object(_) => "对象",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_difficulty_appends_new_field_last() {
        let mut record: QuestionRecord =
            serde_json::from_value(json!({"id": 1, "question": "Pod ?"})).unwrap();
        record.set_difficulty(Difficulty::Easy);

        let keys: Vec<&str> = record.fields().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["id", "question", "difficulty"]);
        assert_eq!(record.difficulty(), Some(Difficulty::Easy));
    }

    #[test]
    fn test_set_difficulty_overwrites_in_place() {
        let mut record: QuestionRecord = serde_json::from_value(
            json!({"id": 1, "difficulty": "Hard", "question": "Pod ?"}),
        )
        .unwrap();
        assert_eq!(record.difficulty(), None, "无法识别的标签应返回 None");

        record.set_difficulty(Difficulty::Advanced);
        let keys: Vec<&str> = record.fields().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["id", "difficulty", "question"]);
        assert_eq!(record.get("difficulty"), Some(&json!("advanced")));
    }

    #[test]
    fn test_document_keeps_top_level_key_order() {
        let value = json!({"title": "Kubernetes", "questions": [{"id": 1}], "version": 2});
        let doc = QuestionDocument::from_value(value.clone(), "questions").unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.title(), Some("Kubernetes"));

        let round_trip = doc.to_value().unwrap();
        let keys: Vec<&str> = round_trip
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["title", "questions", "version"]);
        assert_eq!(round_trip, value);
    }

    #[test]
    fn test_document_without_questions_key_is_empty() {
        let value = json!({"title": "Vide"});
        let doc = QuestionDocument::from_value(value.clone(), "questions").unwrap();
        assert!(doc.is_empty());
        assert_eq!(doc.to_value().unwrap(), value, "不应新增 questions 字段");
    }

    #[test]
    fn test_document_rejects_non_object_root() {
        let err = QuestionDocument::from_value(json!([1, 2]), "questions").unwrap_err();
        assert!(!err.is_missing_input());
        assert!(err.to_string().contains("顶层应为对象"));
    }

    #[test]
    fn test_document_rejects_non_array_questions() {
        let err =
            QuestionDocument::from_value(json!({"questions": {"a": 1}}), "questions").unwrap_err();
        assert!(err.to_string().contains("应为数组"));
    }

    #[test]
    fn test_document_rejects_non_object_record() {
        let err = QuestionDocument::from_value(json!({"questions": [{"id": 1}, "oops"]}), "questions")
            .unwrap_err();
        assert!(err.to_string().contains("第 2 道题目"));
    }
}
