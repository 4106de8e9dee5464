use crate::error::{AppError, AppResult};
use crate::models::question::QuestionDocument;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// 缩进宽度（4个空格）
const INDENT: &[u8] = b"    ";

/// 从 JSON 文件加载题目文件
///
/// 文件不存在或无法读取时返回 `MissingInput`，解析失败返回 `UnexpectedFailure`
pub fn load_document(path: &Path, questions_key: &str) -> AppResult<QuestionDocument> {
    let raw = fs::read(path).map_err(|e| AppError::missing_input(path, e))?;

    let value: serde_json::Value = serde_json::from_slice(&raw).map_err(|e| {
        AppError::unexpected(format!("无法解析JSON文件 {}: {}", path.display(), e))
    })?;

    let document = QuestionDocument::from_value(value, questions_key)?;
    tracing::debug!("已加载 {} 道题目: {}", document.len(), path.display());

    Ok(document)
}

/// 将题目文件整体写回磁盘（覆盖原文件）
pub fn save_document(path: &Path, document: &QuestionDocument) -> AppResult<()> {
    let value = document.to_value()?;
    write_json_pretty(path, &value)
}

/// 以4空格缩进写入 JSON
///
/// 先写入同目录下的临时文件，再重命名覆盖目标文件；
/// 中途失败时目标文件保持不变。符号链接写入其指向的文件，原文件权限保留。
pub fn write_json_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> AppResult<()> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    buf.push(b'\n');

    // 目标不存在时 canonicalize 会失败，直接使用原路径
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let tmp_path = temp_path_for(&target);

    write_new_file(&tmp_path, &buf).map_err(|e| {
        AppError::unexpected(format!(
            "写入临时文件失败 ({}): {}",
            tmp_path.display(),
            e
        ))
    })?;

    if let Ok(metadata) = fs::metadata(&target) {
        if let Err(e) = fs::set_permissions(&tmp_path, metadata.permissions()) {
            let _ = fs::remove_file(&tmp_path);
            return Err(AppError::unexpected(format!(
                "设置文件权限失败 ({}): {}",
                tmp_path.display(),
                e
            )));
        }
    }

    fs::rename(&tmp_path, &target).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        AppError::unexpected(format!("替换文件失败 ({}): {}", target.display(), e))
    })?;

    tracing::debug!("已写入 {} 字节: {}", buf.len(), target.display());
    Ok(())
}

/// 创建并写入新文件，文件已存在时报错，写入失败时删除已创建的文件
fn write_new_file(path: &Path, buf: &[u8]) -> io::Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    let written = file.write_all(buf).and_then(|_| file.sync_all());
    if written.is_err() {
        drop(file);
        let _ = fs::remove_file(path);
    }
    written
}

/// `<path>.<pid>.tmp`，不会碰到已有的 `<path>.tmp`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(format!(".{}.tmp", std::process::id()));
    PathBuf::from(name)
}
