//! iniファイルの置き換え書き込み
//!
//! 同じディレクトリに一時ファイルを書いてから rename するため、
//! 読み手から書きかけの状態は見えない。

use crate::error::Result;
use std::io::Write;
use std::path::Path;

pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut temp = tempfile::NamedTempFile::new_in(dir)?;
    temp.write_all(content.as_bytes())?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
