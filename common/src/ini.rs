//! キャラクターiniファイルの構造解析
//!
//! 既存の内容を「保持する行」と「今回の出力で置き換える行」に分け、
//! 保持行の後ろに新しいマクロ行を追加して再構成する。

use crate::layout::HotkeySlot;
use regex::Regex;
use std::collections::HashSet;

lazy_static::lazy_static! {
    static ref ADDRESS_RE: Regex =
        Regex::new(r"^\s*Page(\d+)Button(\d+)(?:Name|Color|Line\d+)\s*=").unwrap();
}

/// 改行コード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn detect(content: &str) -> Self {
        if content.contains("\r\n") {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// 行が指すページ・ボタン
pub fn line_address(line: &str) -> Option<(u32, u32)> {
    let caps = ADDRESS_RE.captures(line)?;
    let page = caps.get(1)?.as_str().parse().ok()?;
    let button = caps.get(2)?.as_str().parse().ok()?;
    Some((page, button))
}

/// 本ツールが以前に生成した行か
pub fn is_generated_line(line: &str) -> bool {
    let lower = line.to_ascii_lowercase();
    lower.contains("/auction") || lower.contains("name=auction")
}

/// 解析済みiniファイル
#[derive(Debug, Clone)]
pub struct MacroFile {
    preserved: Vec<String>,
    replaced: Vec<String>,
    line_ending: LineEnding,
}

impl MacroFile {
    /// 既存内容を解析
    ///
    /// 置き換え対象:
    /// - 今回生成する範囲（`slot` から `buttons` 個）のボタン行
    /// - 生成マーカーを含む行
    /// - マーカー行と同じページ・ボタンを指す行（古い色行など）
    pub fn parse(content: &str, slot: &HotkeySlot, buttons: usize) -> Self {
        let line_ending = LineEnding::detect(content);
        let lines: Vec<&str> = content.lines().collect();

        let stale_buttons: HashSet<(u32, u32)> = lines
            .iter()
            .filter(|line| is_generated_line(line))
            .filter_map(|line| line_address(line))
            .collect();

        let mut preserved = Vec::new();
        let mut replaced = Vec::new();

        for line in lines {
            let address = line_address(line);
            let in_range = address
                .map(|(page, button)| slot.covers(page, button, buttons))
                .unwrap_or(false);
            let stale = address
                .map(|addr| stale_buttons.contains(&addr))
                .unwrap_or(false);

            if in_range || stale || is_generated_line(line) {
                replaced.push(line.to_string());
            } else {
                preserved.push(line.to_string());
            }
        }

        Self {
            preserved,
            replaced,
            line_ending,
        }
    }

    pub fn preserved(&self) -> &[String] {
        &self.preserved
    }

    pub fn replaced(&self) -> &[String] {
        &self.replaced
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// 保持行の後ろに新しい行を追加した内容
    pub fn render(&self, new_lines: &[String]) -> String {
        let eol = self.line_ending.as_str();
        let mut out = String::new();
        for line in self.preserved.iter().chain(new_lines.iter()) {
            out.push_str(line);
            out.push_str(eol);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INI: &str = "[Socials]\n\
        Page1Button1Name=Sit\n\
        Page1Button1Line1=/sit\n\
        Page1Button10Name=Camp\n\
        Page1Button10Line1=/camp\n\
        Page2Button1Name=Auction1\n\
        Page2Button1Color=0\n\
        Page2Button1Line1=/auction WTS 013073 Bone Chips 50\n\
        Page2Button2Name=Auction2\n\
        Page2Button2Color=0\n\
        Page2Button2Line1=/auction WTS 007007 Rusty Dagger 100\n\
        [Options]\n\
        Volume=5\n";

    #[test]
    fn test_line_address() {
        assert_eq!(line_address("Page1Button10Name=Camp"), Some((1, 10)));
        assert_eq!(line_address("Page3Button2Line5=/auction WTS"), Some((3, 2)));
        assert_eq!(line_address("Volume=5"), None);
        assert_eq!(line_address("Page1Button1Foo=bar"), None);
    }

    #[test]
    fn test_parse_replaces_range_and_markers() {
        let file = MacroFile::parse(INI, &HotkeySlot::new(1, 1), 1);
        assert_eq!(
            file.preserved(),
            &[
                "[Socials]",
                "Page1Button10Name=Camp",
                "Page1Button10Line1=/camp",
                "[Options]",
                "Volume=5",
            ]
        );
        // Page1Button1 の2行 + 旧オークションボタン6行
        assert_eq!(file.replaced().len(), 8);
    }

    #[test]
    fn test_button_prefix_is_not_a_match() {
        // Button1 の範囲指定で Button10 は消さない
        let file = MacroFile::parse("Page1Button10Name=Camp\n", &HotkeySlot::new(1, 1), 1);
        assert_eq!(file.preserved(), &["Page1Button10Name=Camp"]);
    }

    #[test]
    fn test_render_appends_new_lines() {
        let file = MacroFile::parse("[Socials]\nVolume=5", &HotkeySlot::new(1, 1), 1);
        let out = file.render(&["Page1Button1Name=Auction1".to_string()]);
        assert_eq!(out, "[Socials]\nVolume=5\nPage1Button1Name=Auction1\n");
    }

    #[test]
    fn test_crlf_is_kept() {
        let file = MacroFile::parse("[Socials]\r\nVolume=5\r\n", &HotkeySlot::new(1, 1), 1);
        assert_eq!(file.line_ending(), LineEnding::CrLf);
        let out = file.render(&["X=1".to_string()]);
        assert_eq!(out, "[Socials]\r\nVolume=5\r\nX=1\r\n");
    }

    #[test]
    fn test_empty_content() {
        let file = MacroFile::parse("", &HotkeySlot::new(1, 1), 1);
        assert!(file.preserved().is_empty());
        assert_eq!(file.render(&[]), "");
    }
}
