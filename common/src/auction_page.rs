//! オークション履歴ページのパーサー
//!
//! 価格履歴はページ内のチャート定義 `data: ["120","95",...],` に埋め込まれている。

/// 価格配列の開始マーカー
const DATA_START: &str = "data: [";

/// 価格配列の終了マーカー
const DATA_END: &str = "],";

/// HTMLから落札価格の文字列リストを抽出
///
/// マーカーが見つからない場合は空のリストを返す。
///
/// # Examples
/// ```
/// use auction_builder_common::extract_samples;
///
/// let html = r#"<script>series: [{ data: ["120","95"], }]</script>"#;
/// assert_eq!(extract_samples(html), vec!["120", "95"]);
/// ```
pub fn extract_samples(html: &str) -> Vec<String> {
    let Some(start_marker) = html.find(DATA_START) else {
        return Vec::new();
    };
    let start = start_marker + DATA_START.len();
    let end = html[start..]
        .find(DATA_END)
        .map(|offset| start + offset)
        .unwrap_or(html.len());

    html[start..end]
        .replace('"', "")
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// サイト検索用のアイテム名
///
/// 空白を1つに正規化し、先頭が `Spell` の場合はコロンを付ける
/// （インベントリの `Spell Foo` はサイト上では `Spell: Foo`）。
pub fn auction_query_name(name: &str) -> String {
    let mut words = name.split_whitespace();
    let Some(first) = words.next() else {
        return String::new();
    };

    let mut query = first.to_string();
    if first == "Spell" {
        query.push(':');
    }
    for word in words {
        query.push(' ');
        query.push_str(word);
    }
    query
}
