//! 構造物タイプキーから表示名を作る
//!
//! `"trail_ruins"` → `"Trail Ruins"`、複数形は末尾が`s`でなければ`s`を付ける。

/// `_`を空白にし、各単語の先頭だけ大文字にする
pub fn display_name(structure_type: &str) -> String {
    let mut out = String::with_capacity(structure_type.len());
    let mut prev_cased = false;

    for c in structure_type.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphabetic() {
            if prev_cased {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_cased = true;
        } else {
            out.push(c);
            prev_cased = false;
        }
    }

    out
}

pub fn plural_display_name(structure_type: &str) -> String {
    let name = display_name(structure_type);
    if name.ends_with('s') {
        name
    } else {
        format!("{}s", name)
    }
}

pub fn marker_set_name(structure_type: &str) -> String {
    format!("{}_set", structure_type)
}

pub fn marker_name(structure_type: &str, index: usize) -> String {
    format!("{}_{}", structure_type, index)
}
