// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// The literal column separator between the header and the message body.
pub(crate) const SEPARATOR: &str = "| ";

/// Re-indent continuation lines of a rendered record so they start at the
/// column where the first line's message begins.
///
/// The column is the end of the first `"| "` occurrence in `text`. When the
/// separator is absent the text is returned unmodified; that is degraded
/// formatting, not an error.
pub(crate) fn align_continuations(text: String) -> String {
    let Some(pos) = text.find(SEPARATOR) else {
        return text;
    };
    if !text.contains('\n') {
        return text;
    }

    let mut indent = String::with_capacity(pos + SEPARATOR.len() + 1);
    indent.push('\n');
    for _ in 0..pos + SEPARATOR.len() {
        indent.push(' ');
    }
    text.replace('\n', &indent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continuations_align_under_message() {
        let text = "header| first\nsecond\nthird".to_string();
        let aligned = align_continuations(text);
        let pad = " ".repeat("header".len() + SEPARATOR.len());
        assert_eq!(aligned, format!("header| first\n{pad}second\n{pad}third"));
    }

    #[test]
    fn test_line_break_count_preserved() {
        let text = "h| a\nb\nc\nd".to_string();
        let aligned = align_continuations(text);
        assert_eq!(aligned.matches('\n').count(), 3);
    }

    #[test]
    fn test_single_line_untouched() {
        let text = "header| no breaks here".to_string();
        assert_eq!(align_continuations(text.clone()), text);
    }

    #[test]
    fn test_missing_separator_is_fallback() {
        let text = "no separator\nat all".to_string();
        assert_eq!(align_continuations(text.clone()), text);
    }

    #[test]
    fn test_only_first_separator_counts() {
        let text = "ab| x\ny | z".to_string();
        let aligned = align_continuations(text);
        assert_eq!(aligned, "ab| x\n    y | z");
    }
}
