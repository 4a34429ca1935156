/*
[INPUT]:  Plain text, list items, ids
[OUTPUT]: Strings in the endpoint's markdown dialect
[POS]:    Formatting helpers - message content
[UPDATE]: When the markdown dialect gains syntax
*/

/// Markdown builders for content, text displays and embed text.
pub struct Markdown;

impl Markdown {
    pub fn bold(text: &str) -> String {
        format!("**{text}**")
    }

    pub fn italics(text: &str) -> String {
        format!("*{text}*")
    }

    pub fn underline(text: &str) -> String {
        format!("__{text}__")
    }

    pub fn strikethrough(text: &str) -> String {
        format!("~~{text}~~")
    }

    pub fn spoiler(text: &str) -> String {
        format!("||{text}||")
    }

    pub fn inline_code(text: &str) -> String {
        format!("`{text}`")
    }

    /// Fenced code block with optional syntax highlighting.
    pub fn code_block(text: &str, language: Option<&str>) -> String {
        format!("```{}\n{text}\n```", language.unwrap_or_default())
    }

    /// `multi_line` quotes everything that follows, otherwise each line is quoted.
    pub fn block_quote(text: &str, multi_line: bool) -> String {
        if multi_line {
            return format!(">>> {text}");
        }
        text.lines()
            .map(|line| format!("> {line}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn header_1(text: &str) -> String {
        format!("# {text}")
    }

    pub fn header_2(text: &str) -> String {
        format!("## {text}")
    }

    pub fn header_3(text: &str) -> String {
        format!("### {text}")
    }

    /// Small grey text.
    pub fn subtext(text: &str) -> String {
        format!("-# {text}")
    }

    pub fn masked_link(text: &str, url: &str) -> String {
        format!("[{text}]({url})")
    }

    pub fn bulleted_list<S: AsRef<str>>(items: &[S]) -> String {
        items
            .iter()
            .map(|item| format!("- {}", item.as_ref()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn numbered_list<S: AsRef<str>>(items: &[S]) -> String {
        items
            .iter()
            .enumerate()
            .map(|(index, item)| format!("{}. {}", index + 1, item.as_ref()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn user(user_id: &str) -> String {
        format!("<@{user_id}>")
    }

    pub fn role(role_id: &str) -> String {
        format!("<@&{role_id}>")
    }

    pub fn channel(channel_id: &str) -> String {
        format!("<#{channel_id}>")
    }
}
