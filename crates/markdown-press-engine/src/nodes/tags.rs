use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Element names the compiler writes into the output tree.
///
/// The default vocabulary names elements by role (`paragraph`,
/// `bulleted-list`, `heading-2`, ...). [`TagNames::html`] swaps in browser
/// element names. Partial TOML tables deserialize onto the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TagNames {
    pub document: String,
    pub paragraph: String,
    /// Joined with the level, so `heading-` yields `heading-1` .. `heading-6`.
    pub heading_prefix: String,
    pub preformatted: String,
    /// Used both for inline code and for the element inside `preformatted`.
    pub code: String,
    pub blockquote: String,
    pub bulleted_list: String,
    pub numbered_list: String,
    pub list_item: String,
    pub strong: String,
    pub emphasis: String,
    pub link: String,
    pub image: String,
}

impl Default for TagNames {
    fn default() -> Self {
        Self {
            document: "document".to_string(),
            paragraph: "paragraph".to_string(),
            heading_prefix: "heading-".to_string(),
            preformatted: "preformatted".to_string(),
            code: "code".to_string(),
            blockquote: "blockquote".to_string(),
            bulleted_list: "bulleted-list".to_string(),
            numbered_list: "numbered-list".to_string(),
            list_item: "list-item".to_string(),
            strong: "strong".to_string(),
            emphasis: "em".to_string(),
            link: "a".to_string(),
            image: "img".to_string(),
        }
    }
}

impl TagNames {
    /// Shared instance of the default vocabulary.
    pub fn builtin() -> &'static TagNames {
        static BUILTIN: OnceLock<TagNames> = OnceLock::new();
        BUILTIN.get_or_init(TagNames::default)
    }

    /// Conventional HTML element names.
    pub fn html() -> Self {
        Self {
            document: "div".to_string(),
            paragraph: "p".to_string(),
            heading_prefix: "h".to_string(),
            preformatted: "pre".to_string(),
            bulleted_list: "ul".to_string(),
            numbered_list: "ol".to_string(),
            list_item: "li".to_string(),
            strong: "b".to_string(),
            emphasis: "i".to_string(),
            ..Self::default()
        }
    }

    pub fn heading(&self, level: u8) -> String {
        format!("{}{level}", self.heading_prefix)
    }
}
