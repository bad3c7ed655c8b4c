use serde::Deserialize;

/// Text wrapped around each keyword to turn it into a lexer rule.
///
/// A fragment is `indent` spaces, `prefix`, the keyword, `action` and
/// `terminator`, in that order. The rendered file is `header`, every
/// fragment, then `footer`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleTemplate {
    pub indent: usize,
    pub prefix: String,
    pub action: String,
    pub terminator: String,
    pub header: String,
    pub footer: String,
}

pub const DEFAULT_ACTION: &str = " { PrintKeyword(yytext); } ";
const DEFAULT_TERMINATOR: &str = "\n";

impl Default for RuleTemplate {
    fn default() -> Self {
        Self {
            indent: 0,
            prefix: String::new(),
            action: DEFAULT_ACTION.to_string(),
            terminator: DEFAULT_TERMINATOR.to_string(),
            header: String::new(),
            footer: String::new(),
        }
    }
}

impl RuleTemplate {
    pub fn render_fragment(&self, keyword: &str) -> String {
        let mut fragment = String::with_capacity(self.fragment_len(keyword));
        self.push_fragment(&mut fragment, keyword);
        fragment
    }

    pub fn render<S: AsRef<str>>(&self, keywords: &[S]) -> String {
        let body_len: usize = keywords.iter().map(|x| self.fragment_len(x.as_ref())).sum();
        let mut rendered = String::with_capacity(self.header.len() + body_len + self.footer.len());

        rendered.push_str(&self.header);
        for keyword in keywords {
            self.push_fragment(&mut rendered, keyword.as_ref());
        }
        rendered.push_str(&self.footer);

        rendered
    }

    fn push_fragment(&self, out: &mut String, keyword: &str) {
        out.extend(std::iter::repeat(' ').take(self.indent));
        out.push_str(&self.prefix);
        out.push_str(keyword);
        out.push_str(&self.action);
        out.push_str(&self.terminator);
    }

    fn fragment_len(&self, keyword: &str) -> usize {
        self.indent + self.prefix.len() + keyword.len() + self.action.len() + self.terminator.len()
    }
}
