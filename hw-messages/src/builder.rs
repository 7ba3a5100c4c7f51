/// Fills `{name}` placeholders in a template.
///
/// Unknown placeholders are left in place so a missing `.var()` call is
/// visible in the output instead of silently disappearing.
pub struct MessageBuilder {
    template: &'static str,
    vars: Vec<(&'static str, String)>,
}

impl MessageBuilder {
    pub fn new(template: &'static str) -> Self {
        Self {
            template,
            vars: Vec::new(),
        }
    }

    pub fn var(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.vars.push((key, value.into()));
        self
    }

    pub fn build(self) -> String {
        let mut out = String::with_capacity(self.template.len());
        let mut rest = self.template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find('}') {
                Some(close) => {
                    let key = &after[..close];
                    match self.vars.iter().find(|(k, _)| *k == key) {
                        Some((_, value)) => out.push_str(value),
                        None => {
                            out.push('{');
                            out.push_str(key);
                            out.push('}');
                        }
                    }
                    rest = &after[close + 1..];
                }
                None => {
                    out.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutes_all_placeholders() {
        let text = MessageBuilder::new("Core type {index} ({name})")
            .var("index", "0")
            .var("name", "Performance")
            .build();
        assert_eq!(text, "Core type 0 (Performance)");
    }

    #[test]
    fn test_unknown_placeholder_is_kept() {
        let text = MessageBuilder::new("Display {id}{suffix}").var("id", "1").build();
        assert_eq!(text, "Display 1{suffix}");
    }

    #[test]
    fn test_unterminated_brace_is_copied() {
        let text = MessageBuilder::new("width {w").var("w", "3").build();
        assert_eq!(text, "width {w");
    }
}
