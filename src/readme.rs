use std::{fs, path::Path};

use chrono::{DateTime, TimeZone};

use crate::error::UpdaterError;

const BUILTIN: &str = include_str!("../templates/README.md.tpl");

/// Values substituted into the template.
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    pub age: u32,
    pub projects: &'a str,
    pub updated: &'a str,
    pub user: &'a str,
}

impl Fields<'_> {
    fn lookup(&self, name: &str) -> Option<String> {
        match name {
            "age" => Some(self.age.to_string()),
            "projects" => Some(self.projects.to_owned()),
            "updated" => Some(self.updated.to_owned()),
            "user" => Some(self.user.to_owned()),
            _ => None,
        }
    }
}

/// A README template with `{{ name }}` placeholders.
#[derive(Debug, Clone)]
pub struct Template {
    text: String,
}

impl Template {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn builtin() -> Self {
        Self::new(BUILTIN)
    }

    pub fn from_file(path: &Path) -> Result<Self, UpdaterError> {
        let text = fs::read_to_string(path).map_err(|source| UpdaterError::TemplateRead {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::new(text))
    }

    pub fn render(&self, fields: &Fields<'_>) -> Result<String, UpdaterError> {
        let mut out = String::with_capacity(self.text.len() + fields.projects.len());
        let mut rest = self.text.as_str();
        while let Some(open) = rest.find("{{") {
            out.push_str(&rest[..open]);
            let after = &rest[open + 2..];
            let close = after.find("}}").ok_or_else(|| {
                UpdaterError::UnclosedPlaceholder(self.text.len() - rest.len() + open)
            })?;
            let name = after[..close].trim();
            let value = fields
                .lookup(name)
                .ok_or_else(|| UpdaterError::UnknownPlaceholder(name.to_owned()))?;
            out.push_str(&value);
            rest = &after[close + 2..];
        }
        out.push_str(rest);
        Ok(out)
    }
}

/// "Mon Jan 2 15:04 2006" style timestamp for the footer.
pub fn format_updated<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%a %b %-d %H:%M %Y").to_string()
}

pub fn write_readme(path: &Path, content: &str) -> Result<(), UpdaterError> {
    fs::write(path, content)?;
    log::debug!("wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn fields() -> Fields<'static> {
        Fields {
            age: 23,
            projects: "* [api](https://github.com/ethanbaker/api): An API\n",
            updated: "Fri Oct 16 09:30 2026",
            user: "ethanbaker",
        }
    }

    #[test]
    fn substitutes_placeholders() {
        let t = Template::new("{{user}} is {{ age }}.\n{{projects}}-- {{updated}}");
        assert_eq!(
            t.render(&fields()).unwrap(),
            "ethanbaker is 23.\n* [api](https://github.com/ethanbaker/api): An API\n-- Fri Oct 16 09:30 2026"
        );
    }

    #[test]
    fn text_without_placeholders_is_verbatim() {
        let t = Template::new("plain { text } with braces }}");
        assert_eq!(t.render(&fields()).unwrap(), "plain { text } with braces }}");
    }

    #[test]
    fn unknown_placeholder_is_an_error() {
        let err = Template::new("hi {{name}}").render(&fields()).unwrap_err();
        assert!(matches!(err, UpdaterError::UnknownPlaceholder(ref n) if n == "name"));
        assert_eq!(err.to_string(), "unknown template placeholder {{name}}");
    }

    #[test]
    fn unclosed_placeholder_is_an_error() {
        let err = Template::new("ok {{age}} then {{oops").render(&fields()).unwrap_err();
        assert!(matches!(err, UpdaterError::UnclosedPlaceholder(16)));
    }

    #[test]
    fn builtin_template_renders() {
        let out = Template::builtin().render(&fields()).unwrap();
        assert!(out.starts_with("Hello! I'm Ethan."));
        assert!(out.contains("I am a 23 year old"));
        assert!(out.contains("## Projects\n\nMy favorite projects I have crafted:\n\n* [api]"));
        assert!(out.contains("* [GitHub](https://github.com/ethanbaker)"));
        assert!(out.ends_with("<sub>Last updated on: Fri Oct 16 09:30 2026</sub>\n"));
        assert!(!out.contains("{{"));
    }

    #[test]
    fn updated_format() {
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 15, 4, 0).unwrap();
        assert_eq!(format_updated(&at), "Fri Jan 2 15:04 2026");
    }

    #[test]
    fn template_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Template::from_file(&dir.path().join("nope.tpl")).unwrap_err();
        assert!(matches!(err, UpdaterError::TemplateRead { .. }));
    }

    #[test]
    fn writes_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        write_readme(&path, "first").unwrap();
        write_readme(&path, "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }
}
